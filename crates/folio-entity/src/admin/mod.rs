//! Admin principal entities.

pub mod changes;
pub mod model;

pub use changes::{AdminChanges, non_blank};
pub use model::{Admin, CreateAdmin, normalize_email};
