//! Session gateway: the login, refresh, guard and profile flows.

pub mod gateway;

pub use gateway::{LoginOutcome, SessionGateway};
