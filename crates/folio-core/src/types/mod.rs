//! Core type definitions used across the Folio workspace.

pub mod id;

pub use id::AdminId;
