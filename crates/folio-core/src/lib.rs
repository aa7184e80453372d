//! # folio-core
//!
//! Core crate for Folio. Contains configuration schemas, typed identifiers,
//! the clock seam, and the unified error system. With the `axum` feature
//! it also maps errors to HTTP responses.
//!
//! This crate has **no** internal dependencies on other Folio crates.

pub mod config;
pub mod error;
#[cfg(feature = "axum")]
pub mod http;
pub mod result;
pub mod traits;
pub mod types;

pub use error::AppError;
pub use result::AppResult;
