//! # folio-api
//!
//! HTTP API layer for Folio built on Axum.
//!
//! Provides the `/auth` endpoints, cookie transport for the session tokens,
//! the `AuthAdmin` guard, CORS and logging middleware, and DTOs. Error
//! bodies come from `folio_core::http`.

pub mod app;
pub mod cookies;
pub mod dto;
pub mod extractors;
pub mod handlers;
pub mod middleware;
pub mod router;
pub mod state;

pub use app::{build_app, run_server};
pub use state::AppState;
