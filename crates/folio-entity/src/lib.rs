//! # folio-entity
//!
//! Domain entity models for Folio. Every struct in this crate represents a
//! database table row or a value object used to change one. Database
//! entities additionally derive `sqlx::FromRow`.

pub mod admin;
