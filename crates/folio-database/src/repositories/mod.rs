//! PostgreSQL repository implementations.

pub mod admin;
