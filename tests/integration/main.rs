//! End-to-end tests driving the real router over the in-memory store.

mod helpers;

mod auth_test;
mod health_test;
mod profile_test;
