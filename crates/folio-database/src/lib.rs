//! # folio-database
//!
//! Connection management and [`AdminStore`] implementations for Folio:
//! a PostgreSQL repository for deployments and a `dashmap`-backed store
//! for tests and throwaway instances.

pub mod connection;
pub mod memory;
pub mod migration;
pub mod repositories;
pub mod store;

pub use connection::DatabasePool;
pub use memory::MemoryAdminStore;
pub use repositories::admin::AdminRepository;
pub use store::{AdminStore, open_admin_store};
