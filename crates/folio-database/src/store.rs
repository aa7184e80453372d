//! Persistence seam for the admin principal.

use std::sync::Arc;

use async_trait::async_trait;
use tracing::info;

use folio_core::config::DatabaseConfig;
use folio_core::result::AppResult;
use folio_core::types::AdminId;
use folio_entity::admin::Admin;

use crate::connection::DatabasePool;
use crate::memory::MemoryAdminStore;
use crate::migration::run_migrations;
use crate::repositories::admin::AdminRepository;

/// Storage for [`Admin`] rows.
///
/// Implementations enforce email uniqueness (case-insensitive) and report
/// violations as `ErrorKind::Duplicate`.
#[async_trait]
pub trait AdminStore: Send + Sync + std::fmt::Debug + 'static {
    /// Find an admin by primary key.
    async fn find_by_id(&self, id: AdminId) -> AppResult<Option<Admin>>;

    /// Find an admin by login email (case-insensitive).
    async fn find_by_email(&self, email: &str) -> AppResult<Option<Admin>>;

    /// Persist a new admin and return it.
    async fn insert(&self, admin: &Admin) -> AppResult<Admin>;

    /// Overwrite a stored admin and return the stored version.
    async fn update(&self, admin: &Admin) -> AppResult<Admin>;

    /// Number of stored admins.
    async fn count(&self) -> AppResult<u64>;

    /// Check that the backing store is reachable.
    async fn health_check(&self) -> AppResult<bool>;
}

/// Opens the store selected by `config.url`.
///
/// `memory://` yields an empty [`MemoryAdminStore`]; anything else is
/// treated as a PostgreSQL URL, connected once, and migrated when
/// `run_migrations` is set.
pub async fn open_admin_store(config: &DatabaseConfig) -> AppResult<Arc<dyn AdminStore>> {
    if config.is_memory() {
        info!("Using in-memory admin store; data will not survive a restart");
        return Ok(Arc::new(MemoryAdminStore::new()));
    }

    let pool = DatabasePool::connect(config).await?;
    if config.run_migrations {
        run_migrations(pool.pool()).await?;
    }

    Ok(Arc::new(AdminRepository::new(pool.into_pool())))
}
