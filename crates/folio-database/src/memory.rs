//! In-process admin store using `dashmap`.

use async_trait::async_trait;
use dashmap::DashMap;
use dashmap::mapref::entry::Entry;

use folio_core::error::AppError;
use folio_core::result::AppResult;
use folio_core::types::AdminId;
use folio_entity::admin::{Admin, normalize_email};

use crate::store::AdminStore;

/// Admin store held entirely in memory, keyed by normalized email.
///
/// Email uniqueness is enforced through the map's entry API, so two
/// concurrent inserts for the same email cannot both succeed.
#[derive(Debug, Default)]
pub struct MemoryAdminStore {
    by_email: DashMap<String, Admin>,
}

impl MemoryAdminStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    fn email_of(&self, id: AdminId) -> Option<String> {
        self.by_email
            .iter()
            .find(|entry| entry.value().id == id)
            .map(|entry| entry.key().clone())
    }
}

#[async_trait]
impl AdminStore for MemoryAdminStore {
    async fn find_by_id(&self, id: AdminId) -> AppResult<Option<Admin>> {
        Ok(self
            .by_email
            .iter()
            .find(|entry| entry.value().id == id)
            .map(|entry| entry.value().clone()))
    }

    async fn find_by_email(&self, email: &str) -> AppResult<Option<Admin>> {
        Ok(self
            .by_email
            .get(&normalize_email(email))
            .map(|entry| entry.value().clone()))
    }

    async fn insert(&self, admin: &Admin) -> AppResult<Admin> {
        let key = normalize_email(&admin.email);
        match self.by_email.entry(key) {
            Entry::Occupied(_) => Err(AppError::duplicate("Record already exists")),
            Entry::Vacant(slot) => {
                let mut stored = admin.clone();
                stored.email = slot.key().clone();
                slot.insert(stored.clone());
                Ok(stored)
            }
        }
    }

    async fn update(&self, admin: &Admin) -> AppResult<Admin> {
        let old_key = self
            .email_of(admin.id)
            .ok_or_else(|| AppError::not_found("Admin not found"))?;
        let new_key = normalize_email(&admin.email);

        let mut stored = admin.clone();
        stored.email = new_key.clone();

        if new_key == old_key {
            self.by_email.insert(new_key, stored.clone());
            return Ok(stored);
        }

        match self.by_email.entry(new_key) {
            Entry::Occupied(_) => return Err(AppError::duplicate("Record already exists")),
            Entry::Vacant(slot) => {
                slot.insert(stored.clone());
            }
        }
        self.by_email.remove(&old_key);
        Ok(stored)
    }

    async fn count(&self) -> AppResult<u64> {
        Ok(self.by_email.len() as u64)
    }

    async fn health_check(&self) -> AppResult<bool> {
        Ok(true)
    }
}
