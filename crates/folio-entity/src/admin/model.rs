//! Admin entity model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use folio_core::types::AdminId;

/// The administrative principal of the portfolio CMS.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Admin {
    /// Unique admin identifier.
    pub id: AdminId,
    /// Login handle. Stored trimmed and lowercased.
    pub email: String,
    /// Argon2id PHC string.
    #[serde(skip_serializing)]
    pub password_hash: String,
    /// Optional display name.
    pub username: Option<String>,
    /// When the admin was created.
    pub created_at: DateTime<Utc>,
    /// When the admin was last updated.
    pub updated_at: DateTime<Utc>,
}

impl Admin {
    /// Builds a new admin row from creation data.
    pub fn from_create(data: CreateAdmin, now: DateTime<Utc>) -> Self {
        Self {
            id: AdminId::new(),
            email: normalize_email(&data.email),
            password_hash: data.password_hash,
            username: data.username,
            created_at: now,
            updated_at: now,
        }
    }
}

/// Data required to create a new admin.
#[derive(Debug, Clone)]
pub struct CreateAdmin {
    /// Login email.
    pub email: String,
    /// Pre-hashed password.
    pub password_hash: String,
    /// Optional display name.
    pub username: Option<String>,
}

/// Canonical form of an email used for storage and lookup.
pub fn normalize_email(email: &str) -> String {
    email.trim().to_lowercase()
}
