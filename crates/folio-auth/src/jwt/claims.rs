//! JWT claims structure used in access and refresh tokens.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use folio_core::types::AdminId;

/// Claims payload embedded in every token.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Claims {
    /// The admin the token was issued to.
    pub id: AdminId,
    /// Issued-at timestamp (seconds since epoch).
    pub iat: i64,
    /// Expiration timestamp (seconds since epoch).
    pub exp: i64,
    /// Unique token ID; keeps tokens minted in the same second distinct.
    pub jti: Uuid,
    /// Token type: "access" or "refresh".
    pub typ: TokenType,
}

/// Distinguishes access tokens from refresh tokens.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum TokenType {
    /// Short-lived access token for guarded requests.
    Access,
    /// Long-lived refresh token for obtaining new access tokens.
    Refresh,
}

impl std::fmt::Display for TokenType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Access => write!(f, "access"),
            Self::Refresh => write!(f, "refresh"),
        }
    }
}

impl Claims {
    /// Builds claims for `admin_id` valid from `issued_at` until
    /// `expires_at`.
    pub fn new(
        admin_id: AdminId,
        typ: TokenType,
        issued_at: DateTime<Utc>,
        expires_at: DateTime<Utc>,
    ) -> Self {
        Self {
            id: admin_id,
            iat: issued_at.timestamp(),
            exp: expires_at.timestamp(),
            jti: Uuid::new_v4(),
            typ,
        }
    }

    /// Returns the admin ID.
    pub fn admin_id(&self) -> AdminId {
        self.id
    }

    /// Whether the token is expired at `now`, tolerating `leeway_seconds`
    /// of clock skew.
    pub fn is_expired_at(&self, now: DateTime<Utc>, leeway_seconds: u64) -> bool {
        now.timestamp() >= self.exp.saturating_add(leeway_seconds as i64)
    }
}
