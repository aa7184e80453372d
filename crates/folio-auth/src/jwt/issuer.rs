//! JWT token creation with separate access and refresh signing keys.

use std::sync::Arc;

use chrono::{DateTime, Duration, Utc};
use jsonwebtoken::{EncodingKey, Header, encode};

use folio_core::config::AuthConfig;
use folio_core::error::AppError;
use folio_core::traits::Clock;
use folio_core::types::AdminId;

use super::claims::{Claims, TokenType};

/// A signed token together with its expiry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IssuedToken {
    /// Compact JWS string.
    pub token: String,
    /// When the token stops being accepted (before leeway).
    pub expires_at: DateTime<Utc>,
}

/// Result of a successful login: one access and one refresh token.
#[derive(Debug, Clone)]
pub struct TokenPair {
    /// Short-lived access token.
    pub access: IssuedToken,
    /// Long-lived refresh token.
    pub refresh: IssuedToken,
}

/// Creates signed JWT access and refresh tokens.
#[derive(Clone)]
pub struct TokenIssuer {
    /// HMAC key for access tokens.
    access_key: EncodingKey,
    /// HMAC key for refresh tokens.
    refresh_key: EncodingKey,
    /// Access token TTL.
    access_ttl: Duration,
    /// Refresh token TTL.
    refresh_ttl: Duration,
    clock: Arc<dyn Clock>,
}

impl std::fmt::Debug for TokenIssuer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TokenIssuer")
            .field("access_ttl", &self.access_ttl)
            .field("refresh_ttl", &self.refresh_ttl)
            .finish()
    }
}

impl TokenIssuer {
    /// Creates a new issuer from auth configuration.
    ///
    /// Fails with a configuration error when either secret is missing or
    /// both secrets are identical.
    pub fn new(config: &AuthConfig, clock: Arc<dyn Clock>) -> Result<Self, AppError> {
        config.validate()?;
        Ok(Self {
            access_key: EncodingKey::from_secret(config.access_secret()?.as_bytes()),
            refresh_key: EncodingKey::from_secret(config.refresh_secret()?.as_bytes()),
            access_ttl: ttl(config.access_ttl_minutes, Duration::try_minutes)?,
            refresh_ttl: ttl(config.refresh_ttl_days, Duration::try_days)?,
            clock,
        })
    }

    /// Access token lifetime.
    pub fn access_ttl(&self) -> Duration {
        self.access_ttl
    }

    /// Refresh token lifetime.
    pub fn refresh_ttl(&self) -> Duration {
        self.refresh_ttl
    }

    /// Signs a new access token for `admin_id`.
    pub fn issue_access_token(&self, admin_id: AdminId) -> Result<IssuedToken, AppError> {
        self.issue(admin_id, TokenType::Access)
    }

    /// Signs a new refresh token for `admin_id`.
    pub fn issue_refresh_token(&self, admin_id: AdminId) -> Result<IssuedToken, AppError> {
        self.issue(admin_id, TokenType::Refresh)
    }

    /// Signs a fresh access + refresh pair for `admin_id`.
    pub fn issue_pair(&self, admin_id: AdminId) -> Result<TokenPair, AppError> {
        Ok(TokenPair {
            access: self.issue_access_token(admin_id)?,
            refresh: self.issue_refresh_token(admin_id)?,
        })
    }

    fn issue(&self, admin_id: AdminId, typ: TokenType) -> Result<IssuedToken, AppError> {
        let (key, ttl) = match typ {
            TokenType::Access => (&self.access_key, self.access_ttl),
            TokenType::Refresh => (&self.refresh_key, self.refresh_ttl),
        };

        let now = self.clock.now();
        let expires_at = now
            .checked_add_signed(ttl)
            .ok_or_else(|| AppError::configuration(format!("{typ} token TTL overflows the clock")))?;
        let claims = Claims::new(admin_id, typ, now, expires_at);

        let token = encode(&Header::default(), &claims, key)
            .map_err(|e| AppError::internal(format!("Failed to sign {typ} token: {e}")))?;

        Ok(IssuedToken { token, expires_at })
    }
}

fn ttl(amount: u64, unit: fn(i64) -> Option<Duration>) -> Result<Duration, AppError> {
    i64::try_from(amount)
        .ok()
        .and_then(unit)
        .ok_or_else(|| AppError::configuration(format!("Token TTL {amount} is out of range")))
}
