//! JWT token validation against the clock and the per-type secret.

use std::sync::Arc;

use jsonwebtoken::errors::ErrorKind as JwtErrorKind;
use jsonwebtoken::{Algorithm, DecodingKey, Validation, decode};

use folio_core::config::AuthConfig;
use folio_core::error::AppError;
use folio_core::traits::Clock;
use folio_core::types::AdminId;

use super::claims::{Claims, TokenType};

/// Validates access and refresh tokens.
///
/// Expiry is checked against the injected [`Clock`] rather than the
/// system time, so `exp` validation inside `jsonwebtoken` is disabled.
#[derive(Clone)]
pub struct TokenVerifier {
    access_key: DecodingKey,
    refresh_key: DecodingKey,
    validation: Validation,
    leeway_seconds: u64,
    clock: Arc<dyn Clock>,
}

impl std::fmt::Debug for TokenVerifier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TokenVerifier")
            .field("leeway_seconds", &self.leeway_seconds)
            .finish()
    }
}

impl TokenVerifier {
    /// Creates a new verifier from auth configuration.
    pub fn new(config: &AuthConfig, clock: Arc<dyn Clock>) -> Result<Self, AppError> {
        config.validate()?;

        let mut validation = Validation::new(Algorithm::HS256);
        validation.validate_exp = false;
        validation.leeway = 0;
        validation.set_required_spec_claims(&["exp"]);

        Ok(Self {
            access_key: DecodingKey::from_secret(config.access_secret()?.as_bytes()),
            refresh_key: DecodingKey::from_secret(config.refresh_secret()?.as_bytes()),
            validation,
            leeway_seconds: config.leeway_seconds,
            clock,
        })
    }

    /// Verifies an access token and returns the admin it was issued to.
    pub fn verify_access_token(&self, token: &str) -> Result<AdminId, AppError> {
        self.decode_claims(token, TokenType::Access)
            .map(|claims| claims.admin_id())
    }

    /// Verifies a refresh token and returns the admin it was issued to.
    pub fn verify_refresh_token(&self, token: &str) -> Result<AdminId, AppError> {
        self.decode_claims(token, TokenType::Refresh)
            .map(|claims| claims.admin_id())
    }

    /// Decodes and validates `token` as a token of type `expected`.
    ///
    /// Checks:
    /// 1. Signature against the secret for `expected`
    /// 2. Token type claim matches `expected`
    /// 3. Expiry against the clock, with leeway
    pub fn decode_claims(&self, token: &str, expected: TokenType) -> Result<Claims, AppError> {
        let key = match expected {
            TokenType::Access => &self.access_key,
            TokenType::Refresh => &self.refresh_key,
        };

        let claims = decode::<Claims>(token, key, &self.validation)
            .map(|data| data.claims)
            .map_err(|e| match e.kind() {
                JwtErrorKind::InvalidSignature => AppError::invalid_token("Invalid token signature"),
                JwtErrorKind::MissingRequiredClaim(claim) => {
                    AppError::invalid_token(format!("Token is missing required claim '{claim}'"))
                }
                _ => AppError::invalid_token(format!("Malformed token: {e}")),
            })?;

        if claims.typ != expected {
            return Err(AppError::invalid_token(format!(
                "Invalid token type: expected {expected} token"
            )));
        }

        if claims.is_expired_at(self.clock.now(), self.leeway_seconds) {
            return Err(AppError::invalid_token("Token has expired"));
        }

        Ok(claims)
    }
}
