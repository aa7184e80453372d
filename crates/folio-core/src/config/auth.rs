//! Authentication configuration.

use serde::{Deserialize, Serialize};

use crate::error::AppError;

/// Upper bound for `access_ttl_minutes` (one day).
pub const MAX_ACCESS_TTL_MINUTES: u64 = 24 * 60;
/// Upper bound for `refresh_ttl_days`.
pub const MAX_REFRESH_TTL_DAYS: u64 = 365;
/// Upper bound for `leeway_seconds`.
pub const MAX_LEEWAY_SECONDS: u64 = 300;

/// Token signing, credential hashing, and bootstrap configuration.
///
/// The signing secrets have no defaults. A deployment that forgets to set
/// them fails [`AuthConfig::validate`] and never serves traffic.
#[derive(Clone, Serialize, Deserialize)]
pub struct AuthConfig {
    /// HMAC secret for access tokens.
    #[serde(default)]
    pub access_token_secret: Option<String>,
    /// HMAC secret for refresh tokens. Must differ from the access secret.
    #[serde(default)]
    pub refresh_token_secret: Option<String>,
    /// Access token TTL in minutes.
    #[serde(default = "default_access_ttl")]
    pub access_ttl_minutes: u64,
    /// Refresh token TTL in days.
    #[serde(default = "default_refresh_ttl")]
    pub refresh_ttl_days: u64,
    /// Clock skew tolerated when checking `exp`, in seconds.
    #[serde(default = "default_leeway")]
    pub leeway_seconds: u64,
    /// Minimum password length for new passwords.
    #[serde(default = "default_password_min")]
    pub password_min_length: usize,
    /// Argon2 cost parameters.
    #[serde(default)]
    pub argon2: Argon2Config,
    /// Whether `POST /auth/create` is mounted.
    #[serde(default = "default_true")]
    pub bootstrap_enabled: bool,
}

/// Argon2id cost parameters.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Argon2Config {
    /// Memory cost in KiB.
    #[serde(default = "default_memory_kib")]
    pub memory_kib: u32,
    /// Number of iterations.
    #[serde(default = "default_iterations")]
    pub iterations: u32,
    /// Degree of parallelism.
    #[serde(default = "default_parallelism")]
    pub parallelism: u32,
}

impl Default for Argon2Config {
    fn default() -> Self {
        Self {
            memory_kib: default_memory_kib(),
            iterations: default_iterations(),
            parallelism: default_parallelism(),
        }
    }
}

impl Default for AuthConfig {
    fn default() -> Self {
        Self {
            access_token_secret: None,
            refresh_token_secret: None,
            access_ttl_minutes: default_access_ttl(),
            refresh_ttl_days: default_refresh_ttl(),
            leeway_seconds: default_leeway(),
            password_min_length: default_password_min(),
            argon2: Argon2Config::default(),
            bootstrap_enabled: true,
        }
    }
}

impl std::fmt::Debug for AuthConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AuthConfig")
            .field("access_token_secret", &redact(&self.access_token_secret))
            .field("refresh_token_secret", &redact(&self.refresh_token_secret))
            .field("access_ttl_minutes", &self.access_ttl_minutes)
            .field("refresh_ttl_days", &self.refresh_ttl_days)
            .field("leeway_seconds", &self.leeway_seconds)
            .field("password_min_length", &self.password_min_length)
            .field("argon2", &self.argon2)
            .field("bootstrap_enabled", &self.bootstrap_enabled)
            .finish()
    }
}

impl AuthConfig {
    /// Returns the access secret, or a configuration error if it is unset.
    pub fn access_secret(&self) -> Result<&str, AppError> {
        required_secret(&self.access_token_secret, "auth.access_token_secret")
    }

    /// Returns the refresh secret, or a configuration error if it is unset.
    pub fn refresh_secret(&self) -> Result<&str, AppError> {
        required_secret(&self.refresh_token_secret, "auth.refresh_token_secret")
    }

    /// Validates that both secrets are present and distinct and that the
    /// TTLs are usable.
    pub fn validate(&self) -> Result<(), AppError> {
        let access = self.access_secret()?;
        let refresh = self.refresh_secret()?;

        if access == refresh {
            return Err(AppError::configuration(
                "auth.access_token_secret and auth.refresh_token_secret must differ",
            ));
        }

        if self.access_ttl_minutes == 0 || self.refresh_ttl_days == 0 {
            return Err(AppError::configuration("Token TTLs must be greater than zero"));
        }

        if self.access_ttl_minutes > MAX_ACCESS_TTL_MINUTES {
            return Err(AppError::configuration(format!(
                "auth.access_ttl_minutes must be at most {MAX_ACCESS_TTL_MINUTES}"
            )));
        }

        if self.refresh_ttl_days > MAX_REFRESH_TTL_DAYS {
            return Err(AppError::configuration(format!(
                "auth.refresh_ttl_days must be at most {MAX_REFRESH_TTL_DAYS}"
            )));
        }

        if self.leeway_seconds > MAX_LEEWAY_SECONDS {
            return Err(AppError::configuration(format!(
                "auth.leeway_seconds must be at most {MAX_LEEWAY_SECONDS}"
            )));
        }

        Ok(())
    }
}

fn required_secret<'a>(value: &'a Option<String>, key: &str) -> Result<&'a str, AppError> {
    match value.as_deref().map(str::trim) {
        Some(secret) if !secret.is_empty() => Ok(secret),
        _ => Err(AppError::configuration(format!(
            "Missing required signing secret '{key}'"
        ))),
    }
}

fn redact(value: &Option<String>) -> &'static str {
    if value.is_some() { "<set>" } else { "<unset>" }
}

fn default_access_ttl() -> u64 {
    15
}

fn default_refresh_ttl() -> u64 {
    7
}

fn default_leeway() -> u64 {
    0
}

fn default_password_min() -> usize {
    6
}

fn default_memory_kib() -> u32 {
    19 * 1024
}

fn default_iterations() -> u32 {
    2
}

fn default_parallelism() -> u32 {
    1
}

fn default_true() -> bool {
    true
}
