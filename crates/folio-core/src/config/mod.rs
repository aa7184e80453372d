//! Application configuration schemas.
//!
//! All configuration structs are deserialized via the `config` crate from
//! TOML files plus environment variables. Each sub-module represents a
//! logical configuration section.

pub mod app;
pub mod auth;
pub mod cookie;
pub mod database;
pub mod logging;

use serde::{Deserialize, Serialize};

pub use self::app::{CorsConfig, ServerConfig};
pub use self::auth::AuthConfig;
pub use self::cookie::{CookieConfig, SameSitePolicy};
pub use self::database::DatabaseConfig;
pub use self::logging::LoggingConfig;

use crate::error::AppError;

/// Bare environment variables honoured for compatibility with existing
/// deployments, mapped onto their configuration keys.
const LEGACY_ENV_OVERRIDES: &[(&str, &str)] = &[
    ("ACCESS_TOKEN_SECRET", "auth.access_token_secret"),
    ("REFRESH_TOKEN_SECRET", "auth.refresh_token_secret"),
    ("DATABASE_URL", "database.url"),
    ("PORT", "server.port"),
    ("CLIENT_URL", "server.cors.client_url"),
];

/// Root application configuration.
///
/// This struct is the top-level deserialization target for the merged
/// configuration (default.toml + environment overlay + env vars).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    /// HTTP server settings.
    #[serde(default)]
    pub server: ServerConfig,
    /// Database connection settings.
    pub database: DatabaseConfig,
    /// Token signing and credential settings.
    #[serde(default)]
    pub auth: AuthConfig,
    /// Session cookie transport settings.
    #[serde(default)]
    pub cookie: CookieConfig,
    /// Logging settings.
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl AppConfig {
    /// Load configuration for the given environment name.
    ///
    /// Merges `config/default`, the `config/{env}` overlay, environment
    /// variables prefixed with `FOLIO` (separator `__`), and finally the
    /// legacy bare variables. The result is validated before it is
    /// returned, so a missing signing secret fails here.
    pub fn load(env: &str) -> Result<Self, AppError> {
        let mut builder = config::Config::builder()
            .add_source(config::File::with_name("config/default").required(false))
            .add_source(config::File::with_name(&format!("config/{env}")).required(false))
            .add_source(
                config::Environment::with_prefix("FOLIO")
                    .separator("__")
                    .try_parsing(true),
            );

        for (var, key) in LEGACY_ENV_OVERRIDES {
            builder = builder.set_override_option(*key, std::env::var(var).ok())?;
        }

        let config: Self = builder
            .build()
            .map_err(|e| AppError::configuration(format!("Failed to build config: {e}")))?
            .try_deserialize()
            .map_err(|e| AppError::configuration(format!("Failed to deserialize config: {e}")))?;

        config.validate()?;
        Ok(config)
    }

    /// Check cross-field invariants that serde cannot express.
    pub fn validate(&self) -> Result<(), AppError> {
        self.auth.validate()?;
        self.cookie.validate()?;
        self.server.cors.validate()?;
        Ok(())
    }
}
