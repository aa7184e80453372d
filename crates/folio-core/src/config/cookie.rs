//! Session cookie transport configuration.

use serde::{Deserialize, Serialize};

use crate::error::AppError;

/// `SameSite` attribute applied to session cookies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SameSitePolicy {
    /// Sent only on same-site requests.
    Strict,
    /// Sent on same-site requests and top-level navigations.
    Lax,
    /// Sent on cross-site requests; browsers require `Secure`.
    None,
}

impl Default for SameSitePolicy {
    fn default() -> Self {
        Self::None
    }
}

/// Cookie names and attributes for the access/refresh token pair.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CookieConfig {
    /// Name of the access-token cookie.
    #[serde(default = "default_access_name")]
    pub access_name: String,
    /// Name of the refresh-token cookie.
    #[serde(default = "default_refresh_name")]
    pub refresh_name: String,
    /// Whether the `Secure` attribute is set.
    #[serde(default = "default_true")]
    pub secure: bool,
    /// `SameSite` attribute.
    #[serde(default)]
    pub same_site: SameSitePolicy,
    /// Cookie path.
    #[serde(default = "default_path")]
    pub path: String,
}

impl Default for CookieConfig {
    fn default() -> Self {
        Self {
            access_name: default_access_name(),
            refresh_name: default_refresh_name(),
            secure: true,
            same_site: SameSitePolicy::default(),
            path: default_path(),
        }
    }
}

impl CookieConfig {
    /// Rejects combinations browsers silently drop.
    pub fn validate(&self) -> Result<(), AppError> {
        if self.same_site == SameSitePolicy::None && !self.secure {
            return Err(AppError::configuration(
                "cookie.same_site = \"none\" requires cookie.secure = true",
            ));
        }
        if self.access_name == self.refresh_name {
            return Err(AppError::configuration(
                "cookie.access_name and cookie.refresh_name must differ",
            ));
        }
        Ok(())
    }
}

fn default_access_name() -> String {
    "accessToken".to_string()
}

fn default_refresh_name() -> String {
    "refreshToken".to_string()
}

fn default_path() -> String {
    "/".to_string()
}

fn default_true() -> bool {
    true
}
