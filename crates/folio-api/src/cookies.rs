//! Cookie transport for the access and refresh tokens.

use axum_extra::extract::cookie::{Cookie, CookieJar, SameSite};

use folio_auth::IssuedToken;
use folio_core::config::{CookieConfig, SameSitePolicy};

/// Builds, reads and clears the two session cookies.
#[derive(Debug, Clone)]
pub struct SessionCookies {
    config: CookieConfig,
    access_max_age: time::Duration,
    refresh_max_age: time::Duration,
}

impl SessionCookies {
    /// Creates the cookie builder. Max-Age values follow the token TTLs.
    pub fn new(
        config: CookieConfig,
        access_ttl: chrono::Duration,
        refresh_ttl: chrono::Duration,
    ) -> Self {
        Self {
            config,
            access_max_age: time::Duration::seconds(access_ttl.num_seconds()),
            refresh_max_age: time::Duration::seconds(refresh_ttl.num_seconds()),
        }
    }

    /// Reads the access token, if present.
    pub fn access_token(&self, jar: &CookieJar) -> Option<String> {
        jar.get(&self.config.access_name)
            .map(|c| c.value().to_string())
    }

    /// Reads the refresh token, if present.
    pub fn refresh_token(&self, jar: &CookieJar) -> Option<String> {
        jar.get(&self.config.refresh_name)
            .map(|c| c.value().to_string())
    }

    /// Sets the access cookie.
    pub fn set_access(&self, jar: CookieJar, token: &IssuedToken) -> CookieJar {
        jar.add(self.build(
            self.config.access_name.clone(),
            token.token.clone(),
            self.access_max_age,
        ))
    }

    /// Sets the refresh cookie.
    pub fn set_refresh(&self, jar: CookieJar, token: &IssuedToken) -> CookieJar {
        jar.add(self.build(
            self.config.refresh_name.clone(),
            token.token.clone(),
            self.refresh_max_age,
        ))
    }

    /// Expires both cookies. Attributes match the ones used when setting
    /// them so browsers accept the removal.
    pub fn clear(&self, jar: CookieJar) -> CookieJar {
        jar.add(self.build(
            self.config.access_name.clone(),
            String::new(),
            time::Duration::ZERO,
        ))
        .add(self.build(
            self.config.refresh_name.clone(),
            String::new(),
            time::Duration::ZERO,
        ))
    }

    fn build(&self, name: String, value: String, max_age: time::Duration) -> Cookie<'static> {
        Cookie::build((name, value))
            .http_only(true)
            .secure(self.config.secure)
            .same_site(same_site(self.config.same_site))
            .path(self.config.path.clone())
            .max_age(max_age)
            .build()
    }
}

fn same_site(policy: SameSitePolicy) -> SameSite {
    match policy {
        SameSitePolicy::Strict => SameSite::Strict,
        SameSitePolicy::Lax => SameSite::Lax,
        SameSitePolicy::None => SameSite::None,
    }
}
