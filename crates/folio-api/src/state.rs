//! Application state shared across all handlers and middleware.

use std::sync::Arc;

use folio_auth::SessionGateway;
use folio_core::config::AppConfig;
use folio_core::result::AppResult;
use folio_core::traits::Clock;
use folio_database::AdminStore;

use crate::cookies::SessionCookies;

/// Application state containing all shared dependencies.
///
/// Passed to every Axum handler via `State<AppState>`.
/// All fields are `Arc`-wrapped for cheap cloning across tasks.
#[derive(Debug, Clone)]
pub struct AppState {
    /// Application configuration
    pub config: Arc<AppConfig>,
    /// Admin persistence (PostgreSQL or in-memory)
    pub store: Arc<dyn AdminStore>,
    /// Login, refresh, guard and profile flows
    pub gateway: Arc<SessionGateway>,
    /// Session cookie builder
    pub cookies: Arc<SessionCookies>,
}

impl AppState {
    /// Wires the auth components over `store`.
    ///
    /// Fails with `Configuration` if the signing secrets are unusable.
    pub fn new(
        config: AppConfig,
        store: Arc<dyn AdminStore>,
        clock: Arc<dyn Clock>,
    ) -> AppResult<Self> {
        let gateway = SessionGateway::from_config(store.clone(), &config.auth, clock)?;
        let cookies = SessionCookies::new(
            config.cookie.clone(),
            gateway.issuer().access_ttl(),
            gateway.issuer().refresh_ttl(),
        );

        Ok(Self {
            config: Arc::new(config),
            store,
            gateway: Arc::new(gateway),
            cookies: Arc::new(cookies),
        })
    }
}
