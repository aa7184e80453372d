//! Route definitions for the Folio HTTP API.
//!
//! The router receives `AppState` and passes it to all handlers via Axum's
//! `State` extractor.

use axum::{
    Router,
    extract::DefaultBodyLimit,
    middleware as axum_middleware,
    routing::{get, post, put},
};
use tower_http::trace::TraceLayer;

use crate::handlers;
use crate::middleware;
use crate::state::AppState;

/// Build the complete Axum router with all routes and middleware.
///
/// `/auth/create` is only mounted while `auth.bootstrap_enabled` is set.
pub fn build_router(state: AppState) -> Router {
    let body_limit = state.config.server.body_limit_bytes;

    let mut auth = auth_routes();
    if state.config.auth.bootstrap_enabled {
        auth = auth.merge(bootstrap_routes());
    } else {
        tracing::info!("Admin bootstrap endpoint disabled");
    }

    Router::new()
        .merge(health_routes())
        .nest("/auth", auth)
        .layer(DefaultBodyLimit::max(body_limit))
        .layer(TraceLayer::new_for_http())
        .layer(axum_middleware::from_fn(middleware::logging::request_logging))
        .with_state(state)
}

/// Auth endpoints: login, refresh, logout, me, update
fn auth_routes() -> Router<AppState> {
    Router::new()
        .route("/login", post(handlers::auth::login))
        .route("/refresh", post(handlers::auth::refresh))
        .route("/logout", post(handlers::auth::logout))
        .route("/me", get(handlers::auth::me))
        .route("/update", put(handlers::auth::update))
}

/// One-time admin creation
fn bootstrap_routes() -> Router<AppState> {
    Router::new().route("/create", post(handlers::auth::create))
}

/// Liveness endpoints
fn health_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(handlers::health::root))
        .route("/health", get(handlers::health::health))
}
