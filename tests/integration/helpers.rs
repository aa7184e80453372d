//! Shared test helpers for integration tests.

use std::sync::Arc;

use axum::Router;
use axum::body::Body;
use axum::http::{Request, StatusCode, header};
use serde_json::Value;
use tower::ServiceExt;

use folio_api::{AppState, build_app};
use folio_core::config::auth::Argon2Config;
use folio_core::config::{AppConfig, AuthConfig, DatabaseConfig};
use folio_core::traits::ManualClock;
use folio_database::MemoryAdminStore;

/// Email of the admin seeded by [`TestApp::with_admin`].
pub const ADMIN_EMAIL: &str = "a@x.com";
/// Password of the admin seeded by [`TestApp::with_admin`].
pub const ADMIN_PASSWORD: &str = "secret1";

/// Test application context
pub struct TestApp {
    /// The Axum router for making test requests
    pub router: Router,
    /// Application state, for direct access to the gateway
    pub state: AppState,
    /// Clock shared by issuer and verifier
    pub clock: Arc<ManualClock>,
}

impl TestApp {
    /// Create a new test application over an empty in-memory store
    pub fn new() -> Self {
        Self::with_config(test_config())
    }

    /// Create a test application with custom configuration
    pub fn with_config(config: AppConfig) -> Self {
        let clock = Arc::new(ManualClock::starting_now());
        let store = Arc::new(MemoryAdminStore::new());
        let state = AppState::new(config, store, clock.clone()).expect("Failed to build state");
        let router = build_app(state.clone());

        Self {
            router,
            state,
            clock,
        }
    }

    /// Create a test application with the default admin already registered
    pub async fn with_admin() -> Self {
        let app = Self::new();
        app.state
            .gateway
            .create(ADMIN_EMAIL, ADMIN_PASSWORD, Some("Ada".to_string()))
            .await
            .expect("Failed to seed admin");
        app
    }

    /// Log in and return the response, whose cookies carry the tokens
    pub async fn login(&self, email: &str, password: &str) -> TestResponse {
        self.request(
            "POST",
            "/auth/login",
            Some(serde_json::json!({ "email": email, "password": password })),
            &[],
        )
        .await
    }

    /// Send a request with the given cookies
    pub async fn request(
        &self,
        method: &str,
        path: &str,
        body: Option<Value>,
        cookies: &[(&str, &str)],
    ) -> TestResponse {
        let mut req = Request::builder().method(method).uri(path);

        if body.is_some() {
            req = req.header(header::CONTENT_TYPE, "application/json");
        }

        if !cookies.is_empty() {
            let cookie_header = cookies
                .iter()
                .map(|(name, value)| format!("{name}={value}"))
                .collect::<Vec<_>>()
                .join("; ");
            req = req.header(header::COOKIE, cookie_header);
        }

        let body_str = body
            .map(|b| serde_json::to_string(&b).expect("Failed to serialize body"))
            .unwrap_or_default();

        let req = req
            .body(Body::from(body_str))
            .expect("Failed to build request");

        self.send(req).await
    }

    /// Send a prepared request
    pub async fn send(&self, req: Request<Body>) -> TestResponse {
        let response = self
            .router
            .clone()
            .oneshot(req)
            .await
            .expect("Failed to send request");

        let status = response.status();
        let headers = response.headers().clone();
        let set_cookies = headers
            .get_all(header::SET_COOKIE)
            .iter()
            .filter_map(|v| v.to_str().ok())
            .map(String::from)
            .collect();

        let body_bytes = axum::body::to_bytes(response.into_body(), 1024 * 1024)
            .await
            .expect("Failed to read body");
        let text = String::from_utf8_lossy(&body_bytes).to_string();
        let body: Value = serde_json::from_slice(&body_bytes).unwrap_or(Value::Null);

        TestResponse {
            status,
            headers,
            set_cookies,
            body,
            text,
        }
    }
}

/// Configuration for tests: in-memory store, fixed secrets, cheap hashing
pub fn test_config() -> AppConfig {
    AppConfig {
        server: Default::default(),
        database: DatabaseConfig::memory(),
        auth: AuthConfig {
            access_token_secret: Some("test-access-secret".to_string()),
            refresh_token_secret: Some("test-refresh-secret".to_string()),
            argon2: Argon2Config {
                memory_kib: 64,
                iterations: 1,
                parallelism: 1,
            },
            ..AuthConfig::default()
        },
        cookie: Default::default(),
        logging: Default::default(),
    }
}

/// Response from a test request
#[derive(Debug)]
pub struct TestResponse {
    /// HTTP status code
    pub status: StatusCode,
    /// Response headers
    pub headers: axum::http::HeaderMap,
    /// Raw `Set-Cookie` header values
    pub set_cookies: Vec<String>,
    /// Parsed JSON body (`Null` if not JSON)
    pub body: Value,
    /// Raw body text
    pub text: String,
}

impl TestResponse {
    /// The raw `Set-Cookie` value for `name`
    pub fn set_cookie(&self, name: &str) -> Option<&str> {
        let prefix = format!("{name}=");
        self.set_cookies
            .iter()
            .find(|c| c.starts_with(&prefix))
            .map(String::as_str)
    }

    /// The value a `Set-Cookie` header assigns to `name`
    pub fn cookie(&self, name: &str) -> Option<String> {
        self.set_cookie(name).map(|c| {
            c.split(';')
                .next()
                .unwrap_or_default()
                .split_once('=')
                .map(|(_, v)| v.to_string())
                .unwrap_or_default()
        })
    }
}
