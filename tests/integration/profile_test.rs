//! Integration tests for whoAmI, self-service updates and admin creation.

use axum::http::StatusCode;
use serde_json::json;

use folio_core::types::AdminId;

use crate::helpers::{ADMIN_EMAIL, ADMIN_PASSWORD, TestApp, test_config};

const ACCESS: &str = "accessToken";

async fn logged_in() -> (TestApp, String) {
    let app = TestApp::with_admin().await;
    let token = app
        .login(ADMIN_EMAIL, ADMIN_PASSWORD)
        .await
        .cookie(ACCESS)
        .expect("access cookie");
    (app, token)
}

#[tokio::test]
async fn test_me_returns_profile_without_hash() {
    let (app, token) = logged_in().await;
    let response = app
        .request("GET", "/auth/me", None, &[(ACCESS, &token)])
        .await;

    assert_eq!(response.status, StatusCode::OK);
    let data = &response.body["data"];
    assert_eq!(data["email"], ADMIN_EMAIL);
    assert_eq!(data["username"], "Ada");
    assert!(data.get("createdAt").is_some());
    assert!(data.get("passwordHash").is_none());
    assert!(data.get("password_hash").is_none());
    assert!(!response.text.contains("argon2"));
}

#[tokio::test]
async fn test_me_for_vanished_admin_is_not_found() {
    let app = TestApp::new();
    let orphan = app
        .state
        .gateway
        .issuer()
        .issue_access_token(AdminId::new())
        .unwrap();

    let response = app
        .request("GET", "/auth/me", None, &[(ACCESS, &orphan.token)])
        .await;
    assert_eq!(response.status, StatusCode::NOT_FOUND);

    let update = app
        .request(
            "PUT",
            "/auth/update",
            Some(json!({ "username": "Ghost" })),
            &[(ACCESS, &orphan.token)],
        )
        .await;
    assert_eq!(update.status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_update_requires_authentication() {
    let app = TestApp::with_admin().await;
    let response = app
        .request("PUT", "/auth/update", Some(json!({ "username": "X" })), &[])
        .await;
    assert_eq!(response.status, StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_update_username_only() {
    let (app, token) = logged_in().await;
    let response = app
        .request(
            "PUT",
            "/auth/update",
            Some(json!({ "username": "Grace", "email": "" })),
            &[(ACCESS, &token)],
        )
        .await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["data"]["username"], "Grace");
    assert_eq!(response.body["data"]["email"], ADMIN_EMAIL);

    let relogin = app.login(ADMIN_EMAIL, ADMIN_PASSWORD).await;
    assert_eq!(relogin.status, StatusCode::OK);
}

#[tokio::test]
async fn test_new_password_without_current_is_rejected() {
    let (app, token) = logged_in().await;
    let response = app
        .request(
            "PUT",
            "/auth/update",
            Some(json!({ "newPassword": "secret2" })),
            &[(ACCESS, &token)],
        )
        .await;

    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    assert_eq!(response.body["error"], "VALIDATION_ERROR");

    assert_eq!(
        app.login(ADMIN_EMAIL, ADMIN_PASSWORD).await.status,
        StatusCode::OK
    );
    assert_eq!(
        app.login(ADMIN_EMAIL, "secret2").await.status,
        StatusCode::UNAUTHORIZED
    );
}

#[tokio::test]
async fn test_wrong_current_password_is_unauthorized() {
    let (app, token) = logged_in().await;
    let response = app
        .request(
            "PUT",
            "/auth/update",
            Some(json!({ "currentPassword": "wrong1", "newPassword": "secret2" })),
            &[(ACCESS, &token)],
        )
        .await;

    assert_eq!(response.status, StatusCode::UNAUTHORIZED);
    assert_eq!(
        app.login(ADMIN_EMAIL, ADMIN_PASSWORD).await.status,
        StatusCode::OK
    );
}

#[tokio::test]
async fn test_password_change_swaps_credentials() {
    let (app, token) = logged_in().await;
    let response = app
        .request(
            "PUT",
            "/auth/update",
            Some(json!({ "currentPassword": ADMIN_PASSWORD, "newPassword": "secret2" })),
            &[(ACCESS, &token)],
        )
        .await;
    assert_eq!(response.status, StatusCode::OK);

    assert_eq!(
        app.login(ADMIN_EMAIL, ADMIN_PASSWORD).await.status,
        StatusCode::UNAUTHORIZED
    );
    assert_eq!(app.login(ADMIN_EMAIL, "secret2").await.status, StatusCode::OK);
}

#[tokio::test]
async fn test_new_password_below_minimum_length_is_rejected() {
    let (app, token) = logged_in().await;
    let response = app
        .request(
            "PUT",
            "/auth/update",
            Some(json!({ "currentPassword": ADMIN_PASSWORD, "newPassword": "123" })),
            &[(ACCESS, &token)],
        )
        .await;
    assert_eq!(response.status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_update_email_to_taken_is_bad_request() {
    let (app, token) = logged_in().await;
    app.state
        .gateway
        .credentials()
        .create_admin("b@x.com", "secret1", None)
        .await
        .unwrap();

    let response = app
        .request(
            "PUT",
            "/auth/update",
            Some(json!({ "email": "b@x.com" })),
            &[(ACCESS, &token)],
        )
        .await;
    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    assert_eq!(response.body["error"], "DUPLICATE");
}

#[tokio::test]
async fn test_update_email_then_login_with_new_email() {
    let (app, token) = logged_in().await;
    let response = app
        .request(
            "PUT",
            "/auth/update",
            Some(json!({ "email": "New@X.com" })),
            &[(ACCESS, &token)],
        )
        .await;
    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["data"]["email"], "new@x.com");

    assert_eq!(
        app.login("new@x.com", ADMIN_PASSWORD).await.status,
        StatusCode::OK
    );
    assert_eq!(
        app.login(ADMIN_EMAIL, ADMIN_PASSWORD).await.status,
        StatusCode::UNAUTHORIZED
    );
}

#[tokio::test]
async fn test_create_admin_then_duplicate() {
    let app = TestApp::new();
    let body = json!({ "email": "c@x.com", "password": "secret1", "username": "Cleo" });

    let created = app
        .request("POST", "/auth/create", Some(body.clone()), &[])
        .await;
    assert_eq!(created.status, StatusCode::CREATED);
    assert_eq!(created.body["data"]["email"], "c@x.com");
    assert!(created.set_cookies.is_empty());

    let duplicate = app.request("POST", "/auth/create", Some(body), &[]).await;
    assert_eq!(duplicate.status, StatusCode::BAD_REQUEST);
    assert_eq!(duplicate.body["error"], "DUPLICATE");

    assert_eq!(app.login("c@x.com", "secret1").await.status, StatusCode::OK);
}

#[tokio::test]
async fn test_anonymous_create_rejected_once_admin_exists() {
    let app = TestApp::with_admin().await;

    let response = app
        .request(
            "POST",
            "/auth/create",
            Some(json!({ "email": "evil@x.com", "password": "secret1" })),
            &[],
        )
        .await;
    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    assert_eq!(response.body["error"], "DUPLICATE");
    assert!(response.set_cookies.is_empty());

    assert_eq!(
        app.login("evil@x.com", "secret1").await.status,
        StatusCode::UNAUTHORIZED
    );
    assert_eq!(app.state.gateway.credentials().admin_count().await.unwrap(), 1);
}

#[tokio::test]
async fn test_create_admin_input_validation() {
    let app = TestApp::new();

    let bad_email = app
        .request(
            "POST",
            "/auth/create",
            Some(json!({ "email": "not-an-email", "password": "secret1" })),
            &[],
        )
        .await;
    assert_eq!(bad_email.status, StatusCode::BAD_REQUEST);

    let short_password = app
        .request(
            "POST",
            "/auth/create",
            Some(json!({ "email": "c@x.com", "password": "123" })),
            &[],
        )
        .await;
    assert_eq!(short_password.status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_create_route_absent_when_bootstrap_disabled() {
    let mut config = test_config();
    config.auth.bootstrap_enabled = false;
    let app = TestApp::with_config(config);

    let response = app
        .request(
            "POST",
            "/auth/create",
            Some(json!({ "email": "c@x.com", "password": "secret1" })),
            &[],
        )
        .await;
    assert_eq!(response.status, StatusCode::NOT_FOUND);
}
