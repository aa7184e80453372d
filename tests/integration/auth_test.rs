//! Integration tests for the login, guard, refresh and logout flow.

use axum::http::StatusCode;
use chrono::Duration;

use crate::helpers::{ADMIN_EMAIL, ADMIN_PASSWORD, TestApp};

const ACCESS: &str = "accessToken";
const REFRESH: &str = "refreshToken";

#[tokio::test]
async fn test_login_sets_both_cookies() {
    let app = TestApp::with_admin().await;
    let response = app.login(ADMIN_EMAIL, ADMIN_PASSWORD).await;

    assert_eq!(response.status, StatusCode::OK);

    let access = response.set_cookie(ACCESS).expect("access cookie");
    assert!(access.contains("HttpOnly"));
    assert!(access.contains("Secure"));
    assert!(access.contains("SameSite=None"));
    assert!(access.contains("Path=/"));
    assert!(access.contains("Max-Age=900"));

    let refresh = response.set_cookie(REFRESH).expect("refresh cookie");
    assert!(refresh.contains("HttpOnly"));
    assert!(refresh.contains("Max-Age=604800"));

    let access_token = response.cookie(ACCESS).unwrap();
    let refresh_token = response.cookie(REFRESH).unwrap();
    assert!(!access_token.is_empty());
    assert_ne!(access_token, refresh_token);

    assert_eq!(response.body["success"], true);
    assert_eq!(response.body["data"]["admin"]["email"], ADMIN_EMAIL);
    assert!(!response.text.contains(&access_token));
    assert!(!response.text.contains(&refresh_token));
}

#[tokio::test]
async fn test_login_email_is_case_insensitive() {
    let app = TestApp::with_admin().await;
    let response = app.login("  A@X.COM ", ADMIN_PASSWORD).await;
    assert_eq!(response.status, StatusCode::OK);
}

#[tokio::test]
async fn test_wrong_password_and_unknown_email_look_the_same() {
    let app = TestApp::with_admin().await;

    let wrong_password = app.login(ADMIN_EMAIL, "not-the-password").await;
    let unknown_email = app.login("nobody@x.com", ADMIN_PASSWORD).await;

    assert_eq!(wrong_password.status, StatusCode::UNAUTHORIZED);
    assert_eq!(wrong_password.status, unknown_email.status);
    assert_eq!(wrong_password.body, unknown_email.body);
    assert!(wrong_password.set_cookies.is_empty());
    assert!(unknown_email.set_cookies.is_empty());
}

#[tokio::test]
async fn test_login_missing_field_is_bad_request() {
    let app = TestApp::with_admin().await;
    let response = app
        .request(
            "POST",
            "/auth/login",
            Some(serde_json::json!({ "email": ADMIN_EMAIL })),
            &[],
        )
        .await;

    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    assert_eq!(response.body["error"], "VALIDATION_ERROR");
}

#[tokio::test]
async fn test_guard_rejects_missing_and_foreign_tokens() {
    let app = TestApp::with_admin().await;
    let login = app.login(ADMIN_EMAIL, ADMIN_PASSWORD).await;
    let refresh_token = login.cookie(REFRESH).unwrap();

    let none = app.request("GET", "/auth/me", None, &[]).await;
    assert_eq!(none.status, StatusCode::UNAUTHORIZED);
    assert_eq!(none.body["error"], "UNAUTHENTICATED");

    let garbage = app
        .request("GET", "/auth/me", None, &[(ACCESS, "garbage")])
        .await;
    assert_eq!(garbage.status, StatusCode::UNAUTHORIZED);

    let refresh_as_access = app
        .request("GET", "/auth/me", None, &[(ACCESS, &refresh_token)])
        .await;
    assert_eq!(refresh_as_access.status, StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_expired_access_token_recovered_through_refresh() {
    let app = TestApp::with_admin().await;
    let login = app.login(ADMIN_EMAIL, ADMIN_PASSWORD).await;
    let access_token = login.cookie(ACCESS).unwrap();
    let refresh_token = login.cookie(REFRESH).unwrap();

    let me = app
        .request("GET", "/auth/me", None, &[(ACCESS, &access_token)])
        .await;
    assert_eq!(me.status, StatusCode::OK);

    app.clock.advance(Duration::minutes(16));

    let expired = app
        .request("GET", "/auth/me", None, &[(ACCESS, &access_token)])
        .await;
    assert_eq!(expired.status, StatusCode::UNAUTHORIZED);

    let refreshed = app
        .request("POST", "/auth/refresh", None, &[(REFRESH, &refresh_token)])
        .await;
    assert_eq!(refreshed.status, StatusCode::OK);
    let new_access = refreshed.cookie(ACCESS).expect("new access cookie");
    assert!(
        refreshed
            .set_cookie(ACCESS)
            .unwrap()
            .contains("Max-Age=900")
    );

    let me = app
        .request("GET", "/auth/me", None, &[(ACCESS, &new_access)])
        .await;
    assert_eq!(me.status, StatusCode::OK);
    assert_eq!(me.body["data"]["email"], ADMIN_EMAIL);
}

#[tokio::test]
async fn test_refresh_does_not_rotate_refresh_token() {
    let app = TestApp::with_admin().await;
    let login = app.login(ADMIN_EMAIL, ADMIN_PASSWORD).await;
    let refresh_token = login.cookie(REFRESH).unwrap();

    let refreshed = app
        .request("POST", "/auth/refresh", None, &[(REFRESH, &refresh_token)])
        .await;

    assert_eq!(refreshed.status, StatusCode::OK);
    assert!(refreshed.set_cookie(ACCESS).is_some());
    assert!(refreshed.set_cookie(REFRESH).is_none());
}

#[tokio::test]
async fn test_refresh_status_codes() {
    let app = TestApp::with_admin().await;
    let login = app.login(ADMIN_EMAIL, ADMIN_PASSWORD).await;
    let access_token = login.cookie(ACCESS).unwrap();

    let missing = app.request("POST", "/auth/refresh", None, &[]).await;
    assert_eq!(missing.status, StatusCode::UNAUTHORIZED);

    let garbage = app
        .request("POST", "/auth/refresh", None, &[(REFRESH, "garbage")])
        .await;
    assert_eq!(garbage.status, StatusCode::FORBIDDEN);
    assert!(garbage.set_cookie(ACCESS).is_none());

    let access_as_refresh = app
        .request("POST", "/auth/refresh", None, &[(REFRESH, &access_token)])
        .await;
    assert_eq!(access_as_refresh.status, StatusCode::FORBIDDEN);
}

#[tokio::test]
async fn test_expired_refresh_token_is_forbidden() {
    let app = TestApp::with_admin().await;
    let login = app.login(ADMIN_EMAIL, ADMIN_PASSWORD).await;
    let refresh_token = login.cookie(REFRESH).unwrap();

    app.clock.advance(Duration::days(7) + Duration::minutes(1));

    let response = app
        .request("POST", "/auth/refresh", None, &[(REFRESH, &refresh_token)])
        .await;
    assert_eq!(response.status, StatusCode::FORBIDDEN);
    assert!(response.set_cookie(ACCESS).is_none());
}

#[tokio::test]
async fn test_concurrent_refreshes_both_succeed() {
    let app = TestApp::with_admin().await;
    let login = app.login(ADMIN_EMAIL, ADMIN_PASSWORD).await;
    let refresh_token = login.cookie(REFRESH).unwrap();

    let jar = [(REFRESH, refresh_token.as_str())];
    let (first, second) = tokio::join!(
        app.request("POST", "/auth/refresh", None, &jar),
        app.request("POST", "/auth/refresh", None, &jar),
    );

    assert_eq!(first.status, StatusCode::OK);
    assert_eq!(second.status, StatusCode::OK);

    let first_access = first.cookie(ACCESS).unwrap();
    let second_access = second.cookie(ACCESS).unwrap();
    assert_ne!(first_access, second_access);

    for token in [first_access, second_access] {
        let me = app
            .request("GET", "/auth/me", None, &[(ACCESS, &token)])
            .await;
        assert_eq!(me.status, StatusCode::OK);
    }
}

#[tokio::test]
async fn test_logout_clears_both_cookies() {
    let app = TestApp::with_admin().await;
    let login = app.login(ADMIN_EMAIL, ADMIN_PASSWORD).await;
    let access_token = login.cookie(ACCESS).unwrap();
    let refresh_token = login.cookie(REFRESH).unwrap();

    let logout = app
        .request(
            "POST",
            "/auth/logout",
            None,
            &[(ACCESS, &access_token), (REFRESH, &refresh_token)],
        )
        .await;
    assert_eq!(logout.status, StatusCode::OK);

    for name in [ACCESS, REFRESH] {
        assert_eq!(logout.cookie(name).as_deref(), Some(""));
        assert!(logout.set_cookie(name).unwrap().contains("Max-Age=0"));
    }

    let after = app
        .request("GET", "/auth/me", None, &[(ACCESS, "")])
        .await;
    assert_eq!(after.status, StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_logout_without_session_still_succeeds() {
    let app = TestApp::new();
    let response = app.request("POST", "/auth/logout", None, &[]).await;

    assert_eq!(response.status, StatusCode::OK);
    assert!(response.set_cookie(ACCESS).is_some());
    assert!(response.set_cookie(REFRESH).is_some());
}

#[tokio::test]
async fn test_relaxed_cookie_attributes_from_config() {
    let mut config = crate::helpers::test_config();
    config.cookie.secure = false;
    config.cookie.same_site = folio_core::config::SameSitePolicy::Lax;

    let app = TestApp::with_config(config);
    app.state
        .gateway
        .create(ADMIN_EMAIL, ADMIN_PASSWORD, None)
        .await
        .unwrap();

    let response = app.login(ADMIN_EMAIL, ADMIN_PASSWORD).await;
    let access = response.set_cookie(ACCESS).unwrap();
    assert!(access.contains("SameSite=Lax"));
    assert!(!access.contains("Secure"));
}
