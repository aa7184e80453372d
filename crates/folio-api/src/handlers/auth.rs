//! Auth handlers.

use axum::Json;
use axum::extract::State;
use axum::http::StatusCode;
use axum_extra::extract::cookie::CookieJar;
use tracing::info;

use folio_core::error::AppError;

use crate::dto::request::{CreateAdminRequest, LoginRequest, UpdateAdminRequest};
use crate::dto::response::{
    AdminResponse, AdminSummary, ApiResponse, LoginResponse, MessageResponse,
};
use crate::extractors::{AuthAdmin, ValidJson};
use crate::state::AppState;

/// POST /auth/login
pub async fn login(
    State(state): State<AppState>,
    jar: CookieJar,
    ValidJson(req): ValidJson<LoginRequest>,
) -> Result<(CookieJar, Json<ApiResponse<LoginResponse>>), AppError> {
    let outcome = state.gateway.login(&req.email, &req.password).await?;

    let jar = state.cookies.set_access(jar, &outcome.tokens.access);
    let jar = state.cookies.set_refresh(jar, &outcome.tokens.refresh);

    Ok((
        jar,
        Json(ApiResponse::ok(LoginResponse {
            message: "Login successful".to_string(),
            admin: AdminSummary::from(&outcome.admin),
        })),
    ))
}

/// POST /auth/refresh
///
/// Only the access cookie is replaced.
pub async fn refresh(
    State(state): State<AppState>,
    jar: CookieJar,
) -> Result<(CookieJar, Json<ApiResponse<MessageResponse>>), AppError> {
    let token = state.cookies.refresh_token(&jar);
    let access = state.gateway.refresh(token.as_deref())?;

    let jar = state.cookies.set_access(jar, &access);
    Ok((
        jar,
        Json(ApiResponse::ok(MessageResponse::new("Token refreshed"))),
    ))
}

/// POST /auth/logout
pub async fn logout(
    State(state): State<AppState>,
    jar: CookieJar,
) -> (CookieJar, Json<ApiResponse<MessageResponse>>) {
    info!("Admin logged out");
    (
        state.cookies.clear(jar),
        Json(ApiResponse::ok(MessageResponse::new("Logged out successfully"))),
    )
}

/// GET /auth/me
pub async fn me(
    State(state): State<AppState>,
    auth: AuthAdmin,
) -> Result<Json<ApiResponse<AdminResponse>>, AppError> {
    let admin = state.gateway.who_am_i(auth.id()).await?;
    Ok(Json(ApiResponse::ok(AdminResponse::from(admin))))
}

/// PUT /auth/update
pub async fn update(
    State(state): State<AppState>,
    auth: AuthAdmin,
    ValidJson(req): ValidJson<UpdateAdminRequest>,
) -> Result<Json<ApiResponse<AdminResponse>>, AppError> {
    let admin = state.gateway.update(auth.id(), req.into()).await?;
    Ok(Json(ApiResponse::ok(AdminResponse::from(admin))))
}

/// POST /auth/create
pub async fn create(
    State(state): State<AppState>,
    ValidJson(req): ValidJson<CreateAdminRequest>,
) -> Result<(StatusCode, Json<ApiResponse<AdminResponse>>), AppError> {
    let admin = state
        .gateway
        .create(&req.email, &req.password, req.username)
        .await?;

    Ok((
        StatusCode::CREATED,
        Json(ApiResponse::ok(AdminResponse::from(admin))),
    ))
}
