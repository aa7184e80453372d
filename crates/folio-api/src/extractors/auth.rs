//! `AuthAdmin` extractor. Reads the access cookie, verifies it, and
//! injects the admin ID.

use axum::extract::FromRequestParts;
use axum::http::request::Parts;
use axum_extra::extract::cookie::CookieJar;

use folio_core::error::AppError;
use folio_core::types::AdminId;

use crate::state::AppState;

/// Proof that the request carried a valid access token.
///
/// Rejects with `Unauthenticated` (401) when the cookie is missing,
/// malformed, expired, or signed with the wrong secret.
#[derive(Debug, Clone, Copy)]
pub struct AuthAdmin(pub AdminId);

impl AuthAdmin {
    /// Returns the authenticated admin ID.
    pub fn id(&self) -> AdminId {
        self.0
    }
}

impl FromRequestParts<AppState> for AuthAdmin {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let jar = CookieJar::from_headers(&parts.headers);
        let token = state.cookies.access_token(&jar);

        let admin_id = state.gateway.authenticate(token.as_deref())?;
        Ok(AuthAdmin(admin_id))
    }
}
