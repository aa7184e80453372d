//! Cookie-agnostic session flows.
//!
//! There is no server-side session table: a session is the pair of tokens
//! the client holds. The HTTP layer moves tokens in and out of cookies and
//! calls into this gateway for every decision.

use std::sync::Arc;

use tracing::{info, warn};

use folio_core::config::AuthConfig;
use folio_core::error::{AppError, ErrorKind};
use folio_core::result::AppResult;
use folio_core::traits::Clock;
use folio_core::types::AdminId;
use folio_database::AdminStore;
use folio_entity::admin::Admin;

use crate::credentials::{AdminUpdate, CredentialStore};
use crate::jwt::{IssuedToken, TokenIssuer, TokenPair, TokenVerifier};

/// Result of a successful login.
#[derive(Debug, Clone)]
pub struct LoginOutcome {
    /// The authenticated admin.
    pub admin: Admin,
    /// Freshly minted access and refresh tokens.
    pub tokens: TokenPair,
}

/// Entry point for every authentication decision.
#[derive(Debug, Clone)]
pub struct SessionGateway {
    credentials: Arc<CredentialStore>,
    issuer: Arc<TokenIssuer>,
    verifier: Arc<TokenVerifier>,
}

impl SessionGateway {
    /// Creates a gateway from its parts.
    pub fn new(
        credentials: Arc<CredentialStore>,
        issuer: Arc<TokenIssuer>,
        verifier: Arc<TokenVerifier>,
    ) -> Self {
        Self {
            credentials,
            issuer,
            verifier,
        }
    }

    /// Builds the credential store, issuer and verifier from configuration.
    ///
    /// Fails with `Configuration` when the signing secrets are missing or
    /// identical, or the Argon2 parameters are unusable.
    pub fn from_config(
        store: Arc<dyn AdminStore>,
        config: &AuthConfig,
        clock: Arc<dyn Clock>,
    ) -> AppResult<Self> {
        let issuer = TokenIssuer::new(config, clock.clone())?;
        let verifier = TokenVerifier::new(config, clock.clone())?;
        let credentials = CredentialStore::new(store, config, clock)?;

        Ok(Self::new(
            Arc::new(credentials),
            Arc::new(issuer),
            Arc::new(verifier),
        ))
    }

    /// The credential store behind this gateway.
    pub fn credentials(&self) -> &CredentialStore {
        &self.credentials
    }

    /// The token issuer behind this gateway.
    pub fn issuer(&self) -> &TokenIssuer {
        &self.issuer
    }

    /// Verifies the credentials and mints a new token pair.
    pub async fn login(&self, email: &str, password: &str) -> AppResult<LoginOutcome> {
        let admin = match self.credentials.authenticate(email, password).await {
            Ok(admin) => admin,
            Err(e) => {
                warn!(email = %email, "Failed login attempt");
                return Err(e);
            }
        };

        let tokens = self.issuer.issue_pair(admin.id)?;
        info!(admin_id = %admin.id, "Admin logged in");

        Ok(LoginOutcome { admin, tokens })
    }

    /// Resolves the admin behind an access token.
    ///
    /// Every failure, including a missing token, is `Unauthenticated`.
    /// This never refreshes.
    pub fn authenticate(&self, access_token: Option<&str>) -> AppResult<AdminId> {
        let token = access_token
            .filter(|t| !t.is_empty())
            .ok_or_else(|| AppError::unauthenticated("Not authenticated, no token"))?;

        self.verifier.verify_access_token(token).map_err(|e| {
            AppError::with_source(
                ErrorKind::Unauthenticated,
                "Not authenticated, token failed",
                e,
            )
        })
    }

    /// Mints a new access token from a refresh token.
    ///
    /// A missing token is `Unauthenticated`; an invalid or expired one is
    /// `Forbidden`. The refresh token itself is not rotated.
    pub fn refresh(&self, refresh_token: Option<&str>) -> AppResult<IssuedToken> {
        let token = refresh_token
            .filter(|t| !t.is_empty())
            .ok_or_else(|| AppError::unauthenticated("No refresh token provided"))?;

        let admin_id = self.verifier.verify_refresh_token(token).map_err(|e| {
            warn!(reason = %e.message, "Rejected refresh token");
            AppError::with_source(
                ErrorKind::Forbidden,
                "Invalid or expired refresh token",
                e,
            )
        })?;

        let access = self.issuer.issue_access_token(admin_id)?;
        info!(admin_id = %admin_id, "Access token refreshed");
        Ok(access)
    }

    /// Returns the admin identified by a verified access token.
    pub async fn who_am_i(&self, admin_id: AdminId) -> AppResult<Admin> {
        self.credentials
            .find_admin_by_id(admin_id)
            .await?
            .ok_or_else(|| AppError::not_found("Admin not found"))
    }

    /// Applies a self-service profile update.
    pub async fn update(&self, admin_id: AdminId, update: AdminUpdate) -> AppResult<Admin> {
        self.credentials.update_admin(admin_id, update).await
    }

    /// Registers the first admin.
    ///
    /// Once any admin exists this fails with `Duplicate`; further admins
    /// are added through the CLI.
    pub async fn create(
        &self,
        email: &str,
        password: &str,
        username: Option<String>,
    ) -> AppResult<Admin> {
        if self.credentials.admin_count().await? > 0 {
            warn!(email = %email, "Rejected admin bootstrap: an admin already exists");
            return Err(AppError::duplicate("Admin already exists"));
        }

        self.credentials.create_admin(email, password, username).await
    }
}
