//! Credential store: admin lookup, password verification, creation and
//! self-service updates.

use std::sync::Arc;

use tracing::{debug, info};

use folio_core::config::AuthConfig;
use folio_core::error::{AppError, ErrorKind};
use folio_core::result::AppResult;
use folio_core::traits::Clock;
use folio_core::types::AdminId;
use folio_database::AdminStore;
use folio_entity::admin::{Admin, AdminChanges, CreateAdmin, non_blank, normalize_email};

use crate::password::{PasswordHasher, PasswordValidator};

/// Fields an admin may change about themselves.
///
/// Blank strings are treated as absent.
#[derive(Debug, Clone, Default)]
pub struct AdminUpdate {
    /// New display name.
    pub username: Option<String>,
    /// New login email.
    pub email: Option<String>,
    /// Current password; required when `new_password` is set.
    pub current_password: Option<String>,
    /// Replacement password.
    pub new_password: Option<String>,
}

/// Owns every operation that touches admin credentials.
#[derive(Debug, Clone)]
pub struct CredentialStore {
    store: Arc<dyn AdminStore>,
    hasher: PasswordHasher,
    validator: PasswordValidator,
    clock: Arc<dyn Clock>,
    /// Verified against when the email is unknown, so both login failure
    /// paths pay for one Argon2 verification.
    dummy_hash: Arc<str>,
}

impl CredentialStore {
    /// Creates a credential store over `store`.
    pub fn new(
        store: Arc<dyn AdminStore>,
        config: &AuthConfig,
        clock: Arc<dyn Clock>,
    ) -> AppResult<Self> {
        let hasher = PasswordHasher::new(&config.argon2)?;
        let dummy_hash = hasher.hash_password("folio-dummy-password")?;

        Ok(Self {
            store,
            hasher,
            validator: PasswordValidator::new(config),
            clock,
            dummy_hash: Arc::from(dummy_hash),
        })
    }

    /// Finds an admin by email, case-insensitively.
    pub async fn find_admin_by_email(&self, email: &str) -> AppResult<Option<Admin>> {
        self.store.find_by_email(&normalize_email(email)).await
    }

    /// Finds an admin by ID.
    pub async fn find_admin_by_id(&self, id: AdminId) -> AppResult<Option<Admin>> {
        self.store.find_by_id(id).await
    }

    /// Checks `candidate` against the admin's stored hash.
    pub async fn verify_password(&self, admin: &Admin, candidate: &str) -> AppResult<bool> {
        self.hasher
            .verify(candidate.to_string(), admin.password_hash.clone())
            .await
    }

    /// Looks up `email` and verifies `password`.
    ///
    /// Unknown email and wrong password both yield the same
    /// `InvalidCredentials` error.
    pub async fn authenticate(&self, email: &str, password: &str) -> AppResult<Admin> {
        let admin = self.find_admin_by_email(email).await?;

        let Some(admin) = admin else {
            // Burn the same work as a real verification.
            let _ = self
                .hasher
                .verify(password.to_string(), self.dummy_hash.to_string())
                .await;
            debug!("Login attempt for unknown email");
            return Err(invalid_credentials());
        };

        if !self.verify_password(&admin, password).await? {
            debug!(admin_id = %admin.id, "Login attempt with wrong password");
            return Err(invalid_credentials());
        }

        Ok(admin)
    }

    /// Creates a new admin.
    ///
    /// Fails with `Duplicate` if the email is already registered and with
    /// `Validation` if the email is blank or the password breaks policy.
    pub async fn create_admin(
        &self,
        email: &str,
        password: &str,
        username: Option<String>,
    ) -> AppResult<Admin> {
        let email = normalize_email(email);
        if email.is_empty() {
            return Err(AppError::validation("Email is required"));
        }
        self.validator.validate(password)?;

        if self.store.find_by_email(&email).await?.is_some() {
            return Err(email_taken());
        }

        let password_hash = self.hasher.hash(password.to_string()).await?;
        let admin = Admin::from_create(
            CreateAdmin {
                email,
                password_hash,
                username: non_blank(username),
            },
            self.clock.now(),
        );

        let created = self.store.insert(&admin).await.map_err(rename_duplicate)?;
        info!(admin_id = %created.id, email = %created.email, "Admin created");
        Ok(created)
    }

    /// Applies a self-service update to admin `id`.
    ///
    /// Changing the password requires the current password.
    pub async fn update_admin(&self, id: AdminId, update: AdminUpdate) -> AppResult<Admin> {
        let current = self
            .store
            .find_by_id(id)
            .await?
            .ok_or_else(admin_not_found)?;

        let new_password = non_blank(update.new_password);
        let current_password = non_blank(update.current_password);

        let password_hash = match new_password {
            None => None,
            Some(new_password) => {
                let Some(current_password) = current_password else {
                    return Err(AppError::validation(
                        "Current password is required to set a new password",
                    ));
                };
                if !self.verify_password(&current, &current_password).await? {
                    return Err(AppError::invalid_credentials(
                        "Current password is incorrect",
                    ));
                }
                self.validator.validate(&new_password)?;
                Some(self.hasher.hash(new_password).await?)
            }
        };

        let changes = AdminChanges {
            username: non_blank(update.username),
            email: non_blank(update.email),
            password_hash,
        };
        let password_changed = changes.password_hash.is_some();

        let merged = changes.merge(&current, self.clock.now());
        let updated = self.store.update(&merged).await.map_err(rename_duplicate)?;

        info!(admin_id = %updated.id, password_changed, "Admin profile updated");
        Ok(updated)
    }

    /// Replaces the password of the admin registered under `email`
    /// without checking the old one. Operator use only.
    pub async fn reset_password(&self, email: &str, new_password: &str) -> AppResult<Admin> {
        let current = self
            .find_admin_by_email(email)
            .await?
            .ok_or_else(admin_not_found)?;
        self.validator.validate(new_password)?;

        let changes = AdminChanges {
            password_hash: Some(self.hasher.hash(new_password.to_string()).await?),
            ..AdminChanges::default()
        };
        let updated = self
            .store
            .update(&changes.merge(&current, self.clock.now()))
            .await?;

        info!(admin_id = %updated.id, "Admin password reset");
        Ok(updated)
    }

    /// Number of registered admins.
    pub async fn admin_count(&self) -> AppResult<u64> {
        self.store.count().await
    }
}

fn invalid_credentials() -> AppError {
    AppError::invalid_credentials("Invalid email or password")
}

fn admin_not_found() -> AppError {
    AppError::not_found("Admin not found")
}

fn email_taken() -> AppError {
    AppError::duplicate("Email already registered")
}

fn rename_duplicate(err: AppError) -> AppError {
    if err.is(ErrorKind::Duplicate) {
        email_taken()
    } else {
        err
    }
}
