//! Request DTOs with validation.
//!
//! Fields default to empty so that a missing field surfaces as a 400
//! validation error rather than a deserialization rejection.

use serde::{Deserialize, Serialize};
use validator::Validate;

use folio_auth::AdminUpdate;

/// Login request body.
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
pub struct LoginRequest {
    /// Email.
    #[serde(default)]
    #[validate(length(min = 1, message = "Email is required"))]
    pub email: String,
    /// Password.
    #[serde(default)]
    #[validate(length(min = 1, message = "Password is required"))]
    pub password: String,
}

/// Bootstrap admin creation request.
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
pub struct CreateAdminRequest {
    /// Login email.
    #[serde(default)]
    #[validate(email(message = "A valid email is required"))]
    pub email: String,
    /// Plaintext password; policy is enforced by the credential store.
    #[serde(default)]
    #[validate(length(min = 1, message = "Password is required"))]
    pub password: String,
    /// Optional display name.
    #[serde(default)]
    pub username: Option<String>,
}

/// Self-service profile update. Every field is optional and blank
/// strings count as absent.
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct UpdateAdminRequest {
    /// New display name.
    #[serde(default)]
    pub username: Option<String>,
    /// New login email.
    #[serde(default)]
    #[validate(custom(function = "validate_optional_email"))]
    pub email: Option<String>,
    /// Current password, required with `newPassword`.
    #[serde(default)]
    pub current_password: Option<String>,
    /// Replacement password.
    #[serde(default)]
    pub new_password: Option<String>,
}

impl From<UpdateAdminRequest> for AdminUpdate {
    fn from(req: UpdateAdminRequest) -> Self {
        Self {
            username: req.username,
            email: req.email,
            current_password: req.current_password,
            new_password: req.new_password,
        }
    }
}

fn validate_optional_email(email: &str) -> Result<(), validator::ValidationError> {
    use validator::ValidateEmail;

    if email.trim().is_empty() || email.trim().validate_email() {
        Ok(())
    } else {
        Err(validator::ValidationError::new("email")
            .with_message("A valid email is required".into()))
    }
}
