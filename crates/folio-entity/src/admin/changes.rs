//! Partial updates to an [`Admin`].

use chrono::{DateTime, Utc};

use super::model::{Admin, normalize_email};

/// Field-level changes to apply to a stored admin.
///
/// `None` keeps the stored value. Precedence for every field is:
/// supplied value, then stored value, then the type default.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AdminChanges {
    /// New display name.
    pub username: Option<String>,
    /// New login email.
    pub email: Option<String>,
    /// New, already hashed password.
    pub password_hash: Option<String>,
}

impl AdminChanges {
    /// Produces the updated admin. `id` and `created_at` never change.
    pub fn merge(self, current: &Admin, now: DateTime<Utc>) -> Admin {
        Admin {
            id: current.id,
            email: self
                .email
                .map(|e| normalize_email(&e))
                .unwrap_or_else(|| current.email.clone()),
            password_hash: self
                .password_hash
                .unwrap_or_else(|| current.password_hash.clone()),
            username: self.username.or_else(|| current.username.clone()),
            created_at: current.created_at,
            updated_at: now,
        }
    }
}

/// Treats empty or whitespace-only strings as absent.
pub fn non_blank(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::admin::model::CreateAdmin;
    use chrono::Duration;

    fn stored() -> Admin {
        Admin::from_create(
            CreateAdmin {
                email: "a@x.com".to_string(),
                password_hash: "old-hash".to_string(),
                username: Some("Old".to_string()),
            },
            Utc::now() - Duration::days(1),
        )
    }

    #[test]
    fn test_empty_changes_keep_everything_but_updated_at() {
        let current = stored();
        let now = Utc::now();
        let merged = AdminChanges::default().merge(&current, now);

        assert_eq!(merged.id, current.id);
        assert_eq!(merged.email, current.email);
        assert_eq!(merged.password_hash, current.password_hash);
        assert_eq!(merged.username, current.username);
        assert_eq!(merged.created_at, current.created_at);
        assert_eq!(merged.updated_at, now);
    }

    #[test]
    fn test_supplied_values_win() {
        let current = stored();
        let changes = AdminChanges {
            username: Some("New".to_string()),
            email: Some(" NEW@X.COM".to_string()),
            password_hash: Some("new-hash".to_string()),
        };
        let merged = changes.merge(&current, Utc::now());

        assert_eq!(merged.username.as_deref(), Some("New"));
        assert_eq!(merged.email, "new@x.com");
        assert_eq!(merged.password_hash, "new-hash");
    }

    #[test]
    fn test_partial_update_only_touches_supplied_field() {
        let current = stored();
        let changes = AdminChanges {
            username: Some("Renamed".to_string()),
            ..AdminChanges::default()
        };
        let merged = changes.merge(&current, Utc::now());

        assert_eq!(merged.username.as_deref(), Some("Renamed"));
        assert_eq!(merged.email, "a@x.com");
        assert_eq!(merged.password_hash, "old-hash");
    }

    #[test]
    fn test_non_blank() {
        assert_eq!(non_blank(Some("  ".to_string())), None);
        assert_eq!(non_blank(None), None);
        assert_eq!(non_blank(Some("x".to_string())).as_deref(), Some("x"));
    }
}
