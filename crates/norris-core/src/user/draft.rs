//! Registration input validation.

use crate::error::{FieldError, NorrisError, Result};

/// Maximum allowed username length, in characters.
pub const MAX_USERNAME_LEN: usize = 150;

/// Minimum allowed password length, in characters.
pub const MIN_PASSWORD_LEN: usize = 8;

/// Raw registration form input: username plus password and its confirmation.
///
/// Uniqueness of the username is not checked here; it requires the user
/// store and is enforced by the registration use case.
#[derive(Debug, Clone)]
pub struct RegistrationDraft {
    pub username: String,
    pub password: String,
    pub password_confirm: String,
}

impl RegistrationDraft {
    pub fn new(
        username: impl Into<String>,
        password: impl Into<String>,
        password_confirm: impl Into<String>,
    ) -> Self {
        Self {
            username: username.into(),
            password: password.into(),
            password_confirm: password_confirm.into(),
        }
    }

    /// Validates the draft and returns the cleaned username.
    ///
    /// Rules:
    /// - username: required, at most [`MAX_USERNAME_LEN`] characters, letters,
    ///   digits and `@` `.` `+` `-` `_` only
    /// - password: at least [`MIN_PASSWORD_LEN`] characters
    /// - password_confirm: must match password
    ///
    /// # Errors
    ///
    /// Returns `NorrisError::Validation` listing every violated rule as a
    /// field-level error.
    pub fn validate(&self) -> Result<String> {
        let username = self.username.trim();
        let mut errors = Vec::new();

        if username.is_empty() {
            errors.push(FieldError::new("username", "this field is required"));
        } else {
            if username.chars().count() > MAX_USERNAME_LEN {
                errors.push(FieldError::new(
                    "username",
                    format!("must be at most {} characters", MAX_USERNAME_LEN),
                ));
            }
            if !username.chars().all(is_valid_username_char) {
                errors.push(FieldError::new(
                    "username",
                    "may contain only letters, digits and @/./+/-/_",
                ));
            }
        }

        if self.password.chars().count() < MIN_PASSWORD_LEN {
            errors.push(FieldError::new(
                "password",
                format!("must be at least {} characters", MIN_PASSWORD_LEN),
            ));
        }
        if self.password != self.password_confirm {
            errors.push(FieldError::new(
                "password_confirm",
                "the two password fields did not match",
            ));
        }

        if errors.is_empty() {
            Ok(username.to_string())
        } else {
            Err(NorrisError::validation(errors))
        }
    }
}

fn is_valid_username_char(c: char) -> bool {
    c.is_alphanumeric() || matches!(c, '@' | '.' | '+' | '-' | '_')
}

#[cfg(test)]
mod tests {
    use super::*;

    fn draft(username: &str, password: &str, confirm: &str) -> RegistrationDraft {
        RegistrationDraft::new(username, password, confirm)
    }

    #[test]
    fn test_valid_registration() {
        let username = draft("chuck.norris", "roundhouse1", "roundhouse1")
            .validate()
            .unwrap();
        assert_eq!(username, "chuck.norris");
    }

    #[test]
    fn test_empty_username_rejected() {
        let err = draft("", "roundhouse1", "roundhouse1")
            .validate()
            .unwrap_err();
        assert_eq!(err.field_errors()[0].field, "username");
    }

    #[test]
    fn test_invalid_username_chars_rejected() {
        let err = draft("chuck norris!", "roundhouse1", "roundhouse1")
            .validate()
            .unwrap_err();
        assert!(err.field_errors().iter().any(|e| e.field == "username"));
    }

    #[test]
    fn test_short_password_rejected() {
        let err = draft("chuck", "short", "short").validate().unwrap_err();
        assert!(err.field_errors().iter().any(|e| e.field == "password"));
    }

    #[test]
    fn test_mismatched_confirmation_rejected() {
        let err = draft("chuck", "roundhouse1", "roundhouse2")
            .validate()
            .unwrap_err();
        assert!(
            err.field_errors()
                .iter()
                .any(|e| e.field == "password_confirm")
        );
    }

    #[test]
    fn test_multiple_errors_reported_together() {
        let err = draft("", "short", "different").validate().unwrap_err();
        assert_eq!(err.field_errors().len(), 3);
    }
}
