//! Credential validator
//!
//! Pre-flight checks applied to raw form input before the directory or the
//! session are touched. Stateless; reports the first failing rule only.

use crate::config::AppConfig;
use crate::error::ValidationError;

use super::requests::{LoginRequest, SignupRequest};

/// Validates signup form fields.
///
/// Rule order is part of the contract: missing fields are reported before a
/// password mismatch, which is reported before a short password, which is
/// reported before a malformed email.
pub fn validate_signup(req: &SignupRequest, config: &AppConfig) -> Result<(), ValidationError> {
    let fields = [
        ("username", &req.username),
        ("email", &req.email),
        ("full name", &req.full_name),
        ("password", &req.password),
        ("confirm password", &req.confirm_password),
    ];
    for (field, value) in fields {
        if value.is_empty() {
            return Err(ValidationError::MissingField(field));
        }
    }

    if req.password != req.confirm_password {
        return Err(ValidationError::PasswordMismatch);
    }

    // Length in code points, not bytes.
    if req.password.chars().count() < config.min_password_length {
        return Err(ValidationError::PasswordTooShort {
            minimum: config.min_password_length,
        });
    }

    // Deliberately weak: presence of '@' is the entire email check.
    if !req.email.contains('@') {
        return Err(ValidationError::InvalidEmailFormat);
    }

    Ok(())
}

/// Validates login form fields: both must be present.
pub fn validate_login(req: &LoginRequest) -> Result<(), ValidationError> {
    if req.username_or_email.is_empty() {
        return Err(ValidationError::MissingField("username or email"));
    }
    if req.password.is_empty() {
        return Err(ValidationError::MissingField("password"));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid_signup() -> SignupRequest {
        SignupRequest {
            username: "alice".to_string(),
            email: "alice@x.com".to_string(),
            full_name: "Alice A".to_string(),
            password: "secret1".to_string(),
            confirm_password: "secret1".to_string(),
        }
    }

    #[test]
    fn test_valid_signup_accepted() {
        assert!(validate_signup(&valid_signup(), &AppConfig::default()).is_ok());
    }

    #[test]
    fn test_missing_field_reported_first() {
        // Empty full name and mismatched passwords: the missing field wins.
        let req = SignupRequest {
            full_name: String::new(),
            confirm_password: "different".to_string(),
            ..valid_signup()
        };
        assert_eq!(
            validate_signup(&req, &AppConfig::default()),
            Err(ValidationError::MissingField("full name"))
        );
    }

    #[test]
    fn test_password_mismatch() {
        let req = SignupRequest {
            confirm_password: "secret2".to_string(),
            ..valid_signup()
        };
        assert_eq!(
            validate_signup(&req, &AppConfig::default()),
            Err(ValidationError::PasswordMismatch)
        );
    }

    #[test]
    fn test_password_too_short() {
        let req = SignupRequest {
            password: "ab1".to_string(),
            confirm_password: "ab1".to_string(),
            ..valid_signup()
        };
        assert_eq!(
            validate_signup(&req, &AppConfig::default()),
            Err(ValidationError::PasswordTooShort { minimum: 6 })
        );
    }

    #[test]
    fn test_password_length_counts_code_points() {
        // Six characters, more than six bytes.
        let req = SignupRequest {
            password: "sécret".to_string(),
            confirm_password: "sécret".to_string(),
            ..valid_signup()
        };
        assert!(validate_signup(&req, &AppConfig::default()).is_ok());
    }

    #[test]
    fn test_email_without_at_rejected() {
        let req = SignupRequest {
            email: "alice.x.com".to_string(),
            ..valid_signup()
        };
        assert_eq!(
            validate_signup(&req, &AppConfig::default()),
            Err(ValidationError::InvalidEmailFormat)
        );
    }

    #[test]
    fn test_mismatch_reported_before_length() {
        let req = SignupRequest {
            password: "ab1".to_string(),
            confirm_password: "ab2".to_string(),
            ..valid_signup()
        };
        assert_eq!(
            validate_signup(&req, &AppConfig::default()),
            Err(ValidationError::PasswordMismatch)
        );
    }

    #[test]
    fn test_login_requires_both_fields() {
        let req = LoginRequest {
            username_or_email: String::new(),
            password: "secret1".to_string(),
        };
        assert_eq!(
            validate_login(&req),
            Err(ValidationError::MissingField("username or email"))
        );

        let req = LoginRequest {
            username_or_email: "alice".to_string(),
            password: String::new(),
        };
        assert_eq!(
            validate_login(&req),
            Err(ValidationError::MissingField("password"))
        );
    }
}
