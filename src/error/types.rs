//! Error types
//!
//! Defines domain-specific error types for each module of the auth core.
//! Every error is an expected, recoverable value; nothing here aborts the
//! process.

use std::fmt;

/// Pre-flight validation errors, reported one at a time in rule order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    MissingField(&'static str),
    PasswordMismatch,
    PasswordTooShort { minimum: usize },
    InvalidEmailFormat,
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ValidationError::MissingField(field) => {
                write!(f, "Missing required field: {}", field)
            }
            ValidationError::PasswordMismatch => write!(f, "Passwords do not match"),
            ValidationError::PasswordTooShort { minimum } => {
                write!(f, "Password must be at least {} characters", minimum)
            }
            ValidationError::InvalidEmailFormat => write!(f, "Please enter a valid email"),
        }
    }
}

impl std::error::Error for ValidationError {}

/// User directory errors
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DirectoryError {
    DuplicateIdentity,
}

impl fmt::Display for DirectoryError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DirectoryError::DuplicateIdentity => write!(f, "Username or email already exists"),
        }
    }
}

impl std::error::Error for DirectoryError {}

/// General authentication error that encompasses the full signup/login flow.
///
/// `InvalidCredentials` deliberately carries no detail: the message must not
/// reveal whether the identifier or the password was wrong.
/// `SignupInconsistency` is the one internal-bug class: a registration
/// succeeded but the fresh credentials did not match any record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AuthError {
    Validation(ValidationError),
    Directory(DirectoryError),
    InvalidCredentials,
    SignupInconsistency { username: String },
}

impl fmt::Display for AuthError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AuthError::Validation(e) => write!(f, "{}", e),
            AuthError::Directory(e) => write!(f, "{}", e),
            AuthError::InvalidCredentials => write!(f, "Invalid credentials"),
            AuthError::SignupInconsistency { username } => {
                write!(
                    f,
                    "Internal error: registration for {} succeeded but the new credentials did not match",
                    username
                )
            }
        }
    }
}

impl std::error::Error for AuthError {}

impl From<ValidationError> for AuthError {
    fn from(error: ValidationError) -> Self {
        AuthError::Validation(error)
    }
}

impl From<DirectoryError> for AuthError {
    fn from(error: DirectoryError) -> Self {
        AuthError::Directory(error)
    }
}
