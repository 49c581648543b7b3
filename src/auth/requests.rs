//! Signup and login request payloads
//!
//! Raw form fields as collected by the presentation layer, before any
//! validation has run.

/// Signup form fields.
#[derive(Debug, Clone, Default)]
pub struct SignupRequest {
    pub username: String,
    pub email: String,
    pub full_name: String,
    pub password: String,
    pub confirm_password: String,
}

/// Login form fields. The identifier may be a username or an email.
#[derive(Debug, Clone, Default)]
pub struct LoginRequest {
    pub username_or_email: String,
    pub password: String,
}
