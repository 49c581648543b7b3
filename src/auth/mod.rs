//! Authentication system
//!
//! Handles credential validation, signup and login flows, and the context
//! object that ties the user directory and the session together.

pub mod context;
pub mod requests;
pub mod validator;

pub use context::AuthContext;
pub use requests::{LoginRequest, SignupRequest};
pub use validator::{validate_login, validate_signup};
