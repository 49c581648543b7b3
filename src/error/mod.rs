//! Error handling
//!
//! Defines error types and handling for the auth core.

pub mod types;

pub use types::*;
