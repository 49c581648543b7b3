//! Session system
//!
//! Tracks the active session and its lifecycle transitions.

pub mod manager;

pub use manager::SessionManager;
