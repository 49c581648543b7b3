//! Feed system
//!
//! Provides the post data model and the seeded demo catalog.

pub mod catalog;

pub use catalog::{FeedCatalog, Post};
