//! User profile records
//!
//! Defines the `UserRecord` entity owned by the user directory,
//! including profile fields and the stored credential.

use chrono::{DateTime, Utc};
use serde::Serialize;
use uuid::Uuid;

/// A registered user profile.
///
/// Identity fields (`id`, `username`, `email`, `created_at`) are fixed at
/// registration; this core exposes no edit path for any field.
#[derive(Debug, Clone, Serialize)]
pub struct UserRecord {
    pub id: Uuid,
    pub username: String,
    pub email: String,
    #[serde(skip)]
    password: String,
    pub full_name: String,
    pub bio: String,
    pub avatar_url: String,
    pub posts_count: u32,
    pub followers_count: u32,
    pub following_count: u32,
    pub post_image_urls: Vec<String>,
    pub created_at: DateTime<Utc>,
}

impl UserRecord {
    /// Builds a fresh record with default counters, an empty bio, and no
    /// posts. Only the directory constructs records.
    pub(crate) fn new(
        username: &str,
        email: &str,
        password: &str,
        full_name: &str,
        avatar_url: String,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            username: username.to_string(),
            email: email.to_string(),
            password: password.to_string(),
            full_name: full_name.to_string(),
            bio: String::new(),
            avatar_url,
            posts_count: 0,
            followers_count: 0,
            following_count: 0,
            post_image_urls: Vec::new(),
            created_at: Utc::now(),
        }
    }

    /// Exact-equality credential check. Passwords are stored and compared
    /// as given; there is no hashing in this mock store.
    pub fn password_matches(&self, candidate: &str) -> bool {
        self.password == candidate
    }
}
