//! User directory
//!
//! Owns the set of registered users and enforces identity uniqueness.
//! In production this would be a proper database; here everything lives
//! in process memory and is gone on restart.

use std::rc::Rc;

use log::info;
use rand::Rng;

use crate::config::AppConfig;
use crate::error::DirectoryError;

use super::record::UserRecord;

/// In-memory registry of user records, kept in insertion order.
#[derive(Default)]
pub struct UserDirectory {
    users: Vec<Rc<UserRecord>>,
}

impl UserDirectory {
    pub fn new() -> Self {
        Self { users: Vec::new() }
    }

    /// Registers a new user.
    ///
    /// Callers are expected to have run field validation first; this
    /// operation checks identity uniqueness only. Either a username or an
    /// email collision blocks the registration, and the directory is left
    /// untouched on failure.
    pub fn register(
        &mut self,
        username: &str,
        email: &str,
        password: &str,
        full_name: &str,
        config: &AppConfig,
    ) -> Result<Rc<UserRecord>, DirectoryError> {
        let collision = self
            .users
            .iter()
            .any(|u| u.username == username || u.email == email);
        if collision {
            return Err(DirectoryError::DuplicateIdentity);
        }

        let avatar_url = pick_avatar_url(config);
        let record = Rc::new(UserRecord::new(
            username, email, password, full_name, avatar_url,
        ));
        info!("Registered user {} ({})", record.username, record.id);
        self.users.push(Rc::clone(&record));
        Ok(record)
    }

    /// Looks up the record matching the identifier (username or email) and
    /// password by exact string equality.
    ///
    /// Returns the first match in directory order. The uniqueness invariant
    /// means at most one record can match in well-formed data, but the scan
    /// does not rely on that.
    pub fn find_by_credentials(
        &self,
        username_or_email: &str,
        password: &str,
    ) -> Option<Rc<UserRecord>> {
        self.users
            .iter()
            .find(|u| {
                (u.username == username_or_email || u.email == username_or_email)
                    && u.password_matches(password)
            })
            .map(Rc::clone)
    }

    /// Number of registered users.
    pub fn len(&self) -> usize {
        self.users.len()
    }

    pub fn is_empty(&self) -> bool {
        self.users.is_empty()
    }

    /// Iterates records in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = &Rc<UserRecord>> {
        self.users.iter()
    }

    /// Drops every record. Outstanding session references go stale rather
    /// than keeping a cleared user alive.
    pub(crate) fn clear(&mut self) {
        self.users.clear();
    }
}

/// Assigns a pseudo-random avatar from the configured external pool.
fn pick_avatar_url(config: &AppConfig) -> String {
    let index = rand::thread_rng().gen_range(0..config.avatar_pool_size);
    config
        .avatar_url_template
        .replacen("{}", &index.to_string(), 1)
}
