//! Session manager
//!
//! Single-slot active-session tracking for the signed-in user.

use std::rc::{Rc, Weak};

use log::info;

use crate::directory::UserRecord;

/// Tracks at most one signed-in user at a time.
///
/// Holds a weak reference: the directory owns the records, and clearing the
/// directory invalidates the session instead of keeping the record alive.
#[derive(Default)]
pub struct SessionManager {
    current: Option<Weak<UserRecord>>,
}

impl SessionManager {
    pub fn new() -> Self {
        Self { current: None }
    }

    /// Signs in the given user. Any existing session is overwritten;
    /// last write wins.
    pub fn login(&mut self, record: &Rc<UserRecord>) {
        info!("Session started for {}", record.username);
        self.current = Some(Rc::downgrade(record));
    }

    /// Ends the session unconditionally. Safe to call when nobody is
    /// signed in.
    pub fn logout(&mut self) {
        if let Some(user) = self.current() {
            info!("Session ended for {}", user.username);
        }
        self.current = None;
    }

    /// Returns the signed-in user's record, or `None` when logged out or
    /// when the directory no longer holds the record.
    pub fn current(&self) -> Option<Rc<UserRecord>> {
        self.current.as_ref().and_then(Weak::upgrade)
    }

    pub fn is_logged_in(&self) -> bool {
        self.current().is_some()
    }
}
