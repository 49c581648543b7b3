//! Authentication context
//!
//! Composes the user directory, the session slot, and the validation rules
//! behind one explicitly-constructed handle. The presentation layer owns a
//! single `AuthContext` and passes it to whichever screen needs it; there
//! are no globals.

use std::rc::Rc;

use log::{error, info, warn};

use crate::config::AppConfig;
use crate::directory::{UserDirectory, UserRecord};
use crate::error::AuthError;
use crate::session::SessionManager;

use super::requests::{LoginRequest, SignupRequest};
use super::validator::{validate_login, validate_signup};

pub struct AuthContext {
    config: AppConfig,
    directory: UserDirectory,
    session: SessionManager,
}

impl AuthContext {
    pub fn new(config: AppConfig) -> Self {
        Self {
            config,
            directory: UserDirectory::new(),
            session: SessionManager::new(),
        }
    }

    /// Registers a new account and signs it in.
    ///
    /// Validation and the uniqueness check run first; on success the fresh
    /// credentials are looked up again and the session starts from the
    /// stored record. A lookup miss at that point means the directory and
    /// the registration disagree about the record just created; that is
    /// reported as `SignupInconsistency` instead of leaving the caller
    /// registered but signed out.
    pub fn signup(&mut self, req: &SignupRequest) -> Result<Rc<UserRecord>, AuthError> {
        validate_signup(req, &self.config)?;
        self.directory.register(
            &req.username,
            &req.email,
            &req.password,
            &req.full_name,
            &self.config,
        )?;

        match self
            .directory
            .find_by_credentials(&req.username, &req.password)
        {
            Some(record) => {
                self.session.login(&record);
                info!("Signup completed for {}", record.username);
                Ok(record)
            }
            None => {
                error!(
                    "Registration for {} succeeded but the new credentials match no record",
                    req.username
                );
                Err(AuthError::SignupInconsistency {
                    username: req.username.clone(),
                })
            }
        }
    }

    /// Signs in an existing account.
    ///
    /// A failed lookup maps to `InvalidCredentials`, which never reveals
    /// whether the identifier or the password was wrong.
    pub fn login(&mut self, req: &LoginRequest) -> Result<Rc<UserRecord>, AuthError> {
        validate_login(req)?;
        match self
            .directory
            .find_by_credentials(&req.username_or_email, &req.password)
        {
            Some(record) => {
                self.session.login(&record);
                Ok(record)
            }
            None => {
                warn!("Failed login attempt for {}", req.username_or_email);
                Err(AuthError::InvalidCredentials)
            }
        }
    }

    /// Ends the active session, if any.
    pub fn logout(&mut self) {
        self.session.logout();
    }

    /// The signed-in user, or `None` when logged out.
    pub fn current_user(&self) -> Option<Rc<UserRecord>> {
        self.session.current()
    }

    pub fn directory(&self) -> &UserDirectory {
        &self.directory
    }

    pub fn config(&self) -> &AppConfig {
        &self.config
    }

    /// Clears every registered user and the session, returning the context
    /// to its freshly-constructed state.
    pub fn reset(&mut self) {
        self.session.logout();
        self.directory.clear();
        info!("Auth context reset");
    }
}
