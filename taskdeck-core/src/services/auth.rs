//! Auth service - user registry and session
//!
//! Users and the current session live in two dedicated store slots. Every
//! read re-parses the full serialized collection and every write rewrites
//! it; last write wins.

use std::sync::Arc;

use uuid::Uuid;

use crate::domain::result::{Error, Result};
use crate::domain::User;
use crate::ports::{parse_or_default, KeyValueStore};

const USERS_KEY: &str = "task-manager.users";
const CURRENT_USER_KEY: &str = "task-manager.current-user";

/// Auth service for registration, login and the current session
pub struct AuthService {
    store: Arc<dyn KeyValueStore>,
}

impl AuthService {
    pub fn new(store: Arc<dyn KeyValueStore>) -> Self {
        Self { store }
    }

    /// All registered users
    ///
    /// Empty when the store is unavailable or its content is unparsable.
    pub fn get_users(&self) -> Vec<User> {
        if !self.store.is_available() {
            return Vec::new();
        }
        parse_or_default(self.store.get(USERS_KEY), Vec::new())
    }

    /// Upsert a user by email, preserving list position
    ///
    /// No-op when the store is unavailable.
    pub fn save_user(&self, user: &User) -> Result<()> {
        if !self.store.is_available() {
            return Ok(());
        }
        let mut users = self.get_users();
        if let Some(existing) = users.iter_mut().find(|u| u.email == user.email) {
            *existing = user.clone();
        } else {
            users.push(user.clone());
        }
        self.store.set(USERS_KEY, &serde_json::to_string(&users)?)
    }

    /// Register a new user and open a session for it
    ///
    /// Fails loudly when the store is unavailable: silently "succeeding"
    /// without a persisted session would be misleading.
    pub fn register(&self, name: &str, email: &str, password: &str) -> Result<User> {
        if !self.store.is_available() {
            return Err(Error::UnavailableContext("register"));
        }
        let users = self.get_users();
        if users.iter().any(|u| u.email == email) {
            return Err(Error::DuplicateEmail {
                email: email.to_string(),
            });
        }
        let user = User::new(Uuid::new_v4().to_string(), name, email, password);
        self.save_user(&user)?;
        self.set_current_user(Some(&user))?;
        Ok(user)
    }

    /// Open a session for the user matching both email and password
    ///
    /// The comparison is an exact plain-text match.
    pub fn login(&self, email: &str, password: &str) -> Result<User> {
        if !self.store.is_available() {
            return Err(Error::UnavailableContext("login"));
        }
        let user = self
            .get_users()
            .into_iter()
            .find(|u| u.email == email && u.password == password)
            .ok_or(Error::InvalidCredentials)?;
        self.set_current_user(Some(&user))?;
        Ok(user)
    }

    /// The currently authenticated user, if a session is open
    pub fn current_user(&self) -> Option<User> {
        if !self.store.is_available() {
            return None;
        }
        parse_or_default(self.store.get(CURRENT_USER_KEY), None)
    }

    /// Write or clear the session slot
    pub fn set_current_user(&self, user: Option<&User>) -> Result<()> {
        if !self.store.is_available() {
            return Ok(());
        }
        match user {
            Some(user) => self
                .store
                .set(CURRENT_USER_KEY, &serde_json::to_string(user)?),
            None => self.store.remove(CURRENT_USER_KEY),
        }
    }

    /// Close the current session
    pub fn logout(&self) -> Result<()> {
        self.set_current_user(None)
    }
}
