//! Credential checks and the logged-in session.
//!
//! One [`AuthService`] owns one session. There is no global user; whoever
//! holds the service holds the login state.

use crate::model::{Role, User};
use crate::store::RecordStore;

pub struct AuthService<S: RecordStore> {
    store: S,
    current: Option<User>,
}

impl<S: RecordStore> AuthService<S> {
    pub fn new(store: S) -> Self {
        Self {
            store,
            current: None,
        }
    }

    /// Checks `username`/`password` against the stored accounts and, on a
    /// match, makes that account the current session.
    ///
    /// Accounts are re-read from the store on every call, so password or
    /// role edits take effect without a restart. Matching is exact and
    /// case-sensitive; with duplicate usernames the first entry in the
    /// document wins. A failed attempt leaves any existing session alone.
    pub fn login(&mut self, username: &str, password: &str) -> bool {
        let found = self
            .store
            .load_users()
            .into_iter()
            .find(|u| u.username == username && u.password == password);
        match found {
            Some(user) => {
                log::debug!("login succeeded for {}", user.username);
                self.current = Some(user);
                true
            }
            None => {
                log::debug!("login failed for {username}");
                false
            }
        }
    }

    pub fn logout(&mut self) {
        self.current = None;
    }

    pub fn current_user(&self) -> Option<&User> {
        self.current.as_ref()
    }

    pub fn is_admin(&self) -> bool {
        self.current
            .as_ref()
            .is_some_and(|u| u.role() == Role::Admin)
    }
}
