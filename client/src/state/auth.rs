//! Auth-session state for the current browser user.
//!
//! SYSTEM CONTEXT
//! ==============
//! A single `RwSignal<AuthState>` is provided through context at the app root.
//! Every mutation (login, logout, role or profile update) goes through it, so
//! route guards always observe a fully applied session.
//!
//! PERSISTENCE
//! ===========
//! The bearer token and the JSON user record live under two fixed keys.
//! Restore never fails: a malformed user record clears both keys and the app
//! comes up signed out.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use crate::net::types::{Role, User, UserUpdate};
use crate::routing::access::Session;
use crate::util::storage::{KeyValueStore, StorageError};

pub const TOKEN_KEY: &str = "habs_auth_token";
pub const USER_KEY: &str = "habs_auth_user";

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum SessionError {
    #[error("failed to save authentication data: {0}")]
    Persist(#[from] StorageError),
}

/// Authentication state tracking the current user, token, and restore status.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct AuthState {
    pub user: Option<User>,
    pub token: Option<String>,
    /// True until the persisted session has been read.
    pub loading: bool,
}

impl AuthState {
    /// State before restore has run.
    #[must_use]
    pub fn pending() -> Self {
        Self { loading: true, ..Self::default() }
    }

    /// Rebuild the session from persisted storage.
    pub fn restore(store: &impl KeyValueStore) -> Self {
        let token = store.get(TOKEN_KEY).filter(|t| !t.is_empty());
        let raw_user = store.get(USER_KEY).filter(|u| !u.is_empty());

        let (Some(token), Some(raw_user)) = (token, raw_user) else {
            return Self::default();
        };

        match serde_json::from_str::<User>(&raw_user) {
            Ok(user) => Self { user: Some(user), token: Some(token), loading: false },
            Err(e) => {
                leptos::logging::warn!("discarding malformed persisted session: {e}");
                Self::clear_persisted(store);
                Self::default()
            }
        }
    }

    /// Remove both persisted session keys.
    pub fn clear_persisted(store: &impl KeyValueStore) {
        store.remove(TOKEN_KEY);
        store.remove(USER_KEY);
    }

    /// Sign in and persist the session.
    ///
    /// The in-memory session is updated even when persistence fails; a
    /// partial write is rolled back so a reload comes up signed out.
    ///
    /// # Errors
    ///
    /// Returns [`SessionError::Persist`] if either key cannot be written.
    pub fn login(&mut self, store: &impl KeyValueStore, token: String, user: User) -> Result<(), SessionError> {
        let persisted = store.set(TOKEN_KEY, &token).and_then(|()| store.set_json(USER_KEY, &user));
        self.token = Some(token);
        self.user = Some(user);
        self.loading = false;
        if let Err(e) = persisted {
            Self::clear_persisted(store);
            return Err(e.into());
        }
        Ok(())
    }

    /// Sign out and clear persisted state.
    pub fn logout(&mut self, store: &impl KeyValueStore) {
        self.token = None;
        self.user = None;
        Self::clear_persisted(store);
    }

    /// Merge a partial update into the current user and re-persist it.
    ///
    /// # Errors
    ///
    /// Returns [`SessionError::Persist`] if the user record cannot be written.
    pub fn update_user(&mut self, store: &impl KeyValueStore, update: UserUpdate) -> Result<(), SessionError> {
        let Some(user) = self.user.as_mut() else {
            leptos::logging::warn!("ignoring user update without an active session");
            return Ok(());
        };
        user.apply(update);
        store.set_json(USER_KEY, &*user)?;
        Ok(())
    }

    #[must_use]
    pub fn is_authenticated(&self) -> bool {
        self.token.is_some() && self.user.is_some()
    }

    #[must_use]
    pub fn role(&self) -> Role {
        self.user.as_ref().map_or(Role::None, |u| u.role)
    }

    #[must_use]
    pub fn has_role(&self, role: Role) -> bool {
        role != Role::None && self.role() == role
    }

    #[must_use]
    pub fn is_profile_complete(&self) -> bool {
        self.user.as_ref().is_some_and(|u| u.is_profile_complete)
    }

    #[must_use]
    pub fn email(&self) -> Option<&str> {
        self.user.as_ref().and_then(|u| u.email.as_deref())
    }

    /// Snapshot consumed by the route guard.
    #[must_use]
    pub fn session(&self) -> Session {
        Session {
            loading: self.loading,
            is_authenticated: self.is_authenticated(),
            role: self.role(),
            is_profile_complete: self.is_profile_complete(),
        }
    }
}
