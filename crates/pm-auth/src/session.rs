use pm_core::Role;

use crate::claims::{self, TokenClaims};
use crate::error::AuthError;
use crate::store::KeyValueStore;

/// Persists the bearer token under one fixed key and derives the role from it.
///
/// There is no locking around the store: concurrent writers race and the
/// last write wins.
#[derive(Debug)]
pub struct SessionManager<S> {
    store: S,
    key: String,
}

impl<S: KeyValueStore> SessionManager<S> {
    pub fn new(store: S, key: impl Into<String>) -> Self {
        Self {
            store,
            key: key.into(),
        }
    }

    #[must_use]
    pub fn key(&self) -> &str {
        &self.key
    }

    /// Persisted token, or `""` when none is stored.
    #[must_use]
    pub fn saved_token(&self) -> String {
        self.store.get(&self.key).unwrap_or_default()
    }

    /// Store a non-empty token; an empty one removes the entry.
    ///
    /// # Errors
    ///
    /// Returns `AuthError::TokenStore` if the backing store cannot be written.
    pub fn save_token(&self, token: &str) -> Result<(), AuthError> {
        if token.is_empty() {
            tracing::debug!(key = %self.key, "clearing session token");
            self.store.delete(&self.key)
        } else {
            tracing::debug!(key = %self.key, "persisting session token");
            self.store.set(&self.key, token)
        }
    }

    /// # Errors
    ///
    /// Same as [`SessionManager::save_token`].
    pub fn clear(&self) -> Result<(), AuthError> {
        self.save_token("")
    }

    #[must_use]
    pub fn is_logged_in(&self) -> bool {
        !self.saved_token().is_empty()
    }

    /// Stored token, failing when there is none.
    ///
    /// # Errors
    ///
    /// Returns `AuthError::NotAuthenticated` if no token is stored.
    pub fn require_token(&self) -> Result<String, AuthError> {
        let token = self.saved_token();
        if token.is_empty() {
            return Err(AuthError::NotAuthenticated);
        }
        Ok(token)
    }

    /// Role of the stored token; unknown when logged out or unreadable.
    #[must_use]
    pub fn role(&self) -> Role {
        claims::extract_role(&self.saved_token())
    }

    #[must_use]
    pub fn claims(&self) -> Option<TokenClaims> {
        claims::decode_claims(&self.saved_token())
    }
}
