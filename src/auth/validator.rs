//! Authentication validator
//!
//! Password authentication against the repository's credential table.

use std::sync::PoisonError;

use crate::auth::Authenticator;
use crate::storage::SharedStorage;

/// Authenticator backed by the credentials stored in the repository.
pub struct PasswordAuthenticator {
    storage: SharedStorage,
}

impl PasswordAuthenticator {
    pub fn new(storage: SharedStorage) -> Self {
        Self { storage }
    }
}

impl Authenticator for PasswordAuthenticator {
    fn is_authenticated(&self, user: &str, credential: &str) -> bool {
        let storage = self.storage.read().unwrap_or_else(PoisonError::into_inner);
        match storage.credential(user) {
            Some(stored) => stored == credential,
            None => false,
        }
    }
}
