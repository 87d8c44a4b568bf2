//! Resource repository
//!
//! Keyed store for user credentials and per-user resource trees. Each
//! registered user owns one root resource, a folder named after the user.
//! The store is shared behind a read-write lock; the access engine holds
//! the lock for the full span of every operation, so mutations against
//! one tree never interleave.

use std::collections::HashMap;
use std::sync::{Arc, RwLock};

use log::info;

use crate::config::ServiceConfig;
use crate::resource::{Folder, Permission, Resource};

/// Shared handle to the repository.
pub type SharedStorage = Arc<RwLock<Storage>>;

/// Credential table plus the root-resource index.
///
/// Root slots are keyed by a path's first segment. Registration keys the
/// slot by user name; `create` may also register slots for paths whose
/// first segment matches no existing root.
#[derive(Debug, Default)]
pub struct Storage {
    users: HashMap<String, String>,
    roots: HashMap<String, Resource>,
}

impl Storage {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a store with every configured seed account registered.
    pub fn bootstrap(config: &ServiceConfig) -> Self {
        let mut storage = Self::new();
        for account in &config.accounts {
            storage.register_user(&account.name, &account.password);
        }
        info!("Bootstrapped storage with {} accounts", config.accounts.len());
        storage
    }

    /// Registers a user and provisions their root folder.
    ///
    /// The root is named after and owned by the user, with no rights
    /// granted to anyone else.
    pub fn register_user(&mut self, user: &str, credential: &str) {
        self.users.insert(user.to_string(), credential.to_string());
        self.roots.insert(
            user.to_string(),
            Resource::Folder(Folder::new(user, Permission::None, user)),
        );
    }

    pub fn is_user(&self, user: &str) -> bool {
        self.users.contains_key(user)
    }

    pub fn credential(&self, user: &str) -> Option<&str> {
        self.users.get(user).map(String::as_str)
    }

    pub fn root(&self, key: &str) -> Option<&Resource> {
        self.roots.get(key)
    }

    pub fn root_mut(&mut self, key: &str) -> Option<&mut Resource> {
        self.roots.get_mut(key)
    }

    pub fn set_root(&mut self, key: &str, resource: Resource) {
        self.roots.insert(key.to_string(), resource);
    }

    pub fn has_root(&self, user: &str) -> bool {
        self.is_user(user) && self.roots.contains_key(user)
    }

    /// Wrap the store in its shared handle.
    pub fn into_shared(self) -> SharedStorage {
        Arc::new(RwLock::new(self))
    }
}
