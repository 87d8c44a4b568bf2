//! Access control operations
//!
//! The engine gating every resource operation. Each call runs the same
//! synchronous sequence: authenticate the acting user, locate the target
//! through the resolver, authorize against ownership and stored
//! permission, then act on the resource.

use std::sync::{Arc, PoisonError, RwLockReadGuard, RwLockWriteGuard};

use log::{info, warn};

use crate::auth::Authenticator;
use crate::error::AccessError;
use crate::resolver::{self, InsertionPoint};
use crate::resource::{Folder, Permission, Resource};
use crate::storage::{SharedStorage, Storage};

/// Permission-enforcing front door to the resource trees.
pub struct AccessService {
    auth: Arc<dyn Authenticator>,
    storage: SharedStorage,
}

impl AccessService {
    pub fn new(auth: Arc<dyn Authenticator>, storage: SharedStorage) -> Self {
        Self { auth, storage }
    }

    /// Whether a path currently resolves to a resource.
    pub fn exists(&self, path: &str) -> bool {
        let storage = self.storage();
        let segments = resolver::split_path(path);
        locate(&storage, &segments).is_some()
    }

    /// Reads a file's content, or a folder's serialized listing.
    ///
    /// Folders list each child in insertion order: a file contributes its
    /// content, a folder its name followed by `/`, every child followed
    /// by a single space. An empty folder reads as the empty string.
    pub fn read(&self, user: &str, credential: &str, path: &str) -> Result<String, AccessError> {
        self.authenticate(user, credential)?;

        let storage = self.storage();
        let segments = resolver::split_path(path);
        let resource = locate(&storage, &segments).ok_or(AccessError::NotFound)?;

        if resource.owner() != user && !resource.permission().grants_read() {
            warn!("Denied read of {} for user {}", path, user);
            return Err(AccessError::OperationNotPermitted);
        }

        info!("User {} read {}", user, path);
        Ok(render_content(resource))
    }

    /// Replaces a file's content in place.
    ///
    /// Only files can be written; a folder target reports the resource as
    /// missing rather than a distinct error.
    pub fn write(
        &self,
        user: &str,
        credential: &str,
        path: &str,
        content: &str,
    ) -> Result<(), AccessError> {
        self.authenticate(user, credential)?;

        let mut storage = self.storage_mut();
        let segments = resolver::split_path(path);
        let resource = locate_mut(&mut storage, &segments).ok_or(AccessError::NotFound)?;

        let file = match resource {
            Resource::File(file) => file,
            Resource::Folder(_) => return Err(AccessError::NotFound),
        };

        if file.owner() != user && !file.permission.grants_write() {
            warn!("Denied write of {} for user {}", path, user);
            return Err(AccessError::OperationNotPermitted);
        }

        file.content = content.to_string();
        info!("User {} wrote {}", user, path);
        Ok(())
    }

    /// Overwrites a resource's permission.
    ///
    /// Non-owners may change rights as long as the current permission
    /// grants them anything at all.
    pub fn change_rights(
        &self,
        user: &str,
        credential: &str,
        path: &str,
        rights: Permission,
    ) -> Result<(), AccessError> {
        self.authenticate(user, credential)?;

        let mut storage = self.storage_mut();
        let segments = resolver::split_path(path);
        let resource = locate_mut(&mut storage, &segments).ok_or(AccessError::NotFound)?;

        if resource.owner() != user && resource.permission() == Permission::None {
            warn!("Denied rights change of {} for user {}", path, user);
            return Err(AccessError::OperationNotPermitted);
        }

        resource.set_permission(rights);
        info!("User {} set rights of {} to \"{}\"", user, path, rights);
        Ok(())
    }

    /// Creates a file (with `content`) or a folder (without) at `path`,
    /// materializing any missing intermediate folders in one call.
    ///
    /// Every created resource is owned by the acting user and carries the
    /// requested rights. The new chain attaches under the deepest folder
    /// of the acting user's tree that matches a path prefix; when nothing
    /// matches, it is registered as the root for the path's first segment.
    pub fn create(
        &self,
        user: &str,
        credential: &str,
        path: &str,
        content: Option<&str>,
        rights: Permission,
    ) -> Result<(), AccessError> {
        self.authenticate(user, credential)?;

        // The existence check shares create's guard; the lock is not
        // reentrant, so `exists` cannot be called from here.
        let mut storage = self.storage_mut();
        let segments = resolver::split_path(path);

        if locate(&storage, &segments).is_some() {
            warn!("Rejected create of existing resource {} for user {}", path, user);
            return Err(AccessError::Conflict);
        }

        let insertion = match storage.root(user) {
            Some(root) => resolver::find_parent(root, &segments),
            None => InsertionPoint::detached(&segments),
        };

        let Some(chain) = resolver::build_chain(&insertion.remaining, content, rights, user)
        else {
            // A fully consumed segment list implies the path already
            // existed, which the conflict check rules out.
            return Ok(());
        };

        match insertion.parent {
            Some(route) => {
                let root = storage
                    .root_mut(user)
                    .expect("a located parent implies the user has a root");
                resolver::folder_at_mut(root, &route).children.push(chain);
            }
            None => {
                storage.set_root(&segments[0], chain);
            }
        }

        info!("User {} created {}", user, path);
        Ok(())
    }

    fn authenticate(&self, user: &str, credential: &str) -> Result<(), AccessError> {
        if self.auth.is_authenticated(user, credential) {
            Ok(())
        } else {
            warn!("Rejected credentials for user {}", user);
            Err(AccessError::Unauthorized)
        }
    }

    fn storage(&self) -> RwLockReadGuard<'_, Storage> {
        self.storage.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn storage_mut(&self) -> RwLockWriteGuard<'_, Storage> {
        self.storage.write().unwrap_or_else(PoisonError::into_inner)
    }
}

/// Resolves a path against the repository's root index.
fn locate<'a>(storage: &'a Storage, segments: &[String]) -> Option<&'a Resource> {
    let root = storage.root(segments.first()?)?;
    resolver::find(root, segments)
}

fn locate_mut<'a>(storage: &'a mut Storage, segments: &[String]) -> Option<&'a mut Resource> {
    let root = storage.root_mut(segments.first()?)?;
    resolver::find_mut(root, segments)
}

fn render_content(resource: &Resource) -> String {
    match resource {
        Resource::File(file) => file.content.clone(),
        Resource::Folder(folder) => folder_listing(folder),
    }
}

fn folder_listing(folder: &Folder) -> String {
    let mut listing = String::new();
    for child in &folder.children {
        match child {
            Resource::File(file) => listing.push_str(&file.content),
            Resource::Folder(sub) => {
                listing.push_str(sub.name());
                listing.push('/');
            }
        }
        listing.push(' ');
    }
    listing
}
