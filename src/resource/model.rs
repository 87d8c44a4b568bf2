//! Resource model
//!
//! Defines the `Resource` tree nodes: files carrying text content and
//! folders carrying an ordered list of children. Name and owner are fixed
//! at construction; permission and file content are the only mutable
//! attributes.

use crate::resource::Permission;

/// A leaf resource holding text content.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct File {
    name: String,
    owner: String,
    pub permission: Permission,
    pub content: String,
}

impl File {
    pub fn new(name: &str, permission: Permission, content: &str, owner: &str) -> Self {
        Self {
            name: name.to_string(),
            owner: owner.to_string(),
            permission,
            content: content.to_string(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn owner(&self) -> &str {
        &self.owner
    }
}

/// A resource holding other resources.
///
/// `children` keeps insertion order; that order is observable through
/// folder reads and through resolution, which returns the first match.
/// Sibling names are not required to be unique.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Folder {
    name: String,
    owner: String,
    pub permission: Permission,
    pub children: Vec<Resource>,
}

impl Folder {
    pub fn new(name: &str, permission: Permission, owner: &str) -> Self {
        Self {
            name: name.to_string(),
            owner: owner.to_string(),
            permission,
            children: Vec::new(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn owner(&self) -> &str {
        &self.owner
    }
}

/// A node in a user's resource tree.
///
/// Names are not validated beyond being taken verbatim; a name containing
/// `/` is accepted structurally but can never be matched by resolution,
/// since paths are always split on `/`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Resource {
    File(File),
    Folder(Folder),
}

impl Resource {
    pub fn name(&self) -> &str {
        match self {
            Resource::File(file) => file.name(),
            Resource::Folder(folder) => folder.name(),
        }
    }

    pub fn owner(&self) -> &str {
        match self {
            Resource::File(file) => file.owner(),
            Resource::Folder(folder) => folder.owner(),
        }
    }

    pub fn permission(&self) -> Permission {
        match self {
            Resource::File(file) => file.permission,
            Resource::Folder(folder) => folder.permission,
        }
    }

    pub fn set_permission(&mut self, permission: Permission) {
        match self {
            Resource::File(file) => file.permission = permission,
            Resource::Folder(folder) => folder.permission = permission,
        }
    }

    pub fn is_folder(&self) -> bool {
        matches!(self, Resource::Folder(_))
    }
}
