//! Resource tree model
//!
//! Files and folders with ownership and permission metadata. One tree per
//! user, reachable through the repository's root index.

pub mod model;
pub mod permission;

pub use model::{File, Folder, Resource};
pub use permission::Permission;
