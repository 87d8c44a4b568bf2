//! Resource Vault
//!
//! Per-user virtual file and folder storage with owner- and
//! permission-based access control, addressed by slash-delimited paths.
//! The crate exposes the storage repository, the path resolver and the
//! access control engine; transport and role management live outside.

pub mod access;
pub mod auth;
pub mod config;
pub mod error;
pub mod logging;
pub mod resolver;
pub mod resource;
pub mod storage;

pub use access::AccessService;
pub use auth::{Authenticator, PasswordAuthenticator};
pub use config::ServiceConfig;
pub use error::AccessError;
pub use resource::{File, Folder, Permission, Resource};
pub use storage::{SharedStorage, Storage};
