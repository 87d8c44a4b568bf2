//! Access control engine
//!
//! Orchestrates authentication, path resolution and permission
//! enforcement for the read, write, change-rights and create operations.

pub mod operations;

pub use operations::AccessService;
