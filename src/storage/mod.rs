//! Storage management
//!
//! The repository backing the access engine: credentials and per-user
//! resource trees.

pub mod repository;

pub use repository::{SharedStorage, Storage};
