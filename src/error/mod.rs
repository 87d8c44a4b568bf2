//! Error handling
//!
//! Defines error types and handling for resource access.

pub mod handlers;
pub mod types;

pub use types::AccessError;
