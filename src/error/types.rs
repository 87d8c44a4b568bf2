//! Error types
//!
//! Defines the failure kinds surfaced by resource access operations.

use std::fmt;

/// Failures raised by the access control engine.
///
/// Every kind carries a fixed user-facing message; attaching a transport
/// status is left to the boundary layer. All kinds are expected,
/// locally-originating and non-retryable.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AccessError {
    /// The credential check failed for the acting user.
    Unauthorized,
    /// The path does not resolve to a resource, or the resolved resource
    /// cannot satisfy the operation (writing to a folder).
    NotFound,
    /// The acting user lacks the permission the operation requires.
    OperationNotPermitted,
    /// The create target already exists.
    Conflict,
}

impl fmt::Display for AccessError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AccessError::Unauthorized => write!(f, "Unauthorized user"),
            AccessError::NotFound => write!(f, "Resource not found"),
            AccessError::OperationNotPermitted => write!(f, "Operation not permitted"),
            AccessError::Conflict => write!(f, "Resource already exists"),
        }
    }
}

impl std::error::Error for AccessError {}
