//! Error handlers
//!
//! Helpers for boundary layers mapping access errors to transport
//! representations.

use crate::error::types::AccessError;
use log::error;

/// Log an access error
pub fn handle_error(err: &AccessError) {
    error!("Access error: {}", err);
}

/// Canonical HTTP-style status for an access error
pub fn error_to_status(err: &AccessError) -> u16 {
    match err {
        AccessError::Unauthorized => 401,
        AccessError::NotFound => 404,
        AccessError::OperationNotPermitted => 403,
        AccessError::Conflict => 409,
    }
}
