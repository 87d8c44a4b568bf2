//! Authentication
//!
//! The credential-check collaborator consumed by the access engine. The
//! trait seam keeps the engine independent of how credentials are stored
//! and lets tests substitute stub authenticators.

pub mod validator;

pub use validator::PasswordAuthenticator;

/// Answers whether a user presented a valid credential.
pub trait Authenticator: Send + Sync {
    fn is_authenticated(&self, user: &str, credential: &str) -> bool;
}
