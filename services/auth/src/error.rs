//! Custom error types for the authentication service

use common::error::{CacheError, StoreError};
use thiserror::Error;

/// Failure of a login, registration or logout attempt
#[derive(Error, Debug)]
pub enum AuthError {
    /// Missing or malformed input, detected before any network call
    #[error("{0}")]
    Validation(String),

    /// No account has the given email
    #[error("User not found")]
    NotFound,

    /// The stored password does not match
    #[error("Invalid password")]
    InvalidCredentials,

    /// Registration with an email that is already taken
    #[error("User with this email already exists")]
    AlreadyExists,

    /// The external store failed or answered with a non-success status
    #[error("Store unavailable: {0}")]
    StoreUnavailable(#[from] StoreError),

    /// The session record could not be written
    #[error("Session store error: {0}")]
    SessionStore(#[from] CacheError),
}

/// Type alias for authentication results
pub type AuthResult<T> = Result<T, AuthError>;
