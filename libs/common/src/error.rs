//! Custom error types for the common library
//!
//! This module defines the error types raised when talking to the external
//! REST store and to the key-value store holding session records.

use thiserror::Error;

/// Custom error type for external store operations
#[derive(Error, Debug)]
pub enum StoreError {
    /// The request never produced a response
    #[error("Store transport error: {0}")]
    Transport(#[source] reqwest::Error),

    /// The store answered with a non-success status
    #[error("Store returned status {status} for {method} {path}")]
    Status {
        method: &'static str,
        path: String,
        status: u16,
    },

    /// The response body could not be decoded
    #[error("Store response could not be decoded: {0}")]
    Decode(String),

    /// Configuration error
    #[error("Store configuration error: {0}")]
    Configuration(String),
}

impl StoreError {
    /// Whether the store reported the resource as missing
    pub fn is_not_found(&self) -> bool {
        matches!(self, StoreError::Status { status: 404, .. })
    }
}

/// Type alias for Result with StoreError
pub type StoreResult<T> = Result<T, StoreError>;

/// Custom error type for key-value store operations
#[derive(Error, Debug)]
pub enum CacheError {
    /// Error reported by Redis
    #[error("Redis error: {0}")]
    Redis(#[from] redis::RedisError),

    /// A stored value could not be encoded or decoded
    #[error("Cache value error: {0}")]
    Value(#[from] serde_json::Error),
}

/// Type alias for Result with CacheError
pub type CacheResult<T> = Result<T, CacheError>;
