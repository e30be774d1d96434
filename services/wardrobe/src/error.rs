//! Custom error types for the wardrobe service

use auth::AuthError;
use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use common::error::StoreError;
use serde_json::json;
use thiserror::Error;

/// Failure of a collection operation
#[derive(Error, Debug)]
pub enum WardrobeError {
    /// Missing or malformed input
    #[error("{0}")]
    Validation(String),

    /// The dress does not exist
    #[error("Dress not found")]
    NotFound,

    /// The dress belongs to another user
    #[error("You do not have permission to view this dress")]
    Forbidden,

    /// Same name, type and color already in the wardrobe
    #[error("This dress already exists in your wardrobe!")]
    DuplicateItem,

    /// The external store failed or answered with a non-success status
    #[error("Store unavailable: {0}")]
    StoreUnavailable(#[from] StoreError),

    /// Listing failed; reported alongside an empty collection
    #[error("Failed to load wardrobe: {0}")]
    FetchFailed(String),
}

/// Type alias for collection results
pub type WardrobeResult<T> = Result<T, WardrobeError>;

/// Error returned by HTTP handlers
#[derive(Error, Debug)]
pub enum ApiError {
    /// No signed-in identity for a collection operation
    #[error("Please login first")]
    Unauthenticated,

    /// Bad request with message
    #[error("Bad request: {0}")]
    BadRequest(String),

    #[error("Page not found: {0}")]
    UnknownPage(String),

    #[error(transparent)]
    Auth(#[from] AuthError),

    #[error(transparent)]
    Wardrobe(#[from] WardrobeError),
}

impl ApiError {
    fn status(&self) -> StatusCode {
        match self {
            ApiError::Unauthenticated => StatusCode::UNAUTHORIZED,
            ApiError::BadRequest(_) => StatusCode::BAD_REQUEST,
            ApiError::UnknownPage(_) => StatusCode::NOT_FOUND,
            ApiError::Auth(e) => match e {
                AuthError::Validation(_) => StatusCode::BAD_REQUEST,
                AuthError::NotFound => StatusCode::NOT_FOUND,
                AuthError::InvalidCredentials => StatusCode::UNAUTHORIZED,
                AuthError::AlreadyExists => StatusCode::CONFLICT,
                AuthError::StoreUnavailable(_) => StatusCode::BAD_GATEWAY,
                AuthError::SessionStore(_) => StatusCode::INTERNAL_SERVER_ERROR,
            },
            ApiError::Wardrobe(e) => match e {
                WardrobeError::Validation(_) => StatusCode::BAD_REQUEST,
                WardrobeError::NotFound => StatusCode::NOT_FOUND,
                WardrobeError::Forbidden => StatusCode::FORBIDDEN,
                WardrobeError::DuplicateItem => StatusCode::CONFLICT,
                WardrobeError::StoreUnavailable(_) | WardrobeError::FetchFailed(_) => {
                    StatusCode::BAD_GATEWAY
                }
            },
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        if status.is_server_error() {
            tracing::error!("Request failed: {}", self);
        }

        let body = Json(json!({
            "error": self.to_string(),
        }));

        (status, body).into_response()
    }
}

/// Type alias for API results
pub type ApiResult<T> = Result<T, ApiError>;
