//! Wardrobe service
//!
//! Page controllers and collection queries over the external store, served
//! over HTTP with one session per browser profile.

pub mod collection;
pub mod config;
pub mod error;
pub mod middleware;
pub mod models;
pub mod pages;
pub mod presentation;
pub mod query;
pub mod repositories;
pub mod routes;
pub mod state;

pub use collection::{CollectionService, Fetched};
pub use error::{ApiError, ApiResult, WardrobeError, WardrobeResult};
pub use pages::PageOutcome;
pub use routes::create_router;
pub use state::AppState;
