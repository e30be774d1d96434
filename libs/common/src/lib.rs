//! Common library for the Wardrobe application
//!
//! This crate provides shared functionality used by the wardrobe services,
//! including the external REST store client, the key-value store that keeps
//! session records, store-assigned identifiers and error handling.

pub mod cache;
pub mod error;
pub mod ids;
pub mod store;
pub mod timestamps;

pub use ids::ResourceId;

/// Example usage of the store module
///
/// ```rust,no_run
/// use common::store::{RestClient, StoreConfig};
///
/// #[tokio::main]
/// async fn main() -> Result<(), Box<dyn std::error::Error>> {
///     let config = StoreConfig::from_env()?;
///     let client = RestClient::new(&config)?;
///     let is_healthy = client.health_check().await?;
///     println!("Store health check: {}", is_healthy);
///     Ok(())
/// }
/// ```
pub fn example_usage() {}
