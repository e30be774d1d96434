//! Dress repository backed by the external store

use common::{
    ResourceId,
    error::{StoreError, StoreResult},
    store::RestClient,
};
use serde_json::Value;
use tracing::info;

use crate::models::{Dress, DressPatch, NewDress};

/// Dress repository for external store operations
#[derive(Debug, Clone)]
pub struct DressRepository {
    client: RestClient,
}

impl DressRepository {
    /// Create a new dress repository
    pub fn new(client: RestClient) -> Self {
        Self { client }
    }

    fn item_path(id: &ResourceId) -> String {
        format!("/dresses/{}", id)
    }

    /// Get every dress owned by `user_id`, in store order
    ///
    /// A response that is not a list is read as an empty collection.
    pub async fn list_by_user(&self, user_id: &ResourceId) -> StoreResult<Vec<Dress>> {
        let user_id = user_id.to_string();
        let body: Value = self
            .client
            .get_json("/dresses", &[("userId", user_id.as_str())])
            .await?;

        match body {
            Value::Array(_) => {
                serde_json::from_value(body).map_err(|e| StoreError::Decode(e.to_string()))
            }
            _ => Ok(Vec::new()),
        }
    }

    /// Get a dress by ID
    pub async fn get_by_id(&self, id: &ResourceId) -> StoreResult<Dress> {
        self.client.get_json(&Self::item_path(id), &[]).await
    }

    /// Create a dress
    pub async fn create(&self, new_dress: &NewDress) -> StoreResult<Dress> {
        info!(
            "Creating dress {} for user {}",
            new_dress.draft.name, new_dress.user_id
        );
        self.client.post_json("/dresses", new_dress).await
    }

    /// Apply a partial update
    pub async fn update(&self, id: &ResourceId, patch: &DressPatch) -> StoreResult<()> {
        info!("Updating dress {}", id);
        self.client.patch_json(&Self::item_path(id), patch).await
    }

    /// Delete a dress by ID
    pub async fn delete(&self, id: &ResourceId) -> StoreResult<()> {
        info!("Deleting dress {}", id);
        self.client.delete(&Self::item_path(id)).await
    }
}
