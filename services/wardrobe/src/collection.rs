//! Collection operations for one user's wardrobe
//!
//! Listing degrades to an empty collection on failure so pages still render;
//! every other operation returns its error to the caller.

use chrono::Utc;
use common::ResourceId;
use tracing::{error, info, warn};

use crate::{
    error::{WardrobeError, WardrobeResult},
    models::{Dress, DressDraft, DressPatch, NewDress},
    query::{is_duplicate, sort_newest_first},
    repositories::DressRepository,
};

/// Result of listing a collection
#[derive(Debug)]
pub struct Fetched {
    /// Newest first; empty when the fetch failed
    pub items: Vec<Dress>,
    /// Set to [`WardrobeError::FetchFailed`] when the store could not be read
    pub failure: Option<WardrobeError>,
}

impl Fetched {
    pub fn fetch_failed(&self) -> bool {
        self.failure.is_some()
    }
}

/// Wardrobe operations over the external store
#[derive(Debug, Clone)]
pub struct CollectionService {
    dresses: DressRepository,
}

impl CollectionService {
    pub fn new(dresses: DressRepository) -> Self {
        Self { dresses }
    }

    /// List the user's dresses, newest first
    pub async fn fetch_collection(&self, user_id: &ResourceId) -> Fetched {
        match self.dresses.list_by_user(user_id).await {
            Ok(mut items) => {
                sort_newest_first(&mut items);
                Fetched {
                    items,
                    failure: None,
                }
            }
            Err(e) => {
                error!("Error fetching dresses for user {}: {}", user_id, e);
                Fetched {
                    items: Vec::new(),
                    failure: Some(WardrobeError::FetchFailed(e.to_string())),
                }
            }
        }
    }

    /// Whether the user already owns a dress with the same name, type and color
    pub async fn check_duplicate(
        &self,
        user_id: &ResourceId,
        candidate: &DressDraft,
    ) -> WardrobeResult<bool> {
        let items = self.dresses.list_by_user(user_id).await?;
        Ok(items.iter().any(|existing| is_duplicate(existing, candidate)))
    }

    /// Add a dress to the user's wardrobe
    pub async fn add_item(&self, user_id: &ResourceId, draft: DressDraft) -> WardrobeResult<Dress> {
        let draft = draft.normalized();
        draft.validate().map_err(WardrobeError::Validation)?;

        // Check and create are separate requests; a concurrent add can slip between them.
        if self.check_duplicate(user_id, &draft).await? {
            warn!("Rejecting duplicate dress {} for user {}", draft.name, user_id);
            return Err(WardrobeError::DuplicateItem);
        }

        let new_dress = NewDress {
            draft,
            user_id: user_id.clone(),
            created_at: Utc::now(),
        };
        let dress = self.dresses.create(&new_dress).await?;

        info!("Dress {} added for user {}", dress.id, user_id);
        Ok(dress)
    }

    /// Get one of the user's dresses
    pub async fn get_item(&self, user_id: &ResourceId, id: &ResourceId) -> WardrobeResult<Dress> {
        let dress = self.dresses.get_by_id(id).await.map_err(|e| {
            if e.is_not_found() {
                WardrobeError::NotFound
            } else {
                WardrobeError::StoreUnavailable(e)
            }
        })?;

        if &dress.user_id != user_id {
            return Err(WardrobeError::Forbidden);
        }

        Ok(dress)
    }

    /// Apply a partial update
    pub async fn update_item(&self, id: &ResourceId, patch: &DressPatch) -> WardrobeResult<()> {
        self.dresses.update(id, patch).await?;
        Ok(())
    }

    /// Delete a dress
    pub async fn delete_item(&self, id: &ResourceId) -> WardrobeResult<()> {
        self.dresses.delete(id).await?;
        Ok(())
    }
}
