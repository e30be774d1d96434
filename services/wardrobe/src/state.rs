//! Application state shared across handlers

use auth::{SessionManager, UserRepository};
use common::cache::KeyValueStore;
use std::sync::Arc;

use crate::collection::CollectionService;

/// Application state shared across handlers
#[derive(Clone)]
pub struct AppState {
    pub users: UserRepository,
    pub session_store: Arc<dyn KeyValueStore>,
    pub collection: CollectionService,
}

impl AppState {
    /// Session manager for one browser profile
    pub fn sessions_for(&self, profile: &str) -> SessionManager {
        SessionManager::for_profile(self.users.clone(), self.session_store.clone(), profile)
    }
}
