//! Account repository backed by the external store

use common::{
    error::{StoreError, StoreResult},
    store::RestClient,
};
use serde_json::Value;
use tracing::info;

use crate::models::{Account, NewAccount};

/// Account repository
#[derive(Debug, Clone)]
pub struct UserRepository {
    client: RestClient,
}

impl UserRepository {
    /// Create a new account repository
    pub fn new(client: RestClient) -> Self {
        Self { client }
    }

    /// Find every account registered with `email`
    ///
    /// The store answers with a list; anything else counts as no match.
    pub async fn find_by_email(&self, email: &str) -> StoreResult<Vec<Account>> {
        info!("Finding accounts by email: {}", email);

        let body: Value = self.client.get_json("/users", &[("email", email)]).await?;
        match body {
            Value::Array(_) => {
                serde_json::from_value(body).map_err(|e| StoreError::Decode(e.to_string()))
            }
            _ => Ok(Vec::new()),
        }
    }

    /// Create a new account
    pub async fn create(&self, new_account: &NewAccount) -> StoreResult<Account> {
        info!("Creating new account: {}", new_account.email);

        self.client.post_json("/users", new_account).await
    }
}
