//! Account model and related functionality

use chrono::{DateTime, Utc};
use common::ResourceId;
use serde::{Deserialize, Serialize};

use super::session::Identity;

/// Account entity as stored by the external store
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Account {
    pub id: ResourceId,
    pub name: String,
    pub email: String,
    pub password: String,
    #[serde(
        default,
        deserialize_with = "common::timestamps::lenient",
        skip_serializing_if = "Option::is_none"
    )]
    pub created_at: Option<DateTime<Utc>>,
}

impl Account {
    /// Drop the credentials, keeping what the session may hold
    pub fn into_identity(self) -> Identity {
        Identity {
            id: self.id,
            name: self.name,
            email: self.email,
            created_at: self.created_at,
        }
    }
}

/// New account creation payload; the store assigns the id
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewAccount {
    pub name: String,
    pub email: String,
    pub password: String,
    pub created_at: DateTime<Utc>,
}

/// Login form payload
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginCredentials {
    pub email: String,
    pub password: String,
}

/// Registration form payload
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Registration {
    pub name: String,
    pub email: String,
    pub password: String,
}
