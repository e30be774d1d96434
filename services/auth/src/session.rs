//! Session management on top of a key-value store
//!
//! The signed-in identity of a browser profile lives under a single
//! `currentUser` key. Login and registration write it, logout removes it,
//! and every page load reads it once into a [`SessionContext`].

use chrono::Utc;
use common::{cache::KeyValueStore, error::CacheError};
use std::sync::Arc;
use tracing::{info, warn};

use crate::{
    error::{AuthError, AuthResult},
    models::{AccessDecision, Identity, NewAccount, PageKind, SessionContext},
    repositories::UserRepository,
    validation::{normalize_email, validate_email, validate_password, validate_required},
};

/// Key holding the session record
pub const SESSION_KEY: &str = "currentUser";

/// Session manager for one browser profile
#[derive(Clone)]
pub struct SessionManager {
    users: UserRepository,
    store: Arc<dyn KeyValueStore>,
    key: String,
}

impl SessionManager {
    /// Create a session manager using the bare `currentUser` key
    pub fn new(users: UserRepository, store: Arc<dyn KeyValueStore>) -> Self {
        Self {
            users,
            store,
            key: SESSION_KEY.to_string(),
        }
    }

    /// Create a session manager whose record is scoped to `profile`
    pub fn for_profile(
        users: UserRepository,
        store: Arc<dyn KeyValueStore>,
        profile: &str,
    ) -> Self {
        Self {
            users,
            store,
            key: format!("profile:{}:{}", profile, SESSION_KEY),
        }
    }

    /// Key under which the session record is stored
    pub fn key(&self) -> &str {
        &self.key
    }

    /// Read the signed-in identity
    ///
    /// Unreadable or malformed records are treated as no session.
    pub async fn current_identity(&self) -> Option<Identity> {
        let raw = match self.store.get(&self.key).await {
            Ok(raw) => raw?,
            Err(e) => {
                warn!("Failed to read session record {}: {}", self.key, e);
                return None;
            }
        };

        match serde_json::from_str(&raw) {
            Ok(identity) => Some(identity),
            Err(e) => {
                warn!("Ignoring malformed session record {}: {}", self.key, e);
                None
            }
        }
    }

    /// Load the session context for one page load
    pub async fn load_context(&self) -> SessionContext {
        SessionContext {
            identity: self.current_identity().await,
        }
    }

    /// Decide whether `page` may be shown with the current session
    pub async fn require_session_for(&self, page: PageKind) -> AccessDecision {
        self.load_context().await.require(page)
    }

    /// Sign in with email and password
    pub async fn login(&self, email: &str, password: &str) -> AuthResult<Identity> {
        let email = normalize_email(email);
        validate_required(&[email.as_str(), password]).map_err(AuthError::Validation)?;

        info!("Login attempt for user: {}", email);

        let account = self
            .users
            .find_by_email(&email)
            .await?
            .into_iter()
            .next()
            .ok_or(AuthError::NotFound)?;

        if account.password != password {
            return Err(AuthError::InvalidCredentials);
        }

        let identity = account.into_identity();
        self.persist(&identity).await?;

        info!("User {} signed in", identity.id);
        Ok(identity)
    }

    /// Create an account and sign in with it
    pub async fn register(&self, name: &str, email: &str, password: &str) -> AuthResult<Identity> {
        let name = name.trim();
        let email = normalize_email(email);
        validate_required(&[name, email.as_str(), password]).map_err(AuthError::Validation)?;
        validate_password(password).map_err(AuthError::Validation)?;
        validate_email(&email).map_err(AuthError::Validation)?;

        info!("Registration attempt for user: {}", email);

        // Not atomic with the create below; the store has no uniqueness constraint.
        if !self.users.find_by_email(&email).await?.is_empty() {
            return Err(AuthError::AlreadyExists);
        }

        let new_account = NewAccount {
            name: name.to_string(),
            email,
            password: password.to_string(),
            created_at: Utc::now(),
        };
        let identity = self.users.create(&new_account).await?.into_identity();
        self.persist(&identity).await?;

        info!("User {} registered", identity.id);
        Ok(identity)
    }

    /// Clear the session record; safe to call without a session
    pub async fn logout(&self) -> AuthResult<()> {
        info!("Clearing session {}", self.key);
        self.store.delete(&self.key).await?;
        Ok(())
    }

    async fn persist(&self, identity: &Identity) -> AuthResult<()> {
        let raw = serde_json::to_string(identity).map_err(CacheError::from)?;
        self.store.set(&self.key, &raw).await?;
        Ok(())
    }
}
