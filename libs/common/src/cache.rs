//! Key-value stores for session records
//!
//! This module provides the [`KeyValueStore`] abstraction used to persist the
//! signed-in identity of a browser profile, with a Redis implementation for
//! the running service and an in-memory one for single-process use and tests.

use async_trait::async_trait;
use redis::{AsyncCommands, Client};
use std::{collections::HashMap, sync::Arc};
use tokio::sync::Mutex;
use tracing::info;

use crate::error::CacheResult;

/// String key-value store that survives page reloads
#[async_trait]
pub trait KeyValueStore: Send + Sync {
    /// Get a value by key
    async fn get(&self, key: &str) -> CacheResult<Option<String>>;

    /// Set a key-value pair, replacing any previous value
    async fn set(&self, key: &str, value: &str) -> CacheResult<()>;

    /// Delete a key; deleting a missing key is not an error
    async fn delete(&self, key: &str) -> CacheResult<()>;
}

/// Configuration for Redis connection
#[derive(Debug, Clone)]
pub struct RedisConfig {
    /// Redis connection URL (e.g., "redis://localhost:6379")
    pub url: String,
}

impl RedisConfig {
    /// Create a new RedisConfig from environment variables
    ///
    /// # Environment Variables
    /// - `REDIS_URL`: Redis connection URL (default: "redis://localhost:6379")
    pub fn from_env() -> Self {
        let url =
            std::env::var("REDIS_URL").unwrap_or_else(|_| "redis://localhost:6379".to_string());

        RedisConfig { url }
    }
}

/// Redis-backed key-value store
#[derive(Clone)]
pub struct RedisStore {
    client: Client,
}

impl RedisStore {
    /// Initialize a new Redis store
    pub fn new(config: &RedisConfig) -> CacheResult<Self> {
        let client = Client::open(config.url.clone())?;
        info!("Redis client initialized with URL: {}", config.url);
        Ok(RedisStore { client })
    }

    async fn get_connection(&self) -> CacheResult<redis::aio::MultiplexedConnection> {
        let conn = self.client.get_multiplexed_async_connection().await?;
        Ok(conn)
    }

    /// Check if Redis is reachable
    pub async fn health_check(&self) -> CacheResult<bool> {
        let mut conn = self.get_connection().await?;
        let pong: String = redis::cmd("PING").query_async(&mut conn).await?;
        Ok(pong == "PONG")
    }
}

#[async_trait]
impl KeyValueStore for RedisStore {
    async fn get(&self, key: &str) -> CacheResult<Option<String>> {
        let mut conn = self.get_connection().await?;
        let value: Option<String> = conn.get(key).await?;
        Ok(value)
    }

    async fn set(&self, key: &str, value: &str) -> CacheResult<()> {
        let mut conn = self.get_connection().await?;
        let _: () = conn.set(key, value).await?;
        Ok(())
    }

    async fn delete(&self, key: &str) -> CacheResult<()> {
        let mut conn = self.get_connection().await?;
        let _: u64 = conn.del(key).await?;
        Ok(())
    }
}

/// In-process key-value store
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    entries: Arc<Mutex<HashMap<String, String>>>,
}

impl MemoryStore {
    /// Create an empty store
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl KeyValueStore for MemoryStore {
    async fn get(&self, key: &str) -> CacheResult<Option<String>> {
        Ok(self.entries.lock().await.get(key).cloned())
    }

    async fn set(&self, key: &str, value: &str) -> CacheResult<()> {
        self.entries
            .lock()
            .await
            .insert(key.to_string(), value.to_string());
        Ok(())
    }

    async fn delete(&self, key: &str) -> CacheResult<()> {
        self.entries.lock().await.remove(key);
        Ok(())
    }
}
