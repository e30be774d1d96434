//! Client for the external REST resource store
//!
//! This module provides configuration, a thin JSON client and a health check
//! for the resource server that holds accounts and dresses. Every non-2xx
//! answer is surfaced as a [`StoreError`].

use crate::error::{StoreError, StoreResult};
use reqwest::{Client, Method, RequestBuilder, Response};
use serde::{Serialize, de::DeserializeOwned};
use std::{env, time::Duration};
use tracing::{debug, info};

/// External store configuration struct
#[derive(Debug, Clone)]
pub struct StoreConfig {
    /// Base URL of the resource server
    pub base_url: String,
    /// Optional request timeout in seconds; the transport default applies when unset
    pub timeout_secs: Option<u64>,
}

impl StoreConfig {
    /// Create a new StoreConfig from environment variables
    ///
    /// # Environment Variables
    /// - `STORE_BASE_URL`: resource server URL (default: "http://localhost:3000")
    /// - `STORE_TIMEOUT_SECS`: request timeout in seconds (default: unset)
    pub fn from_env() -> StoreResult<Self> {
        let base_url =
            env::var("STORE_BASE_URL").unwrap_or_else(|_| "http://localhost:3000".to_string());

        let timeout_secs = env::var("STORE_TIMEOUT_SECS")
            .ok()
            .and_then(|s| s.parse().ok());

        Ok(Self {
            base_url,
            timeout_secs,
        })
    }

    /// Configuration pointing at the given base URL
    pub fn with_base_url(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            timeout_secs: None,
        }
    }
}

/// JSON client for the resource server
#[derive(Debug, Clone)]
pub struct RestClient {
    http: Client,
    base_url: String,
}

impl RestClient {
    /// Build a client from configuration
    pub fn new(config: &StoreConfig) -> StoreResult<Self> {
        let base_url = config.base_url.trim_end_matches('/').to_string();
        if !(base_url.starts_with("http://") || base_url.starts_with("https://")) {
            return Err(StoreError::Configuration(format!(
                "Invalid store URL: {}",
                config.base_url
            )));
        }

        let mut builder = Client::builder();
        if let Some(secs) = config.timeout_secs {
            builder = builder.timeout(Duration::from_secs(secs));
        }
        let http = builder
            .build()
            .map_err(|e| StoreError::Configuration(format!("Failed to build client: {}", e)))?;

        info!("Store client initialized with URL: {}", base_url);
        Ok(Self { http, base_url })
    }

    /// Base URL requests are resolved against
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn request(&self, method: Method, path: &str) -> RequestBuilder {
        self.http.request(method, format!("{}{}", self.base_url, path))
    }

    async fn send(
        &self,
        method: &'static str,
        path: &str,
        request: RequestBuilder,
    ) -> StoreResult<Response> {
        debug!("{} {}", method, path);
        let response = request.send().await.map_err(StoreError::Transport)?;

        let status = response.status();
        if !status.is_success() {
            return Err(StoreError::Status {
                method,
                path: path.to_string(),
                status: status.as_u16(),
            });
        }

        Ok(response)
    }

    async fn decode<T: DeserializeOwned>(response: Response) -> StoreResult<T> {
        let bytes = response.bytes().await.map_err(StoreError::Transport)?;
        serde_json::from_slice(&bytes).map_err(|e| StoreError::Decode(e.to_string()))
    }

    /// GET a JSON document, optionally with query parameters
    pub async fn get_json<T: DeserializeOwned>(
        &self,
        path: &str,
        query: &[(&str, &str)],
    ) -> StoreResult<T> {
        let request = self.request(Method::GET, path).query(query);
        let response = self.send("GET", path, request).await?;
        Self::decode(response).await
    }

    /// POST a JSON body and decode the created record
    pub async fn post_json<B, T>(&self, path: &str, body: &B) -> StoreResult<T>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        let request = self.request(Method::POST, path).json(body);
        let response = self.send("POST", path, request).await?;
        Self::decode(response).await
    }

    /// PATCH a JSON body; the response body is ignored
    pub async fn patch_json<B>(&self, path: &str, body: &B) -> StoreResult<()>
    where
        B: Serialize + ?Sized,
    {
        let request = self.request(Method::PATCH, path).json(body);
        self.send("PATCH", path, request).await?;
        Ok(())
    }

    /// DELETE a resource
    pub async fn delete(&self, path: &str) -> StoreResult<()> {
        let request = self.request(Method::DELETE, path);
        self.send("DELETE", path, request).await?;
        Ok(())
    }

    /// Check if the store is reachable
    pub async fn health_check(&self) -> StoreResult<bool> {
        let response = self
            .request(Method::GET, "/")
            .send()
            .await
            .map_err(StoreError::Transport)?;

        Ok(!response.status().is_server_error())
    }
}
