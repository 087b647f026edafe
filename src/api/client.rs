//! REST Store Client
//!
//! PostgREST-style table client for the hosted `entries` table.

use gloo_net::http::{Request, RequestBuilder, Response};

use super::{EntryStore, StoreError};
use crate::model::{Entry, NewEntry};

/// Default store endpoint (local development stack)
pub const DEFAULT_STORE_URL: &str = "http://localhost:54321";

/// Get the store endpoint from local storage or use the default
pub fn get_store_url() -> String {
    let url = if let Some(window) = web_sys::window() {
        if let Ok(Some(storage)) = window.local_storage() {
            if let Ok(Some(url)) = storage.get_item("kiroku_store_url") {
                url
            } else {
                DEFAULT_STORE_URL.to_string()
            }
        } else {
            DEFAULT_STORE_URL.to_string()
        }
    } else {
        DEFAULT_STORE_URL.to_string()
    };
    // Normalize: remove trailing slash
    url.trim_end_matches('/').to_string()
}

/// Get the store API key from local storage, if one is configured
pub fn get_store_key() -> Option<String> {
    let window = web_sys::window()?;
    let storage = window.local_storage().ok().flatten()?;
    storage.get_item("kiroku_store_key").ok().flatten()
}

/// Error body returned by the store on a rejected request
#[derive(Debug, serde::Deserialize)]
struct StoreErrorBody {
    message: String,
}

/// Table client speaking the hosted store's REST dialect.
pub struct RestStore {
    base: String,
    api_key: Option<String>,
}

impl RestStore {
    pub fn new(base: impl Into<String>, api_key: Option<String>) -> Self {
        Self {
            base: base.into(),
            api_key,
        }
    }

    /// Build a client from process-wide configuration. Read once before the
    /// view mounts.
    pub fn from_config() -> Self {
        Self::new(get_store_url(), get_store_key())
    }

    fn table_url(&self) -> String {
        format!("{}/rest/v1/entries", self.base)
    }

    fn with_auth(&self, request: RequestBuilder) -> RequestBuilder {
        match &self.api_key {
            Some(key) => request
                .header("apikey", key)
                .header("Authorization", &format!("Bearer {}", key)),
            None => request,
        }
    }
}

/// Extract the human-readable message from a rejected response.
async fn rejection(response: Response) -> StoreError {
    let status = response.status();
    let message = response
        .json::<StoreErrorBody>()
        .await
        .map(|body| body.message)
        .unwrap_or_else(|_| format!("HTTP {}", status));
    StoreError::Rejected(message)
}

#[async_trait::async_trait(?Send)]
impl EntryStore for RestStore {
    async fn list(&self) -> Result<Vec<Entry>, StoreError> {
        let url = format!("{}?select=*&order=created_at.desc", self.table_url());

        let response = self
            .with_auth(Request::get(&url))
            .send()
            .await
            .map_err(|e| StoreError::Network(e.to_string()))?;

        if !response.ok() {
            return Err(rejection(response).await);
        }

        response
            .json()
            .await
            .map_err(|e| StoreError::Decode(e.to_string()))
    }

    async fn insert(&self, new: &NewEntry) -> Result<Vec<Entry>, StoreError> {
        let response = self
            .with_auth(Request::post(&self.table_url()))
            // Ask the store to echo the inserted rows back, with the
            // server-assigned id and created_at.
            .header("Prefer", "return=representation")
            .json(&[new])
            .map_err(|e| StoreError::Decode(e.to_string()))?
            .send()
            .await
            .map_err(|e| StoreError::Network(e.to_string()))?;

        if !response.ok() {
            return Err(rejection(response).await);
        }

        response
            .json()
            .await
            .map_err(|e| StoreError::Decode(e.to_string()))
    }
}
