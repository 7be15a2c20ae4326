//! HTTP GET client returning decoded JSON or raw bytes
//!
//! Uses async reqwest for non-blocking HTTP requests.

use crate::error::{CatalogError, Result};
use serde::de::DeserializeOwned;

pub const DEFAULT_USER_AGENT: &str = "rawg_catalog/0.1";

/// Response body and the `Content-Type` the server sent, if any
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Payload {
    pub bytes: Vec<u8>,
    pub content_type: Option<String>,
}

/// Thin wrapper around a shared reqwest client
#[derive(Debug, Clone)]
pub struct DataDownloader {
    client: reqwest::Client,
    user_agent: String,
}

impl Default for DataDownloader {
    fn default() -> Self {
        Self::new(DEFAULT_USER_AGENT)
    }
}

impl DataDownloader {
    pub fn new(user_agent: impl Into<String>) -> Self {
        Self::with_client(reqwest::Client::new(), user_agent)
    }

    /// Use a preconfigured client (timeouts, proxies)
    pub fn with_client(client: reqwest::Client, user_agent: impl Into<String>) -> Self {
        Self {
            client,
            user_agent: user_agent.into(),
        }
    }

    /// GET `url` and decode the body as JSON
    pub async fn fetch_json<T: DeserializeOwned>(&self, url: &str) -> Result<T> {
        let body = self.fetch_bytes(url).await?;
        Ok(serde_json::from_slice(&body)?)
    }

    /// GET `url` and return the body bytes
    pub async fn fetch_bytes(&self, url: &str) -> Result<Vec<u8>> {
        Ok(self.fetch(url).await?.bytes)
    }

    /// GET `url` and return the body with its declared content type
    pub async fn fetch(&self, url: &str) -> Result<Payload> {
        let url = reqwest::Url::parse(url).map_err(|e| {
            log::warn!("Rejecting invalid URL {:?}: {}", url, e);
            CatalogError::InvalidUrl(url.to_string())
        })?;

        log::debug!("GET {}", url);

        let response = self
            .client
            .get(url.clone())
            .header(reqwest::header::USER_AGENT, &self.user_agent)
            .send()
            .await?;

        let status = response.status();
        let content_type = response
            .headers()
            .get(reqwest::header::CONTENT_TYPE)
            .and_then(|v| v.to_str().ok())
            .map(str::to_string);
        let body = response.bytes().await?;

        if !status.is_success() {
            log::warn!("GET {} failed with status {}", url, status);
            return Err(CatalogError::HttpStatus {
                status,
                body: (!body.is_empty()).then(|| body.to_vec()),
            });
        }

        if body.is_empty() {
            return Err(CatalogError::EmptyResponse);
        }

        Ok(Payload {
            bytes: body.to_vec(),
            content_type,
        })
    }
}
