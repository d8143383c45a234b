use reqwest::{header, Client};
use serde_json::Value;
use std::time::Duration;
use tracing::{debug, warn};

use crate::config::UpstreamConfig;
use crate::utils::validation::validate_item_id;
use crate::{Error, Result};

/// Client for the upstream pizza API.
///
/// Failures are returned once and never retried; callers surface a generic
/// message and the user re-fetches manually.
#[derive(Clone)]
pub struct PizzaClient {
    client: Client,
    base_url: String,
    items_path: String,
}

impl PizzaClient {
    pub fn new(config: &UpstreamConfig) -> Result<Self> {
        let mut headers = header::HeaderMap::new();
        headers.insert(
            header::ACCEPT,
            header::HeaderValue::from_static("application/json"),
        );

        let client = Client::builder()
            .user_agent(config.user_agent.clone())
            .default_headers(headers)
            .timeout(Duration::from_secs(config.timeout_seconds))
            .build()
            .map_err(|e| Error::Internal(format!("Failed to create HTTP client: {e}")))?;

        Ok(Self {
            client,
            base_url: config.base_url.trim_end_matches('/').to_string(),
            items_path: config.items_path.clone(),
        })
    }

    pub fn list_url(&self) -> String {
        format!("{}{}", self.base_url, self.items_path)
    }

    pub fn item_url(&self, id: &str) -> String {
        format!("{}/{}", self.list_url(), urlencoding::encode(id))
    }

    /// GET the pizza collection as raw JSON
    pub async fn list_pizzas(&self) -> Result<Value> {
        self.get_json(&self.list_url()).await
    }

    /// GET a single pizza as raw JSON
    pub async fn get_pizza(&self, id: &str) -> Result<Value> {
        validate_item_id(id)?;
        self.get_json(&self.item_url(id)).await
    }

    async fn get_json(&self, url: &str) -> Result<Value> {
        debug!("Pizza API request: GET {}", url);

        let response = self.client.get(url).send().await.map_err(|e| {
            warn!("Pizza API request failed: {}", e);
            Error::Http(e)
        })?;

        let status = response.status();
        if !status.is_success() {
            warn!("Pizza API error: {} for {}", status, url);
            return Err(Error::UpstreamStatus(status.as_u16()));
        }

        let body = response.bytes().await?;
        serde_json::from_slice(&body).map_err(|e| {
            warn!("Pizza API returned invalid JSON from {}: {}", url, e);
            Error::Json(e)
        })
    }
}
