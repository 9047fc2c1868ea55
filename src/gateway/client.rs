//! reqwest-backed RapidAPI client

use async_trait::async_trait;
use serde_json::Value;

use super::{Endpoint, QueryParams, TravelApi};
use crate::error::{HotelsError, Result};
use crate::types::RapidApiConfig;

/// RapidAPI client for the Booking.com endpoints
pub struct RapidApiClient {
    client: reqwest::Client,
    config: RapidApiConfig,
}

impl RapidApiClient {
    /// Create a new client. The timeout is applied to every request.
    pub fn new(config: RapidApiConfig) -> Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(config.timeout)
            .user_agent(concat!("hotels-mcp/", env!("CARGO_PKG_VERSION")))
            .build()?;

        Ok(Self { client, config })
    }

    fn url(&self, endpoint: Endpoint) -> String {
        format!("{}{}", self.config.base_url, endpoint.path())
    }

    async fn send(&self, endpoint: Endpoint, params: &QueryParams) -> Result<Value> {
        let url = self.url(endpoint);

        let response = self
            .client
            .get(&url)
            .header("X-RapidAPI-Key", &self.config.api_key)
            .header("X-RapidAPI-Host", &self.config.host)
            .query(params)
            .send()
            .await
            .map_err(|e| self.classify(e, &url))?;

        if !response.status().is_success() {
            return Err(HotelsError::Status {
                status: response.status(),
                url: response.url().to_string(),
            });
        }

        response.json::<Value>().await.map_err(|e| {
            if e.is_timeout() {
                self.classify(e, &url)
            } else {
                HotelsError::InvalidResponse(format!("failed to decode JSON body: {}", e))
            }
        })
    }

    fn classify(&self, err: reqwest::Error, url: &str) -> HotelsError {
        if err.is_timeout() {
            HotelsError::Timeout {
                url: url.to_string(),
                seconds: self.config.timeout.as_secs(),
            }
        } else {
            HotelsError::Http(err)
        }
    }
}

#[async_trait]
impl TravelApi for RapidApiClient {
    async fn request(&self, endpoint: Endpoint, params: &QueryParams) -> Result<Value> {
        tracing::info!(
            "Making API request to {} with params: {:?}",
            endpoint,
            params
        );

        match self.send(endpoint, params).await {
            Ok(body) => {
                tracing::info!(
                    "API request to {} successful ({} items)",
                    endpoint,
                    item_count(&body)
                );
                Ok(body)
            }
            Err(e) => {
                tracing::error!("API request to {} failed: {}", endpoint, e);
                Err(e)
            }
        }
    }
}

/// Number of entries in a response, for logging
fn item_count(body: &Value) -> usize {
    match body {
        Value::Array(items) => items.len(),
        Value::Object(map) => map
            .get("result")
            .and_then(|v| v.as_array())
            .map_or(1, |items| items.len()),
        _ => 1,
    }
}
