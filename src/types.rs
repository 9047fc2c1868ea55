//! Core types for hotels-mcp

use std::time::Duration;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::{HotelsError, Result};

/// RapidAPI host of the Booking.com API
pub const RAPIDAPI_HOST: &str = "booking-com.p.rapidapi.com";

/// Default request timeout for upstream calls
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Environment variable holding the RapidAPI key
pub const API_KEY_ENV: &str = "RAPIDAPI_KEY";

/// Static configuration for the RapidAPI gateway.
///
/// Built once at startup and shared read-only by every tool call.
#[derive(Clone)]
pub struct RapidApiConfig {
    /// Value of the `X-RapidAPI-Key` header
    pub api_key: String,
    /// Value of the `X-RapidAPI-Host` header
    pub host: String,
    /// Scheme and authority requests are sent to.
    /// Default: https://booking-com.p.rapidapi.com
    pub base_url: String,
    /// Per-request timeout
    pub timeout: Duration,
}

impl RapidApiConfig {
    /// Create a config for the Booking.com host with default settings
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            host: RAPIDAPI_HOST.to_string(),
            base_url: format!("https://{}", RAPIDAPI_HOST),
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
        }
    }

    /// Point the gateway at a different base URL (local test servers)
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into().trim_end_matches('/').to_string();
        self
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Check the settings before the server starts serving
    pub fn validate(&self) -> Result<()> {
        if self.api_key.trim().is_empty() {
            return Err(HotelsError::Config(format!(
                "{} environment variable is not set. Add it to a .env file or pass --rapidapi-key.",
                API_KEY_ENV
            )));
        }

        if !self.base_url.starts_with("http://") && !self.base_url.starts_with("https://") {
            return Err(HotelsError::Config(format!(
                "base URL must be an HTTP or HTTPS URL, got '{}'",
                self.base_url
            )));
        }

        if self.timeout.is_zero() || self.timeout > Duration::from_secs(300) {
            return Err(HotelsError::Config(format!(
                "timeout must be between 1 and 300 seconds, got {}s",
                self.timeout.as_secs()
            )));
        }

        Ok(())
    }
}

// Keeps the key out of logs
impl std::fmt::Debug for RapidApiConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RapidApiConfig")
            .field("api_key", &"<redacted>")
            .field("host", &self.host)
            .field("base_url", &self.base_url)
            .field("timeout", &self.timeout)
            .finish()
    }
}

/// A destination entry from the locations endpoint.
///
/// Every field is optional; `null` deserializes as absent.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Destination {
    #[serde(default)]
    pub name: Option<Value>,
    #[serde(default)]
    pub dest_type: Option<Value>,
    #[serde(default)]
    pub dest_id: Option<Value>,
    #[serde(default)]
    pub country: Option<Value>,
    #[serde(default)]
    pub latitude: Option<Value>,
    #[serde(default)]
    pub longitude: Option<Value>,
}

/// A hotel entry from the search endpoint's `result` list
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Hotel {
    #[serde(default)]
    pub hotel_name: Option<Value>,
    #[serde(default)]
    pub review_score: Option<Value>,
    #[serde(default)]
    pub address: Option<Value>,
    /// Total stay price; `gross_price` is always null upstream
    #[serde(default)]
    pub min_total_price: Option<Value>,
    #[serde(default)]
    pub currency_code: Option<Value>,
    #[serde(default)]
    pub currencycode: Option<Value>,
    #[serde(default)]
    pub latitude: Option<Value>,
    #[serde(default)]
    pub longitude: Option<Value>,
    /// Star class
    #[serde(default, rename = "class")]
    pub star_class: Option<Value>,
    /// Base booking URL without search filters
    #[serde(default)]
    pub url: Option<Value>,
    #[serde(default)]
    pub max_1440_photo_url: Option<Value>,
    #[serde(default)]
    pub max_photo_url: Option<Value>,
    #[serde(default)]
    pub main_photo_url: Option<Value>,
}

impl Destination {
    /// Read a destination from one JSON entry; non-objects yield an empty record
    pub fn from_json(value: &Value) -> Self {
        if !value.is_object() {
            return Self::default();
        }
        serde_json::from_value(value.clone()).unwrap_or_default()
    }
}

impl Hotel {
    /// Read a hotel from one JSON entry; non-objects yield an empty record
    pub fn from_json(value: &Value) -> Self {
        if !value.is_object() {
            return Self::default();
        }
        serde_json::from_value(value.clone()).unwrap_or_default()
    }
}

/// Input for the `search_destinations` tool
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SearchDestinationsInput {
    /// Destination name to look up
    pub query: String,
}

/// Input for the `get_hotels` tool
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GetHotelsInput {
    /// `dest_id` from a destination search
    pub destination_id: String,
    /// Check-in date (YYYY-MM-DD)
    pub checkin_date: String,
    /// Check-out date (YYYY-MM-DD)
    pub checkout_date: String,
    /// Number of adult guests
    #[serde(default = "default_adults")]
    pub adults: i64,
}

fn default_adults() -> i64 {
    crate::search::DEFAULT_ADULTS
}
