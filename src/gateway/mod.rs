//! Gateway to the Booking.com RapidAPI
//!
//! One GET per call against a fixed host, with the static RapidAPI
//! credential headers and a fixed timeout. Failures come back as
//! `Err(HotelsError)`; nothing escapes as a panic.

mod client;

pub use client::RapidApiClient;

use std::fmt;

use async_trait::async_trait;
use serde::Serialize;
use serde_json::Value;

use crate::error::Result;

/// Upstream endpoints the tools may call
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Endpoint {
    /// Destination lookup by name
    Locations,
    /// Hotel search for a destination and date range
    Search,
}

impl Endpoint {
    pub fn path(&self) -> &'static str {
        match self {
            Endpoint::Locations => "/v1/hotels/locations",
            Endpoint::Search => "/v1/hotels/search",
        }
    }
}

impl fmt::Display for Endpoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.path())
    }
}

/// A query parameter value
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum ParamValue {
    Str(String),
    Int(i64),
    Bool(bool),
}

impl fmt::Display for ParamValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ParamValue::Str(s) => f.write_str(s),
            ParamValue::Int(n) => write!(f, "{}", n),
            ParamValue::Bool(b) => write!(f, "{}", b),
        }
    }
}

impl From<&str> for ParamValue {
    fn from(s: &str) -> Self {
        ParamValue::Str(s.to_string())
    }
}

impl From<String> for ParamValue {
    fn from(s: String) -> Self {
        ParamValue::Str(s)
    }
}

impl From<i64> for ParamValue {
    fn from(n: i64) -> Self {
        ParamValue::Int(n)
    }
}

impl From<bool> for ParamValue {
    fn from(b: bool) -> Self {
        ParamValue::Bool(b)
    }
}

/// Ordered query parameters for one upstream call
pub type QueryParams = Vec<(&'static str, ParamValue)>;

/// Trait for the travel-data API the tools call
#[async_trait]
pub trait TravelApi: Send + Sync {
    /// Issue one GET against `endpoint` and return the decoded JSON body
    async fn request(&self, endpoint: Endpoint, params: &QueryParams) -> Result<Value>;
}
