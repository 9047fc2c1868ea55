//! Text rendering of upstream records
//!
//! Renders destinations and hotels as labeled-line blocks for the calling
//! model. Missing fields never fail; each one has a fixed default.

mod destinations;
mod hotels;

pub use destinations::{format_destination, format_destinations};
pub use hotels::{booking_url, format_hotel, format_hotels, price_display, HotelQuery, MAX_HOTELS};

use serde_json::Value;

/// Separator between rendered blocks
pub const BLOCK_SEPARATOR: &str = "\n---\n";

/// Default for absent descriptive fields
pub const UNKNOWN: &str = "Unknown";

/// Default for absent identifiers, numbers and links
pub const NOT_AVAILABLE: &str = "N/A";

/// Whether a field counts as present: not missing, not null, not an empty string
pub fn is_present(value: Option<&Value>) -> bool {
    match value {
        None | Some(Value::Null) => false,
        Some(Value::String(s)) => !s.is_empty(),
        Some(_) => true,
    }
}

/// Return the first present candidate, in order
pub fn first_present<'a, I>(candidates: I) -> Option<&'a Value>
where
    I: IntoIterator<Item = Option<&'a Value>>,
{
    candidates.into_iter().find(|v| is_present(*v)).flatten()
}

/// Render a scalar JSON value the way it should appear in a text line
pub fn render(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

/// Render a field, or `default` when it is missing or null
pub fn display_or(value: Option<&Value>, default: &str) -> String {
    match value {
        None | Some(Value::Null) => default.to_string(),
        Some(v) => render(v),
    }
}
