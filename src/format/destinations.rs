//! Destination blocks

use serde_json::Value;

use super::{display_or, BLOCK_SEPARATOR, NOT_AVAILABLE, UNKNOWN};
use crate::types::Destination;

/// Render one destination as five labeled lines
pub fn format_destination(destination: &Destination) -> String {
    format!(
        "Name: {}\nType: {}\nCity ID: {}\nCountry: {}\nCoordinates: {}, {}\n",
        display_or(destination.name.as_ref(), UNKNOWN),
        display_or(destination.dest_type.as_ref(), UNKNOWN),
        display_or(destination.dest_id.as_ref(), NOT_AVAILABLE),
        display_or(destination.country.as_ref(), UNKNOWN),
        display_or(destination.latitude.as_ref(), NOT_AVAILABLE),
        display_or(destination.longitude.as_ref(), NOT_AVAILABLE),
    )
}

/// Render every entry of a locations response, joined by the block separator.
///
/// Returns an empty string for an empty list.
pub fn format_destinations(entries: &[Value]) -> String {
    entries
        .iter()
        .map(|entry| format_destination(&Destination::from_json(entry)))
        .collect::<Vec<_>>()
        .join(BLOCK_SEPARATOR)
}
