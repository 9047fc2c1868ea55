//! MCP tool definitions for the hotels server

use serde_json::json;

use super::protocol::ToolDefinition;

pub const SEARCH_DESTINATIONS: &str = "search_destinations";
pub const GET_HOTELS: &str = "get_hotels";

/// All tool definitions: (name, description, input schema)
pub const TOOL_DEFINITIONS: &[(&str, &str, &str)] = &[
    (
        SEARCH_DESTINATIONS,
        "Search for hotel destinations by name. Returns destination name, type, city ID, country and coordinates. Use the City ID with get_hotels.",
        r#"{
            "type": "object",
            "properties": {
                "query": {"type": "string", "description": "Destination name to search for, e.g. \"Paris\""}
            },
            "required": ["query"]
        }"#,
    ),
    (
        GET_HOTELS,
        "Get hotels for a specific destination. Returns up to 10 hotels ordered by popularity with rating, address, price, stars, booking link and image.",
        r#"{
            "type": "object",
            "properties": {
                "destination_id": {"type": "string", "description": "City ID from search_destinations"},
                "checkin_date": {"type": "string", "description": "Check-in date (YYYY-MM-DD)"},
                "checkout_date": {"type": "string", "description": "Check-out date (YYYY-MM-DD)"},
                "adults": {"type": "integer", "default": 2, "description": "Number of adult guests"}
            },
            "required": ["destination_id", "checkin_date", "checkout_date"]
        }"#,
    ),
];

/// Get all tool definitions as ToolDefinition structs
pub fn get_tool_definitions() -> Vec<ToolDefinition> {
    TOOL_DEFINITIONS
        .iter()
        .map(|(name, description, schema)| ToolDefinition {
            name: name.to_string(),
            description: description.to_string(),
            input_schema: serde_json::from_str(schema).unwrap_or(json!({})),
        })
        .collect()
}
