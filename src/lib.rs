//! Hotels MCP - Booking.com search tools for AI agents
//!
//! Exposes destination and hotel search over the Model Context Protocol,
//! forwarding each call to the Booking.com RapidAPI and rendering the
//! response as plain text.

pub mod error;
pub mod format;
pub mod gateway;
pub mod mcp;
pub mod search;
pub mod transport;
pub mod types;

pub use error::{HotelsError, Result};
pub use gateway::{RapidApiClient, TravelApi};
pub use search::HotelSearch;
pub use types::*;

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
