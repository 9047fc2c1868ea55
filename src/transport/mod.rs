//! Transports the MCP server can be reached over
//!
//! Streamable HTTP (default) mounts the handler at `/mcp`; the stdio
//! transport is `McpServer::run` from the protocol module.

mod http;
mod session;

pub use http::{AppState, HttpServer};
pub use session::{SessionManager, SESSION_HEADER};
