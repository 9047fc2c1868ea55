//! Error types for the hotels MCP server

use thiserror::Error;

/// Result type alias for hotels-mcp operations
pub type Result<T> = std::result::Result<T, HotelsError>;

/// Main error type for hotels-mcp
#[derive(Error, Debug)]
pub enum HotelsError {
    #[error("{0}")]
    Http(#[from] reqwest::Error),

    #[error("request to {url} timed out after {seconds}s")]
    Timeout { url: String, seconds: u64 },

    #[error("HTTP status {status} for url '{url}'")]
    Status {
        status: reqwest::StatusCode,
        url: String,
    },

    #[error("Invalid response: {0}")]
    InvalidResponse(String),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Unknown tool: {0}")]
    ToolNotFound(String),

    #[error("Internal error: {0}")]
    Internal(String),
}

impl HotelsError {
    /// Whether the error came from talking to the upstream API
    pub fn is_upstream(&self) -> bool {
        matches!(
            self,
            HotelsError::Http(_)
                | HotelsError::Timeout { .. }
                | HotelsError::Status { .. }
                | HotelsError::InvalidResponse(_)
        )
    }

    /// Get error code for MCP protocol
    pub fn code(&self) -> i64 {
        match self {
            HotelsError::InvalidInput(_) => -32602,
            HotelsError::ToolNotFound(_) => -32601,
            _ => -32000,
        }
    }
}
