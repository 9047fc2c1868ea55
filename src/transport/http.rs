//! Streamable HTTP transport for MCP
//!
//! `POST /mcp` takes one JSON-RPC message and answers with JSON. Server-sent
//! streams are not offered, so `GET /mcp` is rejected with 405.

use std::future::Future;
use std::net::SocketAddr;
use std::sync::Arc;

use axum::{
    body::Bytes,
    extract::State,
    http::{HeaderMap, HeaderName, HeaderValue, StatusCode},
    response::{IntoResponse, Response},
    routing::{get, post},
    Json, Router,
};
use serde_json::json;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use super::session::{SessionManager, SESSION_HEADER};
use crate::mcp::protocol::codes;
use crate::mcp::{methods, McpHandler, McpRequest, McpResponse};

/// Shared state of the HTTP transport
#[derive(Clone)]
pub struct AppState {
    handler: Arc<dyn McpHandler>,
    sessions: SessionManager,
}

impl AppState {
    pub fn new(handler: Arc<dyn McpHandler>) -> Self {
        Self::with_sessions(handler, SessionManager::new())
    }

    pub fn with_sessions(handler: Arc<dyn McpHandler>, sessions: SessionManager) -> Self {
        Self { handler, sessions }
    }

    pub fn sessions(&self) -> &SessionManager {
        &self.sessions
    }
}

/// HTTP server hosting the MCP endpoint
pub struct HttpServer {
    state: AppState,
    addr: SocketAddr,
}

impl HttpServer {
    /// Create a new HTTP server
    pub fn new(handler: Arc<dyn McpHandler>, addr: SocketAddr) -> Self {
        Self {
            state: AppState::new(handler),
            addr,
        }
    }

    /// Build the router
    pub fn router(state: AppState) -> Router {
        let cors = CorsLayer::new()
            .allow_origin(Any)
            .allow_methods(Any)
            .allow_headers(Any)
            .expose_headers([HeaderName::from_static(SESSION_HEADER)]);

        Router::new()
            .route("/mcp", post(post_handler).delete(delete_handler))
            .route("/health", get(health_handler))
            .layer(TraceLayer::new_for_http())
            .layer(cors)
            .with_state(state)
    }

    /// Serve until `shutdown` resolves
    pub async fn start<F>(self, shutdown: F) -> std::io::Result<()>
    where
        F: Future<Output = ()> + Send + 'static,
    {
        let app = Self::router(self.state);

        let listener = tokio::net::TcpListener::bind(self.addr).await?;
        tracing::info!("MCP endpoint listening on http://{}/mcp", listener.local_addr()?);

        axum::serve(listener, app)
            .with_graceful_shutdown(shutdown)
            .await?;

        Ok(())
    }
}

fn session_id(headers: &HeaderMap) -> Option<&str> {
    headers.get(SESSION_HEADER).and_then(|v| v.to_str().ok())
}

/// Handle one JSON-RPC message
async fn post_handler(State(state): State<AppState>, headers: HeaderMap, body: Bytes) -> Response {
    let request: McpRequest = match serde_json::from_slice(&body) {
        Ok(request) => request,
        Err(e) => {
            tracing::warn!("Rejected malformed MCP message: {}", e);
            return (StatusCode::BAD_REQUEST, Json(McpResponse::parse_error(e))).into_response();
        }
    };

    let is_initialize = request.method == methods::INITIALIZE;

    if let Some(id) = session_id(&headers) {
        if !is_initialize && !state.sessions.contains(id) {
            return (
                StatusCode::NOT_FOUND,
                Json(McpResponse::error(
                    request.id,
                    codes::INVALID_REQUEST,
                    format!("Session not found: {}", id),
                )),
            )
                .into_response();
        }
    }

    let Some(response) = state.handler.handle_request(request).await else {
        return StatusCode::ACCEPTED.into_response();
    };

    if is_initialize && !response.is_error() {
        let id = state.sessions.create();
        let mut http_response = Json(response).into_response();
        if let Ok(value) = HeaderValue::from_str(&id) {
            http_response.headers_mut().insert(SESSION_HEADER, value);
        }
        return http_response;
    }

    Json(response).into_response()
}

/// Terminate a session
async fn delete_handler(State(state): State<AppState>, headers: HeaderMap) -> StatusCode {
    match session_id(&headers) {
        None => StatusCode::BAD_REQUEST,
        Some(id) if state.sessions.remove(id) => StatusCode::NO_CONTENT,
        Some(_) => StatusCode::NOT_FOUND,
    }
}

/// Health check endpoint
async fn health_handler(State(state): State<AppState>) -> impl IntoResponse {
    Json(json!({
        "status": "ok",
        "version": crate::VERSION,
        "sessions": state.sessions.len(),
    }))
}
