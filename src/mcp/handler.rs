//! Request dispatch for the hotels MCP server

use async_trait::async_trait;
use serde::de::DeserializeOwned;
use serde_json::{json, Value};

use super::protocol::{
    codes, methods, InitializeResult, McpHandler, McpRequest, McpResponse, ToolCallResult,
};
use super::tools::{get_tool_definitions, GET_HOTELS, SEARCH_DESTINATIONS};
use crate::error::{HotelsError, Result};
use crate::search::HotelSearch;
use crate::types::{GetHotelsInput, SearchDestinationsInput};

/// MCP request handler exposing the search tools
#[derive(Clone)]
pub struct HotelsHandler {
    search: HotelSearch,
}

impl HotelsHandler {
    pub fn new(search: HotelSearch) -> Self {
        Self { search }
    }

    /// Run one tool. Upstream problems are already folded into the text;
    /// only bad arguments and unknown tools produce an error result.
    pub async fn handle_tool_call(&self, name: &str, arguments: Value) -> ToolCallResult {
        match self.dispatch(name, arguments).await {
            Ok(text) => ToolCallResult::text(text),
            Err(e) => {
                tracing::warn!("Tool call {} rejected: {}", name, e);
                ToolCallResult::error(e.to_string())
            }
        }
    }

    async fn dispatch(&self, name: &str, arguments: Value) -> Result<String> {
        match name {
            SEARCH_DESTINATIONS => {
                let input: SearchDestinationsInput = parse_arguments(arguments)?;
                Ok(self.search.search_destinations(&input.query).await)
            }
            GET_HOTELS => {
                let input: GetHotelsInput = parse_arguments(arguments)?;
                Ok(self
                    .search
                    .get_hotels(
                        &input.destination_id,
                        &input.checkin_date,
                        &input.checkout_date,
                        input.adults,
                    )
                    .await)
            }
            other => Err(HotelsError::ToolNotFound(other.to_string())),
        }
    }
}

fn parse_arguments<T: DeserializeOwned>(arguments: Value) -> Result<T> {
    let arguments = if arguments.is_null() {
        json!({})
    } else {
        arguments
    };
    serde_json::from_value(arguments).map_err(|e| HotelsError::InvalidInput(e.to_string()))
}

#[async_trait]
impl McpHandler for HotelsHandler {
    async fn handle_request(&self, request: McpRequest) -> Option<McpResponse> {
        if request.jsonrpc != "2.0" {
            return Some(McpResponse::error(
                request.id,
                codes::INVALID_REQUEST,
                format!("Invalid JSON-RPC version: {}", request.jsonrpc),
            ));
        }

        if request.is_notification() {
            tracing::debug!("Received notification: {}", request.method);
            return None;
        }

        let response = match request.method.as_str() {
            methods::INITIALIZE => {
                let result = InitializeResult::default();
                McpResponse::success(request.id, json!(result))
            }
            methods::PING => McpResponse::success(request.id, json!({})),
            methods::LIST_TOOLS => {
                let tools = get_tool_definitions();
                McpResponse::success(request.id, json!({ "tools": tools }))
            }
            methods::CALL_TOOL => {
                let Some(name) = request.params.get("name").and_then(|v| v.as_str()) else {
                    return Some(McpResponse::from_error(
                        request.id,
                        HotelsError::InvalidInput("missing tool name".to_string()),
                    ));
                };
                let arguments = request
                    .params
                    .get("arguments")
                    .cloned()
                    .unwrap_or(json!({}));

                let result = self.handle_tool_call(name, arguments).await;
                McpResponse::success(request.id, json!(result))
            }
            _ => McpResponse::error(
                request.id,
                codes::METHOD_NOT_FOUND,
                format!("Method not found: {}", request.method),
            ),
        };

        Some(response)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::search::tests::StubApi;
    use pretty_assertions::assert_eq;

    fn handler_with(api: std::sync::Arc<StubApi>) -> HotelsHandler {
        HotelsHandler::new(HotelSearch::new(api))
    }

    fn request(id: i64, method: &str, params: Value) -> McpRequest {
        McpRequest {
            jsonrpc: "2.0".to_string(),
            id: Some(json!(id)),
            method: method.to_string(),
            params,
        }
    }

    #[tokio::test]
    async fn test_initialize() {
        let handler = handler_with(StubApi::ok(json!([])));
        let resp = handler
            .handle_request(request(1, methods::INITIALIZE, json!({})))
            .await
            .unwrap();
        let result = resp.result.unwrap();
        assert_eq!(result["serverInfo"]["name"], "hotels");
        assert_eq!(resp.id, Some(json!(1)));
    }

    #[tokio::test]
    async fn test_notification_has_no_response() {
        let handler = handler_with(StubApi::ok(json!([])));
        let req = McpRequest {
            jsonrpc: "2.0".to_string(),
            id: None,
            method: methods::INITIALIZED.to_string(),
            params: Value::Null,
        };
        assert!(handler.handle_request(req).await.is_none());
    }

    #[tokio::test]
    async fn test_list_tools() {
        let handler = handler_with(StubApi::ok(json!([])));
        let resp = handler
            .handle_request(request(2, methods::LIST_TOOLS, Value::Null))
            .await
            .unwrap();
        let tools = resp.result.unwrap()["tools"].as_array().unwrap().clone();
        assert_eq!(tools.len(), 2);
        assert_eq!(tools[0]["name"], "search_destinations");
        assert!(tools[1]["inputSchema"]["required"].is_array());
    }

    #[tokio::test]
    async fn test_call_search_destinations() {
        let handler = handler_with(StubApi::ok(json!([])));
        let resp = handler
            .handle_request(request(
                3,
                methods::CALL_TOOL,
                json!({"name": "search_destinations", "arguments": {"query": "Atlantis"}}),
            ))
            .await
            .unwrap();
        let result = resp.result.unwrap();
        assert_eq!(
            result,
            json!({"content": [{"type": "text", "text": "No destinations found matching your query."}]})
        );
    }

    #[tokio::test]
    async fn test_call_get_hotels_defaults_adults() {
        let api = StubApi::ok(json!({"result": [{"hotel_name": "Hotel X", "url": "https://x.test/h"}]}));
        let handler = handler_with(api.clone());

        let result = handler
            .handle_tool_call(
                "get_hotels",
                json!({
                    "destination_id": "-1456928",
                    "checkin_date": "2024-06-01",
                    "checkout_date": "2024-06-05"
                }),
            )
            .await;

        assert!(result.is_error.is_none());
        assert!(result.text_content().contains("&group_adults=2&"));
        assert_eq!(api.calls.lock()[0].1[0].1.to_string(), "2");
    }

    #[tokio::test]
    async fn test_call_with_missing_argument() {
        let handler = handler_with(StubApi::ok(json!([])));
        let result = handler
            .handle_tool_call("get_hotels", json!({"destination_id": "1"}))
            .await;
        assert_eq!(result.is_error, Some(true));
        assert!(result.text_content().starts_with("Invalid input:"));
    }

    #[tokio::test]
    async fn test_adults_forwarded_unchecked() {
        let api = StubApi::ok(json!({"result": []}));
        let handler = handler_with(api.clone());
        let result = handler
            .handle_tool_call(
                "get_hotels",
                json!({
                    "destination_id": "1",
                    "checkin_date": "2024-06-01",
                    "checkout_date": "2024-06-05",
                    "adults": 0
                }),
            )
            .await;
        assert!(result.is_error.is_none());
        assert_eq!(result.text_content(), "No hotels found for these dates.");
        assert_eq!(api.calls.lock()[0].1[0].1.to_string(), "0");
    }

    #[tokio::test]
    async fn test_unknown_tool() {
        let handler = handler_with(StubApi::ok(json!([])));
        let result = handler.handle_tool_call("book_hotel", json!({})).await;
        assert_eq!(result.is_error, Some(true));
        assert_eq!(result.text_content(), "Unknown tool: book_hotel");
    }

    #[tokio::test]
    async fn test_unknown_method() {
        let handler = handler_with(StubApi::ok(json!([])));
        let resp = handler
            .handle_request(request(9, "resources/list", json!({})))
            .await
            .unwrap();
        assert_eq!(resp.error.unwrap().code, codes::METHOD_NOT_FOUND);
    }

    #[tokio::test]
    async fn test_missing_tool_name() {
        let handler = handler_with(StubApi::ok(json!([])));
        let resp = handler
            .handle_request(request(10, methods::CALL_TOOL, json!({"arguments": {}})))
            .await
            .unwrap();
        assert_eq!(resp.error.unwrap().code, codes::INVALID_PARAMS);
    }
}
