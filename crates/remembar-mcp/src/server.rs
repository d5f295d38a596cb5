//! MCP server implementation for the Remembar bridge.
//!
//! Uses the rmcp SDK's macro-based approach for defining tools. Store
//! failures are reported as ordinary tool output so the assistant can read
//! them back to the user.

use std::sync::Arc;

use rmcp::{
    handler::server::{router::tool::ToolRouter, wrapper::Parameters},
    model::*,
    tool, tool_handler, tool_router, ErrorData as McpError, ServerHandler,
};

use crate::adapter::Adapter;
use crate::tools::*;

/// MCP server for memory operations.
///
/// Wraps an [`Adapter`] and exposes its operations as MCP tools.
#[derive(Clone)]
pub struct RemembarServer {
    adapter: Arc<Adapter>,
    tool_router: ToolRouter<RemembarServer>,
}

#[tool_router]
impl RemembarServer {
    /// Create a new server around the given adapter.
    pub fn new(adapter: Arc<Adapter>) -> Self {
        Self {
            adapter,
            tool_router: Self::tool_router(),
        }
    }

    #[tool(
        name = "add_memory",
        description = "Add a memory or note to Remembar. Use this when the user wants to remember something important like locations of items, appointments, or any information they want to store."
    )]
    async fn add_memory(
        &self,
        Parameters(input): Parameters<AddMemoryInput>,
    ) -> Result<CallToolResult, McpError> {
        let text = self
            .adapter
            .store(
                &input.text,
                Some(input.priority.as_str()),
                input.tags,
                input.session_id.as_deref(),
            )
            .await;

        Ok(CallToolResult::success(vec![Content::text(text)]))
    }

    #[tool(
        name = "search_memory",
        description = "Search for memories and information in Remembar. Use this when the user asks questions like 'where are my keys?', 'when did I...?', or wants to recall any stored information."
    )]
    async fn search_memory(
        &self,
        Parameters(input): Parameters<SearchMemoryInput>,
    ) -> Result<CallToolResult, McpError> {
        let text = self
            .adapter
            .search(
                &input.query,
                Some(input.n_results),
                input.session_id.as_deref(),
            )
            .await;

        Ok(CallToolResult::success(vec![Content::text(text)]))
    }

    #[tool(
        name = "get_server_info",
        description = "Get information about the Remembar MCP server including version and connection status"
    )]
    async fn get_server_info(&self) -> Result<CallToolResult, McpError> {
        let status = self.adapter.status().await;
        let json = serde_json::to_string_pretty(&status)
            .map_err(|e| McpError::internal_error(e.to_string(), None))?;

        Ok(CallToolResult::success(vec![Content::text(json)]))
    }

    #[tool(
        name = "track_item",
        description = "Remember where a physical item was put, e.g. 'I left my glasses on the bedside table'."
    )]
    async fn track_item(
        &self,
        Parameters(input): Parameters<TrackItemInput>,
    ) -> Result<CallToolResult, McpError> {
        let text = self
            .adapter
            .track_item(
                &input.item_name,
                &input.location,
                input.description.as_deref(),
                input.session_id.as_deref(),
            )
            .await;

        Ok(CallToolResult::success(vec![Content::text(text)]))
    }

    #[tool(
        name = "find_item",
        description = "Find where a tracked item was last put. Use this for questions like 'where did I leave my glasses?'."
    )]
    async fn find_item(
        &self,
        Parameters(input): Parameters<FindItemInput>,
    ) -> Result<CallToolResult, McpError> {
        let text = self
            .adapter
            .find_item(&input.item_name, input.session_id.as_deref())
            .await;
        Ok(CallToolResult::success(vec![Content::text(text)]))
    }
}

#[tool_handler]
impl ServerHandler for RemembarServer {
    fn get_info(&self) -> ServerInfo {
        ServerInfo {
            protocol_version: ProtocolVersion::V_2024_11_05,
            capabilities: ServerCapabilities::builder().enable_tools().build(),
            server_info: Implementation::from_build_env(),
            instructions: Some(
                "Remembar - a memory assistant. Use add_memory to store notes, \
                 search_memory to recall them, track_item and find_item for the \
                 whereabouts of everyday objects, and get_server_info to check \
                 that the memory database is reachable."
                    .to_string(),
            ),
        }
    }
}
