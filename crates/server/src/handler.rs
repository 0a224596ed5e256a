//! MCP server handler implementation.
//!
//! This module defines the main server handler that
//! routes tool calls to the appropriate implementations.
use std::sync::Arc;

use crate::tools::{
    BlogSearchParams, BookmarkCreateParams, BookmarkViewParams, SessionEndParams, create_impl, end_impl, search_impl,
    view_impl,
};
use blogmark_core::{SearchWorkflow, SessionStore};

use rmcp::{
    ErrorData as McpError, ServerHandler,
    handler::server::{
        tool::{ToolCallContext, ToolRouter},
        wrapper::Parameters,
    },
    model::{
        CallToolRequestParam, CallToolResult, Implementation, ListToolsResult, PaginatedRequestParam, ProtocolVersion,
        ServerCapabilities, ServerInfo,
    },
    service::{RequestContext, RoleServer},
    tool, tool_router,
};

/// The main MCP server handler for blogmark.
#[derive(Clone)]
pub struct BlogmarkServer {
    workflow: Arc<SearchWorkflow>,
    sessions: Arc<SessionStore>,
    tool_router: ToolRouter<Self>,
}

/// Tool router implementation using the #[tool_router] macro.
///
/// This macro generates the routing logic that maps tool names to handler methods.
#[tool_router]
impl BlogmarkServer {
    /// Create a new server handler.
    pub fn new(workflow: Arc<SearchWorkflow>, sessions: Arc<SessionStore>) -> Self {
        Self { workflow, sessions, tool_router: Self::tool_router() }
    }

    /// Search blogs by keyword.
    ///
    /// Results replace the session's cached results; their ids can be passed to bookmark_create.
    #[tool(
        description = "Search blogs by keyword. Returns results with transient ids valid until the session's next search."
    )]
    async fn blog_search(&self, params: Parameters<BlogSearchParams>) -> Result<CallToolResult, McpError> {
        search_impl(&self.workflow, &self.sessions, params.0).await
    }

    /// Persist one result of the session's latest search.
    #[tool(description = "Bookmark a result of the latest blog_search in this session. Returns a durable id.")]
    async fn bookmark_create(&self, params: Parameters<BookmarkCreateParams>) -> Result<CallToolResult, McpError> {
        create_impl(&self.workflow, &self.sessions, params.0).await
    }

    /// Read a stored bookmark.
    #[tool(description = "Fetch a stored bookmark by the durable id returned from bookmark_create.")]
    async fn bookmark_view(&self, params: Parameters<BookmarkViewParams>) -> Result<CallToolResult, McpError> {
        view_impl(&self.workflow, params.0).await
    }

    /// Drop the session's cached results.
    #[tool(description = "End a session, discarding its cached search results.")]
    async fn session_end(&self, params: Parameters<SessionEndParams>) -> Result<CallToolResult, McpError> {
        end_impl(&self.sessions, params.0).await
    }
}

impl ServerHandler for BlogmarkServer {
    fn get_info(&self) -> ServerInfo {
        ServerInfo {
            server_info: Implementation {
                name: "blogmark".into(),
                version: env!("CARGO_PKG_VERSION").into(),
                ..Default::default()
            },
            protocol_version: ProtocolVersion::LATEST,
            capabilities: ServerCapabilities::builder().enable_tools().build(),
            ..Default::default()
        }
    }

    async fn list_tools(
        &self, _request: Option<PaginatedRequestParam>, _context: RequestContext<RoleServer>,
    ) -> Result<ListToolsResult, rmcp::model::ErrorData> {
        Ok(ListToolsResult { meta: None, tools: self.tool_router.list_all(), next_cursor: None })
    }

    async fn call_tool(
        &self, request: CallToolRequestParam, context: RequestContext<RoleServer>,
    ) -> Result<CallToolResult, rmcp::model::ErrorData> {
        self.tool_router
            .call(ToolCallContext::new(self, request, context))
            .await
    }
}
