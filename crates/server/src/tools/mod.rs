//! MCP tool implementations.
//!
//! This module contains all tools exposed by the blogmark server.

pub mod blog_search;
pub mod bookmark;
pub mod session;

pub use blog_search::{BlogSearchParams, search_impl};
pub use bookmark::{BookmarkCreateParams, BookmarkViewParams, create_impl, view_impl};
pub use session::{SessionEndParams, end_impl};

use blogmark_core::Error;
use rmcp::{
    ErrorData as McpError,
    model::{CallToolResult, Content},
};
use serde::Serialize;

/// Session used when the caller does not name one.
pub const DEFAULT_SESSION: &str = "default";

pub(crate) fn default_session() -> String {
    DEFAULT_SESSION.into()
}

pub(crate) fn require_session(session: &str) -> Result<&str, Error> {
    let session = session.trim();
    if session.is_empty() {
        return Err(Error::InvalidInput("session cannot be blank".into()));
    }
    Ok(session)
}

/// Log a failed tool call: caller mistakes at debug, service faults at warn.
pub(crate) fn log_tool_error(tool: &str, err: &Error) {
    if err.is_client_error() {
        tracing::debug!(tool, error = %err, "tool call rejected");
    } else {
        tracing::warn!(tool, error = %err, "tool call failed");
    }
}

/// Serialize a tool output as pretty JSON text content.
pub(crate) fn json_result<T: Serialize>(output: &T) -> Result<CallToolResult, McpError> {
    let json = serde_json::to_string_pretty(output)
        .map_err(|e| Error::InvalidInput(format!("failed to serialize output: {e}")))?;

    Ok(CallToolResult::success(vec![Content::text(json)]))
}
