//! bookmark_create and bookmark_view tool implementations.

use blogmark_core::{BookmarkRecord, Error, SearchWorkflow, SessionStore};
use rmcp::{ErrorData as McpError, model::CallToolResult};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use super::{default_session, json_result, log_tool_error, require_session};

/// Parameters for the bookmark_create tool.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct BookmarkCreateParams {
    /// Session that ran the search (default "default").
    #[serde(default = "default_session")]
    pub session: String,

    /// Transient id of a result from the session's latest blog_search.
    pub id: String,
}

/// Output from the bookmark_create tool.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct BookmarkCreateOutput {
    /// Durable id for bookmark_view.
    pub id: String,
}

/// Parameters for the bookmark_view tool.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct BookmarkViewParams {
    /// Durable id returned by bookmark_create.
    pub id: String,
}

/// Output from the bookmark_view tool.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct BookmarkViewOutput {
    pub bookmark: BookmarkRecord,
}

pub async fn create(
    workflow: &SearchWorkflow, sessions: &SessionStore, params: BookmarkCreateParams,
) -> Result<BookmarkCreateOutput, Error> {
    let session = require_session(&params.session)?;
    let cache = sessions.cache(session).await;
    let id = workflow.handle_bookmark(&cache, &params.id).await?;

    Ok(BookmarkCreateOutput { id })
}

/// Implementation of the bookmark_create tool.
pub async fn create_impl(
    workflow: &SearchWorkflow, sessions: &SessionStore, params: BookmarkCreateParams,
) -> Result<CallToolResult, McpError> {
    let output = create(workflow, sessions, params)
        .await
        .inspect_err(|e| log_tool_error("bookmark_create", e))?;
    json_result(&output)
}

/// Implementation of the bookmark_view tool.
pub async fn view_impl(workflow: &SearchWorkflow, params: BookmarkViewParams) -> Result<CallToolResult, McpError> {
    let bookmark = workflow
        .handle_view(&params.id)
        .await
        .inspect_err(|e| log_tool_error("bookmark_view", e))?;
    json_result(&BookmarkViewOutput { bookmark })
}
