//! blog_search tool implementation.
//!
//! Searches blogs by keyword and caches the results in the caller's session.

use blogmark_core::{BookmarkRecord, Error, SearchWorkflow, SessionStore};
use rmcp::{ErrorData as McpError, model::CallToolResult};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use super::{default_session, json_result, log_tool_error, require_session};

/// Input parameters for blog_search tool.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct BlogSearchParams {
    /// Session whose cached results are replaced (default "default").
    #[serde(default = "default_session")]
    pub session: String,

    /// Search keyword. When absent or blank no search is made.
    #[serde(default)]
    pub keyword: Option<String>,
}

/// Output structure for blog_search tool.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct BlogSearchOutput {
    /// Whether a search was actually made.
    pub searched: bool,
    /// The search results; each `id` is a transient id for bookmark_create.
    pub results: Vec<BookmarkRecord>,
}

pub async fn run(
    workflow: &SearchWorkflow, sessions: &SessionStore, params: BlogSearchParams,
) -> Result<BlogSearchOutput, Error> {
    let session = require_session(&params.session)?;
    let searched = params.keyword.as_deref().is_some_and(|k| !k.trim().is_empty());

    let cache = sessions.cache(session).await;
    let results = workflow.handle_search(&cache, params.keyword.as_deref()).await?;

    // Results cached after the session ended could never be bookmarked.
    if searched && !sessions.is_current(session, &cache).await {
        return Err(Error::InvalidInput(format!("session {session} ended during the search")));
    }

    Ok(BlogSearchOutput { searched, results })
}

/// Implementation of the blog_search tool.
pub async fn search_impl(
    workflow: &SearchWorkflow, sessions: &SessionStore, params: BlogSearchParams,
) -> Result<CallToolResult, McpError> {
    let output = run(workflow, sessions, params)
        .await
        .inspect_err(|e| log_tool_error("blog_search", e))?;
    json_result(&output)
}
