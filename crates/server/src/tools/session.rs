//! session_end tool implementation.
//!
//! Drops a session's cached search results.

use blogmark_core::SessionStore;
use rmcp::{ErrorData as McpError, model::CallToolResult};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use super::{default_session, json_result, log_tool_error, require_session};

/// Parameters for the session_end tool.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct SessionEndParams {
    /// Session to end (default "default").
    #[serde(default = "default_session")]
    pub session: String,
}

/// Output from the session_end tool.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct SessionEndOutput {
    /// Whether the session had cached results.
    pub ended: bool,
}

/// Implementation of the session_end tool.
pub async fn end_impl(sessions: &SessionStore, params: SessionEndParams) -> Result<CallToolResult, McpError> {
    let session = require_session(&params.session).inspect_err(|e| log_tool_error("session_end", e))?;
    let ended = sessions.end(session).await;
    tracing::debug!(session, ended, "session ended");

    json_result(&SessionEndOutput { ended })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tools::blog_search::{self, BlogSearchParams};
    use crate::tools::bookmark::{self, BookmarkCreateParams};
    use crate::tools::testing::fixture;
    use blogmark_core::Error;

    #[tokio::test]
    async fn test_end_invalidates_results() {
        let (workflow, sessions) = fixture().await;
        let search = BlogSearchParams { session: "s1".into(), keyword: Some("coffee".into()) };
        let results = blog_search::run(&workflow, &sessions, search).await.unwrap().results;

        let call_result = end_impl(&sessions, SessionEndParams { session: "s1".into() }).await.unwrap();
        assert!(!call_result.is_error.unwrap_or(false));
        assert!(sessions.is_empty().await);

        let params = BookmarkCreateParams { session: "s1".into(), id: results[0].id.clone() };
        let result = bookmark::create(&workflow, &sessions, params).await;
        assert!(matches!(result, Err(Error::InvalidReference(_))));
    }
}
