//! Naver blog search request parameters and validation.

use serde::Serialize;

/// Query parameters for the blog search endpoint.
///
/// Serialized as a URL query string, so spaces and punctuation in the keyword
/// are percent-encoded.
#[derive(Debug, Clone, Serialize, Default)]
pub struct SearchRequest {
    /// Search keyword (required).
    pub query: String,
}

impl SearchRequest {
    pub fn new(query: impl Into<String>) -> Self {
        Self { query: query.into() }
    }

    /// Validate the search request parameters.
    ///
    /// Only a blank query is rejected locally; any other limit is the API's to enforce.
    pub fn validate(&self) -> Result<(), crate::naver::NaverError> {
        use crate::naver::NaverError;

        if self.query.trim().is_empty() {
            return Err(NaverError::InvalidQuery("query cannot be empty".to_string()));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use crate::NaverError;

    use super::*;

    #[test]
    fn test_valid_request() {
        assert!(SearchRequest::new("강아지 사료").validate().is_ok());
    }

    #[test]
    fn test_empty_query() {
        assert!(matches!(SearchRequest::new("").validate(), Err(NaverError::InvalidQuery(_))));
        assert!(matches!(SearchRequest::new("  ").validate(), Err(NaverError::InvalidQuery(_))));
    }

    #[test]
    fn test_long_query_left_to_upstream() {
        assert!(SearchRequest::new("가".repeat(2_000)).validate().is_ok());
    }
}
