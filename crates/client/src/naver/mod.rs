//! Naver blog search API client.
//!
//! Provides a client for the Naver Open API blog search with request
//! validation and response normalization.
//!
//! ### Specification
//!
//! - **Endpoint**: `https://openapi.naver.com/v1/search/blog.json`
//! - **Authentication**: `X-Naver-Client-Id` and `X-Naver-Client-Secret` headers.
//! - **Attempts**: One request per search. No retries, no caching.
//! - **Normalization**: Each item becomes a `BookmarkRecord` with a fresh transient id.

pub mod error;
pub mod request;
pub mod response;

pub use error::NaverError;
pub use request::SearchRequest;
pub use response::{NaverApiResponse, NaverItem};

use async_trait::async_trait;
use blogmark_core::{AppConfig, BookmarkRecord, ConfigError, SearchProvider};
use reqwest::header;
use std::sync::Arc;
use std::time::{Duration, Instant};

/// Default base URL for the Naver Open API.
const DEFAULT_BASE_URL: &str = "https://openapi.naver.com/v1";

/// Default request timeout.
const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);

/// Default user agent.
const DEFAULT_USER_AGENT: &str = "blogmark/0.1";

/// Naver API client configuration.
#[derive(Debug, Clone)]
pub struct NaverConfig {
    /// Sent as `X-Naver-Client-Id`.
    pub client_id: String,
    /// Sent as `X-Naver-Client-Secret`.
    pub client_secret: String,
    /// Base URL (default: https://openapi.naver.com/v1).
    pub base_url: String,
    /// Request timeout (default: 10s).
    pub timeout: Duration,
    /// User-agent string (default: blogmark/0.x).
    pub user_agent: String,
}

impl Default for NaverConfig {
    fn default() -> Self {
        Self {
            client_id: String::new(),
            client_secret: String::new(),
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout: DEFAULT_TIMEOUT,
            user_agent: DEFAULT_USER_AGENT.to_string(),
        }
    }
}

impl NaverConfig {
    /// Build from the application configuration.
    pub fn from_app_config(config: &AppConfig) -> Result<Self, ConfigError> {
        let (client_id, client_secret) = config.require_naver_credentials()?;

        Ok(Self {
            client_id: client_id.to_string(),
            client_secret: client_secret.to_string(),
            base_url: config.search_base_url.clone(),
            timeout: config.timeout(),
            user_agent: config.user_agent.clone(),
        })
    }
}

/// Naver blog search API client.
#[derive(Debug, Clone)]
pub struct NaverClient {
    http: reqwest::Client,
    config: NaverConfig,
}

impl NaverClient {
    /// Create a new Naver client with the given configuration.
    pub fn new(config: NaverConfig) -> Result<Self, NaverError> {
        if config.client_id.is_empty() {
            return Err(NaverError::MissingCredentials("client_id"));
        }
        if config.client_secret.is_empty() {
            return Err(NaverError::MissingCredentials("client_secret"));
        }

        let http = reqwest::Client::builder()
            .timeout(config.timeout)
            .build()
            .map_err(|e| NaverError::Network(Arc::new(e)))?;

        Ok(Self { http, config })
    }

    /// Execute a blog search query.
    ///
    /// Makes a single request; any transport, status, or body problem is an error.
    pub async fn search_blogs(&self, req: SearchRequest) -> Result<NaverApiResponse, NaverError> {
        req.validate()?;

        let start = Instant::now();
        let url = format!("{}/search/blog.json", self.config.base_url.trim_end_matches('/'));

        tracing::debug!("searching Naver API: query={}", req.query);

        let http_response = self
            .http
            .get(&url)
            .header("X-Naver-Client-Id", &self.config.client_id)
            .header("X-Naver-Client-Secret", &self.config.client_secret)
            .header(header::ACCEPT, "application/json")
            .header(header::USER_AGENT, &self.config.user_agent)
            .query(&req)
            .send()
            .await?;

        let status = http_response.status();
        tracing::debug!("Naver API response status: {}", status);

        if status == 401 || status == 403 {
            return Err(NaverError::AuthError);
        }

        if status == 429 {
            return Err(NaverError::RateLimited);
        }

        if !status.is_success() {
            return Err(NaverError::HttpError { status: status.as_u16() });
        }

        let bytes = http_response.bytes().await?;
        let api_response: NaverApiResponse =
            serde_json::from_slice(&bytes).map_err(|e| NaverError::Parse(e.to_string()))?;

        tracing::debug!(
            "search completed in {:?}, {} items of {} total",
            start.elapsed(),
            api_response.items.len(),
            api_response.total
        );

        Ok(api_response)
    }
}

#[async_trait]
impl SearchProvider for NaverClient {
    async fn search(&self, keyword: &str) -> Result<Vec<BookmarkRecord>, blogmark_core::Error> {
        let response = self.search_blogs(SearchRequest::new(keyword)).await?;
        Ok(response.into_records())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use blogmark_core::Error;
    use serde_json::json;
    use wiremock::matchers::{header, method, path, query_param};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn client_for(server: &MockServer) -> NaverClient {
        NaverClient::new(NaverConfig {
            client_id: "test-id".into(),
            client_secret: "test-secret".into(),
            base_url: server.uri(),
            timeout: Duration::from_secs(5),
            ..Default::default()
        })
        .unwrap()
    }

    fn blog_body() -> serde_json::Value {
        json!({
            "lastBuildDate": "Mon, 15 Jan 2024 10:00:00 +0900",
            "total": 2,
            "items": [
                {
                    "title": "Morning coffee",
                    "link": "https://blog.naver.com/a/1",
                    "description": "Beans and grinders",
                    "postdate": "20240110"
                },
                { "title": "Tea break" }
            ]
        })
    }

    #[test]
    fn test_client_new_missing_credentials() {
        let result = NaverClient::new(NaverConfig::default());
        assert!(matches!(result, Err(NaverError::MissingCredentials("client_id"))));

        let result = NaverClient::new(NaverConfig { client_id: "id".into(), ..Default::default() });
        assert!(matches!(result, Err(NaverError::MissingCredentials("client_secret"))));
    }

    #[test]
    fn test_config_from_app_config() {
        let app = AppConfig {
            naver_client_id: Some("id".into()),
            naver_client_secret: Some("secret".into()),
            search_base_url: "http://localhost:9000".into(),
            timeout_ms: 2_500,
            ..Default::default()
        };

        let config = NaverConfig::from_app_config(&app).unwrap();
        assert_eq!(config.client_id, "id");
        assert_eq!(config.client_secret, "secret");
        assert_eq!(config.base_url, "http://localhost:9000");
        assert_eq!(config.timeout, Duration::from_millis(2_500));

        assert!(NaverConfig::from_app_config(&AppConfig::default()).is_err());
    }

    #[tokio::test]
    async fn test_search_sends_credentials_and_encoded_query() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/search/blog.json"))
            .and(query_param("query", "coffee & tea? 100%"))
            .and(header("X-Naver-Client-Id", "test-id"))
            .and(header("X-Naver-Client-Secret", "test-secret"))
            .respond_with(ResponseTemplate::new(200).set_body_json(blog_body()))
            .expect(1)
            .mount(&server)
            .await;

        let records = client_for(&server).search("coffee & tea? 100%").await.unwrap();

        assert_eq!(records.len(), 2);
        assert_eq!(records[0].title, "Morning coffee");
        assert_eq!(records[0].published_date, "20240110");
        assert_eq!(records[1].link, "");
        assert_ne!(records[0].id, records[1].id);
    }

    #[tokio::test]
    async fn test_search_auth_error() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(401))
            .mount(&server)
            .await;

        let client = client_for(&server);
        let result = client.search_blogs(SearchRequest::new("coffee")).await;
        assert!(matches!(result, Err(NaverError::AuthError)));

        let result = client.search("coffee").await;
        assert!(matches!(result, Err(Error::ExternalService(msg)) if msg.contains("authentication")));
    }

    #[tokio::test]
    async fn test_search_rate_limited() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(429))
            .expect(1)
            .mount(&server)
            .await;

        let result = client_for(&server).search_blogs(SearchRequest::new("coffee")).await;
        assert!(matches!(result, Err(NaverError::RateLimited)));
    }

    #[tokio::test]
    async fn test_search_server_error_is_not_retried() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(500))
            .expect(1)
            .mount(&server)
            .await;

        let result = client_for(&server).search("coffee").await;
        assert!(matches!(result, Err(Error::ExternalService(msg)) if msg.contains("500")));
    }

    #[tokio::test]
    async fn test_search_malformed_body() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(200).set_body_string("<html>not json</html>"))
            .mount(&server)
            .await;

        let result = client_for(&server).search_blogs(SearchRequest::new("coffee")).await;
        assert!(matches!(result, Err(NaverError::Parse(_))));
    }

    #[tokio::test]
    async fn test_search_body_without_items() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "total": 0 })))
            .mount(&server)
            .await;

        let result = client_for(&server).search("coffee").await;
        assert!(matches!(result, Err(Error::ExternalService(_))));
    }

    #[tokio::test]
    async fn test_search_unreachable() {
        let client = NaverClient::new(NaverConfig {
            client_id: "id".into(),
            client_secret: "secret".into(),
            base_url: "http://127.0.0.1:1".into(),
            timeout: Duration::from_secs(2),
            ..Default::default()
        })
        .unwrap();

        let result = client.search("coffee").await;
        assert!(matches!(result, Err(Error::ExternalService(_))));
    }

    #[tokio::test]
    async fn test_empty_query_rejected_before_request() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(200).set_body_json(blog_body()))
            .expect(0)
            .mount(&server)
            .await;

        let result = client_for(&server).search_blogs(SearchRequest::new(" ")).await;
        assert!(matches!(result, Err(NaverError::InvalidQuery(_))));
    }

    #[tokio::test]
    async fn test_long_query_is_sent_upstream() {
        let keyword = "a".repeat(1_000);
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/search/blog.json"))
            .and(query_param("query", keyword.as_str()))
            .respond_with(ResponseTemplate::new(200).set_body_json(blog_body()))
            .expect(1)
            .mount(&server)
            .await;

        let records = client_for(&server).search(&keyword).await.unwrap();
        assert_eq!(records.len(), 2);
    }
}
