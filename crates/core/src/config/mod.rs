//! Application configuration with layered loading.
//!
//! This module provides configuration management using figment for layered
//! configuration loading from multiple sources:
//!
//! 1. Environment variables (BLOGMARK_*)
//! 2. TOML config file (if BLOGMARK_CONFIG_FILE set)
//! 3. Built-in defaults

use std::path::PathBuf;
use std::time::Duration;

use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};
use serde::{Deserialize, Serialize};

mod validation;

pub use validation::ConfigError;

/// Application configuration with layered loading.
///
/// Loading precedence (highest wins):
/// 1. Environment variables (BLOGMARK_*)
/// 2. TOML config file (if BLOGMARK_CONFIG_FILE set)
/// 3. Built-in defaults
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    /// Naver Open API client id, sent as `X-Naver-Client-Id`.
    ///
    /// Set via BLOGMARK_NAVER_CLIENT_ID environment variable.
    #[serde(default)]
    pub naver_client_id: Option<String>,

    /// Naver Open API client secret, sent as `X-Naver-Client-Secret`.
    ///
    /// Set via BLOGMARK_NAVER_CLIENT_SECRET environment variable.
    #[serde(default)]
    pub naver_client_secret: Option<String>,

    /// Base URL of the search API.
    ///
    /// Set via BLOGMARK_SEARCH_BASE_URL environment variable.
    #[serde(default = "default_search_base_url")]
    pub search_base_url: String,

    /// Path to SQLite bookmark database.
    ///
    /// Set via BLOGMARK_DB_PATH environment variable.
    #[serde(default = "default_db_path")]
    pub db_path: PathBuf,

    /// User-Agent string for HTTP requests.
    ///
    /// Set via BLOGMARK_USER_AGENT environment variable.
    #[serde(default = "default_user_agent")]
    pub user_agent: String,

    /// HTTP request timeout in milliseconds.
    ///
    /// Set via BLOGMARK_TIMEOUT_MS environment variable.
    #[serde(default = "default_timeout_ms")]
    pub timeout_ms: u64,

    /// Idle time after which a session's cached results are dropped.
    ///
    /// Set via BLOGMARK_SESSION_IDLE_SECS environment variable.
    #[serde(default = "default_session_idle_secs")]
    pub session_idle_secs: u64,
}

fn default_search_base_url() -> String {
    "https://openapi.naver.com/v1".into()
}

fn default_db_path() -> PathBuf {
    PathBuf::from("./blogmark.sqlite")
}

fn default_user_agent() -> String {
    "blogmark/0.1".into()
}

fn default_timeout_ms() -> u64 {
    10_000
}

fn default_session_idle_secs() -> u64 {
    1_800
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            naver_client_id: None,
            naver_client_secret: None,
            search_base_url: default_search_base_url(),
            db_path: default_db_path(),
            user_agent: default_user_agent(),
            timeout_ms: default_timeout_ms(),
            session_idle_secs: default_session_idle_secs(),
        }
    }
}

impl AppConfig {
    /// Timeout as Duration for use with reqwest/tokio.
    pub fn timeout(&self) -> Duration {
        Duration::from_millis(self.timeout_ms)
    }

    /// Session idle limit as Duration.
    pub fn session_idle(&self) -> Duration {
        Duration::from_secs(self.session_idle_secs)
    }

    /// Load configuration from all sources with layered precedence.
    ///
    /// Priority (highest wins):
    /// 1. Environment variables prefixed with `BLOGMARK_`
    /// 2. TOML file from `BLOGMARK_CONFIG_FILE` (if set)
    /// 3. Built-in defaults via `Default::default()`
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if:
    /// - Configuration file cannot be read
    /// - Environment variables cannot be parsed
    /// - Validation fails after loading
    pub fn load() -> Result<Self, ConfigError> {
        let mut figment = Figment::from(Serialized::defaults(Self::default()));

        if let Ok(config_path) = std::env::var("BLOGMARK_CONFIG_FILE") {
            figment = figment.merge(Toml::file(&config_path));
        }

        figment = figment.merge(
            Env::prefixed("BLOGMARK_")
                .ignore(&["CONFIG_FILE"])
                .map(|key| key.as_str().to_lowercase().into())
                .split("__"),
        );

        let config: Self = figment.extract().map_err(|e| ConfigError::LoadFailed(e.to_string()))?;

        config.validate()?;

        Ok(config)
    }

    /// Both Naver credentials, checked when the search client is built.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::Missing` naming the first credential that is unset or blank.
    pub fn require_naver_credentials(&self) -> Result<(&str, &str), ConfigError> {
        let client_id = non_blank(&self.naver_client_id).ok_or_else(|| ConfigError::Missing {
            field: "naver_client_id".into(),
            hint: "Set BLOGMARK_NAVER_CLIENT_ID environment variable".into(),
        })?;
        let client_secret = non_blank(&self.naver_client_secret).ok_or_else(|| ConfigError::Missing {
            field: "naver_client_secret".into(),
            hint: "Set BLOGMARK_NAVER_CLIENT_SECRET environment variable".into(),
        })?;

        Ok((client_id, client_secret))
    }
}

fn non_blank(value: &Option<String>) -> Option<&str> {
    value.as_deref().filter(|v| !v.trim().is_empty())
}
