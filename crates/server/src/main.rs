//! blogmark server entry point.
//!
//! Loads configuration, opens the bookmark database, wires the Naver client
//! into the search workflow, and serves the MCP tools on stdio.
//! Logging goes to stderr to avoid interfering with the JSON-RPC protocol on stdout.

use std::sync::Arc;
use std::time::Duration;

use anyhow::{Context, Result};
use blogmark_client::{NaverClient, NaverConfig};
use blogmark_core::{AppConfig, BookmarkDb, SearchWorkflow, SessionStore};
use rmcp::service::serve_server;
use rmcp::transport::io::stdio;
use tracing_subscriber::EnvFilter;

mod handler;
mod tools;

/// How often idle sessions are swept.
const SESSION_SWEEP_INTERVAL: Duration = Duration::from_secs(60);

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .json()
        .init();

    let config = AppConfig::load()?;

    let client = NaverClient::new(NaverConfig::from_app_config(&config)?)?;
    let db = BookmarkDb::open(&config.db_path)
        .await
        .map_err(|e| anyhow::anyhow!(e.to_string()))
        .with_context(|| format!("opening bookmark database at {}", config.db_path.display()))?;

    let workflow = Arc::new(SearchWorkflow::new(Arc::new(client), Arc::new(db)));
    let sessions = Arc::new(SessionStore::new());

    let sweeper = Arc::clone(&sessions);
    let max_idle = config.session_idle();
    tokio::spawn(async move {
        let mut interval = tokio::time::interval(SESSION_SWEEP_INTERVAL);
        loop {
            interval.tick().await;
            sweeper.evict_idle(max_idle).await;
        }
    });

    tracing::info!(db_path = %config.db_path.display(), "Starting blogmark server on stdio transport");

    let handler = handler::BlogmarkServer::new(workflow, sessions);
    let transport = stdio();
    let server = serve_server(handler, transport).await?;

    server.waiting().await?;

    Ok(())
}
