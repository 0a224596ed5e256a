//! Core types and shared functionality for blogmark.
//!
//! This crate provides:
//! - The `BookmarkRecord` domain type
//! - Per-session result caches
//! - Bookmark storage with SQLite backend
//! - The search/bookmark/view workflow
//! - Unified error types
//! - Configuration structures

pub mod config;
pub mod error;
pub mod model;
pub mod provider;
pub mod session;
pub mod store;
pub mod workflow;

pub use config::{AppConfig, ConfigError};
pub use error::Error;
pub use model::BookmarkRecord;
pub use provider::SearchProvider;
pub use session::{ResultCache, SessionStore};
pub use store::{BookmarkDb, BookmarkStore};
pub use workflow::SearchWorkflow;
