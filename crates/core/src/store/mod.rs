//! SQLite-backed bookmark storage.
//!
//! This module provides persistent bookmark storage using SQLite
//! with async access via tokio-rusqlite. It supports:
//!
//! - Store-assigned, never reused durable identifiers
//! - Automatic schema migrations
//! - WAL mode for concurrent access

pub mod bookmarks;
pub mod connection;
pub mod migrations;

pub use crate::Error;

pub use bookmarks::BookmarkStore;
pub use connection::BookmarkDb;
