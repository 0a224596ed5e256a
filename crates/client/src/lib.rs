//! Client code for blogmark.
//!
//! This crate provides the Naver blog search client, the production
//! implementation of `blogmark_core::SearchProvider`.

pub mod naver;

pub use naver::{NaverClient, NaverConfig, NaverError, SearchRequest};
