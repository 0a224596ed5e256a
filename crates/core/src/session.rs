//! Per-session search result caches.
//!
//! A `ResultCache` holds one generation of search results for one session.
//! `SessionStore` maps session identifiers to their caches.

use std::collections::HashMap;
use std::sync::Arc;
use std::time::{Duration, Instant};

use tokio::sync::{Mutex, RwLock};

use crate::BookmarkRecord;

/// The latest search results of one session, keyed by transient id.
#[derive(Debug, Default)]
pub struct ResultCache {
    entries: RwLock<HashMap<String, BookmarkRecord>>,
}

impl ResultCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Install a new generation, discarding the previous one wholesale.
    ///
    /// The map is built before the write lock is taken, so readers only ever
    /// see a complete generation.
    pub async fn replace(&self, entries: &[BookmarkRecord]) {
        let generation: HashMap<String, BookmarkRecord> =
            entries.iter().map(|record| (record.id.clone(), record.clone())).collect();

        let mut current = self.entries.write().await;
        *current = generation;
    }

    /// Look up a record of the current generation.
    pub async fn get(&self, id: &str) -> Option<BookmarkRecord> {
        self.entries.read().await.get(id).cloned()
    }

    pub async fn len(&self) -> usize {
        self.entries.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.entries.read().await.is_empty()
    }
}

#[derive(Debug)]
struct SessionEntry {
    cache: Arc<ResultCache>,
    last_seen: Instant,
}

/// Session-scoped result caches.
///
/// Each session id gets its own `ResultCache`; sessions never observe each
/// other's results.
#[derive(Debug, Default)]
pub struct SessionStore {
    sessions: Mutex<HashMap<String, SessionEntry>>,
}

impl SessionStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// The session's cache, created empty on first use.
    pub async fn cache(&self, session_id: &str) -> Arc<ResultCache> {
        let mut sessions = self.sessions.lock().await;
        let entry = sessions
            .entry(session_id.to_string())
            .or_insert_with(|| {
                tracing::debug!(session = session_id, "session cache created");
                SessionEntry { cache: Arc::new(ResultCache::new()), last_seen: Instant::now() }
            });
        entry.last_seen = Instant::now();
        Arc::clone(&entry.cache)
    }

    /// Whether `cache` is still the one registered for the session.
    ///
    /// `end` and `evict_idle` only unregister a cache; a caller that fetched it
    /// earlier keeps a handle that no later request will see.
    pub async fn is_current(&self, session_id: &str, cache: &Arc<ResultCache>) -> bool {
        self.sessions
            .lock()
            .await
            .get(session_id)
            .is_some_and(|entry| Arc::ptr_eq(&entry.cache, cache))
    }

    /// Drop the session's cache. Returns whether the session existed.
    pub async fn end(&self, session_id: &str) -> bool {
        self.sessions.lock().await.remove(session_id).is_some()
    }

    /// Drop every session not accessed within `max_idle`.
    pub async fn evict_idle(&self, max_idle: Duration) -> usize {
        let mut sessions = self.sessions.lock().await;
        let before = sessions.len();
        sessions.retain(|_, entry| entry.last_seen.elapsed() < max_idle);
        let evicted = before - sessions.len();

        if evicted > 0 {
            tracing::debug!(evicted, remaining = sessions.len(), "evicted idle sessions");
        }
        evicted
    }

    pub async fn len(&self) -> usize {
        self.sessions.lock().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.sessions.lock().await.is_empty()
    }
}
