//! Search, bookmark, and view orchestration.
//!
//! The workflow owns no state of its own: the session's `ResultCache` is
//! passed in on every call, and the provider and store are injected once.

use std::sync::Arc;

use crate::{BookmarkRecord, BookmarkStore, Error, ResultCache, SearchProvider};

/// Ties the search provider, a session's result cache, and bookmark storage together.
#[derive(Clone)]
pub struct SearchWorkflow {
    provider: Arc<dyn SearchProvider>,
    store: Arc<dyn BookmarkStore>,
}

impl SearchWorkflow {
    pub fn new(provider: Arc<dyn SearchProvider>, store: Arc<dyn BookmarkStore>) -> Self {
        Self { provider, store }
    }

    /// Search and make the results the session's current cache generation.
    ///
    /// An absent or blank keyword returns an empty list without calling the
    /// provider or touching the cache. A provider failure leaves the cache
    /// as it was.
    pub async fn handle_search(
        &self, cache: &ResultCache, keyword: Option<&str>,
    ) -> Result<Vec<BookmarkRecord>, Error> {
        let Some(keyword) = keyword.map(str::trim).filter(|k| !k.is_empty()) else {
            tracing::debug!("no keyword given, skipping search");
            return Ok(Vec::new());
        };

        tracing::info!(keyword, "searching");
        let results = self.provider.search(keyword).await?;
        cache.replace(&results).await;

        tracing::debug!(keyword, count = results.len(), "search results cached");
        Ok(results)
    }

    /// Persist a result of the session's current generation.
    ///
    /// Returns the durable id. Fails with `InvalidReference` when the
    /// transient id is not in the current generation.
    pub async fn handle_bookmark(&self, cache: &ResultCache, transient_id: &str) -> Result<String, Error> {
        let record = cache
            .get(transient_id)
            .await
            .ok_or_else(|| Error::InvalidReference(transient_id.to_string()))?;

        let durable_id = self.store.create(&record).await?;
        tracing::info!(transient_id, durable_id = %durable_id, "bookmark created");
        Ok(durable_id)
    }

    /// Read a persisted bookmark.
    pub async fn handle_view(&self, durable_id: &str) -> Result<BookmarkRecord, Error> {
        self.store.read_one(durable_id).await
    }
}
