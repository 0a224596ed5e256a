//! Search provider seam.

use async_trait::async_trait;

use crate::{BookmarkRecord, Error};

/// An upstream keyword search.
///
/// Implementations make exactly one upstream call per invocation, without
/// caching or retries, and return each hit as a record with a fresh
/// transient id. Any upstream failure is reported as `Error::ExternalService`.
#[async_trait]
pub trait SearchProvider: Send + Sync {
    async fn search(&self, keyword: &str) -> Result<Vec<BookmarkRecord>, Error>;
}
