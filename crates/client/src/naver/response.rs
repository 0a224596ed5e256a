//! Naver blog search response types and normalization.

use blogmark_core::BookmarkRecord;
use serde::Deserialize;

/// Raw response from the Naver blog search API.
///
/// `items` is required; a body without it is treated as malformed. Unknown
/// fields such as `lastBuildDate` or `display` are ignored.
#[derive(Debug, Deserialize)]
pub struct NaverApiResponse {
    #[serde(default)]
    pub total: u64,
    pub items: Vec<NaverItem>,
}

/// Individual blog post from the Naver response.
///
/// Every field may be absent or `null`.
#[derive(Debug, Default, Deserialize)]
pub struct NaverItem {
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub link: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    /// Publish date as `yyyyMMdd`.
    #[serde(default)]
    pub postdate: Option<String>,
}

impl From<NaverItem> for BookmarkRecord {
    fn from(item: NaverItem) -> Self {
        BookmarkRecord::transient(item.title, item.link, item.description, item.postdate)
    }
}

impl NaverApiResponse {
    /// Convert every item into a record with a fresh transient id.
    pub fn into_records(self) -> Vec<BookmarkRecord> {
        self.items.into_iter().map(BookmarkRecord::from).collect()
    }
}
