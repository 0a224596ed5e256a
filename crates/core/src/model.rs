//! Bookmark domain record.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A blog search result, either cached under a transient id or persisted
/// under a durable id.
///
/// Records are never mutated once built. Persisting a cached record yields a
/// new value carrying the store-assigned id.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, schemars::JsonSchema)]
pub struct BookmarkRecord {
    pub id: String,
    pub title: String,
    pub link: String,
    pub description: String,
    pub published_date: String,
}

impl BookmarkRecord {
    /// Build a record with a freshly generated transient id.
    ///
    /// Absent upstream fields become empty strings.
    pub fn transient(
        title: Option<String>, link: Option<String>, description: Option<String>, published_date: Option<String>,
    ) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            title: title.unwrap_or_default(),
            link: link.unwrap_or_default(),
            description: description.unwrap_or_default(),
            published_date: published_date.unwrap_or_default(),
        }
    }

    /// Same content under a different identifier.
    pub fn with_id(&self, id: impl Into<String>) -> Self {
        Self { id: id.into(), ..self.clone() }
    }

    /// True when every field except the identifier matches.
    pub fn same_content(&self, other: &BookmarkRecord) -> bool {
        self.title == other.title
            && self.link == other.link
            && self.description == other.description
            && self.published_date == other.published_date
    }
}
