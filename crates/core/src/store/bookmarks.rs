//! Bookmark create/read operations.

use super::connection::BookmarkDb;
use crate::{BookmarkRecord, Error};
use async_trait::async_trait;
use chrono::Utc;
use tokio_rusqlite::params;
use tokio_rusqlite::rusqlite;

/// Durable bookmark storage.
#[async_trait]
pub trait BookmarkStore: Send + Sync {
    /// Persist the record's content and return the newly assigned durable id.
    ///
    /// The incoming `record.id` is ignored. Either the row exists afterwards
    /// or nothing was written.
    async fn create(&self, record: &BookmarkRecord) -> Result<String, Error>;

    /// Fetch a persisted bookmark by durable id.
    async fn read_one(&self, id: &str) -> Result<BookmarkRecord, Error>;
}

/// Durable ids are canonical decimal row ids; anything else cannot match a row.
fn parse_durable_id(id: &str) -> Option<i64> {
    id.parse::<i64>().ok().filter(|n| *n > 0 && n.to_string() == id)
}

#[async_trait]
impl BookmarkStore for BookmarkDb {
    async fn create(&self, record: &BookmarkRecord) -> Result<String, Error> {
        let record = record.clone();
        let created_at = Utc::now().to_rfc3339();

        let row_id = self
            .conn
            .call(move |conn| -> Result<i64, Error> {
                conn.execute(
                    "INSERT INTO bookmarks (title, link, description, published_date, created_at)
                    VALUES (?1, ?2, ?3, ?4, ?5)",
                    params![record.title, record.link, record.description, record.published_date, created_at],
                )?;
                Ok(conn.last_insert_rowid())
            })
            .await
            .map_err(Error::from)?;

        tracing::info!(id = row_id, "bookmark inserted");
        Ok(row_id.to_string())
    }

    async fn read_one(&self, id: &str) -> Result<BookmarkRecord, Error> {
        let Some(row_id) = parse_durable_id(id) else {
            return Err(Error::NotFound(id.to_string()));
        };

        let found = self
            .conn
            .call(move |conn| -> Result<Option<BookmarkRecord>, Error> {
                let mut stmt =
                    conn.prepare("SELECT id, title, link, description, published_date FROM bookmarks WHERE id = ?1")?;

                let result = stmt.query_row(params![row_id], |row| {
                    Ok(BookmarkRecord {
                        id: row.get::<_, i64>(0)?.to_string(),
                        title: row.get::<_, Option<String>>(1)?.unwrap_or_default(),
                        link: row.get::<_, Option<String>>(2)?.unwrap_or_default(),
                        description: row.get::<_, Option<String>>(3)?.unwrap_or_default(),
                        published_date: row.get::<_, Option<String>>(4)?.unwrap_or_default(),
                    })
                });

                match result {
                    Ok(record) => Ok(Some(record)),
                    Err(rusqlite::Error::QueryReturnedNoRows) => Ok(None),
                    Err(e) => Err(e.into()),
                }
            })
            .await
            .map_err(Error::from)?;

        found.ok_or_else(|| Error::NotFound(id.to_string()))
    }
}
