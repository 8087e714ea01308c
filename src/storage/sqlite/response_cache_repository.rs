use chrono::{DateTime, Utc};
use rusqlite::OptionalExtension;

use crate::domain::CachedResponse;
use crate::errors::{PortfolioError, PortfolioResult};
use crate::storage::sqlite::SqliteStorage;
use crate::storage::traits::ResponseCache;

pub struct SqliteResponseCache {
    storage: SqliteStorage,
}

impl SqliteResponseCache {
    pub fn new(storage: SqliteStorage) -> Self {
        Self { storage }
    }
}

fn parse_timestamp(value: &str) -> PortfolioResult<DateTime<Utc>> {
    DateTime::parse_from_rfc3339(value)
        .map(|dt| dt.with_timezone(&Utc))
        .map_err(|e| PortfolioError::Cache(format!("invalid timestamp '{}': {}", value, e)))
}

fn into_response(row: (String, String, String)) -> PortfolioResult<CachedResponse> {
    let (cache_key, body, fetched_at) = row;
    let fetched_at = parse_timestamp(&fetched_at)?;
    Ok(CachedResponse::new(cache_key, body, fetched_at))
}

impl ResponseCache for SqliteResponseCache {
    fn get(&self, cache_key: &str) -> PortfolioResult<Option<CachedResponse>> {
        let conn = self.storage.connection()?;
        let row: Option<(String, String, String)> = conn
            .query_row(
                "SELECT cache_key, body, fetched_at FROM http_cache WHERE cache_key = ?1",
                [cache_key],
                |row| Ok((row.get(0)?, row.get(1)?, row.get(2)?)),
            )
            .optional()?;

        row.map(into_response).transpose()
    }

    fn put(&self, response: &CachedResponse) -> PortfolioResult<()> {
        let conn = self.storage.connection()?;
        conn.execute(
            "INSERT INTO http_cache (cache_key, body, fetched_at) VALUES (?1, ?2, ?3)
             ON CONFLICT(cache_key) DO UPDATE SET body = excluded.body, fetched_at = excluded.fetched_at",
            (
                &response.cache_key,
                &response.body,
                response.fetched_at.to_rfc3339(),
            ),
        )?;
        Ok(())
    }

    fn list(&self) -> PortfolioResult<Vec<CachedResponse>> {
        let conn = self.storage.connection()?;
        let mut stmt =
            conn.prepare("SELECT cache_key, body, fetched_at FROM http_cache ORDER BY cache_key")?;

        let rows: Vec<(String, String, String)> = stmt
            .query_map([], |row| Ok((row.get(0)?, row.get(1)?, row.get(2)?)))?
            .collect::<Result<_, _>>()?;

        rows.into_iter().map(into_response).collect()
    }

    fn clear(&self) -> PortfolioResult<usize> {
        let conn = self.storage.connection()?;
        let removed = conn.execute("DELETE FROM http_cache", [])?;
        Ok(removed)
    }
}
