use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};

/// A response body stored in the cache under a logical key
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CachedResponse {
    pub cache_key: String,
    pub body: String,
    pub fetched_at: DateTime<Utc>,
}

impl CachedResponse {
    pub fn new(cache_key: String, body: String, fetched_at: DateTime<Utc>) -> Self {
        Self {
            cache_key,
            body,
            fetched_at,
        }
    }

    pub fn age(&self, now: DateTime<Utc>) -> Duration {
        now - self.fetched_at
    }

    /// Fresh while strictly younger than the revalidation window
    pub fn is_fresh(&self, max_age: Duration, now: DateTime<Utc>) -> bool {
        self.age(now) < max_age
    }
}
