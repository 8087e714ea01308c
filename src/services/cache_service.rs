use chrono::{Duration, Utc};

use crate::domain::CachedResponse;
use crate::errors::PortfolioResult;
use crate::storage::ResponseCache;

/// Maintenance operations on the response cache
pub struct CacheService<C: ResponseCache> {
    cache: C,
}

/// A cached entry as shown to the user
#[derive(Debug, Clone, PartialEq)]
pub struct CacheEntry {
    pub cache_key: String,
    pub size: usize,
    pub age: Duration,
}

impl From<CachedResponse> for CacheEntry {
    fn from(response: CachedResponse) -> Self {
        Self {
            age: response.age(Utc::now()),
            size: response.body.len(),
            cache_key: response.cache_key,
        }
    }
}

impl<C: ResponseCache> CacheService<C> {
    pub fn new(cache: C) -> Self {
        Self { cache }
    }

    pub fn entries(&self) -> PortfolioResult<Vec<CacheEntry>> {
        Ok(self
            .cache
            .list()?
            .into_iter()
            .map(CacheEntry::from)
            .collect())
    }

    /// Remove every entry and return how many were removed
    pub fn clear(&self) -> PortfolioResult<usize> {
        self.cache.clear()
    }
}

/// Human-readable age such as `3h 12m`
pub fn format_age(age: Duration) -> String {
    let minutes = age.num_minutes().max(0);
    let (days, hours, minutes) = (minutes / 1440, (minutes % 1440) / 60, minutes % 60);

    if days > 0 {
        format!("{}d {}h", days, hours)
    } else if hours > 0 {
        format!("{}h {}m", hours, minutes)
    } else {
        format!("{}m", minutes)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::traits::MockResponseCache;

    #[test]
    fn test_entries_report_size_and_age() {
        let mut cache = MockResponseCache::new();
        cache.expect_list().returning(|| {
            Ok(vec![CachedResponse::new(
                "github:user:a".to_string(),
                "12345".to_string(),
                Utc::now() - Duration::hours(5),
            )])
        });

        let entries = CacheService::new(cache).entries().unwrap();

        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].cache_key, "github:user:a");
        assert_eq!(entries[0].size, 5);
        assert_eq!(entries[0].age.num_hours(), 5);
    }

    #[test]
    fn test_clear_delegates() {
        let mut cache = MockResponseCache::new();
        cache.expect_clear().times(1).returning(|| Ok(4));

        assert_eq!(CacheService::new(cache).clear().unwrap(), 4);
    }

    #[test]
    fn test_format_age() {
        assert_eq!(format_age(Duration::seconds(30)), "0m");
        assert_eq!(format_age(Duration::minutes(75)), "1h 15m");
        assert_eq!(format_age(Duration::hours(50)), "2d 2h");
        assert_eq!(format_age(Duration::seconds(-5)), "0m");
    }
}
