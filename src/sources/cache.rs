use chrono::Utc;
use log::{debug, info};

use crate::domain::CachedResponse;
use crate::errors::PortfolioResult;
use crate::sources::traits::{FetchRequest, Fetcher};
use crate::storage::ResponseCache;

/// Serves fresh responses from the cache and stores every successful fetch.
pub struct CachingFetcher<F: Fetcher, C: ResponseCache> {
    inner: F,
    cache: C,
    bypass_reads: bool,
}

impl<F: Fetcher, C: ResponseCache> CachingFetcher<F, C> {
    pub fn new(inner: F, cache: C) -> Self {
        Self {
            inner,
            cache,
            bypass_reads: false,
        }
    }

    /// Skip cache lookups but keep writing fetched responses
    pub fn bypass_reads(mut self, bypass: bool) -> Self {
        self.bypass_reads = bypass;
        self
    }

    fn lookup(&self, request: &FetchRequest) -> PortfolioResult<Option<String>> {
        if self.bypass_reads {
            return Ok(None);
        }

        match self.cache.get(&request.cache_key)? {
            Some(cached) if cached.is_fresh(request.max_age, Utc::now()) => {
                debug!("Cache hit for {}", request.cache_key);
                Ok(Some(cached.body))
            }
            Some(_) => {
                debug!("Cache entry for {} is stale", request.cache_key);
                Ok(None)
            }
            None => Ok(None),
        }
    }
}

impl<F: Fetcher, C: ResponseCache> Fetcher for CachingFetcher<F, C> {
    fn fetch_text(&self, request: &FetchRequest) -> PortfolioResult<String> {
        if let Some(body) = self.lookup(request)? {
            return Ok(body);
        }

        let body = self.inner.fetch_text(request)?;

        self.cache.put(&CachedResponse::new(
            request.cache_key.clone(),
            body.clone(),
            Utc::now(),
        ))?;
        info!("Fetched and cached {}", request.cache_key);

        Ok(body)
    }
}
