use crate::domain::CachedResponse;
use crate::errors::PortfolioResult;

#[cfg_attr(test, mockall::automock)]
pub trait ResponseCache: Send + Sync {
    fn get(&self, cache_key: &str) -> PortfolioResult<Option<CachedResponse>>;
    fn put(&self, response: &CachedResponse) -> PortfolioResult<()>;
    fn list(&self) -> PortfolioResult<Vec<CachedResponse>>;
    fn clear(&self) -> PortfolioResult<usize>;
}
