pub mod page_service;
pub mod cache_service;

pub use page_service::PageService;
pub use cache_service::{CacheEntry, CacheService};
