mod connection;
mod response_cache_repository;

pub use connection::SqliteStorage;
pub use response_cache_repository::SqliteResponseCache;
