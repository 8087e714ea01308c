pub mod traits;
pub mod sqlite;

pub use traits::ResponseCache;
pub use sqlite::{SqliteResponseCache, SqliteStorage};
