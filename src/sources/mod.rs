pub mod traits;
pub mod http;
pub mod cache;
pub mod github;
pub mod youtube;
pub mod medium;

pub use traits::{FetchRequest, Fetcher};
pub use http::HttpFetcher;
pub use cache::CachingFetcher;
pub use github::GitHubSource;
pub use youtube::YouTubeSource;
pub use medium::MediumSource;
