pub mod user;
pub mod repository;
pub mod channel;
pub mod article;
pub mod platform;
pub mod profile;
pub mod page;
pub mod cached_response;

pub use user::User;
pub use repository::Repository;
pub use channel::{Channel, ChannelResponse, ChannelSnippet, ChannelStatistics, Thumbnail, Thumbnails};
pub use article::Article;
pub use platform::{PlatformSpecs, Spec};
pub use profile::{Certification, Profile, ProfileLink};
pub use page::PortfolioPage;
pub use cached_response::CachedResponse;
