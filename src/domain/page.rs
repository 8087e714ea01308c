use serde::{Deserialize, Serialize};

use super::{Article, PlatformSpecs, Profile, Repository};

/// Everything the page components need for one render
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PortfolioPage {
    pub profile: Profile,
    pub avatar_url: String,
    pub github: PlatformSpecs,
    pub repos: Vec<Repository>,
    pub articles: Vec<Article>,
    pub youtube: PlatformSpecs,
}
