use serde::{Deserialize, Serialize};

use super::{ChannelResponse, User};
use crate::errors::{PortfolioError, PortfolioResult};

/// One labelled counter on a platform card
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Spec {
    pub label: String,
    pub count: String,
}

impl Spec {
    pub fn new(label: &str, count: impl ToString) -> Self {
        Self {
            label: label.to_string(),
            count: count.to_string(),
        }
    }
}

/// Display props for a platform card (GitHub profile, YouTube channel)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlatformSpecs {
    pub link: String,
    pub title: String,
    pub image_url: String,
    pub specs: Vec<Spec>,
}

impl PlatformSpecs {
    pub fn from_github_user(user: &User, link: &str) -> Self {
        Self {
            link: link.to_string(),
            title: user.login.clone(),
            image_url: user.avatar_url.clone(),
            specs: vec![
                Spec::new("repositories", user.public_repos),
                Spec::new("followers", user.followers),
                Spec::new("following", user.following),
            ],
        }
    }

    /// Build the card from the first channel of a YouTube response.
    /// Absent counters render as empty strings.
    pub fn from_youtube_channel(response: &ChannelResponse, link: &str) -> PortfolioResult<Self> {
        let channel = response
            .first()
            .ok_or_else(|| PortfolioError::ChannelNotFound(link.to_string()))?;

        let stats = &channel.statistics;
        let count = |value: &Option<String>| value.clone().unwrap_or_default();

        Ok(Self {
            link: link.to_string(),
            title: channel.snippet.title.clone(),
            image_url: channel
                .snippet
                .thumbnails
                .default_url()
                .unwrap_or_default()
                .to_string(),
            specs: vec![
                Spec::new("subscribers", count(&stats.subscriber_count)),
                Spec::new("total views", count(&stats.view_count)),
                Spec::new("videos", count(&stats.video_count)),
            ],
        })
    }
}
