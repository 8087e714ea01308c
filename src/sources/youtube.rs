use std::sync::Arc;

use chrono::Duration;
use url::Url;

use crate::config::{Config, YouTubeCredentials};
use crate::domain::{ChannelResponse, PlatformSpecs};
use crate::errors::{PortfolioError, PortfolioResult};
use crate::sources::traits::{FetchRequest, Fetcher};

/// YouTube responses are revalidated once a day
pub const YOUTUBE_REVALIDATE_SECS: i64 = 86_400;

pub struct YouTubeSource {
    fetcher: Arc<dyn Fetcher>,
    api_url: String,
    credentials: YouTubeCredentials,
    channel_url: String,
}

impl YouTubeSource {
    pub fn new(
        fetcher: Arc<dyn Fetcher>,
        api_url: &str,
        credentials: YouTubeCredentials,
        channel_url: &str,
    ) -> Self {
        Self {
            fetcher,
            api_url: api_url.trim_end_matches('/').to_string(),
            credentials,
            channel_url: channel_url.to_string(),
        }
    }

    pub fn from_config(fetcher: Arc<dyn Fetcher>, config: &Config) -> PortfolioResult<Self> {
        Ok(Self::new(
            fetcher,
            &config.youtube_api_url,
            config.youtube_credentials()?,
            &config.youtube_channel_url,
        ))
    }

    pub fn channel_request(&self) -> PortfolioResult<FetchRequest> {
        let endpoint = format!("{}/youtube/v3/channels", self.api_url);
        let url = Url::parse_with_params(
            &endpoint,
            &[
                ("part", "snippet,statistics"),
                ("id", self.credentials.channel_id.as_str()),
                ("key", self.credentials.api_key.as_str()),
            ],
        )
        .map_err(|e| PortfolioError::InvalidUrl(format!("{}: {}", endpoint, e)))?;

        Ok(FetchRequest::new(
            url.to_string(),
            format!("youtube:channel:{}", self.credentials.channel_id),
            Duration::seconds(YOUTUBE_REVALIDATE_SECS),
        ))
    }

    pub fn fetch_channel(&self) -> PortfolioResult<ChannelResponse> {
        let body = self.fetcher.fetch_text(&self.channel_request()?)?;
        Ok(serde_json::from_str(&body)?)
    }

    /// Fetch the channel and map its first item to card props
    pub fn fetch_specs(&self) -> PortfolioResult<PlatformSpecs> {
        let channel = self.fetch_channel()?;
        PlatformSpecs::from_youtube_channel(&channel, &self.channel_url)
    }
}
