use std::sync::Arc;

use chrono::Duration;
use feed_rs::parser;

use crate::config::Config;
use crate::domain::Article;
use crate::errors::{PortfolioError, PortfolioResult};
use crate::sources::github::endpoint;
use crate::sources::traits::{FetchRequest, Fetcher};

/// Medium feeds are revalidated every hour
pub const MEDIUM_REVALIDATE_SECS: i64 = 3_600;

pub struct MediumSource {
    fetcher: Arc<dyn Fetcher>,
    feed_url: String,
    username: String,
}

impl MediumSource {
    pub fn new(fetcher: Arc<dyn Fetcher>, feed_url: &str, username: &str) -> Self {
        Self {
            fetcher,
            feed_url: feed_url.trim_end_matches('/').to_string(),
            username: username.trim_start_matches('@').to_string(),
        }
    }

    pub fn from_config(fetcher: Arc<dyn Fetcher>, config: &Config) -> Self {
        Self::new(fetcher, &config.medium_feed_url, &config.medium_username)
    }

    pub fn feed_request(&self) -> PortfolioResult<FetchRequest> {
        let handle = format!("@{}", self.username);
        let url = endpoint(&self.feed_url, &["feed", handle.as_str()])?;

        Ok(FetchRequest::new(
            url.to_string(),
            format!("medium:feed:{}", self.username),
            Duration::seconds(MEDIUM_REVALIDATE_SECS),
        ))
    }

    pub fn fetch_articles(&self) -> PortfolioResult<Vec<Article>> {
        let xml = self.fetcher.fetch_text(&self.feed_request()?)?;
        articles_from_xml(&xml)
    }
}

/// Parse a feed document into article previews, keeping feed order.
///
/// The preview body is the item's `content:encoded`, falling back to its
/// description when the feed has no full content.
pub fn articles_from_xml(xml: &str) -> PortfolioResult<Vec<Article>> {
    let feed = parser::parse(xml.as_bytes()).map_err(|e| PortfolioError::FeedParse(e.to_string()))?;

    let articles = feed
        .entries
        .into_iter()
        .map(|entry| {
            let title = entry.title.map(|t| t.content).unwrap_or_default();
            let link = entry
                .links
                .into_iter()
                .next()
                .map(|l| l.href)
                .unwrap_or_default();

            let body = entry
                .content
                .and_then(|c| c.body)
                .or_else(|| entry.summary.map(|s| s.content))
                .unwrap_or_default();

            Article::new(title, link)
                .with_body(&body)
                .with_published(entry.published.or(entry.updated))
        })
        .collect();

    Ok(articles)
}
