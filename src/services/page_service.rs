use std::sync::Arc;
use std::thread::{self, ScopedJoinHandle};

use log::info;

use crate::config::Config;
use crate::domain::{PlatformSpecs, PortfolioPage, Profile, User};
use crate::errors::PortfolioResult;
use crate::sources::{Fetcher, GitHubSource, MediumSource, YouTubeSource};

/// Assembles the page from the three upstream platforms
pub struct PageService {
    github: GitHubSource,
    youtube: YouTubeSource,
    medium: MediumSource,
    github_profile_url: String,
}

fn join<T>(handle: ScopedJoinHandle<'_, T>) -> T {
    handle
        .join()
        .unwrap_or_else(|panic| std::panic::resume_unwind(panic))
}

impl PageService {
    pub fn new(
        github: GitHubSource,
        youtube: YouTubeSource,
        medium: MediumSource,
        github_profile_url: String,
    ) -> Self {
        Self {
            github,
            youtube,
            medium,
            github_profile_url,
        }
    }

    pub fn from_config(config: &Config, fetcher: Arc<dyn Fetcher>) -> PortfolioResult<Self> {
        Ok(Self::new(
            GitHubSource::from_config(fetcher.clone(), config),
            YouTubeSource::from_config(fetcher.clone(), config)?,
            MediumSource::from_config(fetcher, config),
            config.github_profile_url(),
        ))
    }

    fn github_specs(&self, user: &User) -> PlatformSpecs {
        let link = user.html_url.as_deref().unwrap_or(&self.github_profile_url);
        PlatformSpecs::from_github_user(user, link)
    }

    /// Fetch all four upstream resources concurrently and build the page.
    /// The first failure, in page order, fails the whole page.
    pub fn assemble(&self, profile: Profile) -> PortfolioResult<PortfolioPage> {
        info!("Assembling page for {}", self.github.login());

        let (user, repos, articles, youtube) = thread::scope(|scope| {
            let user = scope.spawn(|| self.github.fetch_user());
            let repos = scope.spawn(|| self.github.fetch_repos());
            let articles = scope.spawn(|| self.medium.fetch_articles());
            let youtube = scope.spawn(|| self.youtube.fetch_specs());

            (join(user), join(repos), join(articles), join(youtube))
        });

        let user = user?;
        let repos = repos?;
        let articles = articles?;
        let youtube = youtube?;

        info!(
            "Fetched {} repositories and {} articles",
            repos.len(),
            articles.len()
        );

        Ok(PortfolioPage {
            profile,
            avatar_url: user.avatar_url.clone(),
            github: self.github_specs(&user),
            repos,
            articles,
            youtube,
        })
    }

    /// GitHub and YouTube platform cards only
    pub fn stats(&self) -> PortfolioResult<(PlatformSpecs, PlatformSpecs)> {
        let (user, youtube) = thread::scope(|scope| {
            let user = scope.spawn(|| self.github.fetch_user());
            let youtube = scope.spawn(|| self.youtube.fetch_specs());

            (join(user), join(youtube))
        });

        Ok((self.github_specs(&user?), youtube?))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::YouTubeCredentials;
    use crate::errors::PortfolioError;
    use crate::sources::traits::MockFetcher;

    const USER_JSON: &str = r#"{
        "login": "Berohlfs",
        "avatar_url": "https://avatars.githubusercontent.com/u/1",
        "public_repos": 2,
        "followers": 5,
        "following": 4
    }"#;

    const REPOS_JSON: &str = r#"[
        {"name": "portfolio", "html_url": "https://github.com/Berohlfs/portfolio"},
        {"name": "tuscan", "html_url": "https://github.com/Berohlfs/tuscan"}
    ]"#;

    const CHANNEL_JSON: &str = r#"{"items": [{
        "snippet": {"title": "Brazilian Bunker", "thumbnails": {"default": {"url": "https://yt3.ggpht.com/a.jpg"}}},
        "statistics": {"subscriberCount": "10", "viewCount": "200", "videoCount": "3"}
    }]}"#;

    const FEED_XML: &str = r#"<?xml version="1.0" encoding="UTF-8"?>
<rss xmlns:content="http://purl.org/rss/1.0/modules/content/" version="2.0">
  <channel>
    <title>Stories</title>
    <link>https://medium.com/@berohlfs</link>
    <description>Stories</description>
    <item>
      <title>Hello</title>
      <link>https://medium.com/p/hello</link>
      <content:encoded><![CDATA[<p>Hello world</p>]]></content:encoded>
    </item>
  </channel>
</rss>"#;

    fn respond(request: &crate::sources::FetchRequest) -> PortfolioResult<String> {
        let body = match request.cache_key.as_str() {
            "github:user:Berohlfs" => USER_JSON,
            "github:repos:Berohlfs" => REPOS_JSON,
            "medium:feed:berohlfs" => FEED_XML,
            key if key.starts_with("youtube:channel:") => CHANNEL_JSON,
            other => return Err(PortfolioError::Config(format!("unexpected {}", other))),
        };
        Ok(body.to_string())
    }

    fn service(fetcher: MockFetcher) -> PageService {
        let fetcher: Arc<dyn Fetcher> = Arc::new(fetcher);
        PageService::new(
            GitHubSource::new(fetcher.clone(), "https://api.github.com", "Berohlfs", None),
            YouTubeSource::new(
                fetcher.clone(),
                "https://www.googleapis.com",
                YouTubeCredentials {
                    channel_id: "UC1".to_string(),
                    api_key: "key".to_string(),
                },
                "https://www.youtube.com/@BrazilianBunker",
            ),
            MediumSource::new(fetcher, "https://medium.com", "berohlfs"),
            "https://github.com/Berohlfs".to_string(),
        )
    }

    #[test]
    fn test_assemble_full_page() {
        let mut fetcher = MockFetcher::new();
        fetcher.expect_fetch_text().times(4).returning(respond);

        let page = service(fetcher).assemble(Profile::default()).unwrap();

        assert_eq!(page.avatar_url, "https://avatars.githubusercontent.com/u/1");
        assert_eq!(page.github.title, "Berohlfs");
        assert_eq!(page.github.link, "https://github.com/Berohlfs");
        assert_eq!(page.github.specs[0].count, "2");
        assert_eq!(page.repos.len(), 2);
        assert_eq!(page.articles.len(), 1);
        assert_eq!(page.articles[0].description, "Hello world");
        assert_eq!(page.youtube.title, "Brazilian Bunker");
        assert_eq!(page.youtube.specs[1].count, "200");
    }

    #[test]
    fn test_any_failure_fails_the_page() {
        let mut fetcher = MockFetcher::new();
        fetcher.expect_fetch_text().returning(|request| {
            if request.cache_key.starts_with("medium:") {
                Ok("<html>not a feed".to_string())
            } else {
                respond(request)
            }
        });

        let err = service(fetcher).assemble(Profile::default()).unwrap_err();
        assert!(matches!(err, PortfolioError::FeedParse(_)));
    }

    #[test]
    fn test_stats_only_fetches_platforms() {
        let mut fetcher = MockFetcher::new();
        fetcher
            .expect_fetch_text()
            .withf(|r| !r.cache_key.starts_with("medium:") && !r.cache_key.starts_with("github:repos"))
            .times(2)
            .returning(respond);

        let (github, youtube) = service(fetcher).stats().unwrap();
        assert_eq!(github.specs[1].count, "5");
        assert_eq!(youtube.specs[0].count, "10");
    }
}
