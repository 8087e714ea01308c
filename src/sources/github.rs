use std::sync::Arc;

use chrono::Duration;
use url::Url;

use crate::config::Config;
use crate::domain::{Repository, User};
use crate::errors::{PortfolioError, PortfolioResult};
use crate::sources::traits::{FetchRequest, Fetcher};

/// GitHub responses are revalidated once a day
pub const GITHUB_REVALIDATE_SECS: i64 = 86_400;

const GITHUB_ACCEPT: &str = "application/vnd.github.v3+json";

/// Append percent-encoded path segments to a base URL
pub(crate) fn endpoint(base: &str, segments: &[&str]) -> PortfolioResult<Url> {
    let mut url =
        Url::parse(base).map_err(|e| PortfolioError::InvalidUrl(format!("{}: {}", base, e)))?;

    url.path_segments_mut()
        .map_err(|_| PortfolioError::InvalidUrl(format!("{}: cannot be a base URL", base)))?
        .pop_if_empty()
        .extend(segments);

    Ok(url)
}

pub struct GitHubSource {
    fetcher: Arc<dyn Fetcher>,
    api_url: String,
    login: String,
    token: Option<String>,
}

impl GitHubSource {
    pub fn new(fetcher: Arc<dyn Fetcher>, api_url: &str, login: &str, token: Option<String>) -> Self {
        Self {
            fetcher,
            api_url: api_url.trim_end_matches('/').to_string(),
            login: login.to_string(),
            token,
        }
    }

    pub fn from_config(fetcher: Arc<dyn Fetcher>, config: &Config) -> Self {
        Self::new(
            fetcher,
            &config.github_api_url,
            &config.github_login,
            config.github_token.clone(),
        )
    }

    pub fn login(&self) -> &str {
        &self.login
    }

    fn request(&self, segments: &[&str], cache_key: String) -> PortfolioResult<FetchRequest> {
        let url = endpoint(&self.api_url, segments)?;

        let mut request = FetchRequest::new(url.to_string(), cache_key, Duration::seconds(GITHUB_REVALIDATE_SECS))
            .with_header("Accept", GITHUB_ACCEPT);

        if let Some(token) = &self.token {
            request = request.with_header("Authorization", &format!("Bearer {}", token));
        }

        Ok(request)
    }

    pub fn user_request(&self) -> PortfolioResult<FetchRequest> {
        self.request(
            &["users", self.login.as_str()],
            format!("github:user:{}", self.login),
        )
    }

    pub fn repos_request(&self) -> PortfolioResult<FetchRequest> {
        self.request(
            &["users", self.login.as_str(), "repos"],
            format!("github:repos:{}", self.login),
        )
    }

    pub fn fetch_user(&self) -> PortfolioResult<User> {
        let body = self.fetcher.fetch_text(&self.user_request()?)?;
        Ok(serde_json::from_str(&body)?)
    }

    pub fn fetch_repos(&self) -> PortfolioResult<Vec<Repository>> {
        let body = self.fetcher.fetch_text(&self.repos_request()?)?;
        Ok(serde_json::from_str(&body)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sources::traits::MockFetcher;

    const USER_JSON: &str = r#"{
        "login": "Berohlfs",
        "avatar_url": "https://avatars.githubusercontent.com/u/74180000?v=4",
        "html_url": "https://github.com/Berohlfs",
        "public_repos": 21,
        "followers": 14,
        "following": 11
    }"#;

    fn source(fetcher: MockFetcher, token: Option<&str>) -> GitHubSource {
        GitHubSource::new(
            Arc::new(fetcher),
            "https://api.github.com/",
            "Berohlfs",
            token.map(|t| t.to_string()),
        )
    }

    #[test]
    fn test_user_request_with_token() {
        let source = source(MockFetcher::new(), Some("ghp_abc"));
        let request = source.user_request().unwrap();

        assert_eq!(request.url, "https://api.github.com/users/Berohlfs");
        assert_eq!(request.cache_key, "github:user:Berohlfs");
        assert_eq!(request.max_age, Duration::days(1));
        assert_eq!(request.header("authorization"), Some("Bearer ghp_abc"));
        assert_eq!(request.header("Accept"), Some("application/vnd.github.v3+json"));
    }

    #[test]
    fn test_request_without_token_has_no_authorization() {
        let source = source(MockFetcher::new(), None);
        let request = source.repos_request().unwrap();

        assert_eq!(request.url, "https://api.github.com/users/Berohlfs/repos");
        assert!(request.header("Authorization").is_none());
    }

    #[test]
    fn test_login_is_percent_encoded() {
        let source = GitHubSource::new(Arc::new(MockFetcher::new()), "https://api.github.com", "a b/c?", None);
        let request = source.repos_request().unwrap();

        assert_eq!(request.url, "https://api.github.com/users/a%20b%2Fc%3F/repos");
    }

    #[test]
    fn test_api_url_with_path_prefix() {
        let source = GitHubSource::new(
            Arc::new(MockFetcher::new()),
            "https://ghe.example.com/api/v3/",
            "octocat",
            None,
        );

        assert_eq!(
            source.user_request().unwrap().url,
            "https://ghe.example.com/api/v3/users/octocat"
        );
    }

    #[test]
    fn test_invalid_api_url() {
        let source = GitHubSource::new(Arc::new(MockFetcher::new()), "not a url", "x", None);
        assert!(matches!(source.user_request(), Err(PortfolioError::InvalidUrl(_))));
    }

    #[test]
    fn test_fetch_user_parses_fixture() {
        let mut fetcher = MockFetcher::new();
        fetcher
            .expect_fetch_text()
            .withf(|r| r.cache_key == "github:user:Berohlfs")
            .returning(|_| Ok(USER_JSON.to_string()));

        let user = source(fetcher, None).fetch_user().unwrap();

        assert_eq!(user.login, "Berohlfs");
        assert_eq!(
            user.avatar_url,
            "https://avatars.githubusercontent.com/u/74180000?v=4"
        );
        assert_eq!(user.public_repos, 21);
        assert_eq!(user.followers, 14);
        assert_eq!(user.following, 11);
    }

    #[test]
    fn test_fetch_repos_rejects_malformed_payload() {
        let mut fetcher = MockFetcher::new();
        fetcher
            .expect_fetch_text()
            .returning(|_| Ok(r#"{"message": "Bad credentials"}"#.to_string()));

        let err = source(fetcher, None).fetch_repos().unwrap_err();
        assert!(matches!(err, PortfolioError::Json(_)));
    }
}
