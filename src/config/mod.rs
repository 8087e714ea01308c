use crate::errors::{PortfolioError, PortfolioResult};

pub const DEFAULT_GITHUB_LOGIN: &str = "Berohlfs";
pub const DEFAULT_GITHUB_API_URL: &str = "https://api.github.com";
pub const DEFAULT_YOUTUBE_API_URL: &str = "https://www.googleapis.com";
pub const DEFAULT_YOUTUBE_CHANNEL_URL: &str = "https://www.youtube.com/@BrazilianBunker";
pub const DEFAULT_MEDIUM_USERNAME: &str = "berohlfs";
pub const DEFAULT_MEDIUM_FEED_URL: &str = "https://medium.com";

#[derive(Debug, Clone)]
pub struct Config {
    pub github_token: Option<String>,
    pub github_login: String,
    pub github_api_url: String,
    pub youtube_channel_id: Option<String>,
    pub youtube_key: Option<String>,
    pub youtube_api_url: String,
    pub youtube_channel_url: String,
    pub medium_username: String,
    pub medium_feed_url: String,
    pub cache_path: String,
}

/// Credentials needed to query the YouTube Data API
#[derive(Debug, Clone)]
pub struct YouTubeCredentials {
    pub channel_id: String,
    pub api_key: String,
}

impl Config {
    /// Get the directory where the executable is located
    fn exe_dir() -> Option<std::path::PathBuf> {
        std::env::current_exe()
            .ok()
            .and_then(|p| p.parent().map(|p| p.to_path_buf()))
    }

    pub fn from_env() -> PortfolioResult<Self> {
        let exe_dir = Self::exe_dir();

        // Try to load .env from executable's directory first
        if let Some(ref dir) = exe_dir {
            let env_path = dir.join(".env");
            if env_path.exists() {
                dotenvy::from_path(&env_path).ok();
            }
        }
        // Fall back to current directory
        dotenvy::dotenv().ok();

        let cache_path = non_empty_var("PORTFOLIO_CACHE_PATH").unwrap_or_else(|| {
            exe_dir
                .map(|d| d.join("portfolio.db").to_string_lossy().into_owned())
                .unwrap_or_else(|| "./portfolio.db".to_string())
        });
        check_cache_path(&cache_path)?;

        Ok(Self {
            github_token: non_empty_var("GITHUB_TOKEN"),
            github_login: var_or("GITHUB_LOGIN", DEFAULT_GITHUB_LOGIN),
            github_api_url: var_or("GITHUB_API_URL", DEFAULT_GITHUB_API_URL),
            youtube_channel_id: non_empty_var("GOOGLE_YOUTUBE_CHANNEL_ID"),
            youtube_key: non_empty_var("GOOGLE_YOUTUBE_KEY"),
            youtube_api_url: var_or("YOUTUBE_API_URL", DEFAULT_YOUTUBE_API_URL),
            youtube_channel_url: var_or("YOUTUBE_CHANNEL_URL", DEFAULT_YOUTUBE_CHANNEL_URL),
            medium_username: var_or("MEDIUM_USERNAME", DEFAULT_MEDIUM_USERNAME),
            medium_feed_url: var_or("MEDIUM_FEED_URL", DEFAULT_MEDIUM_FEED_URL),
            cache_path,
        })
    }

    /// YouTube credentials are only needed when the channel is actually fetched,
    /// so they are checked here instead of in `from_env`.
    pub fn youtube_credentials(&self) -> PortfolioResult<YouTubeCredentials> {
        let channel_id = self
            .youtube_channel_id
            .clone()
            .ok_or_else(|| PortfolioError::MissingEnvVar("GOOGLE_YOUTUBE_CHANNEL_ID".to_string()))?;

        let api_key = self
            .youtube_key
            .clone()
            .ok_or_else(|| PortfolioError::MissingEnvVar("GOOGLE_YOUTUBE_KEY".to_string()))?;

        Ok(YouTubeCredentials {
            channel_id,
            api_key,
        })
    }

    /// Public profile URL of the configured GitHub account
    pub fn github_profile_url(&self) -> String {
        format!("https://github.com/{}", self.github_login)
    }
}

/// The cache file may not exist yet, but its directory must
fn check_cache_path(path: &str) -> PortfolioResult<()> {
    match std::path::Path::new(path).parent() {
        Some(dir) if !dir.as_os_str().is_empty() && !dir.is_dir() => Err(PortfolioError::Config(
            format!("cache directory {} does not exist", dir.display()),
        )),
        _ => Ok(()),
    }
}

fn non_empty_var(name: &str) -> Option<String> {
    std::env::var(name)
        .ok()
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

fn var_or(name: &str, default: &str) -> String {
    non_empty_var(name).unwrap_or_else(|| default.to_string())
}
