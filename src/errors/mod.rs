use thiserror::Error;

#[derive(Error, Debug)]
pub enum PortfolioError {
    // Configuration errors
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Missing environment variable: {0}")]
    MissingEnvVar(String),

    #[error("Invalid URL: {0}")]
    InvalidUrl(String),

    // Network errors
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    // Parsing errors
    #[error("JSON parsing failed: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Feed parsing failed: {0}")]
    FeedParse(String),

    #[error("YouTube channel not found: {0}")]
    ChannelNotFound(String),

    // Storage errors
    #[error("Database error: {0}")]
    Database(#[from] rusqlite::Error),

    #[error("Cache error: {0}")]
    Cache(String),

    // IO errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

pub type PortfolioResult<T> = Result<T, PortfolioError>;
