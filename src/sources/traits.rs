use chrono::Duration;

use crate::errors::PortfolioResult;

/// A single GET against an upstream API
#[derive(Debug, Clone, PartialEq)]
pub struct FetchRequest {
    pub url: String,
    /// Logical key the response is cached under. Never contains credentials.
    pub cache_key: String,
    /// Revalidation window of the cached response
    pub max_age: Duration,
    pub headers: Vec<(String, String)>,
}

impl FetchRequest {
    pub fn new(url: String, cache_key: String, max_age: Duration) -> Self {
        Self {
            url,
            cache_key,
            max_age,
            headers: Vec::new(),
        }
    }

    pub fn with_header(mut self, name: &str, value: &str) -> Self {
        self.headers.push((name.to_string(), value.to_string()));
        self
    }

    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(n, _)| n.eq_ignore_ascii_case(name))
            .map(|(_, v)| v.as_str())
    }
}

#[cfg_attr(test, mockall::automock)]
pub trait Fetcher: Send + Sync {
    /// Perform the request and return the response body as text
    fn fetch_text(&self, request: &FetchRequest) -> PortfolioResult<String>;
}
