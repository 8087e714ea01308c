use log::debug;
use reqwest::blocking::Client;

use crate::errors::PortfolioResult;
use crate::sources::traits::{FetchRequest, Fetcher};

const USER_AGENT: &str = concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION"));

/// Uncached blocking HTTP fetcher
pub struct HttpFetcher {
    client: Client,
}

impl HttpFetcher {
    pub fn new() -> PortfolioResult<Self> {
        let client = Client::builder()
            .timeout(std::time::Duration::from_secs(30))
            .user_agent(USER_AGENT)
            .build()?;

        Ok(Self { client })
    }
}

impl Fetcher for HttpFetcher {
    fn fetch_text(&self, request: &FetchRequest) -> PortfolioResult<String> {
        debug!("GET {}", request.cache_key);

        let mut builder = self.client.get(&request.url);
        for (name, value) in &request.headers {
            builder = builder.header(name.as_str(), value.as_str());
        }

        // Non-success statuses are errors, not bodies to parse
        let response = builder.send()?.error_for_status()?;
        Ok(response.text()?)
    }
}
