use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Repository summary from `GET /users/{login}/repos`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Repository {
    pub name: String,
    pub html_url: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub language: Option<String>,
    #[serde(default)]
    pub stargazers_count: u64,
    #[serde(default)]
    pub forks_count: u64,
    #[serde(default)]
    pub fork: bool,
    #[serde(default)]
    pub topics: Vec<String>,
    #[serde(default)]
    pub updated_at: Option<DateTime<Utc>>,
}
