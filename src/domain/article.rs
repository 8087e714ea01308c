use std::sync::LazyLock;

use chrono::{DateTime, Utc};
use regex::Regex;
use serde::{Deserialize, Serialize};

/// Maximum number of characters kept in an article preview
pub const PREVIEW_LENGTH: usize = 200;

const ELLIPSIS: char = '…';

static TAG_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"<[^>]+>").expect("tag pattern is a valid regex"));

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Article {
    pub title: String,
    pub link: String,
    pub description: String,
    pub published: Option<DateTime<Utc>>,
}

impl Article {
    pub fn new(title: String, link: String) -> Self {
        Self {
            title,
            link,
            description: String::new(),
            published: None,
        }
    }

    /// Set the description to a plain-text preview of an HTML body
    pub fn with_body(mut self, html: &str) -> Self {
        self.description = preview(&strip_tags(html));
        self
    }

    pub fn with_published(mut self, published: Option<DateTime<Utc>>) -> Self {
        self.published = published;
        self
    }
}

/// Remove everything that looks like a markup tag and trim the result.
/// Best effort: malformed markup is not repaired.
pub fn strip_tags(html: &str) -> String {
    TAG_PATTERN.replace_all(html, "").trim().to_string()
}

/// First `PREVIEW_LENGTH` characters of `text`, with an ellipsis if anything was cut
pub fn preview(text: &str) -> String {
    let mut chars = text.chars();
    let mut preview: String = chars.by_ref().take(PREVIEW_LENGTH).collect();

    if chars.next().is_some() {
        preview.push(ELLIPSIS);
    }

    preview
}
