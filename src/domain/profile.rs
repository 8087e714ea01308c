use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::errors::PortfolioResult;

/// An outbound link shown as a badge in the intro
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProfileLink {
    pub label: String,
    pub url: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Certification {
    pub name: String,
    pub issuer: String,
    #[serde(default)]
    pub url: Option<String>,
    #[serde(default)]
    pub badge_url: Option<String>,
}

/// Static page content that does not come from any API
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Profile {
    pub name: String,
    pub headline: String,
    pub bio: String,
    pub highlights: Vec<String>,
    pub links: Vec<ProfileLink>,
    pub image_url: Option<String>,
    pub certifications: Vec<Certification>,
}

impl Default for Profile {
    fn default() -> Self {
        Self {
            name: "Bernardo".to_string(),
            headline: "Software Engineer".to_string(),
            bio: "I enjoy learning about new subjects and understanding how things work. \
                  I've long been drawn to the tech industry, where I find joy in creating fun \
                  and simple solutions to everyday problems. At the moment, I dedicate most of \
                  my time to full-stack web development, system documentation, and project \
                  management. Looking ahead, I'm excited to specialize in data science and AI."
                .to_string(),
            highlights: vec![
                "full-stack web development".to_string(),
                "data science and AI".to_string(),
            ],
            links: vec![
                ProfileLink {
                    label: "LinkedIn".to_string(),
                    url: "https://linkedin.com/in/bernardorohlfs".to_string(),
                },
                ProfileLink {
                    label: "GitHub".to_string(),
                    url: "https://github.com/Berohlfs".to_string(),
                },
                ProfileLink {
                    label: "Medium".to_string(),
                    url: "https://medium.com/@berohlfs".to_string(),
                },
            ],
            image_url: Some("/bernardo-profile-bg.png".to_string()),
            certifications: Vec::new(),
        }
    }
}

impl Profile {
    /// Load a profile from a JSON file. Missing fields keep their defaults.
    pub fn from_file<P: AsRef<Path>>(path: P) -> PortfolioResult<Self> {
        let content = std::fs::read_to_string(path)?;
        Self::from_json(&content)
    }

    pub fn from_json(json: &str) -> PortfolioResult<Self> {
        Ok(serde_json::from_str(json)?)
    }
}
