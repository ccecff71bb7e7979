use crate::rss_utils::url::extract_domain;
use serde::{Deserialize, Serialize};

/// A syndication endpoint and the name shown next to its items.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FeedSource {
    pub name: String,
    pub url: String,
}

impl FeedSource {
    pub fn new(name: impl Into<String>, url: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            url: url.into(),
        }
    }

    /// Source without a curated name; named after its domain.
    pub fn from_url(url: impl Into<String>) -> Self {
        let url = url.into();
        let name = match extract_domain(&url) {
            Some(domain) => format!("RSS Feed ({})", domain),
            None => "RSS Feed".to_string(),
        };
        Self { name, url }
    }
}
