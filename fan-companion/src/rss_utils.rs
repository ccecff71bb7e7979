/// Feed-specific utility functions

/// URL utilities for feed sources
pub mod url {
    use crate::types::{CompanionError, Result};
    use url::Url;

    /// Extract domain from URL
    pub fn extract_domain(url_str: &str) -> Option<String> {
        if let Ok(url) = Url::parse(url_str) {
            url.domain().map(|d| d.to_string())
        } else {
            None
        }
    }

    /// Parse a feed URL, accepting only http and https
    pub fn parse_feed_url(url_str: &str) -> Result<Url> {
        let url = Url::parse(url_str)?;
        match url.scheme() {
            "http" | "https" => Ok(url),
            _ => Err(CompanionError::UnsupportedScheme { url: url_str.to_string() }),
        }
    }

    /// Validate feed URL format
    pub fn is_valid_feed_url(url_str: &str) -> bool {
        parse_feed_url(url_str).is_ok()
    }
}

/// Markup helpers for feed text
pub mod feed {
    use once_cell::sync::Lazy;
    use regex::Regex;

    // A tag opens with a letter, '/' or '!'; "2 < 3" or "U<21" is text.
    static TAG: Lazy<Regex> = Lazy::new(|| Regex::new(r"<[A-Za-z/!][^<>]*>").expect("tag pattern compiles"));

    /// Drop markup tags and collapse whitespace
    pub fn extract_text_from_html(html: &str) -> String {
        TAG.replace_all(html, "")
            .split_whitespace()
            .collect::<Vec<_>>()
            .join(" ")
    }

    /// Whether the text carries anything that looks like a markup tag
    pub fn looks_like_html(text: &str) -> bool {
        TAG.is_match(text)
    }
}
