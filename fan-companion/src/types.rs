use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

// Use the interfaces crate for core types
pub use interfaces::defs::{
    GroupStanding, Itinerary, ItineraryAgent, ItineraryBlock, Match, MatchResult, NewsItem, PlanInput, Poi,
    PoiCategory, TeamRecord, UserPrefs,
};

/// Outcome of one attempt to retrieve one feed source.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FetchResult {
    pub url: String,
    pub success: bool,
    pub error: Option<String>,
    pub fetch_time: DateTime<Utc>,
    pub response_time_ms: u64,
    pub http_status: Option<u16>,
    pub content: Option<String>, // RSS/XML content
}

impl FetchResult {
    pub fn failed(url: &str, fetch_time: DateTime<Utc>, response_time_ms: u64, http_status: Option<u16>, error: String) -> Self {
        Self {
            url: url.to_string(),
            success: false,
            error: Some(error),
            fetch_time,
            response_time_ms,
            http_status,
            content: None,
        }
    }
}

#[derive(Debug, Clone)]
pub struct FetchConfig {
    pub user_agent: String,
    pub timeout_seconds: u64,
    /// Extra attempts after the first one. Zero means a single attempt per source.
    pub max_retries: u32,
    pub retry_delay_seconds: u64,
    pub max_feed_size_mb: usize,
    pub max_redirects: usize,
}

impl Default for FetchConfig {
    fn default() -> Self {
        Self {
            user_agent: "FanCompanion/1.0".to_string(),
            timeout_seconds: 15,
            max_retries: 0,
            retry_delay_seconds: 2,
            max_feed_size_mb: 10,
            max_redirects: 5,
        }
    }
}

#[derive(Debug, Clone)]
pub struct AggregatorConfig {
    /// Display budget: the aggregated list never grows past this.
    pub max_items: usize,
}

impl Default for AggregatorConfig {
    fn default() -> Self {
        Self { max_items: 20 }
    }
}

#[derive(Debug, Clone)]
pub struct HostedPlannerConfig {
    pub endpoint: String,
    pub model: Option<String>,
    pub timeout_seconds: u64,
}

impl HostedPlannerConfig {
    pub fn new(endpoint: impl Into<String>) -> Self {
        Self {
            endpoint: endpoint.into(),
            model: None,
            timeout_seconds: 30,
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum CompanionError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Feed parse error: {0}")]
    Parse(String),

    #[error("Invalid URL: {0}")]
    InvalidUrl(#[from] url::ParseError),

    #[error("Unsupported URL scheme: {url}")]
    UnsupportedScheme { url: String },

    #[error("Feed size exceeds limit: {size_mb}MB")]
    FeedTooLarge { size_mb: usize },

    #[error("Invalid record {key}: {reason}")]
    InvalidRecord { key: String, reason: String },

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("General error: {0}")]
    General(String),
}

pub type Result<T> = std::result::Result<T, CompanionError>;
