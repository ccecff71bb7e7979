use crate::rss_utils::url::parse_feed_url;
use crate::types::{CompanionError, FetchConfig, FetchResult, Result};
use backoff::{backoff::Backoff, exponential::ExponentialBackoff};
use chrono::Utc;
use futures::future::join_all;
use reqwest::Client;
use std::time::{Duration, Instant};
use tracing::{debug, error, info, warn};

/// Retrieves raw feed payloads. One source failing never affects another.
pub struct Fetcher {
    client: Client,
    config: FetchConfig,
}

impl Fetcher {
    pub fn new(config: FetchConfig) -> Result<Self> {
        let client = Client::builder()
            .user_agent(&config.user_agent)
            .timeout(Duration::from_secs(config.timeout_seconds))
            .gzip(true)
            .deflate(true)
            .brotli(true)
            .redirect(reqwest::redirect::Policy::limited(config.max_redirects))
            .build()?;
        Ok(Self { client, config })
    }

    /// Fetch every source concurrently. Results come back in source order.
    pub async fn fetch_all(&self, urls: &[String]) -> Vec<FetchResult> {
        join_all(urls.iter().map(|url| self.fetch_feed(url))).await
    }

    /// Fetch one source, turning every failure into a failure marker.
    pub async fn fetch_feed(&self, url: &str) -> FetchResult {
        let start_time = Instant::now();
        let fetch_time = Utc::now();

        debug!("Fetching feed: {}", url);

        if let Err(e) = parse_feed_url(url) {
            warn!("Skipping feed with invalid URL {}: {}", url, e);
            return FetchResult::failed(url, fetch_time, 0, None, e.to_string());
        }

        let mut backoff: ExponentialBackoff<backoff::SystemClock> = ExponentialBackoff {
            current_interval: Duration::from_secs(self.config.retry_delay_seconds),
            initial_interval: Duration::from_secs(self.config.retry_delay_seconds),
            max_interval: Duration::from_secs(self.config.retry_delay_seconds * 32),
            multiplier: 2.0,
            // max_retries bounds the attempts
            max_elapsed_time: None,
            ..Default::default()
        };

        let mut last_error = None;
        let mut last_status = None;

        for attempt in 0..=self.config.max_retries {
            match self.fetch_once(url).await {
                Ok((status, content)) => {
                    let response_time = start_time.elapsed().as_millis() as u64;
                    info!("Successfully fetched feed: {} ({} bytes)", url, content.len());
                    return FetchResult {
                        url: url.to_string(),
                        success: true,
                        error: None,
                        fetch_time,
                        response_time_ms: response_time,
                        http_status: Some(status),
                        content: Some(content),
                    };
                }
                Err((status, e)) => {
                    last_status = status;
                    let too_large = matches!(e, CompanionError::FeedTooLarge { .. });
                    last_error = Some(e);

                    if too_large || attempt >= self.config.max_retries {
                        break;
                    }
                    match backoff.next_backoff() {
                        Some(delay) => {
                            warn!("Attempt {} failed for {}, retrying in {:?}", attempt + 1, url, delay);
                            tokio::time::sleep(delay).await;
                        }
                        None => break,
                    }
                }
            }
        }

        let error_msg = last_error.map(|e| e.to_string()).unwrap_or_else(|| "Unknown error".to_string());
        error!("Failed to fetch feed {}: {}", url, error_msg);

        FetchResult::failed(url, fetch_time, start_time.elapsed().as_millis() as u64, last_status, error_msg)
    }

    async fn fetch_once(&self, url: &str) -> std::result::Result<(u16, String), (Option<u16>, CompanionError)> {
        let response = self.client.get(url).send().await.map_err(|e| (None::<u16>, CompanionError::from(e)))?;
        let status = response.status();

        if !status.is_success() {
            return Err((
                Some(status.as_u16()),
                CompanionError::General(format!(
                    "HTTP {}: {}",
                    status.as_u16(),
                    status.canonical_reason().unwrap_or("Unknown")
                )),
            ));
        }

        if let Some(content_length) = response.content_length() {
            let size_mb = content_length as usize / (1024 * 1024);
            if size_mb > self.config.max_feed_size_mb {
                return Err((Some(status.as_u16()), CompanionError::FeedTooLarge { size_mb }));
            }
        }

        let content = response.text().await.map_err(|e| (Some(status.as_u16()), CompanionError::from(e)))?;
        Ok((status.as_u16(), content))
    }
}
