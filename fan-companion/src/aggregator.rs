use crate::parser::ChunkFeedParser;
use crate::sources::FeedSource;
use crate::traits::FeedParse;
use crate::types::{AggregatorConfig, FetchConfig, FetchResult, NewsItem, Result};
use crate::Fetcher;
use tracing::{error, info, warn};

/// Aggregate `sources` with the default fetch settings, parser and display budget.
pub async fn fetch_and_aggregate_news(sources: &[FeedSource]) -> Vec<NewsItem> {
    match NewsAggregator::with_defaults() {
        Ok(aggregator) => aggregator.fetch_and_aggregate_news(sources).await,
        Err(e) => {
            error!("Could not set up the news aggregator: {}", e);
            Vec::new()
        }
    }
}

/// Fetches every source, parses what arrived and merges it into one list.
///
/// Order is source order, then order within the source. Nothing is
/// deduplicated or re-sorted by date.
pub struct NewsAggregator {
    fetcher: Fetcher,
    parser: Box<dyn FeedParse>,
    config: AggregatorConfig,
}

impl NewsAggregator {
    pub fn new(fetch_config: FetchConfig, parser: Box<dyn FeedParse>, config: AggregatorConfig) -> Result<Self> {
        Ok(Self {
            fetcher: Fetcher::new(fetch_config)?,
            parser,
            config,
        })
    }

    pub fn with_defaults() -> Result<Self> {
        Self::new(
            FetchConfig::default(),
            Box::new(ChunkFeedParser::default()),
            AggregatorConfig::default(),
        )
    }

    /// One aggregation cycle over `sources`.
    ///
    /// Dropping the returned future abandons in-flight fetches; nothing is
    /// shared between them, so no partial state is left behind.
    pub async fn fetch_and_aggregate_news(&self, sources: &[FeedSource]) -> Vec<NewsItem> {
        let urls: Vec<String> = sources.iter().map(|s| s.url.clone()).collect();
        let results = self.fetcher.fetch_all(&urls).await;
        self.aggregate(&results)
    }

    /// Parse successful fetch results and merge them within the display budget.
    pub fn aggregate(&self, results: &[FetchResult]) -> Vec<NewsItem> {
        let mut failed = 0;
        let per_source: Vec<Vec<NewsItem>> = results
            .iter()
            .map(|result| match (&result.content, result.success) {
                (Some(content), true) => self.parser.parse_feed(content),
                _ => {
                    failed += 1;
                    warn!(
                        "Source {} contributes nothing: {}",
                        result.url,
                        result.error.as_deref().unwrap_or("no content")
                    );
                    Vec::new()
                }
            })
            .collect();

        let found: usize = per_source.iter().map(Vec::len).sum();
        let items = merge_in_order(per_source, self.config.max_items);

        info!(
            "Aggregated {} sources ({} failed): kept {} of {} items",
            results.len(),
            failed,
            items.len(),
            found
        );
        items
    }
}

/// Concatenate per-source lists in order and keep the first `max_items`.
pub fn merge_in_order(per_source: Vec<Vec<NewsItem>>, max_items: usize) -> Vec<NewsItem> {
    per_source.into_iter().flatten().take(max_items).collect()
}
