pub mod types;
pub mod traits;
pub mod rss_utils;
pub mod fetcher;
pub mod pub_date;
pub mod parser;
pub mod sources;
pub mod aggregator;
pub mod standings;
pub mod fixtures;
pub mod catalog;
pub mod planner;

pub use types::*;
pub use traits::FeedParse;
pub use fetcher::Fetcher;
pub use pub_date::{DateFormats, PubDate};
pub use parser::{ChunkFeedParser, StructuredFeedParser};
pub use sources::{default_sources, source_name_for_link, FeedSource};
pub use aggregator::{fetch_and_aggregate_news, NewsAggregator};
pub use standings::{rank, rank_all, rank_group};
pub use catalog::Catalog;
pub use planner::{generate_itinerary, HostedPlanner};
pub use interfaces::BaselineItineraryAgent;
