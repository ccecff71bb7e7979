use crate::types::NewsItem;

/// Turns a raw feed payload into news items, in payload order.
///
/// Implementations degrade instead of failing: a payload with nothing usable
/// yields an empty list.
pub trait FeedParse: Send + Sync {
    fn parse_feed(&self, content: &str) -> Vec<NewsItem>;
}
