pub mod feed_source;
pub mod football;

pub use feed_source::FeedSource;
pub use football::{default_sources, source_name_for_link};
