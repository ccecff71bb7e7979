use crate::sources::FeedSource;

pub const ESPN_SOCCER: &str = "https://www.espn.com/espn/rss/soccer/news";
pub const BBC_FOOTBALL: &str = "https://feeds.bbci.co.uk/sport/football/rss.xml";
pub const MARCA_INTERNACIONAL: &str = "https://www.marca.com/rss/futbol/internacional.xml";
pub const AS_ULTIMAS: &str = "https://as.com/rss/tags/ultimas_noticias.xml";

/// The football feeds aggregated by default, in display order.
pub fn default_sources() -> Vec<FeedSource> {
    vec![
        FeedSource::new("ESPN", ESPN_SOCCER),
        FeedSource::new("BBC", BBC_FOOTBALL),
        FeedSource::new("Marca", MARCA_INTERNACIONAL),
        FeedSource::new("AS", AS_ULTIMAS),
    ]
}

/// Outlet label for an item link.
pub fn source_name_for_link(link: &str) -> &'static str {
    if link.contains("espn.com") {
        "ESPN"
    } else if link.contains("bbci.co.uk") || link.contains("bbc.co.uk") {
        "BBC"
    } else if link.contains("marca.com") {
        "Marca"
    } else if link.contains("as.com") {
        "AS"
    } else {
        "News"
    }
}
