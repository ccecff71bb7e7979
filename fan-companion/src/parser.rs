use crate::pub_date::{DateFormats, PubDate};
use crate::rss_utils::feed::{extract_text_from_html, looks_like_html};
use crate::traits::FeedParse;
use crate::types::{CompanionError, NewsItem, Result};
use chrono::Utc;
use feed_rs::parser;
use once_cell::sync::Lazy;
use regex::Regex;
use tracing::{debug, info, warn};

pub const UNTITLED: &str = "Untitled";
pub const PLACEHOLDER_LINK: &str = "#";

const ITEM_MARKER: &str = "<item";
const CDATA_OPEN: &str = "<![CDATA[";
const CDATA_CLOSE: &str = "]]>";

static IMAGE_PATTERNS: Lazy<Vec<Regex>> = Lazy::new(|| {
    [
        r#"(?i)src="(https?://[^"']+?\.(?:jpg|jpeg|png|gif))""#,
        r#"(?i)src='(https?://[^"']+?\.(?:jpg|jpeg|png|gif))'"#,
        r#"(?i)<media:(?:content|thumbnail)[^>]*?url="(https?://[^"']+?\.(?:jpg|jpeg|png|gif))""#,
        r#"(?i)<enclosure[^>]*?url="(https?://[^"']+?\.(?:jpg|jpeg|png|gif))""#,
    ]
    .iter()
    .map(|p| Regex::new(p).expect("image pattern compiles"))
    .collect()
});

/// Scrapes items out of feed text without requiring well-formed XML.
#[derive(Debug, Clone)]
pub struct ChunkFeedParser {
    formats: DateFormats,
    rich_decode: bool,
}

impl Default for ChunkFeedParser {
    fn default() -> Self {
        Self::new(DateFormats::default())
    }
}

impl ChunkFeedParser {
    pub fn new(formats: DateFormats) -> Self {
        Self { formats, rich_decode: true }
    }

    /// Only decode the basic entity table; leave markup in place.
    pub fn with_entity_table_only(mut self) -> Self {
        self.rich_decode = false;
        self
    }

    fn decode(&self, s: &str) -> String {
        if self.rich_decode {
            html_to_text(s)
        } else {
            decode_entity_table(s)
        }
    }

    pub fn parse_chunk(&self, chunk: &str) -> NewsItem {
        let mut fields = FieldCursor::new(chunk);
        let raw_title = fields.next_field("title");
        let raw_link = fields.next_field("link");
        let raw_description = fields.next_field("description");
        let raw_pub_date = fields.next_field("pubDate");

        let title = match raw_title.map(|t| self.decode(&strip_cdata(t))) {
            Some(t) if !t.is_empty() => t,
            _ => {
                debug!("Feed item without title, using placeholder");
                UNTITLED.to_string()
            }
        };

        let link = match raw_link.map(|l| decode_entities(&strip_cdata(l)).trim().to_string()) {
            Some(l) if !l.is_empty() => l,
            _ => {
                debug!("Feed item without link, using placeholder");
                PLACEHOLDER_LINK.to_string()
            }
        };

        let unwrapped_description = raw_description.map(strip_cdata);
        let description = unwrapped_description
            .as_deref()
            .map(|d| self.decode(d))
            .filter(|d| !d.is_empty());

        let published_at = raw_pub_date.map(|raw| {
            let date = PubDate::parse(&strip_cdata(raw), &self.formats);
            if date.parsed.is_none() {
                debug!("Unparseable pubDate {:?}, keeping it verbatim", date.raw);
            }
            date.display(&self.formats)
        });

        let image_url = extract_image_url(chunk).or_else(|| {
            unwrapped_description
                .as_deref()
                .and_then(|d| extract_image_url(&decode_entities(d)))
        });

        NewsItem {
            title,
            link,
            description,
            published_at,
            image_url,
        }
    }
}

impl FeedParse for ChunkFeedParser {
    fn parse_feed(&self, content: &str) -> Vec<NewsItem> {
        debug!("Parsing feed content ({} bytes)", content.len());

        let items: Vec<NewsItem> = content
            .split(ITEM_MARKER)
            .skip(1)
            .map(|chunk| self.parse_chunk(chunk))
            .collect();

        info!("Parsed feed with {} items", items.len());
        items
    }
}

/// Parses well-formed RSS/Atom with `feed-rs`, scraping when the payload does not parse.
#[derive(Debug, Clone, Default)]
pub struct StructuredFeedParser {
    fallback: ChunkFeedParser,
}

impl StructuredFeedParser {
    pub fn new(formats: DateFormats) -> Self {
        Self {
            fallback: ChunkFeedParser::new(formats),
        }
    }

    pub fn try_parse(&self, content: &str) -> Result<Vec<NewsItem>> {
        let feed = parser::parse(content.as_bytes())
            .map_err(|e| CompanionError::Parse(format!("Failed to parse feed: {}", e)))?;

        let formats = &self.fallback.formats;
        let items = feed
            .entries
            .into_iter()
            .map(|entry| {
                let title = entry
                    .title
                    .map(|t| html_to_text(&t.content))
                    .filter(|t| !t.is_empty())
                    .unwrap_or_else(|| UNTITLED.to_string());

                let link = entry
                    .links
                    .first()
                    .map(|l| l.href.trim().to_string())
                    .filter(|l| !l.is_empty())
                    .unwrap_or_else(|| PLACEHOLDER_LINK.to_string());

                let raw_description = entry
                    .summary
                    .map(|s| s.content)
                    .or_else(|| entry.content.and_then(|c| c.body));

                let description = raw_description
                    .as_deref()
                    .map(html_to_text)
                    .filter(|d| !d.is_empty());

                let published_at = entry
                    .published
                    .or(entry.updated)
                    .map(|dt| dt.with_timezone(&Utc).format(&formats.display_layout).to_string());

                let media_url = entry.media.iter().find_map(|media| {
                    media
                        .content
                        .iter()
                        .filter_map(|c| c.url.as_ref().map(|u| u.to_string()))
                        .chain(media.thumbnails.iter().map(|t| t.image.uri.clone()))
                        .find(|u| has_image_extension(u))
                });

                let image_url = media_url.or_else(|| {
                    raw_description
                        .as_deref()
                        .and_then(|d| extract_image_url(&decode_entities(d)))
                });

                NewsItem {
                    title,
                    link,
                    description,
                    published_at,
                    image_url,
                }
            })
            .collect::<Vec<_>>();

        info!("Parsed feed with {} entries", items.len());
        Ok(items)
    }
}

impl FeedParse for StructuredFeedParser {
    fn parse_feed(&self, content: &str) -> Vec<NewsItem> {
        match self.try_parse(content) {
            Ok(items) => items,
            Err(e) => {
                warn!("{}, scraping items instead", e);
                self.fallback.parse_feed(content)
            }
        }
    }
}

/// Walks one item chunk field by field.
///
/// Each lookup starts where the previous field ended. A field that only occurs
/// earlier in the chunk is still found, as long as it does not overlap text
/// already claimed by another field.
struct FieldCursor<'a> {
    chunk: &'a str,
    pos: usize,
    claimed: Vec<(usize, usize)>,
}

impl<'a> FieldCursor<'a> {
    fn new(chunk: &'a str) -> Self {
        Self { chunk, pos: 0, claimed: Vec::new() }
    }

    fn next_field(&mut self, tag: &str) -> Option<&'a str> {
        let open = format!("<{}>", tag);
        let close = format!("</{}>", tag);

        if let Some((start, end)) = self.find_from(self.pos, &open, &close) {
            self.pos = end + close.len();
            return Some(self.claim(start, end, &close));
        }

        let mut from = 0;
        while let Some((start, end)) = self.find_from(from, &open, &close) {
            let outer_start = start - open.len();
            let outer_end = end + close.len();
            let overlaps = self.claimed.iter().any(|&(s, e)| outer_start < e && s < outer_end);
            if !overlaps {
                return Some(self.claim(start, end, &close));
            }
            from = outer_end;
        }
        None
    }

    fn find_from(&self, from: usize, open: &str, close: &str) -> Option<(usize, usize)> {
        let rest = self.chunk.get(from..)?;
        let start = from + rest.find(open)? + open.len();
        let end = start + self.chunk[start..].find(close)?;
        Some((start, end))
    }

    fn claim(&mut self, start: usize, end: usize, close: &str) -> &'a str {
        self.claimed.push((start, end + close.len()));
        &self.chunk[start..end]
    }
}

/// Unwraps a value fully enclosed in a CDATA envelope; anything else is only trimmed.
pub fn strip_cdata(s: &str) -> String {
    let trimmed = s.trim();
    match trimmed.strip_prefix(CDATA_OPEN).and_then(|t| t.strip_suffix(CDATA_CLOSE)) {
        Some(inner) => inner.to_string(),
        None => trimmed.to_string(),
    }
}

/// Decodes the handful of entities feeds commonly carry.
pub fn decode_entity_table(s: &str) -> String {
    s.replace("&amp;", "&")
        .replace("&quot;", "\"")
        .replace("&#39;", "'")
        .replace("&apos;", "'")
        .replace("&lt;", "<")
        .replace("&gt;", ">")
        .replace("&nbsp;", " ")
        .trim()
        .to_string()
}

/// Decodes every named and numeric entity, keeping any markup.
pub fn decode_entities(s: &str) -> String {
    html_escape::decode_html_entities(s).replace('\u{a0}', " ")
}

/// Markup to display text: tags dropped, entities decoded, whitespace collapsed.
pub fn html_to_text(s: &str) -> String {
    let text = if looks_like_html(s) {
        extract_text_from_html(s)
    } else {
        s.to_string()
    };
    let decoded = decode_entities(&text);
    // Entities may have hidden markup, e.g. "&lt;p&gt;"
    if looks_like_html(&decoded) {
        extract_text_from_html(&decoded)
    } else {
        decoded.trim().to_string()
    }
}

fn has_image_extension(url: &str) -> bool {
    let lower = url.to_ascii_lowercase();
    [".jpg", ".jpeg", ".png", ".gif"].iter().any(|ext| lower.ends_with(ext))
}

/// First image URL in an attribute-like context, trying each pattern in turn.
pub fn extract_image_url(text: &str) -> Option<String> {
    IMAGE_PATTERNS
        .iter()
        .find_map(|re| re.captures(text))
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str().to_string())
}
