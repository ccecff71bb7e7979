use chrono::{DateTime, FixedOffset, Utc};

/// Layouts tried, in order, after RFC 2822.
pub const DEFAULT_LAYOUTS: &[&str] = &[
    "%a, %d %b %Y %H:%M:%S %z",
    "%a, %d %b %Y %H:%M %z",
    "%d %b %Y %H:%M:%S %z",
];

pub const DEFAULT_DISPLAY_LAYOUT: &str = "%b %-d, %Y %H:%M";

#[derive(Debug, Clone)]
pub struct DateFormats {
    pub layouts: Vec<String>,
    pub display_layout: String,
}

impl Default for DateFormats {
    fn default() -> Self {
        Self {
            layouts: DEFAULT_LAYOUTS.iter().map(|l| l.to_string()).collect(),
            display_layout: DEFAULT_DISPLAY_LAYOUT.to_string(),
        }
    }
}

/// A feed timestamp: the value as published plus whatever we could make of it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PubDate {
    pub raw: String,
    pub parsed: Option<DateTime<FixedOffset>>,
}

impl PubDate {
    pub fn parse(raw: &str, formats: &DateFormats) -> Self {
        let trimmed = raw.trim();
        let parsed = DateTime::parse_from_rfc2822(trimmed)
            .ok()
            .or_else(|| {
                formats
                    .layouts
                    .iter()
                    .find_map(|layout| DateTime::parse_from_str(trimmed, layout).ok())
            })
            .or_else(|| DateTime::parse_from_rfc3339(trimmed).ok());

        Self {
            raw: trimmed.to_string(),
            parsed,
        }
    }

    pub fn to_utc(&self) -> Option<DateTime<Utc>> {
        self.parsed.map(|dt| dt.with_timezone(&Utc))
    }

    /// Formatted timestamp in UTC, or the raw value when nothing parsed.
    pub fn display(&self, formats: &DateFormats) -> String {
        match self.to_utc() {
            Some(dt) => dt.format(&formats.display_layout).to_string(),
            None => self.raw.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn display(raw: &str) -> String {
        let formats = DateFormats::default();
        PubDate::parse(raw, &formats).display(&formats)
    }

    #[test]
    fn parses_rfc2822() {
        assert_eq!(display("Mon, 02 Jan 2006 15:04:05 +0000"), "Jan 2, 2006 15:04");
        assert_eq!(display("Mon, 02 Jan 2006 15:04:05 GMT"), "Jan 2, 2006 15:04");
    }

    #[test]
    fn normalizes_offsets_to_utc() {
        assert_eq!(display("Mon, 02 Jan 2006 10:04:05 -0500"), "Jan 2, 2006 15:04");
    }

    #[test]
    fn accepts_fallback_layouts() {
        assert_eq!(display("Mon, 02 Jan 2006 15:04 +0000"), "Jan 2, 2006 15:04");
        assert_eq!(display("02 Jan 2006 15:04:05 +0000"), "Jan 2, 2006 15:04");
        assert_eq!(display("2006-01-02T15:04:05Z"), "Jan 2, 2006 15:04");
    }

    #[test]
    fn keeps_unparseable_values_verbatim() {
        let formats = DateFormats::default();
        let date = PubDate::parse("  hace 5 minutos ", &formats);
        assert!(date.parsed.is_none());
        assert_eq!(date.display(&formats), "hace 5 minutos");
    }
}
