use crate::fixtures::demo_pois;
use crate::types::{Match, Poi, PoiCategory, Result};
use chrono::{DateTime, Utc};
use interfaces::defs::city_matches;
use tracing::{info, warn};

const SUGGESTED_CATEGORIES: [PoiCategory; 3] = [PoiCategory::Food, PoiCategory::Museum, PoiCategory::Landmark];

/// Read-only reference data: matches and points of interest.
///
/// The only mutation is the per-match favorite flag.
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    matches: Vec<Match>,
    pois: Vec<Poi>,
}

impl Catalog {
    pub fn new(matches: Vec<Match>, pois: Vec<Poi>) -> Self {
        Self { matches, pois }
    }

    pub fn decode_matches(json: &str) -> Result<Vec<Match>> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn decode_pois(json: &str) -> Result<Vec<Poi>> {
        Ok(serde_json::from_str(json)?)
    }

    /// Build from bundled JSON documents. A malformed matches document yields no
    /// matches; a malformed or empty POI document yields the demo POIs.
    pub fn from_json(matches_json: &str, pois_json: &str) -> Self {
        let matches = Self::decode_matches(matches_json).unwrap_or_else(|e| {
            warn!("Could not decode matches: {}", e);
            Vec::new()
        });
        info!("Matches loaded: {}", matches.len());

        let mut pois = Self::decode_pois(pois_json).unwrap_or_else(|e| {
            warn!("Could not decode points of interest: {}", e);
            Vec::new()
        });
        if pois.is_empty() {
            pois = demo_pois();
            info!("Points of interest loaded from demo data: {}", pois.len());
        } else {
            info!("Points of interest loaded: {}", pois.len());
        }

        Self { matches, pois }
    }

    pub fn matches(&self) -> &[Match] {
        &self.matches
    }

    pub fn pois(&self) -> &[Poi] {
        &self.pois
    }

    /// POIs whose city contains `city`, ignoring case. No city (or an empty one) means all.
    pub fn pois_in_city(&self, city: Option<&str>) -> Vec<&Poi> {
        match city.filter(|c| !c.is_empty()) {
            Some(c) => self.pois.iter().filter(|p| city_matches(&p.city, c)).collect(),
            None => self.pois.iter().collect(),
        }
    }

    pub fn in_category(&self, city: Option<&str>, category: PoiCategory, limit: usize) -> Vec<&Poi> {
        self.pois_in_city(city)
            .into_iter()
            .filter(|p| p.category == category)
            .take(limit)
            .collect()
    }

    /// Food, museums and landmarks worth a visit.
    pub fn suggestions(&self, city: Option<&str>, limit: usize) -> Vec<&Poi> {
        self.pois_in_city(city)
            .into_iter()
            .filter(|p| SUGGESTED_CATEGORIES.contains(&p.category))
            .take(limit)
            .collect()
    }

    pub fn hotels(&self, city: Option<&str>, limit: usize) -> Vec<Poi> {
        self.with_demo_fallback(city, PoiCategory::Hotel, limit)
    }

    pub fn exchanges(&self, city: Option<&str>, limit: usize) -> Vec<Poi> {
        self.with_demo_fallback(city, PoiCategory::Exchange, limit)
    }

    fn with_demo_fallback(&self, city: Option<&str>, category: PoiCategory, limit: usize) -> Vec<Poi> {
        let found: Vec<Poi> = self.in_category(city, category, limit).into_iter().cloned().collect();
        if !found.is_empty() {
            return found;
        }
        let city = city.filter(|c| !c.is_empty());
        demo_pois()
            .into_iter()
            .filter(|p| p.category == category)
            .filter(|p| city.map_or(true, |c| city_matches(&p.city, c)))
            .take(limit)
            .collect()
    }

    /// Free-text search over name, city and tags, optionally within one category.
    pub fn search(&self, text: &str, category: Option<PoiCategory>) -> Vec<&Poi> {
        let needle = text.trim().to_lowercase();
        self.pois
            .iter()
            .filter(|p| category.map_or(true, |c| p.category == c))
            .filter(|p| {
                needle.is_empty()
                    || p.name.to_lowercase().contains(&needle)
                    || p.city.to_lowercase().contains(&needle)
                    || p.tags
                        .as_ref()
                        .is_some_and(|tags| tags.iter().any(|t| t.to_lowercase().contains(&needle)))
            })
            .collect()
    }

    /// Earliest match kicking off at or after `now`; the first listed match otherwise.
    pub fn next_match(&self, now: DateTime<Utc>) -> Option<&Match> {
        let mut by_date: Vec<(&Match, DateTime<Utc>)> = self.matches.iter().map(|m| (m, m.date())).collect();
        by_date.sort_by_key(|(_, date)| *date);
        by_date
            .into_iter()
            .find(|(_, date)| *date >= now)
            .map(|(m, _)| m)
            .or_else(|| self.matches.first())
    }

    /// Flip a match's favorite flag. Returns the new value, or `None` for an unknown id.
    pub fn toggle_favorite(&mut self, match_id: &str) -> Option<bool> {
        let game = self.matches.iter_mut().find(|m| m.id == match_id)?;
        game.favorite = !game.favorite;
        Some(game.favorite)
    }

    pub fn favorite_matches(&self) -> Vec<&Match> {
        self.matches.iter().filter(|m| m.favorite).collect()
    }
}
