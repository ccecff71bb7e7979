use std::collections::BTreeSet;

use async_trait::async_trait;
use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::warn;
use uuid::Uuid;

/// City used when the user has not picked one yet.
pub const DEFAULT_CITY: &str = "Ciudad de México";

/// One normalized entry of a syndication feed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewsItem {
    pub title: String,
    pub link: String,
    pub description: Option<String>,
    /// Display text: the formatted timestamp, or the raw feed value when it could not be parsed.
    pub published_at: Option<String>,
    pub image_url: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MatchResult {
    Win,
    Draw,
    Loss,
}

/// A team's line in a group table.
///
/// `played == wins + draws + losses` and at most five `recent_results` are assumed,
/// not enforced here.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TeamRecord {
    pub country_key: String,
    pub display_name: String,
    pub played: u32,
    pub wins: u32,
    pub draws: u32,
    pub losses: u32,
    pub goals_for: u32,
    pub goals_against: u32,
    #[serde(default)]
    pub recent_results: Vec<MatchResult>,
}

impl TeamRecord {
    pub fn goal_difference(&self) -> i64 {
        i64::from(self.goals_for) - i64::from(self.goals_against)
    }

    /// Saturates instead of overflowing on nonsense records.
    pub fn points(&self) -> u32 {
        self.wins.saturating_mul(3).saturating_add(self.draws)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GroupStanding {
    pub name: String,
    pub teams: Vec<TeamRecord>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PoiCategory {
    Stadium,
    Food,
    Bar,
    Museum,
    Landmark,
    Hotel,
    Exchange,
}

/// Point of interest.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Poi {
    pub id: String,
    pub name: String,
    pub category: PoiCategory,
    pub city: String,
    pub latitude: f64,
    pub longitude: f64,
    #[serde(default)]
    pub price_range: Option<String>,
    #[serde(default)]
    pub hours: Option<String>,
    #[serde(default)]
    pub tags: Option<Vec<String>>,
}

impl Poi {
    pub fn is_in_city(&self, city: &str) -> bool {
        city_matches(&self.city, city)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Match {
    pub id: String,
    #[serde(rename = "dateISO")]
    pub date_iso: String,
    pub city: String,
    pub venue_name: String,
    pub teams: Vec<String>,
    pub stage: String,
    #[serde(default)]
    pub favorite: bool,
}

impl Match {
    /// Kickoff time, or `None` when `date_iso` is not an ISO-8601 timestamp.
    pub fn try_date(&self) -> Option<DateTime<Utc>> {
        DateTime::parse_from_rfc3339(&self.date_iso)
            .map(|dt| dt.with_timezone(&Utc))
            .ok()
    }

    /// Kickoff time, substituting the current instant for an unparseable `date_iso`.
    pub fn date(&self) -> DateTime<Utc> {
        self.try_date().unwrap_or_else(|| {
            warn!("Match {} has unparseable date {:?}, using now", self.id, self.date_iso);
            Utc::now()
        })
    }

    pub fn home(&self) -> &str {
        self.teams.first().map(String::as_str).unwrap_or("Home")
    }

    pub fn away(&self) -> &str {
        self.teams.get(1).map(String::as_str).unwrap_or("Away")
    }

    pub fn is_in_city(&self, city: &str) -> bool {
        city_matches(&self.city, city)
    }
}

/// Case-insensitive containment of `wanted` within `candidate`.
pub fn city_matches(candidate: &str, wanted: &str) -> bool {
    candidate.to_lowercase().contains(&wanted.to_lowercase())
}

/// One planning request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlanInput {
    pub city: String,
    pub start_hour: i32,
    pub end_hour: i32,
    pub want_food: bool,
    pub want_bars: bool,
    pub budget: u32,
    #[serde(default)]
    pub diets: BTreeSet<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ItineraryBlock {
    #[serde(default = "Uuid::new_v4")]
    pub id: Uuid,
    pub start_time: NaiveDateTime,
    pub end_time: NaiveDateTime,
    pub title: String,
    #[serde(default)]
    pub poi_id: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Itinerary {
    #[serde(default = "Uuid::new_v4")]
    pub id: Uuid,
    pub date: NaiveDate,
    pub blocks: Vec<ItineraryBlock>,
    #[serde(default)]
    pub notes: Option<String>,
}

/// User preferences. Owned by the caller and handed to whatever needs them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserPrefs {
    pub budget_per_day: u32,
    pub diets: BTreeSet<String>,
    /// 0 (quiet) to 3 (late nights).
    pub nightlife_level: u8,
    pub fav_teams: Vec<String>,
    pub current_city: Option<String>,
}

impl Default for UserPrefs {
    fn default() -> Self {
        Self {
            budget_per_day: 800,
            diets: BTreeSet::new(),
            nightlife_level: 2,
            fav_teams: Vec::new(),
            current_city: None,
        }
    }
}

impl UserPrefs {
    pub fn city(&self) -> &str {
        self.current_city.as_deref().unwrap_or(DEFAULT_CITY)
    }

    pub fn plan_input(&self, start_hour: i32, end_hour: i32, want_food: bool, want_bars: bool) -> PlanInput {
        PlanInput {
            city: self.city().to_owned(),
            start_hour,
            end_hour,
            want_food,
            want_bars,
            budget: self.budget_per_day,
            diets: self.diets.clone(),
        }
    }

    pub fn is_favorite_team(&self, team: &str) -> bool {
        self.fav_teams.iter().any(|t| t.eq_ignore_ascii_case(team))
    }
}

// Object style note:
// Agents are expected to hold configuration only. Everything a plan depends on
// arrives through the arguments, so two calls with the same inputs on the same
// day produce the same blocks (ids aside).

/// Something that turns a planning request into an itinerary.
///
/// Implementations never fail: when they cannot do better they return the
/// fallback "free walk" plan.
#[async_trait]
pub trait ItineraryAgent: Send + Sync {
    fn agent_name(&self) -> String;

    async fn generate_itinerary(&self, input: &PlanInput, matches: &[Match], pois: &[Poi]) -> Itinerary;
}
