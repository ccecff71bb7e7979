use async_trait::async_trait;
use chrono::{Local, NaiveDate, NaiveDateTime};
use tracing::debug;
use uuid::Uuid;

use crate::defs::{Itinerary, ItineraryAgent, ItineraryBlock, Match, PlanInput, Poi, PoiCategory};

pub const EARLIEST_HOUR: i32 = 7;
pub const LATEST_HOUR: i32 = 23;

pub const LOCAL_PLAN_NOTE: &str = "Plan generated locally by the offline planner.";

/// Clamps a requested clock hour into the planning day.
pub fn clamp_hour(hour: i32) -> u32 {
    hour.clamp(EARLIEST_HOUR, LATEST_HOUR) as u32
}

fn at_hour(day: NaiveDate, hour: i32) -> NaiveDateTime {
    day.and_hms_opt(clamp_hour(hour), 0, 0)
        .unwrap_or_else(|| day.and_time(chrono::NaiveTime::MIN))
}

fn block(day: NaiveDate, start_hour: i32, end_hour: i32, title: String, poi_id: Option<String>) -> ItineraryBlock {
    ItineraryBlock {
        id: Uuid::new_v4(),
        start_time: at_hour(day, start_hour),
        end_time: at_hour(day, end_hour),
        title,
        poi_id,
    }
}

fn first_poi<'a>(pois: &'a [Poi], city: &str, category: PoiCategory) -> Option<&'a Poi> {
    pois.iter().find(|poi| poi.category == category && poi.is_in_city(city))
}

/// Rule-based planner: a match, a meal before it and a bar to close the day.
pub struct BaselineItineraryAgent;

impl BaselineItineraryAgent {
    pub fn plan_for_day(input: &PlanInput, matches: &[Match], pois: &[Poi], day: NaiveDate) -> Itinerary {
        let mut blocks = Vec::new();

        if let Some(game) = matches.iter().find(|m| m.is_in_city(&input.city)) {
            debug!("Planning match {} in {}", game.id, game.city);
            blocks.push(block(
                day,
                input.start_hour + 2,
                input.start_hour + 4,
                format!("Match: {} @ {}", game.teams.join(" vs "), game.venue_name),
                None,
            ));
        }

        if input.want_food {
            if let Some(food) = first_poi(pois, &input.city, PoiCategory::Food) {
                debug!("Planning meal at {}", food.id);
                blocks.insert(0, block(
                    day,
                    input.start_hour,
                    input.start_hour + 1,
                    format!("Eat at {}", food.name),
                    Some(food.id.clone()),
                ));
            }
        }

        if input.want_bars {
            if let Some(bar) = first_poi(pois, &input.city, PoiCategory::Bar) {
                debug!("Planning bar {}", bar.id);
                blocks.push(block(
                    day,
                    input.end_hour - 2,
                    input.end_hour,
                    format!("Bar: {}", bar.name),
                    Some(bar.id.clone()),
                ));
            }
        }

        if blocks.is_empty() {
            debug!("Nothing matched {}, planning a free walk", input.city);
            blocks.push(block(
                day,
                input.start_hour,
                input.end_hour,
                format!("Free walk around {}", input.city),
                None,
            ));
        }

        Itinerary {
            id: Uuid::new_v4(),
            date: day,
            blocks,
            notes: Some(LOCAL_PLAN_NOTE.to_owned()),
        }
    }
}

#[async_trait]
impl ItineraryAgent for BaselineItineraryAgent {
    fn agent_name(&self) -> String {
        "Baseline planner".to_owned()
    }

    async fn generate_itinerary(&self, input: &PlanInput, matches: &[Match], pois: &[Poi]) -> Itinerary {
        Self::plan_for_day(input, matches, pois, Local::now().date_naive())
    }
}
