//! Built-in demo data, used when bundled documents are missing or empty.

use crate::types::{GroupStanding, Match, MatchResult, Poi, PoiCategory, TeamRecord};
use MatchResult::{Draw, Loss, Win};

const CDMX: &str = "Ciudad de México";

#[allow(clippy::too_many_arguments)]
fn team(key: &str, name: &str, wins: u32, draws: u32, losses: u32, goals_for: u32, goals_against: u32, recent: &[MatchResult]) -> TeamRecord {
    TeamRecord {
        country_key: key.to_string(),
        display_name: name.to_string(),
        played: wins + draws + losses,
        wins,
        draws,
        losses,
        goals_for,
        goals_against,
        recent_results: recent.to_vec(),
    }
}

/// Qatar 2022 group stage, groups A to C, final tables.
pub fn demo_groups() -> Vec<GroupStanding> {
    vec![
        GroupStanding {
            name: "Group A".to_string(),
            teams: vec![
                team("netherlands", "Netherlands", 2, 1, 0, 5, 1, &[Win, Draw, Win]),
                team("senegal", "Senegal", 2, 0, 1, 5, 4, &[Loss, Win, Win]),
                team("ecuador", "Ecuador", 1, 1, 1, 4, 3, &[Win, Draw, Loss]),
                team("qatar", "Qatar", 0, 0, 3, 1, 7, &[Loss, Loss, Loss]),
            ],
        },
        GroupStanding {
            name: "Group B".to_string(),
            teams: vec![
                team("england", "England", 2, 1, 0, 9, 2, &[Win, Draw, Win]),
                team("unitedstates", "United States", 1, 2, 0, 2, 1, &[Draw, Draw, Win]),
                team("iran", "Iran", 1, 0, 2, 4, 7, &[Loss, Win, Loss]),
                team("wales", "Wales", 0, 1, 2, 1, 6, &[Draw, Loss, Loss]),
            ],
        },
        GroupStanding {
            name: "Group C".to_string(),
            teams: vec![
                team("argentina", "Argentina", 2, 0, 1, 5, 2, &[Loss, Win, Win]),
                team("poland", "Poland", 1, 1, 1, 2, 2, &[Win, Draw, Loss]),
                team("mexico", "Mexico", 1, 1, 1, 2, 3, &[Draw, Loss, Win]),
                team("saudiarabia", "Saudi Arabia", 1, 0, 2, 3, 5, &[Win, Loss, Loss]),
            ],
        },
    ]
}

pub fn demo_matches() -> Vec<Match> {
    vec![
        Match {
            id: "mx-001".to_string(),
            date_iso: "2026-06-12T18:00:00Z".to_string(),
            city: CDMX.to_string(),
            venue_name: "Estadio Azteca".to_string(),
            teams: vec!["mexico".to_string(), "germany".to_string()],
            stage: "Opening match".to_string(),
            favorite: true,
        },
        Match {
            id: "mx-002".to_string(),
            date_iso: "2026-06-13T19:00:00Z".to_string(),
            city: "Guadalajara".to_string(),
            venue_name: "Estadio Akron".to_string(),
            teams: vec!["brazil".to_string(), "switzerland".to_string()],
            stage: "Group stage".to_string(),
            favorite: false,
        },
    ]
}

#[allow(clippy::too_many_arguments)]
fn poi(id: &str, name: &str, category: PoiCategory, lat: f64, lon: f64, price: Option<&str>, hours: &str, tags: &[&str]) -> Poi {
    Poi {
        id: id.to_string(),
        name: name.to_string(),
        category,
        city: CDMX.to_string(),
        latitude: lat,
        longitude: lon,
        price_range: price.map(str::to_string),
        hours: Some(hours.to_string()),
        tags: Some(tags.iter().map(|t| t.to_string()).collect()),
    }
}

/// Mexico City points of interest.
pub fn demo_pois() -> Vec<Poi> {
    use PoiCategory::*;
    vec![
        poi("poi-templo-mayor", "Templo Mayor", Landmark, 19.4351, -99.1310, Some("$"), "09:00-17:00", &["centro", "arqueología"]),
        poi("poi-museo-nal", "Museo Nacional de Antropología", Museum, 19.4260, -99.1860, Some("$$"), "09:00-18:00", &["imperdible"]),
        poi("poi-tacos", "Taquería El Ídolo", Food, 19.4270, -99.1670, Some("$"), "13:00-01:00", &["tacos", "rápido"]),
        poi("poi-bar", "La Mundialista", Bar, 19.4205, -99.1630, Some("$$"), "17:00-02:00", &["pantallas"]),
        poi("poi-cambio-1", "Casa de Cambio Reforma", Exchange, 19.4280, -99.1675, None, "09:00-19:00", &["dólares", "euros"]),
        poi("poi-cambio-2", "Money Exchange Centro", Exchange, 19.4330, -99.1330, None, "10:00-18:00", &["mejor tasa"]),
        poi("poi-cambio-3", "Cambio Express Insurgentes", Exchange, 19.4190, -99.1678, None, "09:30-19:30", &["rápido"]),
        poi("poi-hotel-1", "Hotel Azteca Centro", Hotel, 19.4310, -99.1400, Some("$$$"), "24h", &["4 estrellas", "wifi"]),
        poi("poi-hotel-2", "CDMX Suites", Hotel, 19.4255, -99.1605, Some("$$"), "24h", &["económico", "céntrico"]),
        poi("poi-hotel-3", "Reforma Palace", Hotel, 19.4278, -99.1635, Some("$$$$"), "24h", &["lujo", "spa"]),
        poi("poi-hotel-4", "Zócalo Inn", Hotel, 19.4326, -99.1332, Some("$$"), "24h", &["histórico", "vista"]),
    ]
}
