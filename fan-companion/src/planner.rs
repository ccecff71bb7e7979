use crate::types::{HostedPlannerConfig, Itinerary, ItineraryAgent, Match, PlanInput, Poi, Result};
use anyhow::{ensure, Context};
use async_trait::async_trait;
use chrono::Local;
use interfaces::BaselineItineraryAgent;
use reqwest::Client;
use serde::Serialize;
use std::time::Duration;
use tracing::{debug, info, warn};

/// Plan with the offline rule-based planner for today.
pub fn generate_itinerary(input: &PlanInput, matches: &[Match], pois: &[Poi]) -> Itinerary {
    BaselineItineraryAgent::plan_for_day(input, matches, pois, Local::now().date_naive())
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct PlanRequest<'a> {
    #[serde(skip_serializing_if = "Option::is_none")]
    model: Option<&'a str>,
    input: &'a PlanInput,
    matches: &'a [Match],
    pois: &'a [Poi],
}

/// Delegates planning to a remote service, planning locally whenever it cannot.
pub struct HostedPlanner {
    client: Client,
    config: HostedPlannerConfig,
}

impl HostedPlanner {
    pub fn new(config: HostedPlannerConfig) -> Result<Self> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_seconds))
            .build()?;
        Ok(Self { client, config })
    }

    async fn request_itinerary(&self, input: &PlanInput, matches: &[Match], pois: &[Poi]) -> anyhow::Result<Itinerary> {
        let request = PlanRequest {
            model: self.config.model.as_deref(),
            input,
            matches,
            pois,
        };

        debug!("Requesting itinerary for {} from {}", input.city, self.config.endpoint);

        let resp = self
            .client
            .post(&self.config.endpoint)
            .json(&request)
            .send()
            .await
            .with_context(|| format!("Request failed for {}", self.config.endpoint))?;

        let resp = resp
            .error_for_status()
            .with_context(|| format!("HTTP error for {}", self.config.endpoint))?;

        let itinerary: Itinerary = resp
            .json()
            .await
            .with_context(|| format!("Decoding itinerary from {}", self.config.endpoint))?;

        ensure!(!itinerary.blocks.is_empty(), "{} returned an itinerary without blocks", self.config.endpoint);
        Ok(itinerary)
    }
}

#[async_trait]
impl ItineraryAgent for HostedPlanner {
    fn agent_name(&self) -> String {
        match &self.config.model {
            Some(model) => format!("Hosted planner ({})", model),
            None => "Hosted planner".to_string(),
        }
    }

    async fn generate_itinerary(&self, input: &PlanInput, matches: &[Match], pois: &[Poi]) -> Itinerary {
        match self.request_itinerary(input, matches, pois).await {
            Ok(itinerary) => {
                info!("Hosted planner returned {} blocks", itinerary.blocks.len());
                itinerary
            }
            Err(e) => {
                warn!("Hosted planner failed, planning locally: {:#}", e);
                generate_itinerary(input, matches, pois)
            }
        }
    }
}
