//! Trend orchestration: observations in, risk trend points out.

use crate::Result;
use crate::config::CycloneWatchConfig;
use crate::models::{Coordinate, Observation, TrendPoint};
use crate::risk::RiskModel;
use crate::weather::WeatherClient;
use tracing::debug;

/// Builds the public output of the crate: an ordered series of daily
/// [`TrendPoint`] records for a coordinate.
pub struct TrendBuilder {
    client: WeatherClient,
    model: RiskModel,
}

impl TrendBuilder {
    /// Create a builder from an already-constructed client and model
    #[must_use]
    pub fn new(client: WeatherClient, model: RiskModel) -> Self {
        Self { client, model }
    }

    /// Create a builder from configuration.
    ///
    /// # Errors
    ///
    /// Returns a configuration error when the weather client cannot be
    /// constructed.
    pub fn from_config(config: &CycloneWatchConfig) -> Result<Self> {
        let client = WeatherClient::new(config.weather.clone())?;
        let model = RiskModel::new(config.risk.clone());
        Ok(Self::new(client, model))
    }

    /// Build `days` trend points ending today, oldest first.
    ///
    /// One point per observation, date-for-date; never fails and never
    /// returns fewer than `days` points because the underlying fetch falls
    /// back to synthetic observations when the provider is unavailable.
    pub async fn build_trend(&self, location: &Coordinate, days: u32) -> Vec<TrendPoint> {
        let observations = self.client.fetch_observations(location, days).await;
        debug!(
            "Deriving {} trend points for {}",
            observations.len(),
            location.format()
        );
        observations
            .iter()
            .map(|obs| self.trend_point(obs, location))
            .collect()
    }

    /// Map one observation to its trend point. Field mapping and one-decimal
    /// rounding only; the scoring lives in [`RiskModel`].
    #[must_use]
    pub fn trend_point(&self, obs: &Observation, location: &Coordinate) -> TrendPoint {
        TrendPoint {
            date: obs.date,
            risk_score: self.model.score(obs, location),
            temperature: round1(obs.temperature),
            coverage: round1(obs.cloud_cover),
            cyclone_activity: round1(self.model.activity(obs, location)),
        }
    }
}

/// Round to one decimal place, half away from zero
fn round1(value: f32) -> f32 {
    (value * 10.0).round() / 10.0
}
