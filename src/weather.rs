//! Open-Meteo client for daily historical observations and current
//! conditions, with a synthetic fallback so trend consumers never see an
//! empty series.

use crate::config::WeatherConfig;
use crate::geo;
use crate::models::{Coordinate, CurrentConditions, Observation};
use crate::{CycloneWatchError, Result};
use anyhow::{Context, anyhow};
use chrono::{Duration, NaiveDate, Utc};
use rand::RngExt;
use std::time;
use tracing::{debug, warn};

/// Daily mean variables requested from the historical endpoint
const DAILY_VARIABLES: &str = "temperature_2m_mean,relative_humidity_2m_mean,cloud_cover_mean,surface_pressure_mean,wind_speed_10m_mean,precipitation_sum";

/// Instantaneous variables requested from the forecast endpoint
const CURRENT_VARIABLES: &str =
    "temperature_2m,relative_humidity_2m,cloud_cover,surface_pressure,wind_speed_10m,precipitation";

/// HTTP client for the weather provider.
///
/// Configuration is injected explicitly; there is no global lookup, so
/// tests can point the client anywhere.
pub struct WeatherClient {
    client: reqwest::Client,
    config: WeatherConfig,
}

impl WeatherClient {
    /// Create a new client from explicit configuration.
    ///
    /// # Errors
    ///
    /// Returns a configuration error when the underlying HTTP client
    /// cannot be built.
    pub fn new(config: WeatherConfig) -> Result<Self> {
        let timeout = time::Duration::from_secs(config.timeout_seconds.into());

        let client = reqwest::Client::builder()
            .timeout(timeout)
            .user_agent(concat!("CycloneWatch/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(|e| CycloneWatchError::config(format!("Failed to create HTTP client: {e}")))?;

        Ok(Self { client, config })
    }

    /// Fetch `days` daily observations ending today, oldest first.
    ///
    /// Never fails: on any transport error, non-success status or
    /// response-shape mismatch the provider is abandoned (no retry) and a
    /// synthetic series of the same shape is produced instead. The degraded
    /// path is visible only as a warn-level diagnostic.
    pub async fn fetch_observations(&self, location: &Coordinate, days: u32) -> Vec<Observation> {
        let end = Utc::now().date_naive();

        match self.try_fetch_observations(location, days, end).await {
            Ok(observations) => observations,
            Err(error) => {
                warn!(
                    "Weather provider unavailable for {}, generating synthetic observations: {error:#}",
                    location.format()
                );
                let mut rng = rand::rng();
                synthetic_observations(location, days, end, &mut rng)
            }
        }
    }

    async fn try_fetch_observations(
        &self,
        location: &Coordinate,
        days: u32,
        end: NaiveDate,
    ) -> anyhow::Result<Vec<Observation>> {
        let start = end - Duration::days(i64::from(days));
        let mut url = format!(
            "{}/historical?latitude={}&longitude={}&start_date={}&end_date={}&daily={}&timezone=auto",
            self.config.base_url, location.lat, location.lng, start, end, DAILY_VARIABLES
        );
        if let Some(api_key) = &self.config.api_key {
            url.push_str(&format!("&apikey={api_key}"));
        }

        debug!("Requesting historical observations: {url}");
        let response = self.client.get(&url).send().await?;
        if !response.status().is_success() {
            return Err(anyhow!("weather API returned status {}", response.status()));
        }

        let historical: openmeteo::HistoricalResponse = response
            .json()
            .await
            .with_context(|| "Failed to parse OpenMeteo historical response")?;

        let daily = historical
            .daily
            .ok_or_else(|| anyhow!("response missing daily block"))?;
        let len = daily.time.len();
        let temperature = expect_series(daily.temperature, "temperature_2m_mean", len)?;
        let humidity = expect_series(daily.humidity, "relative_humidity_2m_mean", len)?;
        let cloud_cover = expect_series(daily.cloud_cover, "cloud_cover_mean", len)?;
        let pressure = expect_series(daily.pressure, "surface_pressure_mean", len)?;
        let wind_speed = expect_series(daily.wind_speed, "wind_speed_10m_mean", len)?;
        let precipitation = expect_series(daily.precipitation, "precipitation_sum", len)?;

        let mut observations = Vec::with_capacity(len);
        for i in 0..len {
            let date = daily.time[i]
                .parse::<NaiveDate>()
                .with_context(|| format!("unparseable date in response: {}", daily.time[i]))?;
            observations.push(Observation {
                date,
                temperature: temperature[i],
                humidity: humidity[i],
                cloud_cover: cloud_cover[i],
                pressure: pressure[i],
                wind_speed: wind_speed[i],
                precipitation: precipitation[i],
            });
        }

        // The requested window spans days + 1 calendar dates; keep the
        // trailing `days` so the series ends at today with exact length.
        let days = days as usize;
        if observations.len() < days {
            return Err(anyhow!(
                "provider returned {} rows, expected at least {days}",
                observations.len()
            ));
        }
        observations.drain(..observations.len() - days);

        debug!(
            "Fetched {} observations for {}",
            observations.len(),
            location.format()
        );
        Ok(observations)
    }

    /// Fetch a single live reading.
    ///
    /// Returns `None` on any failure; unlike the trend series there is no
    /// synthetic fallback here. A chart must never go empty, a single live
    /// reading may legitimately be absent.
    pub async fn fetch_current(&self, location: &Coordinate) -> Option<CurrentConditions> {
        match self.try_fetch_current(location).await {
            Ok(current) => Some(current),
            Err(error) => {
                warn!(
                    "Current conditions unavailable for {}: {error:#}",
                    location.format()
                );
                None
            }
        }
    }

    async fn try_fetch_current(&self, location: &Coordinate) -> anyhow::Result<CurrentConditions> {
        let mut url = format!(
            "{}/forecast?latitude={}&longitude={}&current={}&timezone=auto",
            self.config.base_url, location.lat, location.lng, CURRENT_VARIABLES
        );
        if let Some(api_key) = &self.config.api_key {
            url.push_str(&format!("&apikey={api_key}"));
        }

        debug!("Requesting current conditions: {url}");
        let response = self.client.get(&url).send().await?;
        if !response.status().is_success() {
            return Err(anyhow!("weather API returned status {}", response.status()));
        }

        let forecast: openmeteo::ForecastResponse = response
            .json()
            .await
            .with_context(|| "Failed to parse OpenMeteo forecast response")?;

        let current = forecast
            .current
            .ok_or_else(|| anyhow!("response missing current block"))?;

        Ok(CurrentConditions {
            temperature: current.temperature,
            humidity: current.humidity,
            cloud_cover: current.cloud_cover,
            pressure: current.pressure,
            wind_speed: current.wind_speed,
            precipitation: current.precipitation,
        })
    }
}

fn expect_series(series: Option<Vec<f32>>, name: &str, len: usize) -> anyhow::Result<Vec<f32>> {
    let series = series.ok_or_else(|| anyhow!("response missing {name} array"))?;
    if series.len() != len {
        return Err(anyhow!(
            "{name} array has {} entries, expected {len}",
            series.len()
        ));
    }
    Ok(series)
}

/// Generate a plausible synthetic observation series with an injected
/// random source, `days` points ending at `end`, oldest first.
///
/// Base temperature is latitude-banded; humidity stays in 60-90 %, cloud
/// cover in 20-80 % (higher band for coastal points), pressure within
/// 1013±10 hPa, wind speed in a higher band for coastal points and
/// precipitation in 0-10 mm.
pub fn synthetic_observations<R: RngExt>(
    location: &Coordinate,
    days: u32,
    end: NaiveDate,
    rng: &mut R,
) -> Vec<Observation> {
    let coastal = geo::is_coastal_region(location);
    let base_temperature = if location.lat < 15.0 {
        28.0
    } else if location.lat < 25.0 {
        25.0
    } else {
        22.0
    };

    (0..days)
        .map(|i| {
            let date = end - Duration::days(i64::from(days - 1 - i));
            let cloud_cover = if coastal {
                rng.random_range(30.0..=80.0)
            } else {
                rng.random_range(20.0..=70.0)
            };
            let wind_speed = if coastal {
                rng.random_range(8.0..=28.0)
            } else {
                rng.random_range(2.0..=15.0)
            };

            Observation {
                date,
                temperature: base_temperature + rng.random_range(-4.0..=4.0),
                humidity: rng.random_range(60.0..=90.0),
                cloud_cover,
                pressure: 1013.0 + rng.random_range(-10.0..=10.0),
                wind_speed,
                precipitation: rng.random_range(0.0..=10.0),
            }
        })
        .collect()
}

/// `OpenMeteo` API response structures
mod openmeteo {
    use serde::Deserialize;

    /// Historical daily response from `OpenMeteo`
    #[derive(Debug, Deserialize)]
    pub struct HistoricalResponse {
        pub daily: Option<DailyData>,
    }

    /// Daily aggregate arrays, all aligned with `time`
    #[derive(Debug, Deserialize)]
    pub struct DailyData {
        pub time: Vec<String>,
        #[serde(rename = "temperature_2m_mean")]
        pub temperature: Option<Vec<f32>>,
        #[serde(rename = "relative_humidity_2m_mean")]
        pub humidity: Option<Vec<f32>>,
        #[serde(rename = "cloud_cover_mean")]
        pub cloud_cover: Option<Vec<f32>>,
        #[serde(rename = "surface_pressure_mean")]
        pub pressure: Option<Vec<f32>>,
        #[serde(rename = "wind_speed_10m_mean")]
        pub wind_speed: Option<Vec<f32>>,
        #[serde(rename = "precipitation_sum")]
        pub precipitation: Option<Vec<f32>>,
    }

    /// Forecast response from `OpenMeteo`, used for the current reading
    #[derive(Debug, Deserialize)]
    pub struct ForecastResponse {
        pub current: Option<CurrentData>,
    }

    /// Instantaneous reading from `OpenMeteo`
    #[derive(Debug, Deserialize)]
    pub struct CurrentData {
        #[serde(rename = "temperature_2m")]
        pub temperature: f32,
        #[serde(rename = "relative_humidity_2m")]
        pub humidity: f32,
        #[serde(rename = "cloud_cover")]
        pub cloud_cover: f32,
        #[serde(rename = "surface_pressure")]
        pub pressure: f32,
        #[serde(rename = "wind_speed_10m")]
        pub wind_speed: f32,
        pub precipitation: f32,
    }
}
