//! Weather observation and derived trend models

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// One calendar day of raw weather variables at a coordinate.
///
/// Produced either by the live Open-Meteo fetch or by the synthetic fallback
/// generator; never mutated after creation.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Observation {
    /// Calendar date of the observation
    pub date: NaiveDate,
    /// Daily mean temperature in Celsius
    pub temperature: f32,
    /// Daily mean relative humidity in percent (0-100)
    pub humidity: f32,
    /// Daily mean cloud cover in percent (0-100)
    pub cloud_cover: f32,
    /// Daily mean surface pressure in hPa
    pub pressure: f32,
    /// Daily mean 10 m wind speed, in the unit the source reports
    pub wind_speed: f32,
    /// Precipitation sum in mm
    pub precipitation: f32,
}

/// A single-instant reading with the same field set as [`Observation`]
/// minus the date.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CurrentConditions {
    /// Temperature in Celsius
    pub temperature: f32,
    /// Relative humidity in percent (0-100)
    pub humidity: f32,
    /// Cloud cover in percent (0-100)
    pub cloud_cover: f32,
    /// Surface pressure in hPa
    pub pressure: f32,
    /// 10 m wind speed
    pub wind_speed: f32,
    /// Precipitation in mm
    pub precipitation: f32,
}

/// One calendar day of derived cyclone risk, the sole output unit consumed
/// by presentation collaborators.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct TrendPoint {
    /// Calendar date, aligned with the source observation
    pub date: NaiveDate,
    /// Heuristic risk score, clamped to [0, 100]
    pub risk_score: u8,
    /// Daily mean temperature in Celsius, rounded to one decimal
    pub temperature: f32,
    /// Cloud cover percentage, rounded to one decimal
    pub coverage: f32,
    /// Continuous severity index, clamped to [0, 100], one decimal
    pub cyclone_activity: f32,
}
