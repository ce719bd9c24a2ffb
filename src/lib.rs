//! `CycloneWatch` - cyclone-formation risk trends for the North Indian Ocean
//!
//! This library ingests daily atmospheric observations for a geographic
//! point and derives a time series of cyclone-formation risk indicators,
//! plus the geospatial utilities (distance, nearest-station lookup, region
//! classification) used to weight that risk.

pub mod config;
pub mod error;
pub mod geo;
pub mod models;
pub mod risk;
pub mod trend;
pub mod weather;

// Re-export core types for public API
pub use config::{CycloneWatchConfig, LoggingConfig, WeatherConfig};
pub use error::CycloneWatchError;
pub use geo::{
    Station, distance_km, is_coastal_region, is_cyclone_season, is_high_risk_zone, nearest_station,
};
pub use models::{Coordinate, CurrentConditions, Observation, TrendPoint};
pub use risk::{RiskModel, RiskWeights};
pub use trend::TrendBuilder;
pub use weather::WeatherClient;

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Core result type used throughout the library
pub type Result<T> = std::result::Result<T, CycloneWatchError>;
