//! Coordinate model for geographic points

use serde::{Deserialize, Serialize};

/// A geographic point in decimal degrees
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct Coordinate {
    /// Latitude in decimal degrees, valid range [-90, 90]
    pub lat: f64,
    /// Longitude in decimal degrees, valid range [-180, 180]
    pub lng: f64,
}

impl Coordinate {
    /// Create a new coordinate. Ranges are not validated here; callers are
    /// responsible for sane inputs.
    #[must_use]
    pub fn new(lat: f64, lng: f64) -> Self {
        Self { lat, lng }
    }

    /// Format coordinate as a short "lat, lng" string
    #[must_use]
    pub fn format(&self) -> String {
        format!("{:.4}, {:.4}", self.lat, self.lng)
    }
}
