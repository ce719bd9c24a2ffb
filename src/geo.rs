//! Geospatial utilities: great-circle distance, nearest-station lookup and
//! the fixed North-Indian-Ocean region/season classifications that weight
//! the risk model.
//!
//! Region boxes and distances do not handle longitude wraparound at the
//! ±180° boundary; acceptable for the Indian-Ocean-focused domain.

use crate::models::Coordinate;
use crate::{CycloneWatchError, Result};
use chrono::{Datelike, NaiveDate};
use haversine::{Location as HaversineLocation, Units, distance};

/// A named observation station at a fixed coordinate
#[derive(Debug, Clone, PartialEq)]
pub struct Station {
    /// Station identifier
    pub id: String,
    /// Station position
    pub coordinate: Coordinate,
}

impl Station {
    /// Create a new station
    #[must_use]
    pub fn new<S: Into<String>>(id: S, coordinate: Coordinate) -> Self {
        Self {
            id: id.into(),
            coordinate,
        }
    }
}

/// Great-circle distance between two coordinates in kilometers (Haversine,
/// Earth radius 6371 km). Symmetric; zero iff both points are equal.
#[must_use]
pub fn distance_km(a: &Coordinate, b: &Coordinate) -> f64 {
    let from = HaversineLocation {
        latitude: a.lat,
        longitude: a.lng,
    };
    let to = HaversineLocation {
        latitude: b.lat,
        longitude: b.lng,
    };
    distance(from, to, Units::Kilometers)
}

/// Find the station closest to `target`.
///
/// Stable scan with strictly-less-than comparison: on tied distances the
/// earliest station in input order wins.
///
/// # Errors
///
/// Returns [`CycloneWatchError::EmptyStations`] when `stations` is empty.
pub fn nearest_station<'a>(target: &Coordinate, stations: &'a [Station]) -> Result<&'a Station> {
    let mut nearest: Option<(&Station, f64)> = None;

    for station in stations {
        let d = distance_km(target, &station.coordinate);
        match nearest {
            Some((_, best)) if d >= best => {}
            _ => nearest = Some((station, d)),
        }
    }

    nearest
        .map(|(station, _)| station)
        .ok_or(CycloneWatchError::EmptyStations)
}

/// Inclusive axis-aligned lat/lng box
struct RegionBox {
    lat_min: f64,
    lat_max: f64,
    lng_min: f64,
    lng_max: f64,
}

impl RegionBox {
    fn contains(&self, c: &Coordinate) -> bool {
        c.lat >= self.lat_min
            && c.lat <= self.lat_max
            && c.lng >= self.lng_min
            && c.lng <= self.lng_max
    }
}

/// Bay of Bengal, Arabian Sea and the Indian east/west coastal strips.
/// Boxes overlap; membership in any is sufficient.
const COASTAL_REGIONS: [RegionBox; 4] = [
    // Bay of Bengal
    RegionBox {
        lat_min: 8.0,
        lat_max: 22.0,
        lng_min: 80.0,
        lng_max: 95.0,
    },
    // Arabian Sea
    RegionBox {
        lat_min: 8.0,
        lat_max: 24.0,
        lng_min: 68.0,
        lng_max: 78.0,
    },
    // Eastern Coast
    RegionBox {
        lat_min: 8.0,
        lat_max: 20.0,
        lng_min: 78.0,
        lng_max: 85.0,
    },
    // Western Coast
    RegionBox {
        lat_min: 8.0,
        lat_max: 23.0,
        lng_min: 72.0,
        lng_max: 76.0,
    },
];

/// Core zones with the highest historical cyclone frequency
const HIGH_RISK_ZONES: [RegionBox; 2] = [
    // Bay of Bengal core
    RegionBox {
        lat_min: 10.0,
        lat_max: 22.0,
        lng_min: 85.0,
        lng_max: 95.0,
    },
    // Arabian Sea core
    RegionBox {
        lat_min: 10.0,
        lat_max: 20.0,
        lng_min: 68.0,
        lng_max: 75.0,
    },
];

/// Whether the coordinate falls inside any of the fixed coastal boxes
#[must_use]
pub fn is_coastal_region(c: &Coordinate) -> bool {
    COASTAL_REGIONS.iter().any(|region| region.contains(c))
}

/// Whether the coordinate falls inside a high-risk core zone
#[must_use]
pub fn is_high_risk_zone(c: &Coordinate) -> bool {
    HIGH_RISK_ZONES.iter().any(|zone| zone.contains(c))
}

/// Whether the date falls in the pre-monsoon (Apr-Jun) or post-monsoon
/// (Oct-Dec) cyclone season. Pure function of the month number.
#[must_use]
pub fn is_cyclone_season(date: NaiveDate) -> bool {
    matches!(date.month(), 4..=6 | 10..=12)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn date(year: i32, month: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(year, month, day).unwrap()
    }

    #[test]
    fn test_distance_to_self_is_zero() {
        let chennai = Coordinate::new(13.0827, 80.2707);
        assert_eq!(distance_km(&chennai, &chennai), 0.0);
    }

    #[test]
    fn test_distance_is_symmetric() {
        let chennai = Coordinate::new(13.0827, 80.2707);
        let kolkata = Coordinate::new(22.5726, 88.3639);
        let there = distance_km(&chennai, &kolkata);
        let back = distance_km(&kolkata, &chennai);
        assert!((there - back).abs() < 1e-9);
    }

    #[test]
    fn test_distance_sanity() {
        // Chennai to Kolkata is roughly 1360 km great-circle
        let chennai = Coordinate::new(13.0827, 80.2707);
        let kolkata = Coordinate::new(22.5726, 88.3639);
        let d = distance_km(&chennai, &kolkata);
        assert!(d > 1300.0 && d < 1420.0, "unexpected distance: {d}");
    }

    #[test]
    fn test_nearest_station_picks_closest() {
        let stations = vec![
            Station::new("chennai", Coordinate::new(13.0827, 80.2707)),
            Station::new("visakhapatnam", Coordinate::new(17.6868, 83.2185)),
            Station::new("kolkata", Coordinate::new(22.5726, 88.3639)),
        ];
        let target = Coordinate::new(17.0, 82.0);
        let nearest = nearest_station(&target, &stations).unwrap();
        assert_eq!(nearest.id, "visakhapatnam");
    }

    #[test]
    fn test_nearest_station_tie_break_keeps_first() {
        let stations = vec![
            Station::new("A", Coordinate::new(0.0, 0.0)),
            Station::new("B", Coordinate::new(0.0, 0.0)),
        ];
        let target = Coordinate::new(1.0, 1.0);
        let nearest = nearest_station(&target, &stations).unwrap();
        assert_eq!(nearest.id, "A");
    }

    #[test]
    fn test_nearest_station_empty_input_fails() {
        let target = Coordinate::new(1.0, 1.0);
        let result = nearest_station(&target, &[]);
        assert!(matches!(result, Err(CycloneWatchError::EmptyStations)));
    }

    #[test]
    fn test_arabian_sea_point_is_coastal_and_high_risk() {
        let loc = Coordinate::new(15.0, 70.0);
        assert!(is_coastal_region(&loc));
        assert!(is_high_risk_zone(&loc));
    }

    #[test]
    fn test_inland_point_is_neither() {
        let delhi = Coordinate::new(28.7041, 77.1025);
        assert!(!is_coastal_region(&delhi));
        assert!(!is_high_risk_zone(&delhi));
    }

    #[test]
    fn test_region_bounds_are_inclusive() {
        // Corner of the Bay of Bengal core zone
        let corner = Coordinate::new(10.0, 85.0);
        assert!(is_high_risk_zone(&corner));
        assert!(is_coastal_region(&corner));
    }

    #[rstest]
    #[case(4, true)]
    #[case(5, true)]
    #[case(6, true)]
    #[case(10, true)]
    #[case(11, true)]
    #[case(12, true)]
    #[case(1, false)]
    #[case(2, false)]
    #[case(3, false)]
    #[case(7, false)]
    #[case(8, false)]
    #[case(9, false)]
    fn test_cyclone_season_by_month(#[case] month: u32, #[case] expected: bool) {
        assert_eq!(is_cyclone_season(date(2024, month, 15)), expected);
    }

    #[test]
    fn test_cyclone_season_ignores_year_and_day() {
        assert!(is_cyclone_season(date(1999, 5, 1)));
        assert!(is_cyclone_season(date(2031, 5, 31)));
        assert!(!is_cyclone_season(date(1999, 8, 1)));
    }
}
