//! Cyclone risk scoring.
//!
//! Two independent indices are derived from one observation and one
//! coordinate: an additive point score and a continuous activity index.
//! Cyclone formation requires a conjunction of sea-surface warmth, low
//! pressure, high humidity, organized convection and a favorable
//! geographic/seasonal setting; the additive scheme with secondary
//! thresholds approximates graded severity without a trained model.
//!
//! All thresholds and point values are heuristics, not a certified model,
//! so they live in [`RiskWeights`] where they can be tuned through
//! configuration without touching control flow.

use crate::geo;
use crate::models::{Coordinate, Observation};
use serde::{Deserialize, Serialize};

/// Tunable thresholds, point values and activity coefficients.
///
/// `Default` carries the operational constants; deployments may override
/// individual fields through the `risk` section of the config file.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct RiskWeights {
    /// Warm sea-surface threshold in Celsius
    pub temp_warm_c: f32,
    /// Points awarded above the warm threshold
    pub temp_warm_points: u32,
    /// Hot threshold in Celsius, stacks on top of the warm points
    pub temp_hot_c: f32,
    /// Points awarded above the hot threshold
    pub temp_hot_points: u32,

    /// Low-pressure threshold in hPa
    pub pressure_low_hpa: f32,
    /// Points awarded below the low threshold
    pub pressure_low_points: u32,
    /// Deep-depression threshold in hPa, stacks
    pub pressure_deep_hpa: f32,
    /// Points awarded below the deep threshold
    pub pressure_deep_points: u32,

    /// Moist-air threshold in percent relative humidity
    pub humidity_moist_pct: f32,
    /// Points awarded above the moist threshold
    pub humidity_moist_points: u32,
    /// Near-saturated threshold in percent, stacks
    pub humidity_saturated_pct: f32,
    /// Points awarded above the saturated threshold
    pub humidity_saturated_points: u32,

    /// Fresh-wind threshold in the source's wind unit
    pub wind_fresh: f32,
    /// Points awarded above the fresh threshold
    pub wind_fresh_points: u32,
    /// Strong-wind threshold, stacks
    pub wind_strong: f32,
    /// Points awarded above the strong threshold
    pub wind_strong_points: u32,

    /// Broken cloud cover threshold in percent
    pub cloud_broken_pct: f32,
    /// Points awarded above the broken threshold
    pub cloud_broken_points: u32,
    /// Overcast threshold in percent, stacks
    pub cloud_overcast_pct: f32,
    /// Points awarded above the overcast threshold
    pub cloud_overcast_points: u32,

    /// Points for a coordinate inside a coastal region box
    pub coastal_points: u32,
    /// Points for an observation dated inside the cyclone season
    pub season_points: u32,
    /// Points for a coordinate inside a high-risk core zone
    pub high_risk_points: u32,

    /// Temperature baseline for the activity index in Celsius
    pub activity_temp_base_c: f32,
    /// Scale applied to degrees above the baseline
    pub activity_temp_scale: f32,
    /// Pressure baseline for the activity index in hPa
    pub activity_pressure_base_hpa: f32,
    /// Scale applied to hPa below the baseline
    pub activity_pressure_scale: f32,
    /// Wind speed below which wind contributes nothing
    pub activity_wind_threshold: f32,
    /// Scale applied to the full wind speed above the threshold
    pub activity_wind_scale: f32,
    /// Cloud cover below which cloud contributes nothing
    pub activity_cloud_threshold_pct: f32,
    /// Scale applied to the full cloud cover above the threshold
    pub activity_cloud_scale: f32,
    /// Multiplier applied to the summed activity in a high-risk zone
    pub high_risk_multiplier: f32,
}

impl Default for RiskWeights {
    fn default() -> Self {
        Self {
            temp_warm_c: 26.5,
            temp_warm_points: 25,
            temp_hot_c: 29.0,
            temp_hot_points: 15,
            pressure_low_hpa: 1000.0,
            pressure_low_points: 20,
            pressure_deep_hpa: 990.0,
            pressure_deep_points: 15,
            humidity_moist_pct: 70.0,
            humidity_moist_points: 15,
            humidity_saturated_pct: 85.0,
            humidity_saturated_points: 10,
            wind_fresh: 15.0,
            wind_fresh_points: 10,
            wind_strong: 25.0,
            wind_strong_points: 10,
            cloud_broken_pct: 60.0,
            cloud_broken_points: 10,
            cloud_overcast_pct: 80.0,
            cloud_overcast_points: 5,
            coastal_points: 10,
            season_points: 15,
            high_risk_points: 20,
            activity_temp_base_c: 26.0,
            activity_temp_scale: 5.0,
            activity_pressure_base_hpa: 1013.0,
            activity_pressure_scale: 2.0,
            activity_wind_threshold: 10.0,
            activity_wind_scale: 1.5,
            activity_cloud_threshold_pct: 50.0,
            activity_cloud_scale: 0.8,
            high_risk_multiplier: 1.5,
        }
    }
}

/// Risk model mapping one observation plus one coordinate to a bounded
/// score and activity index. Pure and total over well-formed inputs;
/// out-of-range fields (e.g. humidity above 100) are not validated.
#[derive(Debug, Clone, Default)]
pub struct RiskModel {
    weights: RiskWeights,
}

impl RiskModel {
    /// Create a model with explicit weights
    #[must_use]
    pub fn new(weights: RiskWeights) -> Self {
        Self { weights }
    }

    /// Additive risk score, clamped to [0, 100].
    ///
    /// Every rule is evaluated independently against the same observation;
    /// secondary thresholds stack with their primary rule rather than
    /// replacing it.
    #[must_use]
    pub fn score(&self, obs: &Observation, loc: &Coordinate) -> u8 {
        let w = &self.weights;
        let mut points: u32 = 0;

        if obs.temperature > w.temp_warm_c {
            points += w.temp_warm_points;
        }
        if obs.temperature > w.temp_hot_c {
            points += w.temp_hot_points;
        }
        if obs.pressure < w.pressure_low_hpa {
            points += w.pressure_low_points;
        }
        if obs.pressure < w.pressure_deep_hpa {
            points += w.pressure_deep_points;
        }
        if obs.humidity > w.humidity_moist_pct {
            points += w.humidity_moist_points;
        }
        if obs.humidity > w.humidity_saturated_pct {
            points += w.humidity_saturated_points;
        }
        if obs.wind_speed > w.wind_fresh {
            points += w.wind_fresh_points;
        }
        if obs.wind_speed > w.wind_strong {
            points += w.wind_strong_points;
        }
        if obs.cloud_cover > w.cloud_broken_pct {
            points += w.cloud_broken_points;
        }
        if obs.cloud_cover > w.cloud_overcast_pct {
            points += w.cloud_overcast_points;
        }
        if geo::is_coastal_region(loc) {
            points += w.coastal_points;
        }
        if geo::is_cyclone_season(obs.date) {
            points += w.season_points;
        }
        if geo::is_high_risk_zone(loc) {
            points += w.high_risk_points;
        }

        points.min(100) as u8
    }

    /// Continuous severity index, clamped to [0, 100]. Distinct scale and
    /// semantics from [`RiskModel::score`].
    #[must_use]
    pub fn activity(&self, obs: &Observation, loc: &Coordinate) -> f32 {
        let w = &self.weights;

        let temp_factor = (obs.temperature - w.activity_temp_base_c).max(0.0) * w.activity_temp_scale;
        let pressure_factor =
            (w.activity_pressure_base_hpa - obs.pressure).max(0.0) * w.activity_pressure_scale;
        let wind_factor = if obs.wind_speed > w.activity_wind_threshold {
            obs.wind_speed * w.activity_wind_scale
        } else {
            0.0
        };
        let cloud_factor = if obs.cloud_cover > w.activity_cloud_threshold_pct {
            obs.cloud_cover * w.activity_cloud_scale
        } else {
            0.0
        };

        let mut activity = temp_factor + pressure_factor + wind_factor + cloud_factor;
        if geo::is_high_risk_zone(loc) {
            activity *= w.high_risk_multiplier;
        }

        activity.clamp(0.0, 100.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn obs(
        date: &str,
        temperature: f32,
        humidity: f32,
        cloud_cover: f32,
        pressure: f32,
        wind_speed: f32,
    ) -> Observation {
        Observation {
            date: date.parse::<NaiveDate>().unwrap(),
            temperature,
            humidity,
            cloud_cover,
            pressure,
            wind_speed,
            precipitation: 0.0,
        }
    }

    #[test]
    fn test_severe_observation_clamps_to_100() {
        // Raw sum is 165: every weather rule fires plus coastal, season
        // and high-risk zone for a June Bay of Bengal point.
        let model = RiskModel::default();
        let severe = obs("2024-06-15", 30.0, 90.0, 90.0, 995.0, 30.0);
        let bay_of_bengal = Coordinate::new(15.0, 90.0);
        assert_eq!(model.score(&severe, &bay_of_bengal), 100);
    }

    #[test]
    fn test_calm_observation_scores_zero() {
        let model = RiskModel::default();
        let calm = obs("2024-02-01", 20.0, 50.0, 20.0, 1015.0, 5.0);
        let inland = Coordinate::new(28.7, 77.1);
        assert_eq!(model.score(&calm, &inland), 0);
    }

    #[test]
    fn test_secondary_thresholds_stack() {
        let model = RiskModel::default();
        let inland = Coordinate::new(28.7, 77.1);

        // Only the two temperature rules fire: 25 + 15
        let hot = obs("2024-02-01", 30.0, 50.0, 20.0, 1015.0, 5.0);
        assert_eq!(model.score(&hot, &inland), 40);

        // Warm but not hot: primary rule alone
        let warm = obs("2024-02-01", 27.0, 50.0, 20.0, 1015.0, 5.0);
        assert_eq!(model.score(&warm, &inland), 25);
    }

    #[test]
    fn test_geographic_rules_add_independently() {
        let model = RiskModel::default();
        let calm = obs("2024-06-15", 20.0, 50.0, 20.0, 1015.0, 5.0);
        // Arabian Sea core: coastal (10) + season (15) + high risk (20)
        let arabian_sea = Coordinate::new(15.0, 70.0);
        assert_eq!(model.score(&calm, &arabian_sea), 45);
    }

    #[test]
    fn test_score_always_bounded() {
        let model = RiskModel::default();
        let extreme = obs("2024-05-01", 45.0, 100.0, 100.0, 950.0, 60.0);
        let bay_of_bengal = Coordinate::new(15.0, 90.0);
        let score = model.score(&extreme, &bay_of_bengal);
        assert!(score <= 100);
    }

    #[test]
    fn test_activity_factors_sum() {
        let model = RiskModel::default();
        let inland = Coordinate::new(28.7, 77.1);
        // temp (27-26)*5 = 5, pressure (1013-1008)*2 = 10,
        // wind 12*1.5 = 18, cloud 55*0.8 = 44
        let sample = obs("2024-02-01", 27.0, 50.0, 55.0, 1008.0, 12.0);
        let activity = model.activity(&sample, &inland);
        assert!((activity - 77.0).abs() < 1e-3, "activity was {activity}");
    }

    #[test]
    fn test_activity_thresholds_gate_wind_and_cloud() {
        let model = RiskModel::default();
        let inland = Coordinate::new(28.7, 77.1);
        // Wind at 10 and cloud at 50 sit on their thresholds: no contribution
        let sample = obs("2024-02-01", 26.0, 50.0, 50.0, 1013.0, 10.0);
        assert_eq!(model.activity(&sample, &inland), 0.0);
    }

    #[test]
    fn test_activity_high_risk_multiplier() {
        let model = RiskModel::default();
        let sample = obs("2024-02-01", 27.0, 50.0, 20.0, 1008.0, 5.0);
        // temp 5 + pressure 10 = 15 inland, 22.5 in the Bay core
        let inland = Coordinate::new(28.7, 77.1);
        let bay_core = Coordinate::new(15.0, 90.0);
        assert!((model.activity(&sample, &inland) - 15.0).abs() < 1e-3);
        assert!((model.activity(&sample, &bay_core) - 22.5).abs() < 1e-3);
    }

    #[test]
    fn test_activity_bounded() {
        let model = RiskModel::default();
        let severe = obs("2024-06-15", 32.0, 95.0, 95.0, 980.0, 40.0);
        let bay_core = Coordinate::new(15.0, 90.0);
        let activity = model.activity(&severe, &bay_core);
        assert!((0.0..=100.0).contains(&activity));
        assert_eq!(activity, 100.0);
    }

    #[test]
    fn test_weights_override_changes_score() {
        let weights = RiskWeights {
            coastal_points: 50,
            ..RiskWeights::default()
        };
        let model = RiskModel::new(weights);
        let calm = obs("2024-02-01", 20.0, 50.0, 20.0, 1015.0, 5.0);
        // Eastern Coast box but outside both high-risk cores
        let coast = Coordinate::new(9.0, 79.0);
        assert_eq!(model.score(&calm, &coast), 50);
    }
}
