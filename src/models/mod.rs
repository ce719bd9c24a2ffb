//! Core data models shared across the crate

pub mod location;
pub mod weather;

pub use location::Coordinate;
pub use weather::{CurrentConditions, Observation, TrendPoint};
