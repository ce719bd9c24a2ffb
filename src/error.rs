//! Error types and handling for `CycloneWatch`

use thiserror::Error;

/// Main error type for the `CycloneWatch` library
#[derive(Error, Debug)]
pub enum CycloneWatchError {
    /// Configuration-related errors
    #[error("Configuration error: {message}")]
    Config { message: String },

    /// API communication errors
    #[error("API error: {message}")]
    Api { message: String },

    /// Input validation errors
    #[error("Invalid input: {message}")]
    Validation { message: String },

    /// Nearest-station lookup was given no stations. A contract violation
    /// by the caller, not a runtime condition to recover from.
    #[error("Station list is empty")]
    EmptyStations,
}

impl CycloneWatchError {
    /// Create a new configuration error
    pub fn config<S: Into<String>>(message: S) -> Self {
        Self::Config {
            message: message.into(),
        }
    }

    /// Create a new API error
    pub fn api<S: Into<String>>(message: S) -> Self {
        Self::Api {
            message: message.into(),
        }
    }

    /// Create a new validation error
    pub fn validation<S: Into<String>>(message: S) -> Self {
        Self::Validation {
            message: message.into(),
        }
    }

    /// Get a user-friendly error message
    #[must_use]
    pub fn user_message(&self) -> String {
        match self {
            CycloneWatchError::Config { .. } => {
                "Configuration error. Please check your config file and API keys.".to_string()
            }
            CycloneWatchError::Api { .. } => {
                "Unable to reach the weather service. Please check your internet connection."
                    .to_string()
            }
            CycloneWatchError::Validation { message } => {
                format!("Invalid input: {message}")
            }
            CycloneWatchError::EmptyStations => {
                "No stations were provided for the nearest-station lookup.".to_string()
            }
        }
    }
}
