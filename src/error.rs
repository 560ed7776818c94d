//! Error types and handling for the `fishcast` library
//!
//! The forecast engine itself never fails; these errors cover the
//! surfaces around it: configuration loading, caller-side input validation
//! and parsing of user-supplied names.

use thiserror::Error;

/// Main error type for the `fishcast` library
#[derive(Error, Debug)]
pub enum FishcastError {
    /// Configuration-related errors
    #[error("Configuration error: {message}")]
    Config { message: String },

    /// Input validation errors
    #[error("Invalid input: {message}")]
    Validation { message: String },
}

impl FishcastError {
    /// Create a new configuration error
    pub fn config<S: Into<String>>(message: S) -> Self {
        Self::Config {
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
            FishcastError::Config { .. } => {
                "Configuration error. Please check your fishcast config file.".to_string()
            }
            FishcastError::Validation { message } => {
                format!("Invalid weather input: {message}")
            }
        }
    }
}
