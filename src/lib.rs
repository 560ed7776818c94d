//! `fishcast` - Fishing-suitability forecasts for Indian freshwater species
//!
//! This library turns a normalized weather observation into a 0-100
//! fishability rating with per-factor scores, bait and rig recommendations,
//! best fishing windows and an hourly score curve. The engine performs no
//! I/O; fetching weather is left to the caller.

pub mod config;
pub mod error;
pub mod forecast;
pub mod logging;
pub mod lunar;
pub mod models;
pub mod modifiers;
pub mod scoring;
pub mod tackle;
pub mod time_window;

// Re-export core types for public API
pub use config::{FishcastConfig, LoggingConfig, TuningConfig};
pub use error::FishcastError;
pub use forecast::{ForecastEngine, compute_forecast, compute_hourly_forecasts};
pub use lunar::MoonState;
pub use models::{
    Bait, BaitKind, BaitRigCombo, FishingForecast, HourlyFishingForecast,
    HourlyWeatherObservation, PressureTrend, RatingCategory, Rig, Species, WeatherObservation,
};
pub use modifiers::Season;
pub use scoring::{FactorScore, FactorScores, ScoreWeights};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Core result type used throughout the library
pub type Result<T> = std::result::Result<T, FishcastError>;
