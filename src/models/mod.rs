//! Data models for the fishcast engine
//!
//! This module contains the core domain records organized by concern:
//! - Weather: daily and hourly observations supplied by the caller
//! - Species: the freshwater species a forecast targets
//! - Tackle: baits, rigs and their ranked combinations
//! - Forecast: the daily and hourly output records

pub mod forecast;
pub mod species;
pub mod tackle;
pub mod weather;

// Re-export all public types for convenient access
pub use forecast::{FishingForecast, HourlyFishingForecast, RatingCategory};
pub use species::Species;
pub use tackle::{Bait, BaitKind, BaitRigCombo, Rig};
pub use weather::{HourlyWeatherObservation, PressureTrend, WeatherObservation};
