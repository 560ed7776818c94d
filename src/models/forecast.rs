//! Forecast output records

use std::fmt;

use chrono::NaiveDateTime;
use serde::Serialize;

use super::{Bait, BaitRigCombo, Rig, Species};
use crate::modifiers::Season;
use crate::scoring::FactorScores;

/// Overall category for a 0-100 rating
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum RatingCategory {
    /// Rating >= 80
    Excellent,
    /// Rating >= 60
    Good,
    /// Rating >= 40
    Fair,
    /// Rating < 40
    Poor,
}

impl RatingCategory {
    #[must_use]
    pub fn from_score(score: u8) -> Self {
        match score {
            80.. => RatingCategory::Excellent,
            60..=79 => RatingCategory::Good,
            40..=59 => RatingCategory::Fair,
            _ => RatingCategory::Poor,
        }
    }

    #[must_use]
    pub fn emoji(&self) -> &'static str {
        match self {
            RatingCategory::Excellent => "🟢",
            RatingCategory::Good => "🟡",
            RatingCategory::Fair => "🟠",
            RatingCategory::Poor => "🔴",
        }
    }
}

impl fmt::Display for RatingCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RatingCategory::Excellent => write!(f, "Excellent"),
            RatingCategory::Good => write!(f, "Good"),
            RatingCategory::Fair => write!(f, "Fair"),
            RatingCategory::Poor => write!(f, "Poor"),
        }
    }
}

/// Daily fishing forecast for one species
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FishingForecast {
    /// Composite rating (0-100)
    pub overall_rating: u8,
    /// Category of the overall rating
    pub rating: RatingCategory,
    pub temperature_score: u8,
    pub pressure_score: u8,
    pub wind_score: u8,
    pub moon_score: u8,
    pub cloud_score: u8,
    /// Full factor results including labels and descriptions
    pub factors: FactorScores,
    /// Best fishing windows, most important first
    pub best_times: Vec<String>,
    pub suggested_baits: Vec<Bait>,
    pub suggested_rigs: Vec<Rig>,
    /// Highest-scoring bait and rig pairs, best first
    pub best_combos: Vec<BaitRigCombo>,
    pub target_species: Species,
    /// Season derived from the sunrise date
    pub season: Season,
    /// Advisory notes in factor order
    pub notes: Vec<String>,
    /// Hourly curve, empty when the observation carried no hourly samples
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub hourly_forecasts: Vec<HourlyFishingForecast>,
}

/// Fishing score for one hourly sample
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HourlyFishingForecast {
    pub time: NaiveDateTime,
    /// Local hour of day (0-23)
    pub hour: u32,
    /// Time-adjusted score (0-100)
    pub score: u8,
    pub temperature: f64,
    pub pressure: f64,
    pub wind_speed: f64,
}
