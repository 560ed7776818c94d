//! Factor scoring
//!
//! Each weather factor is scored against an ordered table of threshold bands:
//! - Temperature, pressure, wind and cloud map one measurement to one band
//! - Moon averages a phase band and an illumination band
//! - Pressure additionally applies a trend modifier after the band lookup
//!
//! Tables are evaluated top-down and the first matching band wins. Every
//! table covers the whole real line without gaps or overlaps.

pub mod cloud;
pub mod moon;
pub mod pressure;
pub mod temperature;
pub mod wind;

use serde::{Deserialize, Serialize};

pub use cloud::{cloud_advice, score_cloud};
pub use moon::{moon_advice, score_moon};
pub use pressure::{pressure_advice, score_pressure};
pub use temperature::{score_temperature, temperature_advice};
pub use wind::{score_wind, wind_advice};

/// One end of a band's interval
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Bound {
    Unbounded,
    Inclusive(f64),
    Exclusive(f64),
}

/// A threshold band in a scoring table
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScoreBand {
    pub lower: Bound,
    pub upper: Bound,
    pub score: u8,
    pub label: &'static str,
    pub description: &'static str,
}

impl ScoreBand {
    /// Whether `value` falls inside this band. NaN never matches.
    #[must_use]
    pub fn contains(&self, value: f64) -> bool {
        let above_lower = match self.lower {
            Bound::Unbounded => !value.is_nan(),
            Bound::Inclusive(lower) => value >= lower,
            Bound::Exclusive(lower) => value > lower,
        };
        let below_upper = match self.upper {
            Bound::Unbounded => !value.is_nan(),
            Bound::Inclusive(upper) => value <= upper,
            Bound::Exclusive(upper) => value < upper,
        };
        above_lower && below_upper
    }
}

/// Find the first band containing `value`.
///
/// Falls back to the table's last band, which is the catch-all for extreme
/// values, when nothing matches (only possible for NaN).
///
/// # Panics
///
/// Panics if `bands` is empty; all tables in this crate are non-empty constants.
#[must_use]
pub fn lookup(bands: &'static [ScoreBand], value: f64) -> &'static ScoreBand {
    bands
        .iter()
        .find(|band| band.contains(value))
        .unwrap_or_else(|| &bands[bands.len() - 1])
}

/// Score for a single weather factor
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FactorScore {
    /// Suitability (0-100)
    pub score: u8,
    /// Short category name
    pub label: String,
    /// Human-readable rationale
    pub description: String,
}

impl FactorScore {
    #[must_use]
    pub fn from_band(band: &ScoreBand) -> Self {
        Self {
            score: band.score,
            label: band.label.to_string(),
            description: band.description.to_string(),
        }
    }
}

/// The five factor scores of one evaluation
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FactorScores {
    pub temperature: FactorScore,
    pub pressure: FactorScore,
    pub wind: FactorScore,
    pub moon: FactorScore,
    pub cloud: FactorScore,
}

/// Relative weight of each factor in a composite score
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ScoreWeights {
    pub temperature: f64,
    pub pressure: f64,
    pub wind: f64,
    pub moon: f64,
    pub cloud: f64,
}

impl ScoreWeights {
    /// Weights for the daily forecast
    pub const DAILY: ScoreWeights = ScoreWeights {
        temperature: 0.30,
        pressure: 0.30,
        wind: 0.20,
        moon: 0.10,
        cloud: 0.10,
    };

    /// Weights for hourly scores; the moon does not vary by hour
    pub const HOURLY: ScoreWeights = ScoreWeights {
        temperature: 0.30,
        pressure: 0.30,
        wind: 0.20,
        moon: 0.0,
        cloud: 0.20,
    };

    #[must_use]
    pub fn total(&self) -> f64 {
        self.temperature + self.pressure + self.wind + self.moon + self.cloud
    }

    /// Weighted sum of the raw factor scores, rounded and clamped to 0-100
    #[must_use]
    pub fn combine(&self, temperature: u8, pressure: u8, wind: u8, moon: u8, cloud: u8) -> u8 {
        let weighted = f64::from(temperature) * self.temperature
            + f64::from(pressure) * self.pressure
            + f64::from(wind) * self.wind
            + f64::from(moon) * self.moon
            + f64::from(cloud) * self.cloud;
        clamp_score(weighted.round())
    }
}

impl Default for ScoreWeights {
    fn default() -> Self {
        Self::DAILY
    }
}

/// Clamp a rounded score into 0-100
#[must_use]
pub fn clamp_score(value: f64) -> u8 {
    if value.is_nan() {
        return 0;
    }
    value.clamp(0.0, 100.0) as u8
}

#[cfg(test)]
pub(crate) mod table_checks {
    use super::{Bound, ScoreBand};

    /// Sample points around every bound of a table plus far-out values
    pub fn probe_points(bands: &[ScoreBand]) -> Vec<f64> {
        let mut points = vec![-1.0e9, -1000.0, 0.0, 1000.0, 1.0e9];
        for band in bands {
            for bound in [band.lower, band.upper] {
                if let Bound::Inclusive(x) | Bound::Exclusive(x) = bound {
                    points.extend([x - 0.5, x - 1e-9, x, x + 1e-9, x + 0.5]);
                }
            }
        }
        points
    }

    /// Assert every probe point falls into exactly one band
    pub fn assert_partition(bands: &[ScoreBand]) {
        for value in probe_points(bands) {
            let matches = bands.iter().filter(|b| b.contains(value)).count();
            assert_eq!(matches, 1, "value {value} matched {matches} bands");
        }
    }
}
