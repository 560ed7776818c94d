//! Weather observation records consumed by the engine

use std::fmt;
use std::str::FromStr;

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use crate::error::FishcastError;

/// Pressure change (hPa) between the early and late sample means that
/// counts as a trend.
const TREND_THRESHOLD_HPA: f64 = 3.0;

/// Number of samples averaged at each end of a pressure series.
const TREND_WINDOW: usize = 3;

/// Short-term direction of barometric pressure change
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PressureTrend {
    Rising,
    Falling,
    #[default]
    Stable,
}

impl PressureTrend {
    /// Derive a trend from a chronologically ordered pressure series.
    ///
    /// Compares the mean of the last three samples with the mean of the first
    /// three. Series shorter than three samples are treated as stable.
    #[must_use]
    pub fn from_pressures(pressures: &[f64]) -> Self {
        if pressures.len() < TREND_WINDOW {
            return PressureTrend::Stable;
        }

        let mean = |values: &[f64]| values.iter().sum::<f64>() / values.len() as f64;
        let earlier = mean(&pressures[..TREND_WINDOW]);
        let recent = mean(&pressures[pressures.len() - TREND_WINDOW..]);
        let change = recent - earlier;

        if change > TREND_THRESHOLD_HPA {
            PressureTrend::Rising
        } else if change < -TREND_THRESHOLD_HPA {
            PressureTrend::Falling
        } else {
            PressureTrend::Stable
        }
    }

    /// Derive a trend from hourly samples, in the order given
    #[must_use]
    pub fn from_hourly(hourly: &[HourlyWeatherObservation]) -> Self {
        let pressures: Vec<f64> = hourly.iter().map(|h| h.pressure).collect();
        Self::from_pressures(&pressures)
    }
}

impl fmt::Display for PressureTrend {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PressureTrend::Rising => write!(f, "rising"),
            PressureTrend::Falling => write!(f, "falling"),
            PressureTrend::Stable => write!(f, "stable"),
        }
    }
}

impl FromStr for PressureTrend {
    type Err = FishcastError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "rising" => Ok(PressureTrend::Rising),
            "falling" => Ok(PressureTrend::Falling),
            "stable" => Ok(PressureTrend::Stable),
            other => Err(FishcastError::validation(format!(
                "unknown pressure trend '{other}'"
            ))),
        }
    }
}

/// Daily weather observation, already normalized by the data-fetch layer
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WeatherObservation {
    /// Air temperature in Celsius
    pub temperature: f64,
    /// Relative humidity percentage (0-100)
    pub humidity: f64,
    /// Sea-level pressure in hPa
    pub pressure: f64,
    /// Recent pressure direction
    #[serde(default)]
    pub pressure_trend: PressureTrend,
    /// Wind speed in km/h
    pub wind_speed: f64,
    /// Wind direction in degrees (0-359, where 0 is North)
    pub wind_direction: f64,
    /// Cloud cover percentage (0-100)
    pub cloud_cover: f64,
    /// Precipitation amount in mm
    pub precipitation: f64,
    /// UV index
    pub uv_index: f64,
    /// Local sunrise time
    pub sunrise: NaiveDateTime,
    /// Local sunset time
    pub sunset: NaiveDateTime,
    /// Fraction of the lunar cycle (0.0 new moon, 0.5 full disc opposite)
    pub moon_phase: f64,
    /// Illuminated fraction of the moon as a percentage (0-100)
    pub moon_illumination: f64,
    /// Optional hourly samples for the same day
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub hourly: Vec<HourlyWeatherObservation>,
}

/// One hourly (or sub-daily) weather sample
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HourlyWeatherObservation {
    /// Local timestamp of this sample
    pub time: NaiveDateTime,
    pub temperature: f64,
    pub humidity: f64,
    pub pressure: f64,
    pub wind_speed: f64,
    pub wind_direction: f64,
    pub cloud_cover: f64,
    pub precipitation: f64,
    pub uv_index: f64,
}

impl WeatherObservation {
    /// Check the caller contract for an observation.
    ///
    /// The engine tolerates out-of-range values through its catch-all bands,
    /// so this is only a helper for data producers that want to reject
    /// malformed records before scoring them.
    pub fn validate(&self) -> crate::Result<()> {
        let numeric = [
            ("temperature", self.temperature),
            ("humidity", self.humidity),
            ("pressure", self.pressure),
            ("wind speed", self.wind_speed),
            ("wind direction", self.wind_direction),
            ("cloud cover", self.cloud_cover),
            ("precipitation", self.precipitation),
            ("uv index", self.uv_index),
            ("moon phase", self.moon_phase),
            ("moon illumination", self.moon_illumination),
        ];
        for (name, value) in numeric {
            if !value.is_finite() {
                return Err(FishcastError::validation(format!("{name} must be a finite number")));
            }
        }

        for (name, value) in [
            ("humidity", self.humidity),
            ("cloud cover", self.cloud_cover),
            ("moon illumination", self.moon_illumination),
        ] {
            if !(0.0..=100.0).contains(&value) {
                return Err(FishcastError::validation(format!(
                    "{name} {value} is outside 0-100%"
                )));
            }
        }

        if !(0.0..=1.0).contains(&self.moon_phase) {
            return Err(FishcastError::validation(format!(
                "moon phase {} is outside 0.0-1.0",
                self.moon_phase
            )));
        }

        if self.wind_speed < 0.0 || self.precipitation < 0.0 {
            return Err(FishcastError::validation(
                "wind speed and precipitation cannot be negative",
            ));
        }

        if self.sunrise >= self.sunset {
            return Err(FishcastError::validation("sunrise must come before sunset"));
        }

        Ok(())
    }
}
