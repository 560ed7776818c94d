//! Configuration management for `fishcast`
//!
//! Handles loading the engine's tunable constants and logging settings from
//! a TOML file and environment variables, with validation for all values.

use crate::FishcastError;
use crate::scoring::ScoreWeights;
use crate::tackle::ComboWeights;
use anyhow::{Context, Result};
use config::{Config, Environment, File};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

const WEIGHT_TOLERANCE: f64 = 0.001;

/// Root configuration structure
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FishcastConfig {
    /// Forecast engine tuning
    pub tuning: TuningConfig,
    /// Logging configuration
    pub logging: LoggingConfig,
}

/// Tunable constants of the forecast engine.
///
/// Defaults reproduce the tropical India tuning. The realism penalty and the
/// seasonal/precipitation modifiers are product tuning rather than fixed
/// rules, so each can be adjusted or switched off here.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TuningConfig {
    /// Factor weights for the daily conditions score
    pub daily_weights: ScoreWeights,
    /// Factor weights for hourly scores
    pub hourly_weights: ScoreWeights,
    /// Bait and rig weights in a combo score
    pub combo_weights: ComboWeights,
    /// Bait/rig score used when no combos exist
    pub fallback_combo_score: u8,
    /// Rating points deducted per hard factor that is not near-optimal
    pub realism_penalty_step: u8,
    /// Apply the monsoon-calendar modifier
    pub apply_seasonal_modifier: bool,
    /// Apply the rainfall modifier
    pub apply_precipitation_modifier: bool,
    /// Maximum number of suggested baits
    pub max_baits: usize,
    /// Maximum number of suggested rigs
    pub max_rigs: usize,
    /// Maximum number of ranked combos
    pub max_combos: usize,
}

/// Logging configuration settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Log level (error, warn, info, debug, trace)
    pub level: String,
    /// Log format (pretty or json)
    pub format: String,
}

// Default value functions
fn default_fallback_combo_score() -> u8 {
    70
}

fn default_realism_penalty_step() -> u8 {
    5
}

fn default_max_baits() -> usize {
    5
}

fn default_max_rigs() -> usize {
    4
}

fn default_max_combos() -> usize {
    5
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_log_format() -> String {
    "pretty".to_string()
}

impl Default for TuningConfig {
    fn default() -> Self {
        Self {
            daily_weights: ScoreWeights::DAILY,
            hourly_weights: ScoreWeights::HOURLY,
            combo_weights: ComboWeights::default(),
            fallback_combo_score: default_fallback_combo_score(),
            realism_penalty_step: default_realism_penalty_step(),
            apply_seasonal_modifier: true,
            apply_precipitation_modifier: true,
            max_baits: default_max_baits(),
            max_rigs: default_max_rigs(),
            max_combos: default_max_combos(),
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            format: default_log_format(),
        }
    }
}

impl FishcastConfig {
    /// Load configuration from the default file and environment variables
    pub fn load() -> Result<Self> {
        Self::load_from_path(None)
    }

    /// Load configuration from specified path
    pub fn load_from_path(config_path: Option<PathBuf>) -> Result<Self> {
        let mut builder = Config::builder();

        let config_file = config_path.unwrap_or_else(|| {
            Self::get_config_path().unwrap_or_else(|| PathBuf::from("fishcast.toml"))
        });

        if config_file.exists() {
            builder = builder.add_source(
                File::from(config_file.clone())
                    .required(false)
                    .format(config::FileFormat::Toml),
            );
        }

        // FISHCAST_TUNING__MAX_BAITS=4 overrides tuning.max_baits
        builder = builder.add_source(
            Environment::with_prefix("FISHCAST")
                .prefix_separator("_")
                .separator("__")
                .try_parsing(true),
        );

        let settings = builder
            .build()
            .with_context(|| "Failed to build configuration")?;

        let mut config: FishcastConfig = settings.try_deserialize().with_context(|| {
            format!(
                "Failed to deserialize configuration from {}",
                config_file.display()
            )
        })?;

        config.apply_defaults();
        config.validate()?;

        Ok(config)
    }

    /// Get the default configuration file path
    #[must_use]
    pub fn get_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join("fishcast").join("config.toml"))
    }

    /// Apply default values to zeroed or empty fields
    pub fn apply_defaults(&mut self) {
        if self.tuning.max_baits == 0 {
            self.tuning.max_baits = default_max_baits();
        }
        if self.tuning.max_rigs == 0 {
            self.tuning.max_rigs = default_max_rigs();
        }
        if self.tuning.max_combos == 0 {
            self.tuning.max_combos = default_max_combos();
        }
        if self.logging.level.is_empty() {
            self.logging.level = default_log_level();
        }
        if self.logging.format.is_empty() {
            self.logging.format = default_log_format();
        }
    }

    /// Validate all configuration settings
    pub fn validate(&self) -> Result<()> {
        self.tuning.validate()?;
        self.logging.validate()?;
        Ok(())
    }
}

impl TuningConfig {
    /// Validate weights and limits
    pub fn validate(&self) -> Result<()> {
        validate_weights("daily", &self.daily_weights)?;
        validate_weights("hourly", &self.hourly_weights)?;

        let combo = self.combo_weights;
        let combo_total = combo.bait + combo.rig;
        if combo.bait < 0.0
            || combo.rig < 0.0
            || (combo_total - 1.0).abs() > WEIGHT_TOLERANCE
        {
            return Err(FishcastError::config(format!(
                "Combo weights must be non-negative and sum to 1.0 (bait {}, rig {})",
                combo.bait, combo.rig
            ))
            .into());
        }

        if self.fallback_combo_score > 100 {
            return Err(FishcastError::config("Fallback combo score cannot exceed 100").into());
        }

        if self.realism_penalty_step > 20 {
            return Err(FishcastError::config("Realism penalty step cannot exceed 20").into());
        }

        for (name, value, max) in [
            ("max_baits", self.max_baits, 10),
            ("max_rigs", self.max_rigs, 10),
            ("max_combos", self.max_combos, 20),
        ] {
            if value == 0 || value > max {
                return Err(FishcastError::config(format!(
                    "{name} must be between 1 and {max}, got {value}"
                ))
                .into());
            }
        }

        Ok(())
    }
}

fn validate_weights(name: &str, weights: &ScoreWeights) -> Result<()> {
    let parts = [
        weights.temperature,
        weights.pressure,
        weights.wind,
        weights.moon,
        weights.cloud,
    ];
    if parts.iter().any(|w| *w < 0.0 || !w.is_finite()) {
        return Err(FishcastError::config(format!("{name} weights cannot be negative")).into());
    }
    if (weights.total() - 1.0).abs() > WEIGHT_TOLERANCE {
        return Err(FishcastError::config(format!(
            "{name} weights must sum to 1.0, got {:.3}",
            weights.total()
        ))
        .into());
    }
    Ok(())
}

impl LoggingConfig {
    /// Validate log level and format names
    pub fn validate(&self) -> Result<()> {
        let valid_log_levels = ["error", "warn", "info", "debug", "trace"];
        if !valid_log_levels.contains(&self.level.as_str()) {
            return Err(FishcastError::config(format!(
                "Invalid log level '{}'. Must be one of: {}",
                self.level,
                valid_log_levels.join(", ")
            ))
            .into());
        }

        let valid_log_formats = ["pretty", "json"];
        if !valid_log_formats.contains(&self.format.as_str()) {
            return Err(FishcastError::config(format!(
                "Invalid log format '{}'. Must be one of: {}",
                self.format,
                valid_log_formats.join(", ")
            ))
            .into());
        }

        Ok(())
    }
}
