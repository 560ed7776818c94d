//! Forecast aggregation
//!
//! Combines the factor scores, tackle recommendations and calendar modifiers
//! into a daily [`FishingForecast`], and scores hourly samples for the
//! best-time selection.

use chrono::{Datelike, NaiveDateTime, Timelike};
use tracing::debug;

use crate::config::TuningConfig;
use crate::models::{
    FishingForecast, HourlyFishingForecast, HourlyWeatherObservation, PressureTrend,
    RatingCategory, Species, WeatherObservation,
};
use crate::modifiers::{Modifier, Season, precipitation_modifier};
use crate::scoring::{
    FactorScores, clamp_score, cloud_advice, moon_advice, pressure_advice, score_cloud,
    score_moon, score_pressure, score_temperature, score_wind, temperature_advice, wind_advice,
};
use crate::tackle::{rank_combos, suggest_baits, suggest_rigs};
use crate::time_window::{best_fishing_times, hour_of, time_multiplier};

/// Moon score used for hourly samples, which carry no moon data
const HOURLY_MOON_SCORE: u8 = 75;

/// Hard-factor thresholds for the realism penalty
const NEAR_OPTIMAL_TEMPERATURE: u8 = 90;
const NEAR_OPTIMAL_PRESSURE: u8 = 90;
const NEAR_OPTIMAL_WIND: u8 = 80;

/// Forecast engine holding the tuning it scores with
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ForecastEngine {
    tuning: TuningConfig,
}

impl ForecastEngine {
    #[must_use]
    pub fn new(tuning: TuningConfig) -> Self {
        Self { tuning }
    }

    /// Compute the daily forecast for `species` (default: other carps).
    ///
    /// Pure and infallible: the same observation always yields the same
    /// forecast, and out-of-range inputs land in the catch-all bands.
    #[must_use]
    #[tracing::instrument(name = "compute_forecast", level = "debug", skip(self, weather))]
    pub fn compute_forecast(
        &self,
        weather: &WeatherObservation,
        species: Option<Species>,
    ) -> FishingForecast {
        let species = species.unwrap_or_default();
        let tuning = &self.tuning;

        let factors = FactorScores {
            temperature: score_temperature(weather.temperature),
            pressure: score_pressure(weather.pressure, weather.pressure_trend),
            wind: score_wind(weather.wind_speed),
            moon: score_moon(weather.moon_phase, weather.moon_illumination),
            cloud: score_cloud(weather.cloud_cover),
        };

        let conditions_score = tuning.daily_weights.combine(
            factors.temperature.score,
            factors.pressure.score,
            factors.wind.score,
            factors.moon.score,
            factors.cloud.score,
        );

        let suggested_baits = suggest_baits(
            species,
            weather.temperature,
            weather.pressure,
            tuning.max_baits,
        );
        let suggested_rigs = suggest_rigs(species, weather.wind_speed, tuning.max_rigs);
        let best_combos = rank_combos(
            &suggested_baits,
            &suggested_rigs,
            tuning.combo_weights,
            tuning.max_combos,
        );
        let bait_rig_score = best_combos
            .first()
            .map_or(tuning.fallback_combo_score, |combo| combo.combined_score);

        let realism_penalty = self.realism_penalty(&factors);

        let season = Season::from_month(weather.sunrise.month());
        let seasonal = if tuning.apply_seasonal_modifier {
            season.modifier()
        } else {
            Modifier::NONE
        };
        let precipitation = if tuning.apply_precipitation_modifier {
            precipitation_modifier(weather.precipitation)
        } else {
            Modifier::NONE
        };

        let blended =
            (f64::from(conditions_score) * 0.5 + f64::from(bait_rig_score) * 0.5).round();
        let overall_rating = clamp_score(
            blended - f64::from(realism_penalty)
                + f64::from(seasonal.value)
                + f64::from(precipitation.value),
        );

        debug!(
            conditions_score,
            bait_rig_score,
            realism_penalty,
            seasonal = seasonal.value,
            precipitation = precipitation.value,
            overall_rating,
            "Aggregated {} forecast for {}",
            season,
            species
        );

        let mut notes: Vec<String> = [
            temperature_advice(weather.temperature),
            pressure_advice(weather.pressure, weather.pressure_trend),
            wind_advice(weather.wind_speed),
            moon_advice(weather.moon_illumination),
            cloud_advice(weather.cloud_cover),
        ]
        .into_iter()
        .filter(|advice| !advice.is_empty())
        .map(str::to_string)
        .collect();
        notes.extend(
            [seasonal.note, precipitation.note]
                .into_iter()
                .flatten()
                .map(str::to_string),
        );

        let hourly_forecasts =
            self.compute_hourly_forecasts(&weather.hourly, weather.sunrise, weather.sunset);
        let best_times = best_fishing_times(
            weather.sunrise,
            weather.sunset,
            weather.pressure,
            &hourly_forecasts,
        );

        FishingForecast {
            overall_rating,
            rating: RatingCategory::from_score(overall_rating),
            temperature_score: factors.temperature.score,
            pressure_score: factors.pressure.score,
            wind_score: factors.wind.score,
            moon_score: factors.moon.score,
            cloud_score: factors.cloud.score,
            factors,
            best_times,
            suggested_baits,
            suggested_rigs,
            best_combos,
            target_species: species,
            season,
            notes,
            hourly_forecasts,
        }
    }

    /// Score each hourly sample, adjusted by the time-of-day multiplier.
    ///
    /// Pressure is scored with a stable trend and the moon with a fixed
    /// placeholder, since hourly samples carry neither.
    #[must_use]
    #[tracing::instrument(
        name = "compute_hourly_forecasts",
        level = "debug",
        skip(self, hourly),
        fields(samples = hourly.len())
    )]
    pub fn compute_hourly_forecasts(
        &self,
        hourly: &[HourlyWeatherObservation],
        sunrise: NaiveDateTime,
        sunset: NaiveDateTime,
    ) -> Vec<HourlyFishingForecast> {
        let sunrise_hour = hour_of(sunrise);
        let sunset_hour = hour_of(sunset);
        let weights = &self.tuning.hourly_weights;

        hourly
            .iter()
            .map(|sample| {
                let hour = sample.time.hour();
                let base_score = weights.combine(
                    score_temperature(sample.temperature).score,
                    score_pressure(sample.pressure, PressureTrend::Stable).score,
                    score_wind(sample.wind_speed).score,
                    HOURLY_MOON_SCORE,
                    score_cloud(sample.cloud_cover).score,
                );
                let adjustment =
                    time_multiplier(hour_of(sample.time), sunrise_hour, sunset_hour);
                let score =
                    clamp_score((f64::from(base_score) * adjustment.multiplier).round());

                HourlyFishingForecast {
                    time: sample.time,
                    hour,
                    score,
                    temperature: sample.temperature,
                    pressure: sample.pressure,
                    wind_speed: sample.wind_speed,
                }
            })
            .collect()
    }

    /// Deduction for each hard factor that is not near-optimal
    fn realism_penalty(&self, factors: &FactorScores) -> u8 {
        let near_optimal = [
            factors.temperature.score >= NEAR_OPTIMAL_TEMPERATURE,
            factors.pressure.score >= NEAR_OPTIMAL_PRESSURE,
            factors.wind.score >= NEAR_OPTIMAL_WIND,
        ]
        .into_iter()
        .filter(|ok| *ok)
        .count();

        (3 - near_optimal as u8).saturating_mul(self.tuning.realism_penalty_step)
    }
}

/// Compute a daily forecast with the default tuning
#[must_use]
pub fn compute_forecast(weather: &WeatherObservation, species: Option<Species>) -> FishingForecast {
    ForecastEngine::default().compute_forecast(weather, species)
}

/// Score hourly samples with the default tuning
#[must_use]
pub fn compute_hourly_forecasts(
    hourly: &[HourlyWeatherObservation],
    sunrise: NaiveDateTime,
    sunset: NaiveDateTime,
) -> Vec<HourlyFishingForecast> {
    ForecastEngine::default().compute_hourly_forecasts(hourly, sunrise, sunset)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn at(y: i32, m: u32, d: u32, h: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(y, m, d)
            .unwrap()
            .and_hms_opt(h, 0, 0)
            .unwrap()
    }

    fn calm_january_day() -> WeatherObservation {
        WeatherObservation {
            temperature: 25.0,
            humidity: 60.0,
            pressure: 1013.0,
            pressure_trend: PressureTrend::Stable,
            wind_speed: 5.0,
            wind_direction: 90.0,
            cloud_cover: 30.0,
            precipitation: 0.0,
            uv_index: 5.0,
            sunrise: at(2024, 1, 15, 6),
            sunset: at(2024, 1, 15, 18),
            moon_phase: 0.5,
            moon_illumination: 50.0,
            hourly: Vec::new(),
        }
    }

    fn sample(hour: u32, temperature: f64, wind_speed: f64) -> HourlyWeatherObservation {
        HourlyWeatherObservation {
            time: at(2024, 1, 15, hour),
            temperature,
            humidity: 60.0,
            pressure: 1013.0,
            wind_speed,
            wind_direction: 90.0,
            cloud_cover: 70.0,
            precipitation: 0.0,
            uv_index: 3.0,
        }
    }

    #[test]
    fn test_calm_day_factor_scores() {
        let forecast = compute_forecast(&calm_january_day(), None);
        assert_eq!(forecast.temperature_score, 100);
        assert_eq!(forecast.pressure_score, 100);
        assert_eq!(forecast.wind_score, 55);
        assert_eq!(forecast.moon_score, 73);
        assert_eq!(forecast.cloud_score, 80);
        assert_eq!(forecast.target_species, Species::OtherCarps);
        assert_eq!(forecast.season, Season::Winter);
    }

    #[test]
    fn test_calm_day_overall_rating() {
        // round(86 * 0.5 + 95 * 0.5) - 5 penalty for calm wind
        let forecast = compute_forecast(&calm_january_day(), None);
        assert_eq!(forecast.best_combos[0].combined_score, 95);
        assert_eq!(forecast.overall_rating, 86);
        assert_eq!(forecast.rating, RatingCategory::Excellent);
    }

    #[test]
    fn test_notes_follow_factor_order() {
        let mut weather = calm_january_day();
        weather.temperature = 37.0;
        weather.wind_speed = 3.0;
        weather.sunrise = at(2024, 4, 10, 6);
        weather.sunset = at(2024, 4, 10, 18);
        weather.precipitation = 2.0;

        let notes = compute_forecast(&weather, Some(Species::Tilapia)).notes;
        assert_eq!(notes.len(), 4);
        assert!(notes[0].contains("hot"), "{}", notes[0]);
        assert!(notes[1].to_lowercase().contains("calm"), "{}", notes[1]);
        assert!(notes[2].starts_with("Pre-monsoon"));
        assert!(notes[3].starts_with("Light rain"));
    }

    #[test]
    fn test_disabled_modifiers_drop_points_and_notes() {
        let mut weather = calm_january_day();
        weather.sunrise = at(2024, 10, 15, 6);
        weather.sunset = at(2024, 10, 15, 18);

        let default_rating = compute_forecast(&weather, None).overall_rating;
        let engine = ForecastEngine::new(TuningConfig {
            apply_seasonal_modifier: false,
            ..TuningConfig::default()
        });
        let forecast = engine.compute_forecast(&weather, None);

        assert_eq!(default_rating, 96);
        assert_eq!(forecast.overall_rating, 86);
        assert_eq!(forecast.season, Season::PostMonsoon);
        assert!(!forecast.notes.iter().any(|n| n.starts_with("Post-monsoon")));
    }

    #[test]
    fn test_disabled_precipitation_drops_rain_note() {
        let mut weather = calm_january_day();
        weather.precipitation = 12.0;

        let engine = ForecastEngine::new(TuningConfig {
            apply_precipitation_modifier: false,
            ..TuningConfig::default()
        });
        let forecast = engine.compute_forecast(&weather, None);

        assert_eq!(forecast.overall_rating, 86);
        assert!(!forecast.notes.iter().any(|n| n.starts_with("Heavy rainfall")));
    }

    #[test]
    fn test_no_penalty_when_all_hard_factors_optimal() {
        let mut weather = calm_january_day();
        weather.wind_speed = 10.0;
        let engine = ForecastEngine::default();
        let forecast = engine.compute_forecast(&weather, None);
        assert_eq!(engine.realism_penalty(&forecast.factors), 0);
    }

    #[test]
    fn test_penalty_scales_with_step() {
        let mut weather = calm_january_day();
        weather.temperature = 10.0;
        weather.pressure = 990.0;
        let engine = ForecastEngine::new(TuningConfig {
            realism_penalty_step: 7,
            ..TuningConfig::default()
        });
        let forecast = engine.compute_forecast(&weather, None);
        assert_eq!(engine.realism_penalty(&forecast.factors), 21);
    }

    #[test]
    fn test_hourly_scores_apply_time_multiplier() {
        let day = calm_january_day();
        // 25C, 1013 stable, 10 km/h, 70% cloud: every factor scores 100
        let hourly = compute_hourly_forecasts(
            &[sample(6, 25.0, 10.0), sample(12, 25.0, 10.0), sample(22, 25.0, 10.0)],
            day.sunrise,
            day.sunset,
        );
        let scores: Vec<u8> = hourly.iter().map(|h| h.score).collect();
        // dawn clamps 120 down, midday 0.75, night unchanged
        assert_eq!(scores, vec![100, 75, 100]);
        assert_eq!(hourly[1].hour, 12);
    }

    #[test]
    fn test_hourly_samples_drive_best_times() {
        let mut weather = calm_january_day();
        weather.hourly = vec![
            sample(6, 10.0, 10.0),
            sample(7, 25.0, 10.0),
            sample(12, 25.0, 10.0),
            sample(17, 25.0, 10.0),
        ];

        let forecast = compute_forecast(&weather, None);
        assert_eq!(forecast.hourly_forecasts.len(), 4);
        assert_eq!(forecast.best_times[0], "7:00–8:00 (Early Morning)");
        assert_eq!(forecast.best_times[1], "17:00–18:00 (Evening)");
        assert_eq!(forecast.best_times[2], "12:00–13:00 (Midday)");
    }

    #[test]
    fn test_without_hourly_uses_heuristics() {
        let forecast = compute_forecast(&calm_january_day(), None);
        assert!(forecast.hourly_forecasts.is_empty());
        assert_eq!(
            forecast.best_times,
            vec!["6:00–8:00 (Early Morning)", "16:00–18:00 (Evening)"]
        );
    }

    #[test]
    fn test_engine_is_deterministic() {
        let engine = ForecastEngine::default();
        let weather = calm_january_day();
        assert_eq!(
            engine.compute_forecast(&weather, Some(Species::Barb)),
            engine.compute_forecast(&weather, Some(Species::Barb))
        );
    }
}
