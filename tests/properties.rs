//! Property tests for the forecast engine
//!
//! Scores stay within 0-100 for any input, combos stay ranked and bounded,
//! and a forecast always reports at least one fishing window.

use chrono::{NaiveDate, NaiveDateTime};
use fishcast::modifiers::precipitation_modifier;
use fishcast::scoring::{score_cloud, score_moon, score_pressure, score_temperature, score_wind};
use fishcast::time_window::best_fishing_times;
use fishcast::{
    HourlyFishingForecast, HourlyWeatherObservation, PressureTrend, Species, WeatherObservation,
    compute_forecast, compute_hourly_forecasts,
};
use proptest::prelude::*;

fn day_at(month: u32, hour: u32) -> NaiveDateTime {
    NaiveDate::from_ymd_opt(2024, month, 10)
        .unwrap()
        .and_hms_opt(hour, 0, 0)
        .unwrap()
}

fn species_strategy() -> impl Strategy<Value = Species> {
    prop::sample::select(Species::ALL.to_vec())
}

fn trend_strategy() -> impl Strategy<Value = PressureTrend> {
    prop_oneof![
        Just(PressureTrend::Rising),
        Just(PressureTrend::Falling),
        Just(PressureTrend::Stable),
    ]
}

prop_compose! {
    fn hourly_strategy()(
        hour in 0u32..24,
        temperature in -10.0f64..50.0,
        pressure in 950.0f64..1060.0,
        wind_speed in 0.0f64..80.0,
        cloud_cover in 0.0f64..=100.0,
    ) -> HourlyWeatherObservation {
        HourlyWeatherObservation {
            time: day_at(1, hour),
            temperature,
            humidity: 60.0,
            pressure,
            wind_speed,
            wind_direction: 0.0,
            cloud_cover,
            precipitation: 0.0,
            uv_index: 5.0,
        }
    }
}

prop_compose! {
    fn observation_strategy()(
        temperature in -10.0f64..50.0,
        pressure in 950.0f64..1060.0,
        pressure_trend in trend_strategy(),
        wind_speed in 0.0f64..80.0,
        cloud_cover in 0.0f64..=100.0,
        precipitation in 0.0f64..40.0,
        month in 1u32..=12,
        sunrise_hour in 4u32..8,
        sunset_hour in 17u32..21,
        moon_phase in 0.0f64..=1.0,
        moon_illumination in 0.0f64..=100.0,
        hourly in prop::collection::vec(hourly_strategy(), 0..24),
    ) -> WeatherObservation {
        WeatherObservation {
            temperature,
            humidity: 60.0,
            pressure,
            pressure_trend,
            wind_speed,
            wind_direction: 90.0,
            cloud_cover,
            precipitation,
            uv_index: 5.0,
            sunrise: day_at(month, sunrise_hour),
            sunset: day_at(month, sunset_hour),
            moon_phase,
            moon_illumination,
            hourly,
        }
    }
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(200))]

    /// Overall and factor scores are always within 0-100
    #[test]
    fn forecast_scores_stay_in_range(
        weather in observation_strategy(),
        species in species_strategy(),
    ) {
        let forecast = compute_forecast(&weather, Some(species));

        for score in [
            forecast.overall_rating,
            forecast.temperature_score,
            forecast.pressure_score,
            forecast.wind_score,
            forecast.moon_score,
            forecast.cloud_score,
        ] {
            prop_assert!(score <= 100);
        }
        prop_assert!(forecast.hourly_forecasts.iter().all(|h| h.score <= 100));
    }

    /// At most five combos, never increasing
    #[test]
    fn combos_are_bounded_and_ranked(
        weather in observation_strategy(),
        species in species_strategy(),
    ) {
        let forecast = compute_forecast(&weather, Some(species));

        prop_assert!(forecast.best_combos.len() <= 5);
        prop_assert!(forecast.suggested_baits.len() <= 5);
        prop_assert!(forecast.suggested_rigs.len() <= 4);
        prop_assert!(
            forecast
                .best_combos
                .windows(2)
                .all(|pair| pair[0].combined_score >= pair[1].combined_score)
        );
    }

    /// A forecast always names at least one fishing window
    #[test]
    fn best_times_never_empty(weather in observation_strategy()) {
        let forecast = compute_forecast(&weather, None);
        prop_assert!(!forecast.best_times.is_empty());
    }

    #[test]
    fn best_times_never_empty_for_any_hourly_scores(
        scores in prop::collection::vec((0u32..24, 0u8..=100), 0..24),
        pressure in 950.0f64..1060.0,
    ) {
        let hourly: Vec<HourlyFishingForecast> = scores
            .into_iter()
            .map(|(hour, score)| HourlyFishingForecast {
                time: day_at(1, hour),
                hour,
                score,
                temperature: 27.0,
                pressure,
                wind_speed: 10.0,
            })
            .collect();

        let times = best_fishing_times(day_at(1, 6), day_at(1, 18), pressure, &hourly);
        prop_assert!(!times.is_empty());
        prop_assert!(times.len() <= 3);
    }

    /// The same observation always produces the same forecast
    #[test]
    fn forecast_is_idempotent(
        weather in observation_strategy(),
        species in species_strategy(),
    ) {
        prop_assert_eq!(
            compute_forecast(&weather, Some(species)),
            compute_forecast(&weather, Some(species))
        );
    }

    /// Hourly output keeps input order and length
    #[test]
    fn hourly_forecasts_mirror_samples(
        samples in prop::collection::vec(hourly_strategy(), 0..24),
    ) {
        let hourly = compute_hourly_forecasts(&samples, day_at(1, 6), day_at(1, 18));
        prop_assert_eq!(hourly.len(), samples.len());
        for (forecast, sample) in hourly.iter().zip(&samples) {
            prop_assert_eq!(forecast.time, sample.time);
            prop_assert!(forecast.score <= 100);
        }
    }

    /// Factor scorers accept any finite value, including far out-of-range ones
    #[test]
    fn factor_scores_bounded_for_extreme_inputs(
        value in -1.0e6f64..1.0e6,
        trend in trend_strategy(),
        phase in -2.0f64..2.0,
    ) {
        prop_assert!(score_temperature(value).score <= 100);
        prop_assert!(score_pressure(value, trend).score <= 100);
        prop_assert!(score_wind(value).score <= 100);
        prop_assert!(score_cloud(value).score <= 100);
        prop_assert!(score_moon(phase, value).score <= 100);
    }

    /// Heavy rain always costs more than light rain helps
    #[test]
    fn heavy_rain_below_light_rain(heavy in 10.0f64..200.0, light in 1.0f64..5.0) {
        prop_assert!(precipitation_modifier(heavy).value < precipitation_modifier(light).value);
    }
}

#[test]
fn optimal_points_score_full_marks() {
    assert_eq!(score_temperature(25.0).score, 100);
    assert_eq!(score_pressure(1013.0, PressureTrend::Stable).score, 100);
    assert_eq!(score_wind(10.0).score, 100);
}
