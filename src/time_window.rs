//! Time-of-day model
//!
//! Fish feed hardest in the hours after sunrise and around sunset, and sit
//! deep through the tropical midday. This module turns that into an hourly
//! multiplier and picks the day's best fishing windows.

use std::fmt;

use chrono::{NaiveDateTime, Timelike};
use serde::Serialize;

use crate::models::HourlyFishingForecast;

/// Minimum hourly score for a dawn or dusk window to be reported
const WINDOW_MIN_SCORE: u8 = 30;
/// Minimum hourly score for the extra window outside dawn and dusk
const EXTRA_WINDOW_MIN_SCORE: u8 = 40;
/// Above this pressure (hPa) a late-morning feed is likely
const MORNING_FEED_PRESSURE: f64 = 1015.0;

/// Named part of the day used for multipliers and window labels
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum TimeOfDay {
    /// Sunrise to three hours after
    EarlyMorning,
    /// Two hours before sunset to one hour after
    Evening,
    /// 10:00 to 15:00
    Midday,
    /// 15:00 until the evening window opens
    Afternoon,
    /// Everything else, including night
    OffPeak,
}

impl TimeOfDay {
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            TimeOfDay::EarlyMorning => "Early Morning",
            TimeOfDay::Evening => "Evening",
            TimeOfDay::Midday => "Midday",
            TimeOfDay::Afternoon => "Afternoon",
            TimeOfDay::OffPeak => "Off-Peak",
        }
    }
}

impl fmt::Display for TimeOfDay {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// Score multiplier for an hour of the day
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TimeMultiplier {
    pub period: TimeOfDay,
    pub multiplier: f64,
}

fn in_morning_window(hour: i32, sunrise_hour: i32) -> bool {
    hour >= sunrise_hour && hour < sunrise_hour + 3
}

fn in_evening_window(hour: i32, sunset_hour: i32) -> bool {
    hour >= sunset_hour - 2 && hour <= sunset_hour + 1
}

/// Multiplier for `hour` given the local sunrise and sunset hours.
///
/// Sunrise and sunset windows take precedence over the fixed midday window
/// where they overlap.
#[must_use]
pub fn time_multiplier(hour: i32, sunrise_hour: i32, sunset_hour: i32) -> TimeMultiplier {
    let (period, multiplier) = if in_morning_window(hour, sunrise_hour) {
        (TimeOfDay::EarlyMorning, 1.20)
    } else if in_evening_window(hour, sunset_hour) {
        (TimeOfDay::Evening, 1.15)
    } else if (10..15).contains(&hour) {
        (TimeOfDay::Midday, 0.75)
    } else if hour >= 15 && hour < sunset_hour - 2 {
        (TimeOfDay::Afternoon, 0.95)
    } else {
        (TimeOfDay::OffPeak, 1.0)
    };

    TimeMultiplier { period, multiplier }
}

pub(crate) fn hour_of(timestamp: NaiveDateTime) -> i32 {
    // hour() is always 0..=23
    timestamp.hour() as i32
}

/// Highest-scoring sample whose hour satisfies `in_window`; ties keep the
/// earliest sample.
fn best_hour<'a>(
    hourly: &'a [HourlyFishingForecast],
    in_window: impl Fn(i32) -> bool,
) -> Option<&'a HourlyFishingForecast> {
    hourly
        .iter()
        .filter(|h| in_window(h.hour as i32))
        .fold(None, |best, candidate| match best {
            Some(current) if current.score >= candidate.score => Some(current),
            _ => Some(candidate),
        })
}

/// Format `start..end` on a 24-hour clock; hours wrap past midnight
fn format_span(start: i32, end: i32, label: impl fmt::Display) -> String {
    format!("{}:00–{}:00 ({})", start.rem_euclid(24), end.rem_euclid(24), label)
}

fn format_window(hour: u32, period: TimeOfDay) -> String {
    let hour = hour as i32;
    format_span(hour, hour + 1, period)
}

fn heuristic_windows(sunrise_hour: i32, sunset_hour: i32) -> Vec<String> {
    vec![
        format_span(sunrise_hour, sunrise_hour + 2, TimeOfDay::EarlyMorning),
        format_span(sunset_hour - 2, sunset_hour, TimeOfDay::Evening),
    ]
}

/// Best fishing windows for the day.
///
/// With scored hourly samples the best dawn and dusk hours are reported, plus
/// one more strong hour elsewhere when both exist. Without samples, fixed
/// windows around sunrise and sunset are returned instead. The result is
/// never empty.
#[must_use]
pub fn best_fishing_times(
    sunrise: NaiveDateTime,
    sunset: NaiveDateTime,
    pressure: f64,
    hourly: &[HourlyFishingForecast],
) -> Vec<String> {
    let sunrise_hour = hour_of(sunrise);
    let sunset_hour = hour_of(sunset);

    if hourly.is_empty() {
        let mut times = heuristic_windows(sunrise_hour, sunset_hour);
        if pressure > MORNING_FEED_PRESSURE {
            times.push("10:00–12:00 (Morning Feed)".to_string());
        }
        return times;
    }

    let morning = best_hour(hourly, |h| in_morning_window(h, sunrise_hour))
        .filter(|h| h.score >= WINDOW_MIN_SCORE);
    let evening = best_hour(hourly, |h| in_evening_window(h, sunset_hour))
        .filter(|h| h.score >= WINDOW_MIN_SCORE);

    let mut times = Vec::new();
    if let Some(h) = morning {
        times.push(format_window(h.hour, TimeOfDay::EarlyMorning));
    }
    if let Some(h) = evening {
        times.push(format_window(h.hour, TimeOfDay::Evening));
    }

    if morning.is_some() && evening.is_some() {
        let extra = best_hour(hourly, |h| {
            !in_morning_window(h, sunrise_hour) && !in_evening_window(h, sunset_hour)
        })
        .filter(|h| h.score >= EXTRA_WINDOW_MIN_SCORE);

        if let Some(h) = extra {
            let period = time_multiplier(h.hour as i32, sunrise_hour, sunset_hour).period;
            times.push(format_window(h.hour, period));
        }
    }

    if times.is_empty() {
        return heuristic_windows(sunrise_hour, sunset_hour);
    }
    times
}
