//! Approximate moon phase for a calendar date
//!
//! Good to within about a day, which is enough for the moon factor's coarse
//! phase bands. Callers with an astronomy feed should prefer its values.

use std::f64::consts::PI;

use chrono::{Datelike, NaiveDate};

/// Mean length of the synodic month in days
const SYNODIC_MONTH_DAYS: f64 = 29.53;

/// Julian day number of the new moon on 2000-01-06 00:00
const REFERENCE_NEW_MOON_JD: f64 = 2_451_549.5;

/// Moon phase fraction and illumination for a day
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MoonState {
    /// Fraction of the lunar cycle (0.0 new moon, 0.5 full moon)
    pub phase: f64,
    /// Illuminated percentage (0-100)
    pub illumination: f64,
}

impl MoonState {
    #[must_use]
    pub fn for_date(date: NaiveDate) -> Self {
        let days_since_new =
            (julian_day(date) - REFERENCE_NEW_MOON_JD).rem_euclid(SYNODIC_MONTH_DAYS);
        let phase = days_since_new / SYNODIC_MONTH_DAYS;
        let illumination = ((1.0 - (phase * 2.0 * PI).cos()) / 2.0 * 100.0).round();

        Self { phase, illumination }
    }
}

/// Julian day at 00:00 of a Gregorian date
fn julian_day(date: NaiveDate) -> f64 {
    let (year, month) = if date.month() < 3 {
        (date.year() - 1, date.month() + 12)
    } else {
        (date.year(), date.month())
    };

    let century = (f64::from(year) / 100.0).floor();
    let gregorian = 2.0 - century + (century / 4.0).floor();

    (365.25 * f64::from(year + 4716)).floor()
        + (30.6001 * f64::from(month + 1)).floor()
        + f64::from(date.day())
        + gregorian
        - 1524.5
}
