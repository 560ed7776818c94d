//! Cloud cover scoring.
//!
//! Overcast skies cut UV stress and glare, so fish feed through the day.
//! Clear skies confine activity to dawn and dusk but are never scored below
//! the mid-60s.

use super::{Bound, FactorScore, ScoreBand, lookup};

pub const CLOUD_BANDS: &[ScoreBand] = &[
    ScoreBand {
        lower: Bound::Inclusive(60.0),
        upper: Bound::Unbounded,
        score: 100,
        label: "Overcast",
        description: "Overcast - fish confident and feeding throughout the day",
    },
    ScoreBand {
        lower: Bound::Inclusive(40.0),
        upper: Bound::Exclusive(60.0),
        score: 90,
        label: "Mostly Cloudy",
        description: "Mostly cloudy - excellent varied light conditions",
    },
    ScoreBand {
        lower: Bound::Inclusive(20.0),
        upper: Bound::Exclusive(40.0),
        score: 80,
        label: "Partly Cloudy",
        description: "Partly cloudy - good overall conditions",
    },
    ScoreBand {
        lower: Bound::Inclusive(10.0),
        upper: Bound::Exclusive(20.0),
        score: 70,
        label: "Mostly Clear",
        description: "Mostly clear - fish more cautious; use stealth",
    },
    ScoreBand {
        lower: Bound::Unbounded,
        upper: Bound::Exclusive(10.0),
        score: 65,
        label: "Clear",
        description: "Clear skies - restrict fishing to dawn and dusk windows",
    },
];

/// Score a cloud cover percentage
#[must_use]
pub fn score_cloud(cover: f64) -> FactorScore {
    FactorScore::from_band(lookup(CLOUD_BANDS, cover))
}

#[must_use]
pub fn cloud_advice(cover: f64) -> &'static str {
    if cover >= 60.0 {
        "Overcast sky - fish active throughout the day, not just at dawn/dusk"
    } else if cover < 15.0 {
        "Clear sky - bright conditions; fish move to shade or deeper water by 8 AM"
    } else {
        ""
    }
}
