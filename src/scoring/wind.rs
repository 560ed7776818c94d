//! Wind speed scoring for reservoirs and rivers.
//!
//! 8-15 km/h oxygenates the water and breaks up the surface without making
//! casting hard. Dead calm leaves fish skittish, so it scores mid-range rather
//! than high.

use super::{Bound, FactorScore, ScoreBand, lookup};

pub const WIND_BANDS: &[ScoreBand] = &[
    ScoreBand {
        lower: Bound::Inclusive(8.0),
        upper: Bound::Inclusive(15.0),
        score: 100,
        label: "Optimal",
        description: "Moderate wind - oxygenates water and obscures the surface",
    },
    ScoreBand {
        lower: Bound::Exclusive(5.0),
        upper: Bound::Exclusive(8.0),
        score: 80,
        label: "Light Breeze",
        description: "Light breeze - good conditions",
    },
    ScoreBand {
        lower: Bound::Exclusive(15.0),
        upper: Bound::Inclusive(20.0),
        score: 70,
        label: "Moderate",
        description: "Moderate wind - good fishing on the leeward bank",
    },
    ScoreBand {
        lower: Bound::Unbounded,
        upper: Bound::Inclusive(5.0),
        score: 55,
        label: "Calm",
        description: "Dead calm - fish are alert and cautious; use light tackle",
    },
    ScoreBand {
        lower: Bound::Exclusive(20.0),
        upper: Bound::Inclusive(28.0),
        score: 40,
        label: "Strong",
        description: "Strong wind - use heavier weights; fish sheltered bays",
    },
    ScoreBand {
        lower: Bound::Exclusive(28.0),
        upper: Bound::Unbounded,
        score: 15,
        label: "Very Strong",
        description: "Dangerous conditions - not recommended for fishing",
    },
];

/// Score a wind speed in km/h
#[must_use]
pub fn score_wind(kmh: f64) -> FactorScore {
    FactorScore::from_band(lookup(WIND_BANDS, kmh))
}

/// Advisory for calm or windy conditions, empty otherwise
#[must_use]
pub fn wind_advice(kmh: f64) -> &'static str {
    if kmh > 28.0 {
        "Dangerous winds - avoid open water"
    } else if kmh > 20.0 {
        "Strong winds - cast into the wind; fish the windward bank where food accumulates"
    } else if kmh > 15.0 {
        "High winds - switch to a heavier, wind-stable rig and fish the leeward bank"
    } else if kmh <= 5.0 {
        "Dead calm - fish are easily spooked; use light line and small hooks"
    } else {
        ""
    }
}
