//! Water/air temperature scoring tuned for tropical Indian species.
//!
//! Indian major carps, tilapia and calbasu feed hardest at 25-30°C. Above
//! 33°C fish retreat to cooler layers; below 22°C their metabolism slows.
//! The hot side is banded more finely than the cold side.

use super::{Bound, FactorScore, ScoreBand, lookup};

pub const TEMPERATURE_BANDS: &[ScoreBand] = &[
    ScoreBand {
        lower: Bound::Inclusive(25.0),
        upper: Bound::Inclusive(30.0),
        score: 100,
        label: "Optimal",
        description: "Peak feeding activity for Indian carps and tilapia",
    },
    ScoreBand {
        lower: Bound::Exclusive(30.0),
        upper: Bound::Inclusive(33.0),
        score: 80,
        label: "Warm",
        description: "Warm but fish still actively feeding",
    },
    ScoreBand {
        lower: Bound::Inclusive(22.0),
        upper: Bound::Exclusive(25.0),
        score: 80,
        label: "Good",
        description: "Good conditions - fish comfortable and feeding",
    },
    ScoreBand {
        lower: Bound::Exclusive(33.0),
        upper: Bound::Inclusive(36.0),
        score: 60,
        label: "Hot",
        description: "Fish seeking cooler deeper water; early morning best",
    },
    ScoreBand {
        lower: Bound::Inclusive(18.0),
        upper: Bound::Exclusive(22.0),
        score: 55,
        label: "Cool",
        description: "Fish metabolism slowing - slower presentations work better",
    },
    ScoreBand {
        lower: Bound::Exclusive(36.0),
        upper: Bound::Inclusive(39.0),
        score: 35,
        label: "Very Hot",
        description: "Fish largely inactive; only dawn and dusk windows viable",
    },
    ScoreBand {
        lower: Bound::Inclusive(13.0),
        upper: Bound::Exclusive(18.0),
        score: 30,
        label: "Cold",
        description: "Tropical species sluggish; slow bottom rigs recommended",
    },
    ScoreBand {
        lower: Bound::Exclusive(39.0),
        upper: Bound::Unbounded,
        score: 15,
        label: "Extreme Heat",
        description: "Extreme heat - avoid midday; fish inactive",
    },
    ScoreBand {
        lower: Bound::Unbounded,
        upper: Bound::Exclusive(13.0),
        score: 15,
        label: "Extreme Cold",
        description: "Very unfavorable - fish barely moving",
    },
];

/// Score a temperature in °C
#[must_use]
pub fn score_temperature(celsius: f64) -> FactorScore {
    FactorScore::from_band(lookup(TEMPERATURE_BANDS, celsius))
}

/// Advisory for temperatures outside the comfortable range, empty otherwise
#[must_use]
pub fn temperature_advice(celsius: f64) -> &'static str {
    if celsius > 39.0 {
        "Extreme heat - fish only at dawn or after sunset"
    } else if celsius > 36.0 {
        "Very hot - restrict fishing to early morning (5-8 AM) and evening (5-7 PM)"
    } else if celsius > 33.0 {
        "Hot - target shaded deep spots; fish move to cooler layers"
    } else if celsius < 18.0 {
        "Cool water - slow your presentation; bottom feeding rigs more effective"
    } else {
        ""
    }
}
