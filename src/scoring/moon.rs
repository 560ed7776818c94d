//! Lunar scoring: phase and illumination are banded separately and averaged.

use super::{Bound, FactorScore, ScoreBand, lookup};

/// Phase bands over the 0.0-1.0 lunar cycle. Values outside the cycle fall
/// into the "Average" bands at either end.
pub const MOON_PHASE_BANDS: &[ScoreBand] = &[
    ScoreBand {
        lower: Bound::Inclusive(0.0),
        upper: Bound::Inclusive(0.25),
        score: 95,
        label: "New Moon",
        description: "New Moon",
    },
    ScoreBand {
        lower: Bound::Inclusive(0.75),
        upper: Bound::Inclusive(1.0),
        score: 90,
        label: "Full Moon",
        description: "Full Moon",
    },
    ScoreBand {
        lower: Bound::Inclusive(0.4),
        upper: Bound::Inclusive(0.6),
        score: 70,
        label: "Quarter Moon",
        description: "Quarter Moon",
    },
    ScoreBand {
        lower: Bound::Exclusive(0.25),
        upper: Bound::Exclusive(0.4),
        score: 80,
        label: "Average",
        description: "Average",
    },
    ScoreBand {
        lower: Bound::Exclusive(0.6),
        upper: Bound::Exclusive(0.75),
        score: 80,
        label: "Average",
        description: "Average",
    },
    ScoreBand {
        lower: Bound::Exclusive(1.0),
        upper: Bound::Unbounded,
        score: 80,
        label: "Average",
        description: "Average",
    },
    ScoreBand {
        lower: Bound::Unbounded,
        upper: Bound::Exclusive(0.0),
        score: 80,
        label: "Average",
        description: "Average",
    },
];

pub const MOON_ILLUMINATION_BANDS: &[ScoreBand] = &[
    ScoreBand {
        lower: Bound::Inclusive(50.0),
        upper: Bound::Unbounded,
        score: 75,
        label: "Bright",
        description: "Bright",
    },
    ScoreBand {
        lower: Bound::Unbounded,
        upper: Bound::Exclusive(50.0),
        score: 65,
        label: "Dark",
        description: "Dark",
    },
];

/// Score the moon from its phase fraction and illumination percentage
#[must_use]
pub fn score_moon(phase: f64, illumination: f64) -> FactorScore {
    let phase_band = lookup(MOON_PHASE_BANDS, phase);
    let light_band = lookup(MOON_ILLUMINATION_BANDS, illumination);

    let average = (f64::from(phase_band.score) + f64::from(light_band.score)) / 2.0;

    FactorScore {
        score: average.round() as u8,
        label: phase_band.label.to_string(),
        description: format!("{} - {} night", phase_band.label, light_band.label),
    }
}

#[must_use]
pub fn moon_advice(illumination: f64) -> &'static str {
    if illumination > 70.0 {
        "Full moon - nocturnal fishing can be excellent"
    } else {
        ""
    }
}
