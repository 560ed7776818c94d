//! Barometric pressure scoring.
//!
//! In the tropics the trend matters more than the absolute value: falling
//! pressure ahead of monsoon fronts triggers aggressive feeding, while rising
//! pressure pushes fish deeper.

use super::{Bound, FactorScore, ScoreBand, clamp_score, lookup};
use crate::models::PressureTrend;

pub const PRESSURE_BANDS: &[ScoreBand] = &[
    ScoreBand {
        lower: Bound::Inclusive(1010.0),
        upper: Bound::Inclusive(1018.0),
        score: 100,
        label: "Optimal",
        description: "Stable normal pressure - fish comfortable and feeding",
    },
    ScoreBand {
        lower: Bound::Inclusive(1006.0),
        upper: Bound::Exclusive(1010.0),
        score: 82,
        label: "Low-Normal",
        description: "Slightly low - fish moving toward the surface",
    },
    ScoreBand {
        lower: Bound::Exclusive(1018.0),
        upper: Bound::Inclusive(1022.0),
        score: 75,
        label: "Slightly High",
        description: "Slight high pressure - acceptable, fish less aggressive",
    },
    ScoreBand {
        lower: Bound::Inclusive(1002.0),
        upper: Bound::Exclusive(1006.0),
        score: 68,
        label: "Low",
        description: "Low pressure - pre-storm feeding activity likely",
    },
    ScoreBand {
        lower: Bound::Exclusive(1022.0),
        upper: Bound::Inclusive(1028.0),
        score: 50,
        label: "High",
        description: "High pressure - fish retreating to deeper water",
    },
    ScoreBand {
        lower: Bound::Inclusive(998.0),
        upper: Bound::Exclusive(1002.0),
        score: 50,
        label: "Very Low",
        description: "Storm approaching - short but intense feeding frenzy possible",
    },
    ScoreBand {
        lower: Bound::Exclusive(1028.0),
        upper: Bound::Unbounded,
        score: 30,
        label: "Very High",
        description: "Very high pressure - fish deep and inactive",
    },
    ScoreBand {
        lower: Bound::Unbounded,
        upper: Bound::Exclusive(998.0),
        score: 25,
        label: "Extreme Low",
        description: "Storm conditions - unsafe for fishing",
    },
];

const FALLING_BONUS: i32 = 15;
const RISING_PENALTY: i32 = -8;

/// Score a pressure reading in hPa together with its recent trend
#[must_use]
pub fn score_pressure(hpa: f64, trend: PressureTrend) -> FactorScore {
    let band = lookup(PRESSURE_BANDS, hpa);
    let mut result = FactorScore::from_band(band);

    let modifier = match trend {
        PressureTrend::Falling => {
            result
                .description
                .push_str(" - pressure falling, feeding surge expected");
            FALLING_BONUS
        }
        PressureTrend::Rising => {
            result
                .description
                .push_str(" - pressure rising, fish moving deeper");
            RISING_PENALTY
        }
        PressureTrend::Stable => 0,
    };

    result.score = clamp_score(f64::from(i32::from(band.score) + modifier));
    result
}

/// Advisory for notable pressure conditions, empty otherwise
#[must_use]
pub fn pressure_advice(hpa: f64, trend: PressureTrend) -> &'static str {
    match trend {
        PressureTrend::Falling if hpa < 1012.0 => {
            "Falling pressure - fish are feeding aggressively! Great time to be on the water"
        }
        PressureTrend::Falling => {
            "Pressure falling - expect increased feeding activity in the next few hours"
        }
        _ if hpa > 1022.0 => {
            "High pressure - fish slower; try deep bottom rigs with light presentations"
        }
        _ if hpa < 1006.0 => "Low pressure - fish near surface; try surface or mid-water rigs",
        _ => "",
    }
}
