//! Rig catalogs per species

use crate::models::{Rig, Species};

const TILAPIA_RIGS: [Rig; 3] = [
    Rig {
        name: "Float Rig",
        description: "Bobber presentation, natural drift",
        best_for: "Shallow water, finicky fish",
        score: 95,
    },
    Rig {
        name: "Carolina Rig",
        description: "Sliding sinker, free-moving hook",
        best_for: "Medium depth",
        score: 85,
    },
    Rig {
        name: "Feeder Rig",
        description: "Feed cylinder with hook, Method feeder",
        best_for: "Still water, carp family",
        score: 80,
    },
];

const BARB_RIGS: [Rig; 3] = [
    Rig {
        name: "Drift Rig",
        description: "Natural drift with light weight",
        best_for: "Flowing water",
        score: 95,
    },
    Rig {
        name: "Float Rig",
        description: "Light bobber, sensitive to bites",
        best_for: "Shallow streams",
        score: 90,
    },
    Rig {
        name: "Small Hook Rig",
        description: "Tiny hooks, subtle presentations",
        best_for: "Small barb fish",
        score: 85,
    },
];

const CALBASU_RIGS: [Rig; 3] = [
    Rig {
        name: "Feeder Rig",
        description: "Method feeder with PVA bags",
        best_for: "Still water, bottom feeding",
        score: 95,
    },
    Rig {
        name: "Pole Rig",
        description: "Long pole with elastic",
        best_for: "Precise presentation",
        score: 90,
    },
    Rig {
        name: "Ledger Rig",
        description: "Bottom fishing with weight",
        best_for: "Deep water",
        score: 85,
    },
];

const OTHER_CARP_RIGS: [Rig; 3] = [
    Rig {
        name: "Hair Rig",
        description: "Knotless knot, boilie on hair",
        best_for: "Carp fishing, big fish",
        score: 95,
    },
    Rig {
        name: "Method Feeder",
        description: "Feed mold with hook buried",
        best_for: "Still water, carps",
        score: 90,
    },
    Rig {
        name: "Paternoster Rig",
        description: "Two hooks above weight",
        best_for: "Distance fishing",
        score: 85,
    },
];

/// Added when the wind is above 15 km/h
pub const WIND_STABLE_RIG: Rig = Rig {
    name: "Paternoster Rig",
    description: "Heavy weight at bottom, hooks above - stable in current",
    best_for: "Fast water, windy conditions",
    score: 75,
};

/// Always appended as a general-purpose option
pub const FLOAT_RIG_FALLBACK: Rig = Rig {
    name: "Float Rig",
    description: "Bobber presentation, natural drift",
    best_for: "Calm water, finicky fish",
    score: 80,
};

const WINDY_ABOVE_KMH: f64 = 15.0;

#[must_use]
pub fn rig_catalog(species: Species) -> &'static [Rig] {
    match species {
        Species::Tilapia => &TILAPIA_RIGS,
        Species::Barb => &BARB_RIGS,
        Species::Calbasu => &CALBASU_RIGS,
        Species::OtherCarps => &OTHER_CARP_RIGS,
    }
}

/// Catalog rigs, a wind-stable rig when windy, then the float fallback,
/// truncated to `max`
#[must_use]
pub fn suggest_rigs(species: Species, wind_speed: f64, max: usize) -> Vec<Rig> {
    let mut rigs = rig_catalog(species).to_vec();

    if wind_speed > WINDY_ABOVE_KMH {
        rigs.push(WIND_STABLE_RIG);
    }
    rigs.push(FLOAT_RIG_FALLBACK);

    rigs.truncate(max);
    rigs
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_calm_day_ends_with_float_fallback() {
        let rigs = suggest_rigs(Species::Calbasu, 8.0, 4);
        assert_eq!(rigs.len(), 4);
        assert_eq!(rigs[3], FLOAT_RIG_FALLBACK);
    }

    #[test]
    fn test_windy_day_trims_fallback() {
        let rigs = suggest_rigs(Species::Tilapia, 20.0, 4);
        assert_eq!(rigs.len(), 4);
        assert_eq!(rigs[3], WIND_STABLE_RIG);
        assert!(!rigs.contains(&FLOAT_RIG_FALLBACK));
    }

    #[test]
    fn test_wind_threshold_is_exclusive() {
        let rigs = suggest_rigs(Species::Barb, 15.0, 4);
        assert!(!rigs.contains(&WIND_STABLE_RIG));
    }
}
