//! Bait catalogs per species

use crate::models::{Bait, BaitKind, Species};

const TILAPIA_BAITS: [Bait; 5] = [
    Bait {
        name: "Bread",
        kind: BaitKind::Live,
        reason: "Tilapia are omnivorous and love bread",
        score: 90,
    },
    Bait {
        name: "Corn",
        kind: BaitKind::Live,
        reason: "Sweet corn is irresistible to tilapia",
        score: 85,
    },
    Bait {
        name: "Worms",
        kind: BaitKind::Live,
        reason: "Protein-rich, works well in warm water",
        score: 80,
    },
    Bait {
        name: "Vegetables",
        kind: BaitKind::Live,
        reason: "Peas, lettuce - plant-based baits work",
        score: 75,
    },
    Bait {
        name: "Tilapia Feed",
        kind: BaitKind::Artificial,
        reason: "Commercial feed pellets",
        score: 70,
    },
];

const BARB_BAITS: [Bait; 5] = [
    Bait {
        name: "Worms",
        kind: BaitKind::Live,
        reason: "Barbs are bottom feeders, love worms",
        score: 95,
    },
    Bait {
        name: "Insects",
        kind: BaitKind::Live,
        reason: "Crickets, grasshoppers - natural prey",
        score: 90,
    },
    Bait {
        name: "Small Lures",
        kind: BaitKind::Artificial,
        reason: "Tiny spinners work great",
        score: 85,
    },
    Bait {
        name: "Bread",
        kind: BaitKind::Live,
        reason: "Attracts barbs in murky water",
        score: 80,
    },
    Bait {
        name: "Fruit",
        kind: BaitKind::Live,
        reason: "Banana, mango pieces work well",
        score: 75,
    },
];

const CALBASU_BAITS: [Bait; 5] = [
    Bait {
        name: "Vegetables",
        kind: BaitKind::Live,
        reason: "Calbasu loves boiled vegetables",
        score: 95,
    },
    Bait {
        name: "Fruits",
        kind: BaitKind::Live,
        reason: "Banana, jackfruit - their favorites",
        score: 90,
    },
    Bait {
        name: "Bread",
        kind: BaitKind::Live,
        reason: "Effective and easy to find",
        score: 85,
    },
    Bait {
        name: "Rice",
        kind: BaitKind::Live,
        reason: "Cooked rice balls work well",
        score: 80,
    },
    Bait {
        name: "Tubers",
        kind: BaitKind::Live,
        reason: "Sweet potato, arrowroot",
        score: 75,
    },
];

const OTHER_CARP_BAITS: [Bait; 5] = [
    Bait {
        name: "Corn",
        kind: BaitKind::Live,
        reason: "Classic carp bait, works year-round",
        score: 95,
    },
    Bait {
        name: "Boiled Potatoes",
        kind: BaitKind::Live,
        reason: "Firm, durable, loved by carps",
        score: 90,
    },
    Bait {
        name: "Bread",
        kind: BaitKind::Live,
        reason: "Easy to use, attracts big carps",
        score: 85,
    },
    Bait {
        name: "Carp Pellets",
        kind: BaitKind::Artificial,
        reason: "Commercial baits for carp",
        score: 80,
    },
    Bait {
        name: "Worms",
        kind: BaitKind::Live,
        reason: "Great for smaller carps",
        score: 75,
    },
];

/// Added when the water is cold (below 20°C)
pub const COLD_WATER_BAIT: Bait = Bait {
    name: "Live Shrimp",
    kind: BaitKind::Live,
    reason: "Cold water - slower presentations work best",
    score: 70,
};

/// Added under high pressure (above 1015 hPa)
pub const DEEP_PRESENTATION_BAIT: Bait = Bait {
    name: "Crankbaits",
    kind: BaitKind::Artificial,
    reason: "High pressure - fish deeper",
    score: 65,
};

/// Added under low pressure (below 1010 hPa)
pub const TOPWATER_BAIT: Bait = Bait {
    name: "Topwater Lures",
    kind: BaitKind::Artificial,
    reason: "Low pressure brings fish to surface",
    score: 65,
};

const COLD_WATER_BELOW: f64 = 20.0;
const HIGH_PRESSURE_ABOVE: f64 = 1015.0;
const LOW_PRESSURE_BELOW: f64 = 1010.0;

/// Static bait catalog for a species
#[must_use]
pub fn bait_catalog(species: Species) -> &'static [Bait] {
    match species {
        Species::Tilapia => &TILAPIA_BAITS,
        Species::Barb => &BARB_BAITS,
        Species::Calbasu => &CALBASU_BAITS,
        Species::OtherCarps => &OTHER_CARP_BAITS,
    }
}

/// Catalog baits followed by condition-triggered extras, truncated to `max`
#[must_use]
pub fn suggest_baits(species: Species, temperature: f64, pressure: f64, max: usize) -> Vec<Bait> {
    let mut baits = bait_catalog(species).to_vec();

    if temperature < COLD_WATER_BELOW {
        baits.push(COLD_WATER_BAIT);
    }
    if pressure > HIGH_PRESSURE_ABOVE {
        baits.push(DEEP_PRESENTATION_BAIT);
    }
    if pressure < LOW_PRESSURE_BELOW {
        baits.push(TOPWATER_BAIT);
    }

    baits.truncate(max);
    baits
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_species_has_five_baits() {
        for species in Species::ALL {
            let catalog = bait_catalog(species);
            assert_eq!(catalog.len(), 5, "{species}");
            assert!(catalog.iter().all(|b| b.score <= 100));
        }
    }

    #[test]
    fn test_extras_are_trimmed_at_default_cap() {
        let baits = suggest_baits(Species::Tilapia, 15.0, 1020.0, 5);
        assert_eq!(baits, TILAPIA_BAITS.to_vec());
    }

    #[test]
    fn test_extras_follow_catalog_order() {
        let baits = suggest_baits(Species::Barb, 15.0, 1005.0, 10);
        let names: Vec<&str> = baits.iter().map(|b| b.name).collect();
        assert_eq!(
            names,
            vec![
                "Worms",
                "Insects",
                "Small Lures",
                "Bread",
                "Fruit",
                "Live Shrimp",
                "Topwater Lures"
            ]
        );
    }

    #[test]
    fn test_high_pressure_adds_crankbaits() {
        let baits = suggest_baits(Species::Calbasu, 26.0, 1020.0, 6);
        assert_eq!(baits.last(), Some(&DEEP_PRESENTATION_BAIT));
        assert!(!baits.contains(&COLD_WATER_BAIT));
    }
}
