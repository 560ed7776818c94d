//! Bait x rig combination ranking

use serde::{Deserialize, Serialize};

use crate::models::{Bait, BaitRigCombo, Rig};
use crate::scoring::clamp_score;

/// Relative weight of bait and rig in a combination score
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ComboWeights {
    pub bait: f64,
    pub rig: f64,
}

impl Default for ComboWeights {
    fn default() -> Self {
        Self { bait: 0.6, rig: 0.4 }
    }
}

impl ComboWeights {
    #[must_use]
    pub fn combine(&self, bait: &Bait, rig: &Rig) -> u8 {
        clamp_score((f64::from(bait.score) * self.bait + f64::from(rig.score) * self.rig).round())
    }
}

/// Rank every bait and rig pair, best first, keeping the top `max`.
///
/// The sort is stable, so equal scores keep bait-major catalog order.
#[must_use]
pub fn rank_combos(
    baits: &[Bait],
    rigs: &[Rig],
    weights: ComboWeights,
    max: usize,
) -> Vec<BaitRigCombo> {
    let mut combos: Vec<BaitRigCombo> = baits
        .iter()
        .flat_map(|bait| {
            rigs.iter().map(move |rig| BaitRigCombo {
                bait: *bait,
                rig: *rig,
                combined_score: weights.combine(bait, rig),
            })
        })
        .collect();

    combos.sort_by(|a, b| b.combined_score.cmp(&a.combined_score));
    combos.truncate(max);
    combos
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Species;
    use crate::tackle::{suggest_baits, suggest_rigs};

    #[test]
    fn test_combined_score_blend() {
        let baits = suggest_baits(Species::OtherCarps, 25.0, 1013.0, 5);
        let rigs = suggest_rigs(Species::OtherCarps, 5.0, 4);
        // Corn 95 + Hair Rig 95
        assert_eq!(ComboWeights::default().combine(&baits[0], &rigs[0]), 95);
        // Worms 75 + Float Rig 80 = 45 + 32
        assert_eq!(ComboWeights::default().combine(&baits[4], &rigs[3]), 77);
    }

    #[test]
    fn test_top_five_sorted_descending() {
        let baits = suggest_baits(Species::OtherCarps, 25.0, 1013.0, 5);
        let rigs = suggest_rigs(Species::OtherCarps, 5.0, 4);
        let combos = rank_combos(&baits, &rigs, ComboWeights::default(), 5);

        assert_eq!(combos.len(), 5);
        let scores: Vec<u8> = combos.iter().map(|c| c.combined_score).collect();
        assert_eq!(scores, vec![95, 93, 92, 91, 90]);
        assert!(combos.windows(2).all(|w| w[0].combined_score >= w[1].combined_score));
        assert_eq!(combos[0].bait.name, "Corn");
        assert_eq!(combos[0].rig.name, "Hair Rig");
        assert_eq!(combos[0].combined_score, 95);
    }

    #[test]
    fn test_ties_keep_catalog_order() {
        let baits = suggest_baits(Species::OtherCarps, 25.0, 1013.0, 5);
        let rigs = suggest_rigs(Species::OtherCarps, 5.0, 4);
        let combos = rank_combos(&baits, &rigs, ComboWeights::default(), 20);

        // Corn+Float Rig (57+32) and Bread+Hair Rig (51+38) both score 89
        let tied: Vec<(&str, &str)> = combos
            .iter()
            .filter(|c| c.combined_score == 89)
            .map(|c| (c.bait.name, c.rig.name))
            .collect();
        assert_eq!(tied, vec![("Corn", "Float Rig"), ("Bread", "Hair Rig")]);
    }

    #[test]
    fn test_empty_inputs_give_no_combos() {
        assert!(rank_combos(&[], &[], ComboWeights::default(), 5).is_empty());
    }
}
