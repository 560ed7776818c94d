//! Bait, rig and combination records

use serde::Serialize;

/// Broad bait category
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum BaitKind {
    Live,
    Artificial,
    Fly,
}

/// A bait recommendation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Bait {
    pub name: &'static str,
    #[serde(rename = "type")]
    pub kind: BaitKind,
    /// Why the bait works for the species or conditions
    pub reason: &'static str,
    /// Base suitability (0-100)
    pub score: u8,
}

/// A rig (terminal tackle setup) recommendation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Rig {
    pub name: &'static str,
    pub description: &'static str,
    pub best_for: &'static str,
    /// Base suitability (0-100)
    pub score: u8,
}

/// A bait paired with a rig
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BaitRigCombo {
    pub bait: Bait,
    pub rig: Rig,
    /// Weighted blend of the bait and rig scores
    pub combined_score: u8,
}
