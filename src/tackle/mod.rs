//! Tackle recommendations
//!
//! This module provides species-specific tackle advice:
//! - Bait catalogs extended with condition-triggered entries
//! - Rig catalogs extended with wind and fallback entries
//! - Ranking of bait and rig pairs by blended score

pub mod baits;
pub mod combos;
pub mod rigs;

pub use baits::{bait_catalog, suggest_baits};
pub use combos::{ComboWeights, rank_combos};
pub use rigs::{rig_catalog, suggest_rigs};
