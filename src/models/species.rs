//! Target species for a forecast

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::FishcastError;

/// Freshwater species the forecast can target
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Species {
    Tilapia,
    Barb,
    Calbasu,
    /// Rohu, Catla, Mrigal and other carps
    #[default]
    OtherCarps,
}

impl Species {
    /// Every supported species, in display order
    pub const ALL: [Species; 4] = [
        Species::Tilapia,
        Species::Barb,
        Species::Calbasu,
        Species::OtherCarps,
    ];

    /// Human-readable name
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Species::Tilapia => "Tilapia",
            Species::Barb => "Barb",
            Species::Calbasu => "Calbasu",
            Species::OtherCarps => "Other Carps",
        }
    }

    /// Identifier used on the wire
    #[must_use]
    pub fn key(self) -> &'static str {
        match self {
            Species::Tilapia => "tilapia",
            Species::Barb => "barb",
            Species::Calbasu => "calbasu",
            Species::OtherCarps => "otherCarps",
        }
    }
}

impl fmt::Display for Species {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

impl FromStr for Species {
    type Err = FishcastError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim();
        Species::ALL
            .into_iter()
            .find(|species| {
                species.key().eq_ignore_ascii_case(wanted)
                    || species.label().eq_ignore_ascii_case(wanted)
            })
            .ok_or_else(|| FishcastError::validation(format!("unknown species '{wanted}'")))
    }
}
