//! Seasonal and precipitation adjustments to the overall rating
//!
//! Both are additive modifiers with an optional advisory note. Seasons follow
//! the Indian monsoon cycle rather than the temperate calendar.

use std::fmt;

use serde::Serialize;

/// Additive rating adjustment with its advisory note
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Modifier {
    pub value: i32,
    pub note: Option<&'static str>,
}

impl Modifier {
    /// No adjustment and no note
    pub const NONE: Modifier = Modifier {
        value: 0,
        note: None,
    };
}

/// Fishing season in the Indian monsoon calendar
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum Season {
    /// October-November: clear oxygenated water, ideal temperatures
    PostMonsoon,
    /// June-September: falling pressure triggers feeding
    Monsoon,
    /// December-February: carps slow but acceptable
    Winter,
    /// March-May: extreme heat, low water
    PreMonsoon,
}

impl Season {
    /// Season for a calendar month (1 = January). Out-of-range months are
    /// treated as winter, which carries no adjustment.
    #[must_use]
    pub fn from_month(month: u32) -> Self {
        match month {
            10 | 11 => Season::PostMonsoon,
            6..=9 => Season::Monsoon,
            3..=5 => Season::PreMonsoon,
            _ => Season::Winter,
        }
    }

    #[must_use]
    pub fn modifier(self) -> Modifier {
        match self {
            Season::PostMonsoon => Modifier {
                value: 10,
                note: Some(
                    "Post-monsoon season (Oct-Nov) - best fishing period in India; ideal temperature and clear oxygenated water",
                ),
            },
            Season::Monsoon => Modifier {
                value: 5,
                note: Some(
                    "Monsoon season (Jun-Sep) - falling pressure triggers aggressive feeding; avoid fishing during heavy downpours",
                ),
            },
            Season::Winter => Modifier::NONE,
            Season::PreMonsoon => Modifier {
                value: -10,
                note: Some(
                    "Pre-monsoon summer (Mar-May) - extreme heat makes midday fishing poor; restrict to early morning (5-8 AM) and evening (5-7 PM)",
                ),
            },
        }
    }
}

impl fmt::Display for Season {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Season::PostMonsoon => write!(f, "Post-monsoon"),
            Season::Monsoon => write!(f, "Monsoon"),
            Season::Winter => write!(f, "Winter"),
            Season::PreMonsoon => write!(f, "Pre-monsoon"),
        }
    }
}

/// Seasonal modifier for a calendar month
#[must_use]
pub fn seasonal_modifier(month: u32) -> Modifier {
    Season::from_month(month).modifier()
}

/// Precipitation modifier for a rainfall amount in mm.
///
/// Light rain disturbs the surface and washes insects in, so it helps; heavy
/// rain brings turbidity and unsafe currents.
#[must_use]
pub fn precipitation_modifier(mm: f64) -> Modifier {
    if mm >= 10.0 {
        Modifier {
            value: -15,
            note: Some("Heavy rainfall - high turbidity and strong currents; consider postponing"),
        }
    } else if mm >= 5.0 {
        Modifier {
            value: -5,
            note: Some("Moderate rain - fish feeding but casting difficult; use heavier weights"),
        }
    } else if mm >= 1.0 {
        Modifier {
            value: 8,
            note: Some("Light rain - excellent conditions! Fish feeding actively near the surface"),
        }
    } else {
        Modifier::NONE
    }
}
