//! Weekly trackers keyed by weekday: habits and water intake.
//!
//! # Invariants
//! - Tracker identity is the composite key (habit/day or day/glass), not an
//!   id; toggling the same key twice restores the prior state.
//! - Water glass indices stay within `0..=7` (eight glasses per day).

use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, BTreeSet};

/// Glasses per day on the water grid.
pub const GLASSES_PER_DAY: u8 = 8;

/// Weekday key used by the habit grid and the water tracker.
///
/// Serialized as the short lowercase key (`mon`..`sun`) the persisted
/// document uses for map keys.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Weekday {
    Mon,
    Tue,
    Wed,
    Thu,
    Fri,
    Sat,
    Sun,
}

impl Weekday {
    /// All days, Monday first, in grid order.
    pub const ALL: [Weekday; 7] = [
        Self::Mon,
        Self::Tue,
        Self::Wed,
        Self::Thu,
        Self::Fri,
        Self::Sat,
        Self::Sun,
    ];

    pub fn key(self) -> &'static str {
        match self {
            Self::Mon => "mon",
            Self::Tue => "tue",
            Self::Wed => "wed",
            Self::Thu => "thu",
            Self::Fri => "fri",
            Self::Sat => "sat",
            Self::Sun => "sun",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Mon => "Monday",
            Self::Tue => "Tuesday",
            Self::Wed => "Wednesday",
            Self::Thu => "Thursday",
            Self::Fri => "Friday",
            Self::Sat => "Saturday",
            Self::Sun => "Sunday",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "mon" => Some(Self::Mon),
            "tue" => Some(Self::Tue),
            "wed" => Some(Self::Wed),
            "thu" => Some(Self::Thu),
            "fri" => Some(Self::Fri),
            "sat" => Some(Self::Sat),
            "sun" => Some(Self::Sun),
            _ => None,
        }
    }
}

/// Habit grid: habit name, then weekday, then done flag.
pub type HabitGrid = BTreeMap<String, BTreeMap<Weekday, bool>>;

/// Water grid: weekday to the set of filled glass indices.
pub type WaterGrid = BTreeMap<Weekday, BTreeSet<u8>>;

/// Overall water completion as a whole percentage.
///
/// Filled cells over the 56-cell week (7 days x 8 glasses), rounded to the
/// nearest integer.
pub fn water_completion_percent(water: &WaterGrid) -> u8 {
    let filled: usize = water.values().map(BTreeSet::len).sum();
    let total = usize::from(GLASSES_PER_DAY) * Weekday::ALL.len();
    ((filled as f64 / total as f64) * 100.0).round() as u8
}
