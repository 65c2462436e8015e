//! The planner aggregate.
//!
//! # Responsibility
//! - Hold every domain list/map as one unit of persistence.
//! - Supply the documented defaults when a field is absent from the
//!   persisted document (shallow merge on load).
//!
//! # Invariants
//! - The aggregate is owned by exactly one [`crate::PlannerService`] at a
//!   time; nothing mutates it behind the service's back.
//! - Serialized field names match the persisted document, including the
//!   camelCase `workoutFocus` key.

use crate::model::ids::PlannerId;
use crate::model::journal::Journal;
use crate::model::money::{Expense, WishlistItem};
use crate::model::priority::Priority;
use crate::model::task::Task;
use crate::model::tracker::{HabitGrid, WaterGrid};
use crate::model::trip::Trip;
use crate::model::workout::Workout;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Seed affirmations shown before the user adds their own.
pub const DEFAULT_AFFIRMATIONS: [&str; 4] = [
    "I am in the right place at the right time.",
    "I am grateful for everything I have.",
    "I am loved just as I am.",
    "I deserve to ask for help.",
];

/// Default progress slider position.
pub const DEFAULT_PROGRESS: u8 = 50;

/// Everything the planner remembers, serialized as one JSON document.
///
/// Every field carries a serde default so a document written by an older
/// shape (or a partially missing one) merges with the in-memory defaults
/// key by key.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlannerState {
    #[serde(default)]
    pub tasks: Vec<Task>,
    #[serde(default)]
    pub priorities: Vec<Priority>,
    #[serde(default)]
    pub habits: HabitGrid,
    #[serde(default)]
    pub workouts: Vec<Workout>,
    #[serde(default, rename = "workoutFocus")]
    pub workout_focus: BTreeMap<String, bool>,
    #[serde(default)]
    pub water: WaterGrid,
    #[serde(default)]
    pub expenses: Vec<Expense>,
    #[serde(default)]
    pub wishlist: Vec<WishlistItem>,
    #[serde(default)]
    pub trips: Vec<Trip>,
    #[serde(default)]
    pub journal: Journal,
    #[serde(default = "default_affirmations")]
    pub affirmations: Vec<String>,
    #[serde(default = "default_progress")]
    pub progress: u8,
}

fn default_affirmations() -> Vec<String> {
    DEFAULT_AFFIRMATIONS.iter().map(|s| s.to_string()).collect()
}

fn default_progress() -> u8 {
    DEFAULT_PROGRESS
}

impl Default for PlannerState {
    fn default() -> Self {
        Self {
            tasks: Vec::new(),
            priorities: Vec::new(),
            habits: HabitGrid::new(),
            workouts: Vec::new(),
            workout_focus: BTreeMap::new(),
            water: WaterGrid::new(),
            expenses: Vec::new(),
            wishlist: Vec::new(),
            trips: Vec::new(),
            journal: Journal::default(),
            affirmations: default_affirmations(),
            progress: DEFAULT_PROGRESS,
        }
    }
}

impl PlannerState {
    /// Largest id present in any list, used to seed the id generator so a
    /// reopened aggregate never re-issues an existing id.
    pub fn max_id(&self) -> PlannerId {
        let lists = [
            self.tasks.iter().map(|t| t.id).max(),
            self.priorities.iter().map(|p| p.id).max(),
            self.workouts.iter().map(|w| w.id).max(),
            self.expenses.iter().map(|e| e.id).max(),
            self.wishlist.iter().map(|w| w.id).max(),
            self.trips.iter().map(|t| t.id).max(),
        ];
        lists.into_iter().flatten().max().unwrap_or(0)
    }
}
