//! Text renderers over the aggregate.
//!
//! # Responsibility
//! - Rebuild each view region from scratch on every call; no incremental
//!   diffing, no cached output.
//! - Apply the per-domain sort orders at render time; stored order in the
//!   aggregate is never reordered.
//!
//! # Invariants
//! - Renderers are pure: they take the aggregate (and, where relevant, a
//!   caller-supplied "today") and return a string. They own no clock.
//! - Date ordering relies on plain string comparison of zero-padded
//!   `YYYY-MM-DD` values, which the model validation guarantees.

mod journal;
mod money;
mod tasks;
mod trips;
mod wellness;

pub use journal::{render_affirmations, render_journal, render_progress};
pub use money::{render_expenses, render_wishlist};
pub use tasks::{daily_focus, render_daily_focus, render_priorities, render_tasks, FOCUS_LIMIT};
pub use trips::render_trips;
pub use wellness::{render_habits, render_water, render_workout_focus, render_workouts};

/// Checkbox marker used across list renderers.
pub(crate) fn checkbox(checked: bool) -> &'static str {
    if checked {
        "[x]"
    } else {
        "[ ]"
    }
}
