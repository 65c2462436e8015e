//! Journal, affirmations and progress views.

use crate::model::state::PlannerState;
use std::fmt::Write;

/// Renders both journal areas.
pub fn render_journal(state: &PlannerState) -> String {
    let mut out = String::from("Journal\n");
    let _ = writeln!(out, "Gratitude: {}", state.journal.gratitude);
    let _ = writeln!(out, "Thoughts:  {}", state.journal.thoughts);
    out
}

/// Renders affirmations numbered by position, which is also the handle
/// used to remove them.
pub fn render_affirmations(state: &PlannerState) -> String {
    if state.affirmations.is_empty() {
        return "No affirmations.\n".to_string();
    }

    let mut out = String::from("Affirmations\n");
    for (index, text) in state.affirmations.iter().enumerate() {
        let _ = writeln!(out, "{index}. {text}");
    }
    out
}

/// Renders the progress bar, twenty cells wide.
pub fn render_progress(state: &PlannerState) -> String {
    let percent = state.progress;
    let filled = usize::from(percent) * 20 / 100;
    let mut out = String::from("Progress [");
    for cell in 0..20 {
        out.push(if cell < filled { '#' } else { '-' });
    }
    let _ = writeln!(out, "] {percent}%");
    out
}
