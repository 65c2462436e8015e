//! Trip planning view.

use crate::model::state::PlannerState;
use crate::model::trip::Trip;
use std::fmt::Write;

/// Renders trips ascending by start date.
pub fn render_trips(state: &PlannerState) -> String {
    if state.trips.is_empty() {
        return "No trips planned.\n".to_string();
    }

    let mut sorted: Vec<&Trip> = state.trips.iter().collect();
    sorted.sort_by(|a, b| a.date_start.cmp(&b.date_start));

    let mut out = String::from("Trips\n");
    for trip in sorted {
        let _ = write!(out, "{}  {}", trip.city, trip.date_start);
        if let Some(end) = &trip.date_end {
            let _ = write!(out, " - {end}");
        }
        if !trip.notes.is_empty() {
            let _ = write!(out, "  ({})", trip.notes);
        }
        let _ = writeln!(out, "  (id {})", trip.id);
    }
    out
}
