//! Habit grid, workout log and water tracker views.

use crate::model::state::PlannerState;
use crate::model::tracker::{water_completion_percent, Weekday, GLASSES_PER_DAY};
use crate::model::workout::Workout;
use crate::view::checkbox;
use std::fmt::Write;

/// Renders the weekly habit grid, one row per habit.
///
/// Habits render in stable name order; unmarked days show as unchecked.
pub fn render_habits(state: &PlannerState) -> String {
    if state.habits.is_empty() {
        return "No habits tracked yet.\n".to_string();
    }

    let mut out = String::from("Habits        ");
    for day in Weekday::ALL {
        let _ = write!(out, " {}", day.key());
    }
    out.push('\n');

    for (habit, days) in &state.habits {
        let _ = write!(out, "{habit:<14}");
        for day in Weekday::ALL {
            let done = days.get(&day).copied().unwrap_or(false);
            let _ = write!(out, " {}", checkbox(done));
        }
        out.push('\n');
    }
    out
}

/// Renders the workout log, most recent date first.
pub fn render_workouts(state: &PlannerState) -> String {
    if state.workouts.is_empty() {
        return "No workouts logged yet.\n".to_string();
    }

    let mut sorted: Vec<&Workout> = state.workouts.iter().collect();
    sorted.sort_by(|a, b| b.date.cmp(&a.date));

    let mut out = String::from("Workouts\n");
    for workout in sorted {
        let _ = writeln!(
            out,
            "{} {}  {}  {} min  (id {})",
            checkbox(workout.completed),
            workout.date,
            workout.kind.label(),
            workout.duration,
            workout.id
        );
    }
    out
}

/// Renders the training focus areas in stored order.
pub fn render_workout_focus(state: &PlannerState) -> String {
    if state.workout_focus.is_empty() {
        return "No focus areas set.\n".to_string();
    }

    let mut out = String::from("Training focus\n");
    for (area, active) in &state.workout_focus {
        let _ = writeln!(out, "{} {area}", checkbox(*active));
    }
    out
}

/// Renders the water grid with the weekly completion percentage.
pub fn render_water(state: &PlannerState) -> String {
    let mut out = String::from("Water\n");
    for day in Weekday::ALL {
        let _ = write!(out, "{:<10}", day.label());
        let filled = state.water.get(&day);
        for glass in 0..GLASSES_PER_DAY {
            let full = filled.is_some_and(|set| set.contains(&glass));
            out.push_str(if full { " #" } else { " ." });
        }
        out.push('\n');
    }
    let _ = writeln!(out, "Week: {}%", water_completion_percent(&state.water));
    out
}
