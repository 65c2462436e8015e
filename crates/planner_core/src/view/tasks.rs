//! Task list, daily focus and priorities views.

use crate::model::state::PlannerState;
use crate::model::task::Task;
use crate::view::checkbox;
use std::cmp::Ordering;
use std::fmt::Write;

/// Maximum entries on the daily focus list.
pub const FOCUS_LIMIT: usize = 5;

/// Orders tasks for rendering: ascending by date, then by time.
///
/// On equal dates a timed task sorts before an untimed one; two untimed
/// tasks keep their stored order (the sort is stable).
fn task_order(a: &Task, b: &Task) -> Ordering {
    match a.date.cmp(&b.date) {
        Ordering::Equal => match (a.time.as_deref(), b.time.as_deref()) {
            (Some(left), Some(right)) => left.cmp(right),
            (Some(_), None) => Ordering::Less,
            (None, Some(_)) => Ordering::Greater,
            (None, None) => Ordering::Equal,
        },
        unequal => unequal,
    }
}

/// Renders the full task table, sorted chronologically.
pub fn render_tasks(state: &PlannerState) -> String {
    if state.tasks.is_empty() {
        return "No tasks yet.\n".to_string();
    }

    let mut sorted: Vec<&Task> = state.tasks.iter().collect();
    sorted.sort_by(|a, b| task_order(a, b));

    let mut out = String::from("Tasks\n");
    for task in sorted {
        let time = task.time.as_deref().unwrap_or("-");
        let _ = writeln!(
            out,
            "{} {}  {} {:>5}  {}  (id {})",
            checkbox(task.completed),
            task.name,
            task.date,
            time,
            task.category.label(),
            task.id
        );
    }
    out
}

/// The daily focus selection: the first five incomplete tasks dated `today`,
/// in stored order.
///
/// Recomputed on every call; a front-end that stays open across midnight
/// must call again with the new date to refresh.
pub fn daily_focus<'a>(state: &'a PlannerState, today: &str) -> Vec<&'a Task> {
    state
        .tasks
        .iter()
        .filter(|task| task.date == today && !task.completed)
        .take(FOCUS_LIMIT)
        .collect()
}

/// Renders the daily focus list for `today`.
pub fn render_daily_focus(state: &PlannerState, today: &str) -> String {
    let focus = daily_focus(state, today);
    if focus.is_empty() {
        return "No tasks for today.\n".to_string();
    }

    let mut out = String::from("Today's focus\n");
    for task in focus {
        let _ = writeln!(out, "{} {}", checkbox(task.completed), task.name);
    }
    out
}

/// Renders priorities in stored order.
pub fn render_priorities(state: &PlannerState) -> String {
    if state.priorities.is_empty() {
        return "No priorities yet.\n".to_string();
    }

    let mut out = String::from("Priorities\n");
    for priority in &state.priorities {
        let _ = write!(out, "- {} [{}]", priority.name, priority.level.label());
        if let Some(date) = &priority.date {
            let _ = write!(out, " due {date}");
        }
        let _ = writeln!(out, " (id {})", priority.id);
    }
    out
}
