//! Expense log and wishlist views.

use crate::model::money::Expense;
use crate::model::state::PlannerState;
use crate::view::checkbox;
use std::fmt::Write;

/// Renders the expense log, most recent date first, with a running total.
pub fn render_expenses(state: &PlannerState) -> String {
    if state.expenses.is_empty() {
        return "No expenses logged yet.\n".to_string();
    }

    let mut sorted: Vec<&Expense> = state.expenses.iter().collect();
    sorted.sort_by(|a, b| b.date.cmp(&a.date));

    let mut out = String::from("Expenses\n");
    let mut total = 0.0;
    for expense in sorted {
        total += expense.amount;
        let _ = writeln!(
            out,
            "{}  {}  {}  {:.2}  (id {})",
            expense.date,
            expense.item,
            expense.category.label(),
            expense.amount,
            expense.id
        );
    }
    let _ = writeln!(out, "Total: {total:.2}");
    out
}

/// Renders the wishlist in stored order; purchased items keep their place.
pub fn render_wishlist(state: &PlannerState) -> String {
    if state.wishlist.is_empty() {
        return "Wishlist is empty.\n".to_string();
    }

    let mut out = String::from("Wishlist\n");
    for item in &state.wishlist {
        let _ = write!(
            out,
            "{} {} [{}]",
            checkbox(item.purchased),
            item.item,
            item.priority.label()
        );
        if item.price > 0.0 {
            let _ = write!(out, " {:.2}", item.price);
        }
        let _ = writeln!(out, " (id {})", item.id);
    }
    out
}
