//! Planner use-case service.
//!
//! # Responsibility
//! - Own the aggregate exclusively and expose one mutator family per domain
//!   list, plus the tracker and singleton setters.
//! - Persist the full aggregate after every successful mutation.
//!
//! # Invariants
//! - A validation failure leaves the aggregate untouched and persists
//!   nothing.
//! - A persistence failure never rolls the mutation back: it is logged and
//!   the in-memory aggregate stays authoritative until the next successful
//!   save.
//! - Removals of absent ids and toggles of absent ids are no-ops.

use crate::model::ids::{IdGen, PlannerId};
use crate::model::money::{Expense, ExpenseDraft, WishlistDraft, WishlistItem};
use crate::model::priority::{Priority, PriorityDraft};
use crate::model::state::PlannerState;
use crate::model::task::{Task, TaskDraft};
use crate::model::tracker::{Weekday, GLASSES_PER_DAY};
use crate::model::trip::{Trip, TripDraft};
use crate::model::workout::{Workout, WorkoutDraft};
use crate::model::ValidationError;
use crate::repo::state_repo::StateRepository;
use log::{error, info};

/// Single controller for all planner mutations.
///
/// Loads the aggregate once at construction; every mutator runs
/// synchronously to completion (mutate, then persist) before returning.
pub struct PlannerService<R: StateRepository> {
    state: PlannerState,
    repo: R,
    ids: IdGen,
}

impl<R: StateRepository> PlannerService<R> {
    /// Opens the service over a repository, loading the persisted aggregate
    /// (or defaults) and seeding the id generator past every existing id.
    pub fn open(repo: R) -> crate::repo::state_repo::RepoResult<Self> {
        let state = repo.load_state()?;
        let ids = IdGen::seeded(state.max_id());
        Ok(Self { state, repo, ids })
    }

    /// Read access to the current aggregate.
    pub fn state(&self) -> &PlannerState {
        &self.state
    }

    /// Writes the full aggregate; failures are reported, not propagated.
    ///
    /// The session keeps running on the in-memory aggregate even when
    /// persistence is permanently broken.
    fn persist(&self) {
        if let Err(err) = self.repo.save_state(&self.state) {
            error!("event=state_save module=service status=error error={err}");
        }
    }

    // ---- tasks ----

    /// Validates and appends a task, returning its new id.
    pub fn add_task(&mut self, draft: &TaskDraft) -> Result<PlannerId, ValidationError> {
        let task = draft.validate(self.ids.next())?;
        let id = task.id;
        self.state.tasks.push(task);
        info!("event=task_add module=service status=ok id={id}");
        self.persist();
        Ok(id)
    }

    /// Removes a task by id; absent ids are a no-op.
    pub fn remove_task(&mut self, id: PlannerId) {
        self.state.tasks.retain(|task| task.id != id);
        self.persist();
    }

    /// Flips a task's completed flag; absent ids are a no-op.
    pub fn toggle_task(&mut self, id: PlannerId) {
        if let Some(task) = self.state.tasks.iter_mut().find(|task| task.id == id) {
            task.completed = !task.completed;
            self.persist();
        }
    }

    /// Task lookup by id, primarily for front-ends echoing a mutation.
    pub fn task(&self, id: PlannerId) -> Option<&Task> {
        self.state.tasks.iter().find(|task| task.id == id)
    }

    // ---- priorities ----

    pub fn add_priority(&mut self, draft: &PriorityDraft) -> Result<PlannerId, ValidationError> {
        let priority = draft.validate(self.ids.next())?;
        let id = priority.id;
        self.state.priorities.push(priority);
        self.persist();
        Ok(id)
    }

    pub fn remove_priority(&mut self, id: PlannerId) {
        self.state.priorities.retain(|priority| priority.id != id);
        self.persist();
    }

    pub fn priority(&self, id: PlannerId) -> Option<&Priority> {
        self.state.priorities.iter().find(|p| p.id == id)
    }

    // ---- habits ----

    /// Records a habit checkbox for one weekday.
    pub fn set_habit(&mut self, habit: &str, day: Weekday, done: bool) -> Result<(), ValidationError> {
        let habit = crate::model::require_text("habit", habit)?;
        self.state
            .habits
            .entry(habit)
            .or_default()
            .insert(day, done);
        self.persist();
        Ok(())
    }

    // ---- workouts ----

    pub fn add_workout(&mut self, draft: &WorkoutDraft) -> Result<PlannerId, ValidationError> {
        let workout = draft.validate(self.ids.next())?;
        let id = workout.id;
        self.state.workouts.push(workout);
        self.persist();
        Ok(id)
    }

    pub fn remove_workout(&mut self, id: PlannerId) {
        self.state.workouts.retain(|workout| workout.id != id);
        self.persist();
    }

    pub fn toggle_workout(&mut self, id: PlannerId) {
        if let Some(workout) = self.state.workouts.iter_mut().find(|w| w.id == id) {
            workout.completed = !workout.completed;
            self.persist();
        }
    }

    pub fn workout(&self, id: PlannerId) -> Option<&Workout> {
        self.state.workouts.iter().find(|w| w.id == id)
    }

    /// Marks a training focus area active or inactive.
    pub fn set_workout_focus(&mut self, area: &str, active: bool) -> Result<(), ValidationError> {
        let area = crate::model::require_text("focus area", area)?;
        self.state.workout_focus.insert(area, active);
        self.persist();
        Ok(())
    }

    // ---- water ----

    /// Toggles one glass cell: fills it when empty, empties it when filled.
    pub fn toggle_water(&mut self, day: Weekday, glass: u8) -> Result<(), ValidationError> {
        if glass >= GLASSES_PER_DAY {
            return Err(ValidationError::GlassIndexOutOfRange(glass));
        }
        let day_emptied = {
            let glasses = self.state.water.entry(day).or_default();
            if !glasses.insert(glass) {
                glasses.remove(&glass);
            }
            glasses.is_empty()
        };
        if day_emptied {
            self.state.water.remove(&day);
        }
        self.persist();
        Ok(())
    }

    /// Clears the whole water grid.
    pub fn reset_water(&mut self) {
        self.state.water.clear();
        self.persist();
    }

    // ---- expenses ----

    pub fn add_expense(&mut self, draft: &ExpenseDraft) -> Result<PlannerId, ValidationError> {
        let expense = draft.validate(self.ids.next())?;
        let id = expense.id;
        self.state.expenses.push(expense);
        self.persist();
        Ok(id)
    }

    pub fn remove_expense(&mut self, id: PlannerId) {
        self.state.expenses.retain(|expense| expense.id != id);
        self.persist();
    }

    pub fn expense(&self, id: PlannerId) -> Option<&Expense> {
        self.state.expenses.iter().find(|e| e.id == id)
    }

    // ---- wishlist ----

    pub fn add_wishlist_item(&mut self, draft: &WishlistDraft) -> Result<PlannerId, ValidationError> {
        let item = draft.validate(self.ids.next())?;
        let id = item.id;
        self.state.wishlist.push(item);
        self.persist();
        Ok(id)
    }

    pub fn toggle_wishlist_item(&mut self, id: PlannerId) {
        if let Some(item) = self.state.wishlist.iter_mut().find(|w| w.id == id) {
            item.purchased = !item.purchased;
            self.persist();
        }
    }

    pub fn remove_wishlist_item(&mut self, id: PlannerId) {
        self.state.wishlist.retain(|item| item.id != id);
        self.persist();
    }

    pub fn wishlist_item(&self, id: PlannerId) -> Option<&WishlistItem> {
        self.state.wishlist.iter().find(|w| w.id == id)
    }

    // ---- trips ----

    pub fn add_trip(&mut self, draft: &TripDraft) -> Result<PlannerId, ValidationError> {
        let trip = draft.validate(self.ids.next())?;
        let id = trip.id;
        self.state.trips.push(trip);
        self.persist();
        Ok(id)
    }

    pub fn remove_trip(&mut self, id: PlannerId) {
        self.state.trips.retain(|trip| trip.id != id);
        self.persist();
    }

    pub fn trip(&self, id: PlannerId) -> Option<&Trip> {
        self.state.trips.iter().find(|t| t.id == id)
    }

    // ---- journal, affirmations, progress ----

    /// Replaces the gratitude text. Free text; blank is a valid value.
    pub fn set_gratitude(&mut self, text: &str) {
        self.state.journal.gratitude = text.to_string();
        self.persist();
    }

    /// Replaces the thoughts text.
    pub fn set_thoughts(&mut self, text: &str) {
        self.state.journal.thoughts = text.to_string();
        self.persist();
    }

    /// Appends an affirmation; blank text is rejected.
    pub fn add_affirmation(&mut self, text: &str) -> Result<(), ValidationError> {
        let text = crate::model::require_text("affirmation", text)?;
        self.state.affirmations.push(text);
        self.persist();
        Ok(())
    }

    /// Removes the affirmation at `index`; out-of-range is a no-op.
    pub fn remove_affirmation(&mut self, index: usize) {
        if index < self.state.affirmations.len() {
            self.state.affirmations.remove(index);
            self.persist();
        }
    }

    /// Sets the progress slider, 0..=100.
    pub fn set_progress(&mut self, percent: u8) -> Result<(), ValidationError> {
        if percent > 100 {
            return Err(ValidationError::ProgressOutOfRange(percent));
        }
        self.state.progress = percent;
        self.persist();
        Ok(())
    }
}
