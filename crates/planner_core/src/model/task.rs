//! Task entity.
//!
//! # Responsibility
//! - Define the scheduled-task record and its category taxonomy.
//! - Validate form drafts before they enter the aggregate.
//!
//! # Invariants
//! - `date` is `YYYY-MM-DD`; `time`, when present, is `HH:MM`.
//! - `completed` is the only field mutated after creation.

use crate::model::ids::PlannerId;
use crate::model::{require_clock_time, require_iso_date, require_text, ValidationError};
use serde::{Deserialize, Serialize};

/// Fixed category taxonomy from the task form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TaskCategory {
    Work,
    Personal,
    Health,
    Travel,
    Birthday,
}

impl TaskCategory {
    /// Human label used by renderers.
    pub fn label(self) -> &'static str {
        match self {
            Self::Work => "Work",
            Self::Personal => "Personal",
            Self::Health => "Health",
            Self::Travel => "Travel",
            Self::Birthday => "Birthday",
        }
    }

    /// Parses the lowercase form value, as submitted by the category picker.
    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "work" => Some(Self::Work),
            "personal" => Some(Self::Personal),
            "health" => Some(Self::Health),
            "travel" => Some(Self::Travel),
            "birthday" => Some(Self::Birthday),
            _ => None,
        }
    }
}

/// A dated to-do item.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Task {
    pub id: PlannerId,
    pub name: String,
    /// `YYYY-MM-DD`.
    pub date: String,
    /// `HH:MM`; `None` when the form left the time blank.
    pub time: Option<String>,
    pub category: TaskCategory,
    pub completed: bool,
}

/// Form input for creating a task; `validate` turns it into an id-less
/// record the service can stamp and append.
#[derive(Debug, Clone)]
pub struct TaskDraft {
    pub name: String,
    pub date: String,
    pub time: Option<String>,
    pub category: TaskCategory,
}

impl TaskDraft {
    /// Validates required fields and formats.
    ///
    /// # Contract
    /// - `name` and `date` are required; blank time collapses to `None`.
    /// - Returns the first violation found; the draft is not consumed.
    pub fn validate(&self, id: PlannerId) -> Result<Task, ValidationError> {
        let name = require_text("name", &self.name)?;
        require_iso_date(&self.date)?;
        let time = match self.time.as_deref().map(str::trim) {
            None | Some("") => None,
            Some(value) => {
                require_clock_time(value)?;
                Some(value.to_string())
            }
        };
        Ok(Task {
            id,
            name,
            date: self.date.clone(),
            time,
            category: self.category,
            completed: false,
        })
    }
}
