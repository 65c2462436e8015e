//! Priority goals and the shared urgency scale.

use crate::model::ids::PlannerId;
use crate::model::{require_iso_date, require_text, ValidationError};
use serde::{Deserialize, Serialize};

/// Three-step urgency scale shared by priorities and the wishlist.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PriorityLevel {
    High,
    Medium,
    Low,
}

impl PriorityLevel {
    pub fn label(self) -> &'static str {
        match self {
            Self::High => "High",
            Self::Medium => "Medium",
            Self::Low => "Low",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "high" => Some(Self::High),
            "medium" => Some(Self::Medium),
            "low" => Some(Self::Low),
            _ => None,
        }
    }
}

/// A named goal with an optional due date.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Priority {
    pub id: PlannerId,
    pub name: String,
    /// Due date `YYYY-MM-DD`; `None` when open-ended.
    pub date: Option<String>,
    pub level: PriorityLevel,
}

/// Form input for a new priority.
#[derive(Debug, Clone)]
pub struct PriorityDraft {
    pub name: String,
    pub date: Option<String>,
    pub level: PriorityLevel,
}

impl PriorityDraft {
    /// Validates the draft; only `name` is required.
    pub fn validate(&self, id: PlannerId) -> Result<Priority, ValidationError> {
        let name = require_text("name", &self.name)?;
        let date = match self.date.as_deref().map(str::trim) {
            None | Some("") => None,
            Some(value) => {
                require_iso_date(value)?;
                Some(value.to_string())
            }
        };
        Ok(Priority {
            id,
            name,
            date,
            level: self.level,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::{PriorityDraft, PriorityLevel};

    #[test]
    fn due_date_is_optional() {
        let draft = PriorityDraft {
            name: "read more".to_string(),
            date: None,
            level: PriorityLevel::Medium,
        };
        let priority = draft.validate(7).unwrap();
        assert_eq!(priority.date, None);
        assert_eq!(priority.level, PriorityLevel::Medium);
    }

    #[test]
    fn malformed_due_date_is_rejected() {
        let draft = PriorityDraft {
            name: "taxes".to_string(),
            date: Some("soon".to_string()),
            level: PriorityLevel::High,
        };
        assert!(draft.validate(8).is_err());
    }
}
