//! Workout log entity.

use crate::model::ids::PlannerId;
use crate::model::{require_iso_date, ValidationError};
use serde::{Deserialize, Serialize};

/// Workout type taxonomy from the training form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WorkoutKind {
    Upper,
    Lower,
    Full,
    Cardio,
    Yoga,
    Pilates,
}

impl WorkoutKind {
    pub fn label(self) -> &'static str {
        match self {
            Self::Upper => "Upper body",
            Self::Lower => "Lower body",
            Self::Full => "Full body",
            Self::Cardio => "Cardio",
            Self::Yoga => "Yoga",
            Self::Pilates => "Pilates",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "upper" => Some(Self::Upper),
            "lower" => Some(Self::Lower),
            "full" => Some(Self::Full),
            "cardio" => Some(Self::Cardio),
            "yoga" => Some(Self::Yoga),
            "pilates" => Some(Self::Pilates),
            _ => None,
        }
    }
}

/// One logged training session.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Workout {
    pub id: PlannerId,
    #[serde(rename = "type")]
    pub kind: WorkoutKind,
    /// Minutes. The form accepts an empty duration as 0.
    pub duration: u32,
    /// `YYYY-MM-DD`.
    pub date: String,
    pub completed: bool,
}

/// Form input for logging a workout; only the date is required.
#[derive(Debug, Clone)]
pub struct WorkoutDraft {
    pub kind: WorkoutKind,
    pub duration: u32,
    pub date: String,
}

impl WorkoutDraft {
    pub fn validate(&self, id: PlannerId) -> Result<Workout, ValidationError> {
        require_iso_date(&self.date)?;
        Ok(Workout {
            id,
            kind: self.kind,
            duration: self.duration,
            date: self.date.clone(),
            completed: false,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::{WorkoutDraft, WorkoutKind};

    #[test]
    fn date_is_the_only_required_field() {
        let draft = WorkoutDraft {
            kind: WorkoutKind::Cardio,
            duration: 0,
            date: "2024-05-10".to_string(),
        };
        let workout = draft.validate(1).unwrap();
        assert_eq!(workout.duration, 0);
        assert!(!workout.completed);

        let missing = WorkoutDraft {
            kind: WorkoutKind::Yoga,
            duration: 30,
            date: String::new(),
        };
        assert!(missing.validate(2).is_err());
    }
}
