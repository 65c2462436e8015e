//! Trip planning entity.

use crate::model::ids::PlannerId;
use crate::model::{require_iso_date, require_text, ValidationError};
use serde::{Deserialize, Serialize};

/// A planned trip. Field names stay camelCase in the persisted document.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Trip {
    pub id: PlannerId,
    pub city: String,
    /// `YYYY-MM-DD`.
    #[serde(rename = "dateStart")]
    pub date_start: String,
    /// `YYYY-MM-DD`; `None` for single-day or open-ended trips.
    #[serde(rename = "dateEnd")]
    pub date_end: Option<String>,
    pub notes: String,
}

/// Form input for a new trip; city and start date are required.
#[derive(Debug, Clone)]
pub struct TripDraft {
    pub city: String,
    pub date_start: String,
    pub date_end: Option<String>,
    pub notes: String,
}

impl TripDraft {
    pub fn validate(&self, id: PlannerId) -> Result<Trip, ValidationError> {
        let city = require_text("city", &self.city)?;
        require_iso_date(&self.date_start)?;
        let date_end = match self.date_end.as_deref().map(str::trim) {
            None | Some("") => None,
            Some(value) => {
                require_iso_date(value)?;
                Some(value.to_string())
            }
        };
        Ok(Trip {
            id,
            city,
            date_start: self.date_start.clone(),
            date_end,
            notes: self.notes.trim().to_string(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::TripDraft;
    use crate::model::ValidationError;

    #[test]
    fn city_and_start_date_are_required() {
        let draft = TripDraft {
            city: String::new(),
            date_start: "2024-07-01".to_string(),
            date_end: None,
            notes: String::new(),
        };
        assert_eq!(
            draft.validate(1).unwrap_err(),
            ValidationError::EmptyField("city")
        );

        let draft = TripDraft {
            city: "Lisbon".to_string(),
            date_start: "july".to_string(),
            date_end: None,
            notes: String::new(),
        };
        assert!(matches!(
            draft.validate(2).unwrap_err(),
            ValidationError::InvalidDate(_)
        ));
    }

    #[test]
    fn blank_end_date_collapses_to_none() {
        let draft = TripDraft {
            city: "Oslo".to_string(),
            date_start: "2024-07-01".to_string(),
            date_end: Some("  ".to_string()),
            notes: " fjords ".to_string(),
        };
        let trip = draft.validate(3).unwrap();
        assert_eq!(trip.date_end, None);
        assert_eq!(trip.notes, "fjords");
    }
}
