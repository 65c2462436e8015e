//! Domain model for the planner aggregate.
//!
//! # Responsibility
//! - Define the entities held by the single [`state::PlannerState`] aggregate.
//! - Validate form input before it reaches the aggregate.
//!
//! # Invariants
//! - Ids are unique within their list ([`ids::IdGen`] enforces monotonicity).
//! - Date fields are zero-padded `YYYY-MM-DD` and time fields `HH:MM`, so
//!   plain string comparison orders them chronologically.

use once_cell::sync::Lazy;
use regex::Regex;
use std::error::Error;
use std::fmt::{Display, Formatter};

pub mod ids;
pub mod journal;
pub mod money;
pub mod priority;
pub mod state;
pub mod task;
pub mod tracker;
pub mod trip;
pub mod workout;

static ISO_DATE_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^\d{4}-\d{2}-\d{2}$").expect("valid date regex"));
static CLOCK_TIME_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^\d{2}:\d{2}$").expect("valid time regex"));

/// Rejection reason for a mutation attempt.
///
/// A validation failure discards the attempted mutation entirely; the
/// aggregate is untouched and nothing is persisted.
#[derive(Debug, Clone, PartialEq)]
pub enum ValidationError {
    /// A required text field was empty or whitespace.
    EmptyField(&'static str),
    /// A date field did not match `YYYY-MM-DD`.
    InvalidDate(String),
    /// A time field did not match `HH:MM`.
    InvalidTime(String),
    /// An amount field must be strictly positive.
    NonPositiveAmount(f64),
    /// Water glass index outside `0..=7`.
    GlassIndexOutOfRange(u8),
    /// Progress percentage above 100.
    ProgressOutOfRange(u8),
}

impl Display for ValidationError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::EmptyField(field) => write!(f, "required field `{field}` is empty"),
            Self::InvalidDate(value) => {
                write!(f, "date `{value}` does not match YYYY-MM-DD")
            }
            Self::InvalidTime(value) => write!(f, "time `{value}` does not match HH:MM"),
            Self::NonPositiveAmount(value) => {
                write!(f, "amount must be positive, got {value}")
            }
            Self::GlassIndexOutOfRange(index) => {
                write!(f, "glass index {index} outside 0..=7")
            }
            Self::ProgressOutOfRange(value) => {
                write!(f, "progress {value}% outside 0..=100")
            }
        }
    }
}

impl Error for ValidationError {}

/// Checks a required text field is non-blank, returning its trimmed value.
pub(crate) fn require_text(field: &'static str, value: &str) -> Result<String, ValidationError> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(ValidationError::EmptyField(field));
    }
    Ok(trimmed.to_string())
}

/// Checks a date string is zero-padded ISO `YYYY-MM-DD`.
///
/// The renderers sort by plain string comparison, which is only
/// chronological when every stored date has this exact shape.
pub(crate) fn require_iso_date(value: &str) -> Result<(), ValidationError> {
    if ISO_DATE_RE.is_match(value) {
        Ok(())
    } else {
        Err(ValidationError::InvalidDate(value.to_string()))
    }
}

/// Checks a time string is zero-padded `HH:MM`.
pub(crate) fn require_clock_time(value: &str) -> Result<(), ValidationError> {
    if CLOCK_TIME_RE.is_match(value) {
        Ok(())
    } else {
        Err(ValidationError::InvalidTime(value.to_string()))
    }
}
