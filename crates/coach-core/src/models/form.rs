//! Raw form input as entered by the user.

use serde::{Deserialize, Serialize};

/// Raw user entry, exactly as typed.
///
/// No invariants are enforced here: `available_hours` may not be numeric,
/// `goals` may be blank and `energy_level` may be anything. See
/// [`crate::builder::build`] for the lenient conversion and
/// [`crate::builder::validate`] for the strict one.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FormInput {
    /// Comma-delimited list of goals
    pub goals: String,

    /// Hours available for the day, expected to be a number in 1..=24
    pub available_hours: String,

    /// Time of day the schedule starts, `HH:MM`
    pub start_time: String,

    /// One of `high`, `medium` or `low`
    pub energy_level: String,
}

impl FormInput {
    /// Creates a form with the given goals and default values for every
    /// other field.
    pub fn with_goals(goals: impl Into<String>) -> Self {
        Self {
            goals: goals.into(),
            ..Self::default()
        }
    }
}

impl Default for FormInput {
    fn default() -> Self {
        Self {
            goals: String::new(),
            available_hours: "8".to_string(),
            start_time: "09:00".to_string(),
            energy_level: "medium".to_string(),
        }
    }
}
