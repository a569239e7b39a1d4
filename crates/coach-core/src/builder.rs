//! Conversion of raw form input into plan requests.
//!
//! [`build`] is the lenient path: it never fails and forwards malformed
//! values as-is. [`validate`] is the strict path: it rejects malformed fields
//! before any request is made and otherwise returns exactly what [`build`]
//! would.

use jiff::civil::Time;

use crate::{
    error::{CoachError, Result},
    models::{AvailableHours, EnergyLevel, FormInput, PlanRequest, DISTRACTIONS},
};

/// Accepted range for `available_hours` when validating.
pub const HOURS_RANGE: std::ops::RangeInclusive<f64> = 1.0..=24.0;

/// Builds the request payload for a form.
///
/// Pure and deterministic: the same input always yields the same request.
///
/// # Examples
///
/// ```rust
/// use coach_core::{builder::build, models::FormInput};
///
/// let request = build(&FormInput::with_goals("Study, , Workout"));
/// assert_eq!(request.goals, vec!["Study", "Workout"]);
/// ```
pub fn build(input: &FormInput) -> PlanRequest {
    PlanRequest {
        goals: split_goals(&input.goals),
        available_hours: AvailableHours::coerce(&input.available_hours),
        distractions: DISTRACTIONS.iter().map(|d| (*d).to_string()).collect(),
        start_time: input.start_time.clone(),
        energy_level: input.energy_level.clone(),
    }
}

/// Validates a form and builds its request payload.
///
/// # Errors
///
/// Returns `CoachError::InvalidInput` naming the first malformed field:
/// `goals` when no goal remains after trimming, `available_hours` when it is
/// not a number in 1..=24, `start_time` when it is not an `HH:MM` time of
/// day, and `energy_level` when it is not `high`, `medium` or `low`.
pub fn validate(input: &FormInput) -> Result<PlanRequest> {
    let request = build(input);

    if request.goals.is_empty() {
        return Err(CoachError::invalid_input("goals").with_reason("at least one goal is required"));
    }

    match request.available_hours.as_f64() {
        Some(hours) if HOURS_RANGE.contains(&hours) => {}
        Some(hours) => {
            return Err(CoachError::invalid_input("available_hours")
                .with_reason(format!("{hours} is outside 1 to 24")));
        }
        None => {
            return Err(CoachError::invalid_input("available_hours")
                .with_reason(format!("'{}' is not a number", input.available_hours)));
        }
    }

    parse_start_time(&input.start_time)?;

    input
        .energy_level
        .parse::<EnergyLevel>()
        .map_err(|reason| CoachError::invalid_input("energy_level").with_reason(reason))?;

    Ok(request)
}

/// Splits comma-delimited goals, dropping blank entries.
fn split_goals(goals: &str) -> Vec<String> {
    goals
        .split(',')
        .map(str::trim)
        .filter(|goal| !goal.is_empty())
        .map(String::from)
        .collect()
}

/// Parses a strict `HH:MM` time of day.
fn parse_start_time(raw: &str) -> Result<Time> {
    let invalid = || {
        CoachError::invalid_input("start_time")
            .with_reason(format!("'{raw}' is not a time of day in HH:MM format"))
    };

    let bytes = raw.as_bytes();
    if bytes.len() != 5 || bytes[2] != b':' {
        return Err(invalid());
    }

    Time::strptime("%H:%M", raw).map_err(|_| invalid())
}
