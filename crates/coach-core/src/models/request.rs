//! Request payload sent to the plan-generation service.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Distractions attached to every request. Not user-editable.
pub const DISTRACTIONS: [&str; 2] = ["phone", "social media"];

/// Hours value as sent on the wire.
///
/// Numeric input serializes as a JSON number; anything that does not coerce
/// to a finite number is forwarded as the raw text.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum AvailableHours {
    /// A coerced numeric value
    Number(serde_json::Number),
    /// Text that could not be coerced
    Raw(String),
}

impl AvailableHours {
    /// Coerces raw form text into an hours value.
    ///
    /// Integral values become JSON integers so that `"8"` and `"8.0"` both
    /// serialize as `8`.
    pub fn coerce(raw: &str) -> Self {
        let trimmed = raw.trim();

        if let Ok(whole) = trimmed.parse::<i64>() {
            return AvailableHours::Number(whole.into());
        }

        match trimmed.parse::<f64>() {
            Ok(value) if value.is_finite() => {
                if value.fract() == 0.0 && value.abs() < i64::MAX as f64 {
                    AvailableHours::Number((value as i64).into())
                } else {
                    serde_json::Number::from_f64(value)
                        .map_or_else(|| AvailableHours::Raw(raw.to_string()), AvailableHours::Number)
                }
            }
            _ => AvailableHours::Raw(raw.to_string()),
        }
    }

    /// The numeric value, if coercion succeeded.
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            AvailableHours::Number(number) => number.as_f64(),
            AvailableHours::Raw(_) => None,
        }
    }
}

impl fmt::Display for AvailableHours {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AvailableHours::Number(number) => write!(f, "{number}"),
            AvailableHours::Raw(raw) => write!(f, "{raw:?}"),
        }
    }
}

/// Immutable payload derived from a [`super::FormInput`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlanRequest {
    /// Trimmed, non-empty goals in order of appearance
    pub goals: Vec<String>,

    /// Hours available for the day
    pub available_hours: AvailableHours,

    /// Always [`DISTRACTIONS`]
    pub distractions: Vec<String>,

    /// Passed through from the form unmodified
    pub start_time: String,

    /// Passed through from the form unmodified
    pub energy_level: String,
}
