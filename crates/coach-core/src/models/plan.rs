//! Plan model returned by the plan-generation service.

use serde::{Deserialize, Serialize};

/// A scheduled block of work.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct TimeBlock {
    /// Start of the block, `HH:MM`
    pub start_time: String,

    /// End of the block, `HH:MM`
    pub end_time: String,

    /// What to work on during the block
    pub task: String,
}

/// A generated daily plan.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct PlanResult {
    /// Goals in the order they should be tackled
    pub priority_order: Vec<String>,

    /// Time blocks for the day, in order
    pub schedule: Vec<TimeBlock>,

    /// Productivity tips
    pub tips: Vec<String>,
}
