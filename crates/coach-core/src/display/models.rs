//! Display implementations for domain models.
//!
//! Sections mirror what a reader of the plan needs in order: what to tackle
//! first, when to do it, and how to stay on track.

use std::fmt;

use crate::models::{EnergyLevel, LifecycleState, PlanResult, TimeBlock};

impl fmt::Display for EnergyLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl fmt::Display for TimeBlock {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "**{} – {}** · {}",
            self.start_time, self.end_time, self.task
        )
    }
}

impl fmt::Display for PlanResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "## Priority Order")?;
        writeln!(f)?;
        if self.priority_order.is_empty() {
            writeln!(f, "No priorities.")?;
        }
        for goal in &self.priority_order {
            writeln!(f, "- {goal}")?;
        }

        writeln!(f, "\n## Schedule")?;
        writeln!(f)?;
        if self.schedule.is_empty() {
            writeln!(f, "No scheduled blocks.")?;
        }
        for block in &self.schedule {
            writeln!(f, "- {block}")?;
        }

        writeln!(f, "\n## Productivity Tips")?;
        writeln!(f)?;
        if self.tips.is_empty() {
            writeln!(f, "No tips.")?;
        }
        for tip in &self.tips {
            writeln!(f, "- {tip}")?;
        }

        Ok(())
    }
}

impl fmt::Display for LifecycleState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LifecycleState::Idle => writeln!(f, "Enter your goals to generate a plan."),
            LifecycleState::Loading => writeln!(f, "Generating plan..."),
            LifecycleState::Success(plan) => write!(f, "{plan}"),
            LifecycleState::Failure(message) => writeln!(f, "Error: {message}"),
        }
    }
}
