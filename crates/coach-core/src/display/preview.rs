//! Preview of a request before it is sent.

use std::fmt;

use crate::models::PlanRequest;

/// Wrapper type for displaying a [`PlanRequest`] as markdown.
///
/// Used for dry runs, where the user wants to see what would be sent to the
/// plan-generation service.
pub struct RequestPreview<'a>(pub &'a PlanRequest);

impl fmt::Display for RequestPreview<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let request = self.0;

        writeln!(f, "## Request")?;
        writeln!(f)?;
        writeln!(f, "- Available hours: {}", request.available_hours)?;
        writeln!(f, "- Start time: {}", request.start_time)?;
        writeln!(f, "- Energy level: {}", request.energy_level)?;
        writeln!(f, "- Distractions: {}", request.distractions.join(", "))?;

        writeln!(f, "\n### Goals")?;
        writeln!(f)?;
        if request.goals.is_empty() {
            writeln!(f, "No goals.")?;
        }
        for goal in &request.goals {
            writeln!(f, "- {goal}")?;
        }

        Ok(())
    }
}
