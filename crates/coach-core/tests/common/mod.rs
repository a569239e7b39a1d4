#![allow(dead_code)]

use coach_core::{FormInput, HttpPlanService, LifecycleController, StalePolicy};
use httpmock::MockServer;
use serde_json::{json, Value};

/// Path the mock plan-generation service listens on.
pub const PLAN_PATH: &str = "/generate-plan";

/// Body of a minimal successful plan.
pub fn sample_plan_json() -> Value {
    json!({
        "priority_order": ["A"],
        "schedule": [{"start_time": "09:00", "end_time": "10:00", "task": "A"}],
        "tips": ["Rest"]
    })
}

/// Helper function to create a form with the given goals and defaults.
pub fn form(goals: &str) -> FormInput {
    FormInput::with_goals(goals)
}

/// Helper function to create a controller talking to the mock server
pub fn create_test_controller(
    server: &MockServer,
    policy: StalePolicy,
) -> LifecycleController<HttpPlanService> {
    let service = HttpPlanService::builder()
        .with_endpoint(Some(server.url(PLAN_PATH)))
        .build()
        .expect("Failed to build plan service");
    LifecycleController::with_policy(service, policy)
}
