//! Core library for the Coach productivity planning client.
//!
//! This crate turns a handful of user-entered planning parameters into a
//! request for a remote plan-generation service and tracks that request
//! through its lifecycle.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────┐    ┌─────────────────┐    ┌─────────────────┐
//! │ Request Builder │    │   Lifecycle     │    │  Plan Service   │
//! │   (builder)     │───▶│   Controller    │───▶│ (HTTP, reqwest) │
//! │                 │    │  (controller)   │    │                 │
//! └─────────────────┘    └─────────────────┘    └─────────────────┘
//!   FormInput → PlanRequest   Idle/Loading/       POST JSON → PlanResult
//!                             Success/Failure
//! ```
//!
//! - [`builder`]: pure conversion from [`FormInput`] to [`PlanRequest`], with
//!   an optional strict validation gate
//! - [`controller`]: the request state machine, observable through
//!   [`LifecycleState`]
//! - [`service`]: the [`PlanService`] seam and its HTTP implementation
//! - [`display`]: markdown formatting of plans and states
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use coach_core::{FormInput, HttpPlanService, LifecycleController, LifecycleState};
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let service = HttpPlanService::builder().build()?;
//! let controller = LifecycleController::new(service);
//!
//! let form = FormInput {
//!     goals: "Study, Workout, Project work".to_string(),
//!     available_hours: "6".to_string(),
//!     start_time: "08:30".to_string(),
//!     energy_level: "high".to_string(),
//! };
//!
//! controller.submit(&form).wait().await;
//!
//! match controller.state() {
//!     LifecycleState::Success(plan) => println!("{plan}"),
//!     other => println!("{other}"),
//! }
//! # Ok(())
//! # }
//! ```

pub mod builder;
pub mod controller;
pub mod display;
pub mod error;
pub mod models;
pub mod service;

// Re-export commonly used types
pub use builder::{build, validate};
pub use controller::{LifecycleController, Outcome, StalePolicy, Submission};
pub use display::RequestPreview;
pub use error::{CoachError, RequestError, Result, FAILURE_MESSAGE};
pub use models::{
    AvailableHours, EnergyLevel, FormInput, LifecycleState, PlanRequest, PlanResult, TimeBlock,
};
pub use service::{HttpPlanService, HttpPlanServiceBuilder, PlanService, DEFAULT_ENDPOINT};
