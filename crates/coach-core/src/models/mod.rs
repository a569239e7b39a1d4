//! Data models for plan requests and results.
//!
//! This module contains the domain models that flow through a plan request:
//! the raw [`FormInput`] a user enters, the derived [`PlanRequest`] sent to the
//! plan-generation service, the [`PlanResult`] it answers with, and the
//! [`LifecycleState`] that tracks the most recent request.
//!
//! Display implementations for these models live in [`crate::display`] so that
//! data structures stay separate from presentation.
//!
//! # Examples
//!
//! ```rust
//! use coach_core::models::{PlanResult, TimeBlock};
//!
//! let plan = PlanResult {
//!     priority_order: vec!["Study".to_string()],
//!     schedule: vec![TimeBlock {
//!         start_time: "09:00".to_string(),
//!         end_time: "11:00".to_string(),
//!         task: "Study".to_string(),
//!     }],
//!     tips: vec!["Focus on one task at a time".to_string()],
//! };
//! println!("{}", plan); // Formats as markdown sections
//! ```

pub mod energy;
pub mod form;
pub mod plan;
pub mod request;
pub mod state;

pub use energy::EnergyLevel;
pub use form::FormInput;
pub use plan::{PlanResult, TimeBlock};
pub use request::{AvailableHours, PlanRequest, DISTRACTIONS};
pub use state::LifecycleState;
