//! Display formatting for plans and lifecycle states.
//!
//! Domain models implement [`std::fmt::Display`] directly and produce
//! markdown, which the CLI's terminal renderer turns into rich output.
//! Wrapper types cover output that depends on context, such as previewing a
//! request before it is sent.
//!
//! ```text
//! ┌─────────────────┐    ┌─────────────────┐    ┌─────────────────┐
//! │  Domain Models  │    │ Display impls & │    │    Markdown     │
//! │ (PlanResult,    │───▶│ wrapper types   │───▶│     Output      │
//! │  LifecycleState)│    │                 │    │   (Terminal)    │
//! └─────────────────┘    └─────────────────┘    └─────────────────┘
//! ```
//!
//! ## Module Organization
//!
//! - [`models`]: Display implementations for domain models
//! - [`preview`]: Request preview wrapper ([`RequestPreview`])
//!
//! ## Usage Examples
//!
//! ```rust
//! use coach_core::{builder::build, display::RequestPreview, models::FormInput};
//!
//! let request = build(&FormInput::with_goals("Study, Workout"));
//! let output = format!("{}", RequestPreview(&request));
//! assert!(output.contains("- Study"));
//! ```

pub mod models;
pub mod preview;

pub use preview::RequestPreview;
