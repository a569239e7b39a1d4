//! Lifecycle state of the most recent plan request.

use super::PlanResult;

/// What is currently happening with the most recent request.
///
/// `Idle` is the initial state. There is no terminal state: a new
/// submission always moves the machine back to `Loading`.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum LifecycleState {
    /// Nothing has been submitted yet
    #[default]
    Idle,

    /// A request is in flight
    Loading,

    /// The last request produced a plan
    Success(PlanResult),

    /// The last request failed; holds the user-facing message
    Failure(String),
}

impl LifecycleState {
    /// Whether a request is in flight.
    pub fn is_loading(&self) -> bool {
        matches!(self, LifecycleState::Loading)
    }

    /// Whether the state is `Success` or `Failure`.
    pub fn is_settled(&self) -> bool {
        matches!(self, LifecycleState::Success(_) | LifecycleState::Failure(_))
    }

    /// The plan, when the last request succeeded.
    pub fn plan(&self) -> Option<&PlanResult> {
        match self {
            LifecycleState::Success(plan) => Some(plan),
            _ => None,
        }
    }

    /// The user-facing failure message, when the last request failed.
    pub fn error_message(&self) -> Option<&str> {
        match self {
            LifecycleState::Failure(message) => Some(message),
            _ => None,
        }
    }

    /// Short lowercase name of the variant, used in logs.
    pub fn as_str(&self) -> &'static str {
        match self {
            LifecycleState::Idle => "idle",
            LifecycleState::Loading => "loading",
            LifecycleState::Success(_) => "success",
            LifecycleState::Failure(_) => "failure",
        }
    }
}
