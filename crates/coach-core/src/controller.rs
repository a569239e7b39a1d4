//! Request lifecycle controller.
//!
//! The controller owns the single [`LifecycleState`] cell and drives it
//! through the request state machine:
//!
//! ```text
//! Idle ──submit──▶ Loading ──success──▶ Success
//!                     │
//!                     └────failure────▶ Failure
//! Success ──submit──▶ Loading
//! Failure ──submit──▶ Loading
//! ```
//!
//! `submit` moves the state to `Loading` before it returns, then spawns the
//! call on the tokio runtime. The call's outcome is applied according to the
//! controller's [`StalePolicy`].
//!
//! The state lives in a [`tokio::sync::watch`] channel. Allocating a request
//! id and checking it on resolution both happen under the channel's write
//! lock. Under [`StalePolicy::LatestOnly`] the in-flight task handle is
//! replaced only by a task with a higher id, so concurrent submits from
//! cloned controllers can never abort the newest call.
//!
//! # Examples
//!
//! ```rust,no_run
//! use coach_core::{FormInput, HttpPlanService, LifecycleController};
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let controller = LifecycleController::new(HttpPlanService::builder().build()?);
//!
//! let submission = controller.submit(&FormInput::with_goals("Study, Workout"));
//! assert!(controller.is_loading());
//!
//! submission.wait().await;
//! println!("{}", controller.state());
//! # Ok(())
//! # }
//! ```

use std::sync::{
    atomic::{AtomicU64, Ordering},
    Arc, Mutex, PoisonError,
};

use log::{debug, warn};
use tokio::{
    sync::watch,
    task::{AbortHandle, JoinHandle},
};

use crate::{
    builder::{build, validate},
    error::{RequestError, Result},
    models::{FormInput, LifecycleState, PlanRequest, PlanResult},
    service::PlanService,
};

/// How resolutions of superseded requests are treated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum StalePolicy {
    /// Every resolution applies its transition; the last call to settle
    /// wins, whichever was issued first. Nothing is cancelled.
    #[default]
    LastSettled,

    /// Only the most recently issued call may transition the state. Issuing
    /// a new call aborts the one in flight.
    LatestOnly,
}

/// What became of a single submission.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// The call settled and its transition was applied
    Applied(LifecycleState),

    /// A newer submission took over before this call could apply
    Superseded,
}

impl Outcome {
    /// The state this call produced, if it was applied.
    pub fn state(&self) -> Option<&LifecycleState> {
        match self {
            Outcome::Applied(state) => Some(state),
            Outcome::Superseded => None,
        }
    }
}

/// Handle to a submitted request.
#[derive(Debug)]
pub struct Submission {
    id: u64,
    handle: JoinHandle<Outcome>,
}

impl Submission {
    /// Identifier allocated to this request. Ids increase with every submit.
    pub fn id(&self) -> u64 {
        self.id
    }

    /// Waits for the call to settle.
    ///
    /// # Panics
    ///
    /// Resumes the panic if the plan service panicked while handling the
    /// request.
    pub async fn wait(self) -> Outcome {
        match self.handle.await {
            Ok(outcome) => outcome,
            Err(e) if e.is_cancelled() => Outcome::Superseded,
            Err(e) => std::panic::resume_unwind(e.into_panic()),
        }
    }
}

struct Inner<S> {
    service: S,
    policy: StalePolicy,
    state: watch::Sender<LifecycleState>,
    latest: AtomicU64,
    in_flight: Mutex<Option<(u64, AbortHandle)>>,
}

/// Orchestrates plan requests and exposes the current [`LifecycleState`].
pub struct LifecycleController<S> {
    inner: Arc<Inner<S>>,
}

impl<S> Clone for LifecycleController<S> {
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
        }
    }
}

impl<S: PlanService> LifecycleController<S> {
    /// Creates an idle controller using [`StalePolicy::LastSettled`].
    pub fn new(service: S) -> Self {
        Self::with_policy(service, StalePolicy::default())
    }

    /// Creates an idle controller with an explicit stale policy.
    pub fn with_policy(service: S, policy: StalePolicy) -> Self {
        let (state, _) = watch::channel(LifecycleState::Idle);
        Self {
            inner: Arc::new(Inner {
                service,
                policy,
                state,
                latest: AtomicU64::new(0),
                in_flight: Mutex::new(None),
            }),
        }
    }

    /// Snapshot of the current state.
    pub fn state(&self) -> LifecycleState {
        self.inner.state.borrow().clone()
    }

    /// Whether the current state is `Loading`.
    pub fn is_loading(&self) -> bool {
        self.inner.state.borrow().is_loading()
    }

    /// Subscribes to state changes. The receiver sees the latest state;
    /// a transition that is overwritten before the receiver looks (such as a
    /// short-lived `Loading`) is not replayed.
    pub fn subscribe(&self) -> watch::Receiver<LifecycleState> {
        self.inner.state.subscribe()
    }

    /// Policy applied to stale resolutions.
    pub fn policy(&self) -> StalePolicy {
        self.inner.policy
    }

    /// Id of the most recently issued request, `0` before the first submit.
    pub fn latest_request_id(&self) -> u64 {
        self.inner.latest.load(Ordering::SeqCst)
    }

    /// Submits a form.
    ///
    /// The state is `Loading` when this returns. The call itself runs on the
    /// tokio runtime and never fails: transport errors, non-success statuses
    /// and undecodable bodies all end in `Failure`.
    ///
    /// # Panics
    ///
    /// Panics if called outside a tokio runtime.
    pub fn submit(&self, input: &FormInput) -> Submission {
        self.dispatch(build(input))
    }

    /// Validates a form, then submits it.
    ///
    /// # Errors
    ///
    /// Returns `CoachError::InvalidInput` without touching the state when
    /// the form is malformed.
    ///
    /// # Panics
    ///
    /// Panics if called outside a tokio runtime.
    pub fn submit_validated(&self, input: &FormInput) -> Result<Submission> {
        let request = validate(input)?;
        Ok(self.dispatch(request))
    }

    fn dispatch(&self, request: PlanRequest) -> Submission {
        let id = self.inner.begin();
        debug!(
            "submit: request {id} with {} goal(s)",
            request.goals.len()
        );

        let inner = Arc::clone(&self.inner);
        let handle = tokio::spawn(async move {
            let outcome = inner.service.generate(&request).await;
            inner.settle(id, outcome)
        });

        if self.inner.policy == StalePolicy::LatestOnly {
            self.inner.track(id, handle.abort_handle());
        }

        Submission { id, handle }
    }
}

impl<S> Inner<S> {
    /// Allocates the next request id and enters `Loading`.
    fn begin(&self) -> u64 {
        let mut id = 0;
        self.state.send_modify(|state| {
            id = self.latest.fetch_add(1, Ordering::SeqCst) + 1;
            *state = LifecycleState::Loading;
        });
        id
    }

    /// Records `handle` as the call in flight and aborts the one it replaces.
    ///
    /// Submits racing on different threads may arrive here out of id order;
    /// a handle older than the tracked one is aborted instead of stored.
    fn track(&self, id: u64, handle: AbortHandle) {
        let mut in_flight = self
            .in_flight
            .lock()
            .unwrap_or_else(PoisonError::into_inner);
        match in_flight.take() {
            Some((tracked, current)) if tracked > id => {
                *in_flight = Some((tracked, current));
                handle.abort();
            }
            previous => {
                *in_flight = Some((id, handle));
                if let Some((_, previous)) = previous {
                    previous.abort();
                }
            }
        }
    }

    /// Applies the outcome of request `id`, unless the policy discards it.
    fn settle(&self, id: u64, outcome: std::result::Result<PlanResult, RequestError>) -> Outcome {
        let next = match outcome {
            Ok(plan) => LifecycleState::Success(plan),
            Err(e) => {
                warn!("request {id} failed: {e}");
                LifecycleState::Failure(e.user_message().to_string())
            }
        };

        let mut applied = None;
        self.state.send_if_modified(|state| {
            if self.policy == StalePolicy::LatestOnly && self.latest.load(Ordering::SeqCst) != id {
                return false;
            }
            *state = next.clone();
            applied = Some(next.clone());
            true
        });

        match applied {
            Some(state) => {
                debug!("request {id} settled: {}", state.as_str());
                Outcome::Applied(state)
            }
            None => {
                debug!("request {id} settled after a newer request; discarded");
                Outcome::Superseded
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use async_trait::async_trait;
    use reqwest::StatusCode;
    use tokio::sync::oneshot;

    use super::*;
    use crate::{error::FAILURE_MESSAGE, models::TimeBlock};

    type Reply = std::result::Result<PlanResult, RequestError>;

    /// Service whose replies are released by the test, keyed by first goal.
    #[derive(Default)]
    struct ScriptedService {
        replies: Mutex<HashMap<String, oneshot::Receiver<Reply>>>,
    }

    impl ScriptedService {
        fn expect(&self, goal: &str) -> oneshot::Sender<Reply> {
            let (tx, rx) = oneshot::channel();
            self.replies.lock().unwrap().insert(goal.to_string(), rx);
            tx
        }
    }

    #[async_trait]
    impl PlanService for Arc<ScriptedService> {
        async fn generate(&self, request: &PlanRequest) -> Reply {
            let rx = self
                .replies
                .lock()
                .unwrap()
                .remove(&request.goals[0])
                .expect("unexpected request");
            rx.await.expect("reply dropped")
        }
    }

    fn plan(task: &str) -> PlanResult {
        PlanResult {
            priority_order: vec![task.to_string()],
            schedule: vec![TimeBlock {
                start_time: "09:00".to_string(),
                end_time: "10:00".to_string(),
                task: task.to_string(),
            }],
            tips: vec!["Rest".to_string()],
        }
    }

    fn scripted(policy: StalePolicy) -> (Arc<ScriptedService>, LifecycleController<Arc<ScriptedService>>) {
        let service = Arc::new(ScriptedService::default());
        let controller = LifecycleController::with_policy(Arc::clone(&service), policy);
        (service, controller)
    }

    #[tokio::test]
    async fn test_starts_idle() {
        let (_service, controller) = scripted(StalePolicy::default());
        assert_eq!(controller.state(), LifecycleState::Idle);
        assert_eq!(controller.latest_request_id(), 0);
        assert_eq!(controller.policy(), StalePolicy::LastSettled);
    }

    #[tokio::test]
    async fn test_new_lets_late_first_call_win() {
        let service = Arc::new(ScriptedService::default());
        let controller = LifecycleController::new(Arc::clone(&service));
        let reply_first = service.expect("first");
        let reply_second = service.expect("second");

        let first = controller.submit(&FormInput::with_goals("first"));
        let second = controller.submit(&FormInput::with_goals("second"));

        reply_second.send(Ok(plan("second"))).unwrap();
        assert_eq!(
            second.wait().await,
            Outcome::Applied(LifecycleState::Success(plan("second")))
        );

        reply_first.send(Ok(plan("first"))).unwrap();
        assert_eq!(
            first.wait().await,
            Outcome::Applied(LifecycleState::Success(plan("first")))
        );
        assert_eq!(
            controller.state().plan().map(|p| p.priority_order.clone()),
            Some(vec!["first".to_string()])
        );
    }

    #[tokio::test]
    async fn test_submit_enters_loading_before_io() {
        let (service, controller) = scripted(StalePolicy::LatestOnly);
        let reply = service.expect("A");

        let submission = controller.submit(&FormInput::with_goals("A"));
        assert_eq!(controller.state(), LifecycleState::Loading);
        assert!(controller.is_loading());

        reply.send(Ok(plan("A"))).unwrap();
        assert_eq!(
            submission.wait().await,
            Outcome::Applied(LifecycleState::Success(plan("A")))
        );
        assert!(!controller.is_loading());
    }

    #[tokio::test]
    async fn test_failure_uses_generic_message() {
        let (service, controller) = scripted(StalePolicy::LatestOnly);
        let reply = service.expect("A");

        let submission = controller.submit(&FormInput::with_goals("A"));
        reply
            .send(Err(RequestError::Status(StatusCode::INTERNAL_SERVER_ERROR)))
            .unwrap();
        submission.wait().await;

        assert_eq!(
            controller.state(),
            LifecycleState::Failure(FAILURE_MESSAGE.to_string())
        );
    }

    #[tokio::test]
    async fn test_resubmit_clears_previous_result() {
        let (service, controller) = scripted(StalePolicy::LatestOnly);

        let reply = service.expect("A");
        let first = controller.submit(&FormInput::with_goals("A"));
        reply.send(Ok(plan("A"))).unwrap();
        first.wait().await;
        assert!(controller.state().plan().is_some());

        let reply = service.expect("B");
        let second = controller.submit(&FormInput::with_goals("B"));
        assert_eq!(controller.state(), LifecycleState::Loading);
        assert_eq!(second.id(), 2);

        reply
            .send(Err(RequestError::Status(StatusCode::BAD_REQUEST)))
            .unwrap();
        second.wait().await;
        assert!(controller.state().error_message().is_some());
    }

    #[tokio::test]
    async fn test_last_settled_lets_late_first_call_win() {
        let (service, controller) = scripted(StalePolicy::LastSettled);
        let reply_a = service.expect("A");
        let reply_b = service.expect("B");

        let first = controller.submit(&FormInput::with_goals("A"));
        let second = controller.submit(&FormInput::with_goals("B"));

        reply_b.send(Ok(plan("B"))).unwrap();
        second.wait().await;
        assert_eq!(controller.state(), LifecycleState::Success(plan("B")));

        reply_a.send(Ok(plan("A"))).unwrap();
        assert_eq!(
            first.wait().await,
            Outcome::Applied(LifecycleState::Success(plan("A")))
        );
        assert_eq!(controller.state(), LifecycleState::Success(plan("A")));
    }

    #[tokio::test]
    async fn test_latest_only_discards_stale_resolution() {
        let (service, controller) = scripted(StalePolicy::LatestOnly);
        let reply_a = service.expect("A");
        let reply_b = service.expect("B");

        let first = controller.submit(&FormInput::with_goals("A"));
        let second = controller.submit(&FormInput::with_goals("B"));
        assert!(first.id() < second.id());

        reply_b.send(Ok(plan("B"))).unwrap();
        second.wait().await;

        // The first call was aborted, so its reply may have nowhere to go.
        let _ = reply_a.send(Ok(plan("A")));
        assert_eq!(first.wait().await, Outcome::Superseded);
        assert_eq!(controller.state(), LifecycleState::Success(plan("B")));
    }

    #[tokio::test]
    async fn test_subscribers_observe_transitions() {
        let (service, controller) = scripted(StalePolicy::LatestOnly);
        let mut receiver = controller.subscribe();
        let reply = service.expect("A");

        let submission = controller.submit(&FormInput::with_goals("A"));
        assert_eq!(*receiver.borrow_and_update(), LifecycleState::Loading);

        reply.send(Ok(plan("A"))).unwrap();
        submission.wait().await;

        receiver.changed().await.unwrap();
        assert_eq!(
            receiver.borrow().plan().map(|p| p.tips.clone()),
            Some(vec!["Rest".to_string()])
        );
    }

    #[tokio::test]
    async fn test_slow_subscriber_sees_only_latest_state() {
        let (service, controller) = scripted(StalePolicy::LastSettled);
        let mut receiver = controller.subscribe();
        let reply = service.expect("A");
        reply.send(Ok(plan("A"))).unwrap();

        controller.submit(&FormInput::with_goals("A")).wait().await;

        // Loading was overwritten before the receiver looked.
        assert!(receiver.has_changed().unwrap());
        assert_eq!(
            *receiver.borrow_and_update(),
            LifecycleState::Success(plan("A"))
        );
        assert!(!receiver.has_changed().unwrap());
    }

    #[tokio::test]
    async fn test_track_keeps_newest_handle() {
        let (_service, controller) = scripted(StalePolicy::LatestOnly);
        let older = tokio::spawn(std::future::pending::<()>());
        let newer = tokio::spawn(std::future::pending::<()>());

        // The newer submit registers first, as when two threads race.
        controller.inner.track(2, newer.abort_handle());
        controller.inner.track(1, older.abort_handle());

        assert!(older.await.unwrap_err().is_cancelled());
        assert!(!newer.is_finished());
        assert_eq!(
            controller
                .inner
                .in_flight
                .lock()
                .unwrap()
                .as_ref()
                .map(|(id, _)| *id),
            Some(2)
        );
        newer.abort();
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 4)]
    async fn test_concurrent_submits_settle_on_newest() {
        let (service, controller) = scripted(StalePolicy::LatestOnly);
        for n in 0..32 {
            let goal = format!("G{n}");
            service.expect(&goal).send(Ok(plan(&goal))).unwrap();
        }

        let mut tasks = Vec::new();
        for n in 0..32 {
            let controller = controller.clone();
            tasks.push(tokio::spawn(async move {
                let submission = controller.submit(&FormInput::with_goals(&format!("G{n}")));
                (submission.id(), submission.wait().await)
            }));
        }

        let mut outcomes = Vec::new();
        for task in tasks {
            outcomes.push(task.await.unwrap());
        }
        let (newest, outcome) = outcomes.into_iter().max_by_key(|(id, _)| *id).unwrap();

        assert_eq!(newest, controller.latest_request_id());
        let state = outcome.state().cloned().expect("newest call applies");
        assert_eq!(controller.state(), state);
        assert!(!controller.is_loading());
    }

    #[tokio::test]
    async fn test_submit_validated_rejects_without_transition() {
        let (_service, controller) = scripted(StalePolicy::LatestOnly);

        let err = controller
            .submit_validated(&FormInput::with_goals(" , "))
            .unwrap_err();

        assert_eq!(err.field(), Some("goals"));
        assert_eq!(controller.state(), LifecycleState::Idle);
        assert_eq!(controller.latest_request_id(), 0);
    }
}
