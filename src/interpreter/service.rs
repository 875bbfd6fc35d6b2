//! The stateful interpreter wrapping a machine definition.

use super::subscription::Subscription;
use crate::core::{EventId, State, StateId};
use crate::machine::{BuildError, Machine, TransitionResult};
use log::{debug, trace};
use std::sync::Arc;
use uuid::Uuid;

/// Type alias for subscriber callbacks.
pub type Listener<S, E, C> = Box<dyn FnMut(&TransitionResult<S, E, C>) + Send>;

/// Lifecycle of a service: strictly forward, no re-entry once stopped.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Status {
    NotStarted,
    Running,
    Stopped,
}

/// The running interpreter: tracks the current [`TransitionResult`],
/// executes actions, and fans results out to subscribers.
///
/// A service is single-threaded in its own logic. `send` must not be
/// called concurrently from multiple threads without external
/// serialization; the only concurrency the service participates in is
/// handing queue-tagged actions to their [`WorkQueue`](crate::core::WorkQueue).
///
/// # Example
///
/// ```rust
/// use machina::core::{EventId, State, StateId, Transition};
/// use machina::interpreter::Service;
///
/// #[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
/// enum Toggle {
///     Inactive,
///     Active,
/// }
/// impl StateId for Toggle {}
///
/// #[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
/// enum Input {
///     Init,
///     Flip,
/// }
/// impl EventId for Input {}
///
/// let mut service = Service::<Toggle, Input, ()>::with_definition(
///     Toggle::Inactive,
///     vec![
///         State::new(Toggle::Inactive).on(Input::Flip, Transition::to(Toggle::Active)),
///         State::new(Toggle::Active).on(Input::Flip, Transition::to(Toggle::Inactive)),
///     ],
///     None,
/// )
/// .unwrap();
///
/// service.start(&Input::Init);
/// service.send(&Input::Flip);
/// assert_eq!(service.state().id(), &Toggle::Active);
/// ```
pub struct Service<S: StateId, E: EventId, C> {
    machine: Arc<Machine<S, E, C>>,
    current: TransitionResult<S, E, C>,
    subscribers: Vec<(Uuid, Listener<S, E, C>)>,
    status: Status,
}

impl<S, E, C> Service<S, E, C>
where
    S: StateId,
    E: EventId,
    C: Send + Sync + 'static,
{
    /// Wrap a pre-built machine.
    ///
    /// The current result points at the machine's initial state with its
    /// enter actions queued, ready to be flushed by [`start`](Self::start).
    pub fn new(machine: Arc<Machine<S, E, C>>) -> Self {
        let initial = machine.initial();
        let current = TransitionResult {
            state: Arc::clone(initial),
            actions: initial.enter.clone(),
            context: machine.context().cloned(),
            changed: false,
        };

        Self {
            machine,
            current,
            subscribers: Vec::new(),
            status: Status::NotStarted,
        }
    }

    /// Build a machine from the raw ingredients and wrap it.
    pub fn with_definition(
        initial: S,
        states: Vec<State<S, E, C>>,
        context: Option<C>,
    ) -> Result<Self, BuildError> {
        let machine = Machine::new(initial, states, context)?;
        Ok(Self::new(Arc::new(machine)))
    }

    /// The current state. The internal transition result is never exposed
    /// through this accessor; subscribers receive it instead.
    pub fn state(&self) -> &Arc<State<S, E, C>> {
        &self.current.state
    }

    /// Mark the service running and flush the queued actions (normally the
    /// initial state's enter actions), passing `event` and the shared
    /// context to each. Does not perform a transition. Chainable.
    pub fn start(&mut self, event: &E) -> &mut Self {
        self.status = Status::Running;
        debug!("service started in state {:?}", self.current.state.id());
        self.run_actions(event);
        self
    }

    /// Mark the service stopped and unsubscribe all listeners. No final
    /// notification is sent. After `stop`, `send` must not be called.
    /// Chainable.
    pub fn stop(&mut self) -> &mut Self {
        self.status = Status::Stopped;
        self.subscribers.clear();
        debug!("service stopped in state {:?}", self.current.state.id());
        self
    }

    /// Deliver one event: resolve the transition, replace the current
    /// result, execute its actions, then notify every subscriber in
    /// subscription order.
    ///
    /// Synchronous actions complete before notification; queue-dispatched
    /// actions carry no ordering guarantee relative to it.
    ///
    /// # Panics
    ///
    /// Calling `send` on a service that is not running is a caller
    /// sequencing bug, not a recoverable condition, and panics.
    pub fn send(&mut self, event: &E) {
        if self.status != Status::Running {
            panic!(
                "send called on a service that is not running (status {:?}); \
                 call start() first and do not send after stop()",
                self.status
            );
        }

        trace!("sending {:?} in state {:?}", event, self.current.state.id());
        let next = self.machine.transition(&self.current.state, event);
        self.current = next;
        self.run_actions(event);

        for (_, listener) in self.subscribers.iter_mut() {
            listener(&self.current);
        }
    }

    /// Append a listener and immediately invoke it once with the current
    /// result, so new subscribers see the current state without waiting
    /// for the next event. Returns a token for [`unsubscribe`](Self::unsubscribe).
    pub fn subscribe<F>(&mut self, listener: F) -> Subscription
    where
        F: FnMut(&TransitionResult<S, E, C>) + Send + 'static,
    {
        let token = Subscription::new();
        self.subscribers.push((token.id(), Box::new(listener)));

        if let Some((_, listener)) = self.subscribers.last_mut() {
            listener(&self.current);
        }

        token
    }

    /// Remove the listener identified by `token`. Unknown or
    /// already-removed tokens are a safe no-op.
    pub fn unsubscribe(&mut self, token: Subscription) {
        self.subscribers.retain(|(id, _)| *id != token.id());
    }

    /// Dispatch the current result's actions: untagged actions run
    /// synchronously in order, queue-tagged actions are submitted and not
    /// awaited.
    fn run_actions(&self, event: &E) {
        for action in &self.current.actions {
            match action.queue() {
                None => action.call(event, self.current.context.as_deref()),
                Some(queue) => {
                    trace!("handing action off to queue '{}'", queue.label());
                    let queue = Arc::clone(queue);
                    let action = action.clone();
                    let event = event.clone();
                    let context = self.current.context.clone();
                    queue.submit(Box::new(move || action.call(&event, context.as_deref())));
                }
            }
        }
    }
}
