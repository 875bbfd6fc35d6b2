//! Actions: named units of work attached to transitions and states.

use super::id::EventId;
use super::queue::WorkQueue;
use std::sync::Arc;

/// Type alias for action callbacks.
///
/// An action receives the event that triggered it and the machine's shared
/// context, if any. Callbacks are stored behind `Arc` so that actions can be
/// cloned cheaply into transition results and queued jobs.
pub type ActionFn<E, C> = Arc<dyn Fn(&E, Option<&C>) + Send + Sync>;

/// A unit of work executed when a transition is taken or a state is
/// entered or left.
///
/// Actions are stateless from the core's perspective: they are invoked,
/// never introspected beyond their optional dispatch queue. An action with
/// no queue runs synchronously, blocking the caller; an action tagged with
/// a [`WorkQueue`] is handed off and the interpreter does not wait for it.
///
/// # Example
///
/// ```rust
/// use machina::core::{Action, EventId};
///
/// #[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
/// enum Signal {
///     Tick,
/// }
/// impl EventId for Signal {}
///
/// let greet: Action<Signal, ()> = Action::new(|event, _context| {
///     println!("received {:?}", event);
/// });
/// greet.call(&Signal::Tick, None);
/// ```
pub struct Action<E: EventId, C> {
    callback: ActionFn<E, C>,
    queue: Option<Arc<dyn WorkQueue>>,
}

impl<E: EventId, C> Action<E, C> {
    /// Create a synchronous action from a callback.
    pub fn new<F>(callback: F) -> Self
    where
        F: Fn(&E, Option<&C>) + Send + Sync + 'static,
    {
        Self {
            callback: Arc::new(callback),
            queue: None,
        }
    }

    /// Create an action dispatched to the given work queue.
    ///
    /// The interpreter submits the invocation to `queue` and returns
    /// without waiting for it to complete.
    pub fn on_queue<F>(queue: Arc<dyn WorkQueue>, callback: F) -> Self
    where
        F: Fn(&E, Option<&C>) + Send + Sync + 'static,
    {
        Self {
            callback: Arc::new(callback),
            queue: Some(queue),
        }
    }

    /// The dispatch queue this action is tagged with, if any.
    pub fn queue(&self) -> Option<&Arc<dyn WorkQueue>> {
        self.queue.as_ref()
    }

    /// Invoke the callback with the triggering event and shared context.
    pub fn call(&self, event: &E, context: Option<&C>) {
        (self.callback)(event, context);
    }
}

impl<E: EventId, C> Clone for Action<E, C> {
    fn clone(&self) -> Self {
        Self {
            callback: Arc::clone(&self.callback),
            queue: self.queue.clone(),
        }
    }
}
