//! State nodes of the machine graph.

use super::action::Action;
use super::id::{EventId, StateId};
use super::transition::Transition;
use std::collections::HashMap;

/// A node in the machine graph: an id, a mapping from event to candidate
/// transitions, and ordered entry/exit actions.
///
/// Candidate transitions registered for the same event keep their
/// declaration order; that order is observable, since the first candidate
/// whose guard passes wins.
///
/// # Example
///
/// ```rust
/// use machina::core::{EventId, State, StateId, Transition};
///
/// #[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
/// enum Light {
///     Green,
///     Yellow,
/// }
/// impl StateId for Light {}
///
/// #[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
/// enum Signal {
///     Timer,
///     Power,
/// }
/// impl EventId for Signal {}
///
/// let green: State<Light, Signal, ()> =
///     State::new(Light::Green).on(Signal::Timer, Transition::to(Light::Yellow));
///
/// assert!(green.can(&Signal::Timer));
/// assert!(!green.can(&Signal::Power));
/// ```
pub struct State<S: StateId, E: EventId, C> {
    pub(crate) id: S,
    pub(crate) on: HashMap<E, Vec<Transition<S, E, C>>>,
    pub(crate) enter: Vec<Action<E, C>>,
    pub(crate) exit: Vec<Action<E, C>>,
}

impl<S: StateId, E: EventId, C> State<S, E, C> {
    /// Create a state with no transitions and no entry/exit actions.
    pub fn new(id: S) -> Self {
        Self {
            id,
            on: HashMap::new(),
            enter: Vec::new(),
            exit: Vec::new(),
        }
    }

    /// Register a candidate transition for an event.
    ///
    /// Calling this repeatedly with the same event appends to that event's
    /// candidate list, modelling prioritized guarded alternatives.
    pub fn on(mut self, event: E, transition: Transition<S, E, C>) -> Self {
        self.on.entry(event).or_default().push(transition);
        self
    }

    /// Append an action to run when this state is entered.
    pub fn on_enter(mut self, action: Action<E, C>) -> Self {
        self.enter.push(action);
        self
    }

    /// Append an action to run when this state is left.
    pub fn on_exit(mut self, action: Action<E, C>) -> Self {
        self.exit.push(action);
        self
    }

    /// The state's identifier.
    pub fn id(&self) -> &S {
        &self.id
    }

    /// Whether any transition is registered for the event, regardless of
    /// guards (pure).
    pub fn can(&self, event: &E) -> bool {
        self.on.contains_key(event)
    }

    /// The ordered candidate transitions for an event, if any.
    pub(crate) fn transitions(&self, event: &E) -> Option<&[Transition<S, E, C>]> {
        self.on.get(event).map(Vec::as_slice)
    }
}
