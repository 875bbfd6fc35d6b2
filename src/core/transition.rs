//! Guarded edges between states.

use super::action::Action;
use super::id::{EventId, StateId};
use std::sync::Arc;

/// Type alias for guard predicates.
///
/// Guards must be side-effect free: once one candidate matches, later
/// guards for the same event are never evaluated.
pub type GuardFn<E, C> = Arc<dyn Fn(&E, Option<&C>) -> bool + Send + Sync>;

/// A guarded edge to an optional target state, carrying the actions to run
/// when taken.
///
/// A transition with no target is a self-transition: the machine stays in
/// (re-enters) the current state, and exit and enter actions still fire.
///
/// A state may register several candidate transitions for the same event;
/// they are tried in declaration order and the first whose guard passes
/// wins.
///
/// # Example
///
/// ```rust
/// use machina::core::{EventId, StateId, Transition};
///
/// #[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
/// enum Door {
///     Open,
///     Closed,
/// }
/// impl StateId for Door {}
///
/// #[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
/// enum Push {
///     Gentle,
///     Hard,
/// }
/// impl EventId for Push {}
///
/// let slam: Transition<Door, Push, ()> =
///     Transition::to(Door::Closed).when(|event, _| matches!(event, Push::Hard));
///
/// assert!(slam.can_execute(&Push::Hard, None));
/// assert!(!slam.can_execute(&Push::Gentle, None));
/// ```
pub struct Transition<S: StateId, E: EventId, C> {
    pub(crate) target: Option<S>,
    pub(crate) condition: GuardFn<E, C>,
    pub(crate) actions: Vec<Action<E, C>>,
}

impl<S: StateId, E: EventId, C> Transition<S, E, C> {
    /// A transition to the given target state, with an always-true guard
    /// and no actions.
    pub fn to(target: S) -> Self {
        Self {
            target: Some(target),
            condition: Arc::new(|_, _| true),
            actions: Vec::new(),
        }
    }

    /// A self-transition: the machine re-enters the current state.
    ///
    /// Exit and enter actions of the state still fire, but the resulting
    /// `changed` flag is `false`.
    pub fn to_self() -> Self {
        Self {
            target: None,
            condition: Arc::new(|_, _| true),
            actions: Vec::new(),
        }
    }

    /// Replace the guard with the given predicate.
    pub fn when<F>(mut self, condition: F) -> Self
    where
        F: Fn(&E, Option<&C>) -> bool + Send + Sync + 'static,
    {
        self.condition = Arc::new(condition);
        self
    }

    /// Append an action to run when this transition is taken.
    pub fn action(mut self, action: Action<E, C>) -> Self {
        self.actions.push(action);
        self
    }

    /// Append several actions, preserving order.
    pub fn actions<I>(mut self, actions: I) -> Self
    where
        I: IntoIterator<Item = Action<E, C>>,
    {
        self.actions.extend(actions);
        self
    }

    /// Shorthand for appending a synchronous action from a callback.
    pub fn run<F>(self, callback: F) -> Self
    where
        F: Fn(&E, Option<&C>) + Send + Sync + 'static,
    {
        self.action(Action::new(callback))
    }

    /// The target state id, or `None` for a self-transition.
    pub fn target(&self) -> Option<&S> {
        self.target.as_ref()
    }

    /// Evaluate the guard against the event and shared context (pure).
    pub fn can_execute(&self, event: &E, context: Option<&C>) -> bool {
        (self.condition)(event, context)
    }
}

impl<S: StateId, E: EventId, C> Clone for Transition<S, E, C> {
    fn clone(&self) -> Self {
        Self {
            target: self.target.clone(),
            condition: Arc::clone(&self.condition),
            actions: self.actions.clone(),
        }
    }
}
