//! Immutable machine definition and pure transition resolution.
//!
//! A [`Machine`] holds the full state graph, the initial state, and an
//! optional shared context. Its [`transition`](Machine::transition) method
//! is a pure function (aside from reading the shared context): it resolves
//! what a single event does to a given state and returns a
//! [`TransitionResult`] without executing anything. Execution belongs to
//! the [`Service`](crate::interpreter::Service) interpreter.

mod error;
mod result;

pub use error::BuildError;
pub use result::TransitionResult;

use crate::core::{EventId, State, StateId};
use log::warn;
use std::collections::HashMap;
use std::sync::Arc;

/// The immutable state graph definition.
///
/// # Example
///
/// ```rust
/// use machina::core::{EventId, State, StateId, Transition};
/// use machina::machine::Machine;
///
/// #[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
/// enum Power {
///     Off,
///     On,
/// }
/// impl StateId for Power {}
///
/// #[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
/// enum Button {
///     Press,
/// }
/// impl EventId for Button {}
///
/// let machine = Machine::<Power, Button, ()>::new(
///     Power::Off,
///     vec![
///         State::new(Power::Off).on(Button::Press, Transition::to(Power::On)),
///         State::new(Power::On).on(Button::Press, Transition::to(Power::Off)),
///     ],
///     None,
/// )
/// .unwrap();
///
/// let result = machine.transition(machine.initial(), &Button::Press);
/// assert_eq!(result.state.id(), &Power::On);
/// assert!(result.changed);
/// ```
pub struct Machine<S: StateId, E: EventId, C> {
    initial: Arc<State<S, E, C>>,
    states: HashMap<S, Arc<State<S, E, C>>>,
    context: Option<Arc<C>>,
}

impl<S: StateId, E: EventId, C> Machine<S, E, C> {
    /// Create a machine from an initial state id, the full set of states,
    /// and an optional shared context.
    ///
    /// Fails if the state set is empty, a state id occurs twice, or the
    /// initial id is not among the supplied states.
    pub fn new(
        initial: S,
        states: Vec<State<S, E, C>>,
        context: Option<C>,
    ) -> Result<Self, BuildError> {
        if states.is_empty() {
            return Err(BuildError::NoStates);
        }

        let mut map = HashMap::with_capacity(states.len());
        for state in states {
            let id = state.id().clone();
            if map.insert(id.clone(), Arc::new(state)).is_some() {
                return Err(BuildError::DuplicateStateId(format!("{id:?}")));
            }
        }

        let initial = map
            .get(&initial)
            .cloned()
            .ok_or_else(|| BuildError::UnknownInitialState(format!("{initial:?}")))?;

        Ok(Self {
            initial,
            states: map,
            context: context.map(Arc::new),
        })
    }

    /// The machine's initial state.
    pub fn initial(&self) -> &Arc<State<S, E, C>> {
        &self.initial
    }

    /// Look up a state by id.
    pub fn state(&self, id: &S) -> Option<&Arc<State<S, E, C>>> {
        self.states.get(id)
    }

    /// The machine's shared context, if any.
    pub fn context(&self) -> Option<&Arc<C>> {
        self.context.as_ref()
    }

    /// Resolve what `event` does to `current` (pure).
    ///
    /// The current state is resolved against the machine's own states by
    /// id, so an instance originating from another machine is tolerated:
    /// if its id is unknown a diagnostic is logged and an unchanged result
    /// is returned. An unregistered event, a set of guards that all fail,
    /// or an unknown target id likewise produce unchanged results; none of
    /// these abort anything.
    ///
    /// When a candidate's guard passes (first match in declaration order
    /// wins, later guards are not evaluated), the result carries the
    /// target state, the action sequence `exit ++ transition ++ enter`,
    /// and `changed = true` iff the target id differs from the current id.
    /// The same sequence applies to self-transitions: exit and enter both
    /// fire, with `changed = false`.
    pub fn transition(&self, current: &Arc<State<S, E, C>>, event: &E) -> TransitionResult<S, E, C> {
        let Some(state) = self.states.get(current.id()) else {
            warn!("state {:?} not found on machine", current.id());
            return self.unchanged(Arc::clone(current));
        };

        let Some(candidates) = state.transitions(event) else {
            return self.unchanged(Arc::clone(state));
        };

        let context = self.context.as_deref();
        let Some(winner) = candidates.iter().find(|t| t.can_execute(event, context)) else {
            return self.unchanged(Arc::clone(state));
        };

        let target_id = winner.target().unwrap_or(state.id());
        let Some(next) = self.states.get(target_id) else {
            warn!("target state {target_id:?} not found on machine");
            return self.unchanged(Arc::clone(state));
        };

        let mut actions =
            Vec::with_capacity(state.exit.len() + winner.actions.len() + next.enter.len());
        actions.extend_from_slice(&state.exit);
        actions.extend_from_slice(&winner.actions);
        actions.extend_from_slice(&next.enter);

        TransitionResult {
            state: Arc::clone(next),
            actions,
            context: self.context.clone(),
            changed: next.id() != state.id(),
        }
    }

    fn unchanged(&self, state: Arc<State<S, E, C>>) -> TransitionResult<S, E, C> {
        TransitionResult {
            state,
            actions: Vec::new(),
            context: self.context.clone(),
            changed: false,
        }
    }
}
