//! Outcome of one transition resolution.

use crate::core::{Action, EventId, State, StateId};
use std::sync::Arc;

/// Snapshot produced by one resolution call: the resulting state, the
/// actions to execute, the machine's shared context, and whether the state
/// actually changed.
///
/// A result is immutable once produced; the interpreter replaces its held
/// result wholesale on every `send`. An empty action list means nothing
/// fired. `changed` is `false` for self-transitions even though exit and
/// enter actions still ran.
pub struct TransitionResult<S: StateId, E: EventId, C> {
    /// The resulting (possibly unchanged) state.
    pub state: Arc<State<S, E, C>>,

    /// Actions to execute, in order: exit, transition, enter.
    pub actions: Vec<Action<E, C>>,

    /// The machine's shared context, if any.
    pub context: Option<Arc<C>>,

    /// Whether the resolved target differs from the source state.
    pub changed: bool,
}

impl<S: StateId, E: EventId, C> Clone for TransitionResult<S, E, C> {
    fn clone(&self) -> Self {
        Self {
            state: Arc::clone(&self.state),
            actions: self.actions.clone(),
            context: self.context.clone(),
            changed: self.changed,
        }
    }
}
