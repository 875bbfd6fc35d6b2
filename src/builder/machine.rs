//! Builder for constructing machine definitions.

use crate::core::{EventId, State, StateId};
use crate::interpreter::Service;
use crate::machine::{BuildError, Machine};

/// Builder for constructing machines with a fluent API.
///
/// # Example
///
/// ```rust
/// use machina::builder::MachineBuilder;
/// use machina::core::{EventId, State, StateId, Transition};
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
///     Toggle,
/// }
/// impl EventId for Push {}
///
/// let machine = MachineBuilder::<Door, Push, ()>::new()
///     .initial(Door::Closed)
///     .state(State::new(Door::Closed).on(Push::Toggle, Transition::to(Door::Open)))
///     .state(State::new(Door::Open).on(Push::Toggle, Transition::to(Door::Closed)))
///     .build()
///     .unwrap();
///
/// assert_eq!(machine.initial().id(), &Door::Closed);
/// ```
pub struct MachineBuilder<S: StateId, E: EventId, C> {
    initial: Option<S>,
    states: Vec<State<S, E, C>>,
    context: Option<C>,
}

impl<S, E, C> MachineBuilder<S, E, C>
where
    S: StateId,
    E: EventId,
    C: Send + Sync + 'static,
{
    /// Create a new builder.
    pub fn new() -> Self {
        Self {
            initial: None,
            states: Vec::new(),
            context: None,
        }
    }

    /// Set the initial state id (required).
    pub fn initial(mut self, id: S) -> Self {
        self.initial = Some(id);
        self
    }

    /// Add a state.
    pub fn state(mut self, state: State<S, E, C>) -> Self {
        self.states.push(state);
        self
    }

    /// Add multiple states at once.
    pub fn states<I>(mut self, states: I) -> Self
    where
        I: IntoIterator<Item = State<S, E, C>>,
    {
        self.states.extend(states);
        self
    }

    /// Set the shared context (optional).
    pub fn context(mut self, context: C) -> Self {
        self.context = Some(context);
        self
    }

    /// Build the machine definition.
    ///
    /// Fails if the initial id was never set, the state set is empty, a
    /// state id occurs twice, or the initial id is not among the states.
    pub fn build(self) -> Result<Machine<S, E, C>, BuildError> {
        let initial = self.initial.ok_or(BuildError::MissingInitialState)?;
        Machine::new(initial, self.states, self.context)
    }

    /// Build the machine and wrap it in a [`Service`] in one step.
    pub fn build_service(self) -> Result<Service<S, E, C>, BuildError> {
        Ok(Service::new(std::sync::Arc::new(self.build()?)))
    }
}

impl<S, E, C> Default for MachineBuilder<S, E, C>
where
    S: StateId,
    E: EventId,
    C: Send + Sync + 'static,
{
    fn default() -> Self {
        Self::new()
    }
}
