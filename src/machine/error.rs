//! Construction errors for machine definitions.

use thiserror::Error;

/// Errors that can occur when building a machine definition.
///
/// These are constructor preconditions. Graph-resolution misses at runtime
/// (unregistered events, failed guards, unknown targets) are not errors;
/// they produce unchanged transition results instead.
#[derive(Debug, Error)]
pub enum BuildError {
    #[error("no states supplied. A machine needs at least one state")]
    NoStates,

    #[error("duplicate state id {0}. State ids within one machine must be unique")]
    DuplicateStateId(String),

    #[error("initial state {0} is not among the supplied states")]
    UnknownInitialState(String),

    #[error("initial state not specified. Call .initial(id) before .build()")]
    MissingInitialState,
}
