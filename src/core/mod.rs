//! Pure data model of the machine graph.
//!
//! This module contains the declarative building blocks:
//! - Identifier traits for states and events
//! - Actions, optionally tagged with an asynchronous dispatch queue
//! - Guarded transitions with ordered action lists
//! - State nodes mapping events to candidate transitions
//!
//! Nothing here runs anything. Resolution lives in
//! [`Machine`](crate::machine::Machine) and execution in
//! [`Service`](crate::interpreter::Service).

mod action;
mod id;
mod queue;
mod state;
mod transition;

pub use action::{Action, ActionFn};
pub use id::{EventId, StateId};
pub use queue::{Job, WorkQueue};
pub use state::State;
pub use transition::{GuardFn, Transition};
