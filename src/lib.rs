//! Machina: a declarative finite state machine library with an observable
//! interpreter.
//!
//! A machine is described as data: states, events, guarded transitions and
//! entry/exit actions. Resolution of what one event does to the current
//! state is a pure function on that graph; execution of the resulting
//! actions and notification of subscribers is the job of the stateful
//! [`Service`] interpreter.
//!
//! # Core Concepts
//!
//! - **State**: a node with entry/exit actions and per-event candidate
//!   transitions, tried in declaration order (first passing guard wins)
//! - **Machine**: the immutable graph definition plus an optional shared
//!   context, exposing pure transition resolution
//! - **Service**: the running interpreter — lifecycle, action dispatch
//!   (synchronous or via an external [`WorkQueue`]), subscriber fan-out
//!
//! # Example
//!
//! ```rust
//! use machina::{id_enum, Machine, Service, State, Transition};
//! use std::sync::Arc;
//!
//! id_enum! {
//!     enum Light {
//!         Green,
//!         Yellow,
//!         Red,
//!     }
//! }
//!
//! id_enum! {
//!     enum Signal {
//!         Init,
//!         Timer,
//!     }
//! }
//!
//! let machine = Machine::<Light, Signal, ()>::new(
//!     Light::Green,
//!     vec![
//!         State::new(Light::Green).on(Signal::Timer, Transition::to(Light::Yellow)),
//!         State::new(Light::Yellow).on(Signal::Timer, Transition::to(Light::Red)),
//!         State::new(Light::Red).on(Signal::Timer, Transition::to(Light::Green)),
//!     ],
//!     None,
//! )
//! .unwrap();
//!
//! let mut service = Service::new(Arc::new(machine));
//! service.start(&Signal::Init);
//! assert_eq!(service.state().id(), &Light::Green);
//!
//! service.send(&Signal::Timer);
//! assert_eq!(service.state().id(), &Light::Yellow);
//! ```

pub mod builder;
pub mod core;
pub mod interpreter;
pub mod machine;

// Re-export commonly used types
pub use crate::core::{Action, EventId, Job, State, StateId, Transition, WorkQueue};
pub use builder::MachineBuilder;
pub use interpreter::{Service, Subscription};
pub use machine::{BuildError, Machine, TransitionResult};
