//! Identifier traits for state machine states and events.
//!
//! Applications name their states and events with their own closed
//! enumerations and mark them with these traits. The core never inspects
//! identifiers beyond equality, hashing and debug formatting.

use std::fmt::Debug;
use std::hash::Hash;

/// Marker trait for state identifiers.
///
/// Equality defines identity: two [`State`](crate::core::State) nodes with
/// equal ids are the same node as far as transition resolution is concerned.
///
/// # Example
///
/// ```rust
/// use machina::core::StateId;
///
/// #[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
/// enum Light {
///     Green,
///     Yellow,
///     Red,
/// }
///
/// impl StateId for Light {}
/// ```
pub trait StateId: Clone + Eq + Hash + Debug + Send + Sync + 'static {}

/// Marker trait for event identifiers.
///
/// Events are the external stimuli delivered to a running
/// [`Service`](crate::interpreter::Service) via `send`. Like state ids they
/// are opaque to the core: hashed for lookup, cloned when an action is
/// handed to a work queue, never introspected.
///
/// # Example
///
/// ```rust
/// use machina::core::EventId;
///
/// #[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
/// enum Signal {
///     Init,
///     Timer,
/// }
///
/// impl EventId for Signal {}
/// ```
pub trait EventId: Clone + Eq + Hash + Debug + Send + Sync + 'static {}
