//! The imperative shell around the pure machine core.
//!
//! A [`Service`] turns a [`Machine`](crate::machine::Machine) definition
//! into a stateful, observable process:
//! - lifecycle (`not started` → `running` → `stopped`, strictly forward)
//! - action dispatch (synchronous, or handed to a
//!   [`WorkQueue`](crate::core::WorkQueue))
//! - subscriber fan-out with stable, uuid-keyed unsubscribe tokens

mod service;
mod subscription;

pub use service::{Listener, Service};
pub use subscription::Subscription;
