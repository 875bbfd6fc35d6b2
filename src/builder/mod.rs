//! Builder API for ergonomic machine construction.
//!
//! This module provides a fluent builder and a macro for declaring
//! identifier enums with minimal boilerplate while keeping the
//! constructor preconditions of [`Machine::new`](crate::machine::Machine::new).

pub mod machine;
pub mod macros;

pub use machine::MachineBuilder;
