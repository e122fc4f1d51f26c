//! Builder API for ergonomic automaton and hybrid system construction.
//!
//! This module provides fluent builders and the [`automaton!`](crate::automaton)
//! macro for declaring systems with minimal boilerplate.

pub mod automaton;
pub mod error;
pub mod macros;
pub mod system;

pub use automaton::AutomatonBuilder;
pub use error::BuildError;
pub use system::HybridSystemBuilder;
