//! Hybrid systems built on top of an automaton.
//!
//! [`HybridSystem`] attaches a mode to every state and a reset map plus a
//! switching nature to every transition, and keeps those tables in step with
//! the automaton through its own mutation methods.

mod guard;
mod hybrid;
mod mode;
mod reset;
mod table;

pub use guard::Guard;
pub use hybrid::{HybridSystem, RemovedState, RemovedTransition};
pub use mode::{ContinuousMode, Mode};
pub use reset::{GuardedReset, ResetMap};
