//! Build errors for the automaton and hybrid system builders.

use crate::core::{AutomatonError, StateId};
use thiserror::Error;

/// Errors that can occur when building automata and hybrid systems.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum BuildError {
    #[error("State {state} is out of range. The automaton declares states 1..={nstates}")]
    StateOutOfRange { state: StateId, nstates: u32 },

    #[error("Automaton not specified. Call .automaton(a) before .build()")]
    MissingAutomaton,

    #[error(transparent)]
    Automaton(#[from] AutomatonError),
}
