//! Error types for automaton and hybrid system operations.

use super::ids::{StateId, Symbol, TransitionRef};
use std::fmt;
use thiserror::Error;

/// Result type alias for automaton operations.
pub type AutomatonResult<T> = Result<T, AutomatonError>;

/// Errors raised by automata and hybrid systems.
///
/// All of them signal a caller contract violation; none is transient and
/// no operation mutates anything before returning one.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum AutomatonError {
    #[error("Unknown state {state}")]
    UnknownState { state: StateId },

    /// No live transition has this id, or none carries this triple.
    #[error("Unknown transition {transition}")]
    UnknownTransition { transition: TransitionRef },

    #[error("State {state} still has {count} incident transition(s)")]
    StateHasTransitions { state: StateId, count: usize },

    #[error("Side tables out of sync with the automaton: {}", list(mismatches))]
    SizeMismatch { mismatches: Vec<SizeMismatch> },

    #[error("Events must stay contiguous: expected {expected}, found {found}")]
    NonContiguousEvent { expected: Symbol, found: Symbol },
}

/// Which per-index table of a hybrid system is affected by a mismatch.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Table {
    Modes,
    ResetMaps,
    Switchings,
}

impl fmt::Display for Table {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Modes => "modes",
            Self::ResetMaps => "resetmaps",
            Self::Switchings => "switchings",
        })
    }
}

/// One table whose length disagrees with the automaton's index space.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SizeMismatch {
    pub table: Table,
    pub expected: usize,
    pub found: usize,
}

impl fmt::Display for SizeMismatch {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} has {} entries, expected {}",
            self.table, self.found, self.expected
        )
    }
}

fn list(mismatches: &[SizeMismatch]) -> String {
    mismatches
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("; ")
}
