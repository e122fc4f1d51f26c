//! Stable handles for states, transitions and their labels.
//!
//! Both handle types are 1-based and append-only: a handle is never handed
//! out twice, even after the thing it named has been removed.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Event label carried by a transition. Labels need not be unique.
pub type Symbol = u32;

/// Handle of a discrete state (a "mode") of an automaton.
///
/// # Example
///
/// ```rust
/// use hybrid_automata::core::StateId;
///
/// let q = StateId::new(3);
/// assert_eq!(q.raw(), 3);
/// assert_eq!(q.to_string(), "q3");
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct StateId(u32);

impl StateId {
    /// Wraps a raw 1-based state number.
    pub const fn new(raw: u32) -> Self {
        Self(raw)
    }

    /// The raw 1-based state number.
    pub const fn raw(self) -> u32 {
        self.0
    }

    /// Slot index in dense per-state arrays, `None` for the invalid id `0`.
    pub(crate) fn slot(self) -> Option<usize> {
        (self.0 as usize).checked_sub(1)
    }

    pub(crate) fn from_slot(slot: usize) -> Self {
        Self(slot as u32 + 1)
    }
}

impl From<u32> for StateId {
    fn from(raw: u32) -> Self {
        Self(raw)
    }
}

impl fmt::Display for StateId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "q{}", self.0)
    }
}

/// Opaque handle of a transition, distinct from the `(source, target, symbol)`
/// triple it carries.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TransitionId(u32);

impl TransitionId {
    /// Wraps a raw 1-based transition number.
    pub const fn new(raw: u32) -> Self {
        Self(raw)
    }

    /// The raw 1-based transition number.
    pub const fn raw(self) -> u32 {
        self.0
    }

    pub(crate) fn slot(self) -> Option<usize> {
        (self.0 as usize).checked_sub(1)
    }

    pub(crate) fn from_slot(slot: usize) -> Self {
        Self(slot as u32 + 1)
    }
}

impl From<u32> for TransitionId {
    fn from(raw: u32) -> Self {
        Self(raw)
    }
}

impl fmt::Display for TransitionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "t{}", self.0)
    }
}

/// The `(source, target, symbol)` triple a transition resolves to.
///
/// Ordering is lexicographic on `(source, target, symbol)`, which lets the
/// label store answer "any transition from `q` to `r`" with a range query.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Label {
    pub source: StateId,
    pub target: StateId,
    pub symbol: Symbol,
}

impl Label {
    pub fn new(source: StateId, target: StateId, symbol: Symbol) -> Self {
        Self {
            source,
            target,
            symbol,
        }
    }
}

impl fmt::Display for Label {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} -[{}]-> {}", self.source, self.symbol, self.target)
    }
}

/// How a caller referred to a transition: by handle or by its triple.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum TransitionRef {
    Id(TransitionId),
    Label(Label),
}

impl From<TransitionId> for TransitionRef {
    fn from(transition: TransitionId) -> Self {
        Self::Id(transition)
    }
}

impl From<Label> for TransitionRef {
    fn from(label: Label) -> Self {
        Self::Label(label)
    }
}

impl fmt::Display for TransitionRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Id(transition) => fmt::Display::fmt(transition, f),
            Self::Label(label) => fmt::Display::fmt(label, f),
        }
    }
}
