//! Switching sequences and their enumeration.
//!
//! A switching sequence is a walk through the automaton: the discrete part of
//! a hybrid trajectory. Reachability, stability and model-checking analyses
//! all start by enumerating the walks of some length from a mode; this module
//! provides that primitive as a lazy iterator, so the exponential walk tree
//! is only explored as far as the caller pulls.
//!
//! The module also carries the [`Switching`] tag describing whether a
//! transition is autonomous or controlled.

mod enumerate;
mod nature;
mod sequence;

pub use enumerate::{enumerate, Direction, Switchings};
pub use nature::Switching;
pub use sequence::SwitchingSequence;
