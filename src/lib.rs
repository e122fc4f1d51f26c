//! Hybrid automata: labeled multigraphs with lazy switching-sequence enumeration
//!
//! A hybrid automaton is a discrete state machine whose states ("modes")
//! carry continuous dynamics and whose labeled transitions carry guards and
//! reset maps. This crate models the discrete part and keeps the continuous
//! data opaque: it stores it, indexes it and hands it back, but never
//! evaluates it.
//!
//! # Core Concepts
//!
//! - **Automaton**: a mutable multigraph of states and labeled transitions,
//!   behind the `Automaton` trait
//! - **Switching sequences**: finite walks through the automaton, enumerated
//!   lazily forward or backward from a state
//! - **Hybrid system**: an automaton plus one mode per state and one reset map
//!   and switching nature per transition
//!
//! # Example
//!
//! ```rust
//! use hybrid_automata::core::{GraphAutomaton, StateId};
//! use hybrid_automata::switching::{enumerate, Direction};
//!
//! let mut a = GraphAutomaton::with_states(2);
//! let (q1, q2) = (StateId::new(1), StateId::new(2));
//! a.add_transition(q1, q1, 1).unwrap();
//! a.add_transition(q2, q2, 1).unwrap();
//! a.add_transition(q1, q2, 2).unwrap();
//! a.add_transition(q2, q1, 3).unwrap();
//!
//! let walks: Vec<String> = enumerate(&a, 2, q1, Direction::Forward)
//!     .unwrap()
//!     .map(|s| s.to_string())
//!     .collect();
//! assert_eq!(walks, vec!["q1: t1 t1", "q1: t1 t3", "q1: t3 t2", "q1: t3 t4"]);
//! ```

pub mod builder;
pub mod core;
pub mod switching;
pub mod system;

// Re-export commonly used types
pub use builder::{AutomatonBuilder, BuildError, HybridSystemBuilder};
pub use crate::core::{
    Automaton, AutomatonError, AutomatonResult, GraphAutomaton, Label, OneStateAutomaton,
    Resizable, StateId, TransitionId,
};
pub use switching::{Direction, Switching, SwitchingSequence};
pub use system::HybridSystem;
