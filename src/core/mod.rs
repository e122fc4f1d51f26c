//! Structural core of a hybrid automaton.
//!
//! This module contains the discrete part of a hybrid system:
//! - Stable state and transition handles
//! - The id ↔ label store
//! - The `Automaton` capability trait and its two backends
//! - Lazy iterators over states and incident transitions
//!
//! Nothing here looks at continuous dynamics; modes, reset maps and guards
//! are attached on top by [`crate::system`].

mod automaton;
mod config;
mod error;
mod graph;
mod ids;
mod iter;
mod labels;
mod one_state;

pub use automaton::{Automaton, Resizable};
pub use config::{AutomatonConfig, AutomatonConfigBuilder, RemovalPolicy};
pub use error::{AutomatonError, AutomatonResult, SizeMismatch, Table};
pub use graph::GraphAutomaton;
pub use ids::{Label, StateId, Symbol, TransitionId, TransitionRef};
pub use iter::{Incident, States, Transitions};
pub use labels::LabelStore;
pub use one_state::OneStateAutomaton;
