//! Switching Sequence Enumeration
//!
//! This example walks the discrete part of two switched systems.
//!
//! Key concepts:
//! - Forward and backward enumeration from a mode
//! - Lazy iteration: stop as soon as a walk of interest is found
//! - One-state automata for arbitrary switching between maps
//!
//! Run with: cargo run --example switching_sequences

use hybrid_automata::automaton;
use hybrid_automata::core::{Automaton, OneStateAutomaton, StateId};
use hybrid_automata::switching::{enumerate, Direction};

fn main() {
    println!("=== Switching Sequence Enumeration ===\n");

    let a = automaton! {
        states: 2,
        transitions: [1 => 1 : 1, 2 => 2 : 1, 1 => 2 : 2, 2 => 1 : 3]
    }
    .unwrap();
    let q1 = StateId::new(1);

    println!("Transitions:");
    for (t, label) in a.transitions().labeled() {
        println!("  {t}: {label}");
    }

    println!("\nForward walks of length 2 from {q1}:");
    for s in enumerate(&a, 2, q1, Direction::Forward).unwrap() {
        println!("  {s}  events {:?}", s.events(&a).unwrap());
    }

    println!("\nBackward walks of length 2 into {q1}:");
    for s in enumerate(&a, 2, q1, Direction::Backward).unwrap() {
        println!("  {s}  visits {:?}", s.states(&a).unwrap());
    }

    // 2^40 walks exist; only the first few are ever built.
    println!("\nFirst walk of length 40 that ends in state 2:");
    let found = enumerate(&a, 40, q1, Direction::Forward)
        .unwrap()
        .find(|s| s.end(&a) == Ok(StateId::new(2)));
    if let Some(s) = found {
        println!("  {} transitions, last {:?}", s.len(), s.transitions().last());
    }

    println!("\nArbitrary switching between 3 maps:");
    let switched = OneStateAutomaton::new(3);
    let count = enumerate(&switched, 4, q1, Direction::Forward)
        .unwrap()
        .count();
    println!("  {} sequences of length 4 (3^4)", count);
    println!("  {} transitions, all self loops", switched.ntransitions());

    println!("\n=== Example Complete ===");
}
