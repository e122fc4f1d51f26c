//! Thermostat Hybrid System
//!
//! This example models a heater switching on and off around a setpoint.
//!
//! Key concepts:
//! - Modes carrying continuous dynamics (here a constant rate)
//! - Guards and assignments stored in reset maps
//! - Autonomous versus controlled switching
//! - Structural edits through the hybrid system wrappers
//!
//! Run with: cargo run --example thermostat

use hybrid_automata::automaton;
use hybrid_automata::core::{Automaton, StateId};
use hybrid_automata::switching::{Direction, Switching};
use hybrid_automata::system::{Guard, GuardedReset};
use hybrid_automata::HybridSystemBuilder;

/// Temperature derivative in degrees per minute.
#[derive(Debug, Clone, Copy)]
struct Dynamics {
    name: &'static str,
    rate: f64,
}

type Reset = GuardedReset<Guard<f64>, fn(f64) -> f64>;

/// Jump enabled by `guard` that leaves the temperature unchanged.
fn jump_when(guard: Guard<f64>) -> Reset {
    let unchanged: fn(f64) -> f64 = |x| x;
    GuardedReset::new(guard, unchanged)
}

fn main() {
    println!("=== Thermostat Hybrid System ===\n");

    let automaton = automaton! {
        states: 2,
        transitions: [
            1 => 2 : 1, // heating -> cooling
            2 => 1 : 1, // cooling -> heating
        ]
    }
    .unwrap();

    let mut system = HybridSystemBuilder::<_, Dynamics, Reset>::new()
        .automaton(automaton)
        .mode(Dynamics {
            name: "heating",
            rate: 1.5,
        })
        .mode(Dynamics {
            name: "cooling",
            rate: -0.5,
        })
        .jump(
            jump_when(Guard::new(|x: &f64| *x >= 22.0)),
            Switching::Autonomous,
        )
        .jump(
            jump_when(Guard::new(|x: &f64| *x <= 18.0)),
            Switching::Autonomous,
        )
        .build()
        .unwrap();

    println!("Modes:");
    for (state, mode) in system.modes() {
        println!("  {state}: {} ({:+} deg/min)", mode.name, mode.rate);
    }

    // Euler steps of one minute; the library only stores the data.
    println!("\nSimulating 20 minutes from 19 degrees:");
    let mut state = StateId::new(1);
    let mut x = 19.0;
    for minute in 0..20 {
        let mode = system.mode(state).unwrap();
        x += mode.rate;

        let enabled = system
            .automaton()
            .out_transitions(state)
            .unwrap()
            .find(|&t| system.guard(t).unwrap().check(&x));
        if let Some(t) = enabled {
            x = (system.assignment(t).unwrap())(x);
            state = system.automaton().target(t).unwrap();
            println!(
                "  t={minute:>2}  x={x:5.1}  jump {t} -> {}",
                system.mode(state).unwrap().name
            );
        }
    }

    // A manual override lets the user force heating from any mode.
    let boost = system
        .add_transition(
            StateId::new(2),
            StateId::new(1),
            2,
            jump_when(Guard::always()),
            Switching::Controlled,
        )
        .unwrap();
    println!("\nAdded controlled override {boost}");

    println!("\nTwo-jump histories ending in heating:");
    for s in system.switchings(2, StateId::new(1), Direction::Backward).unwrap() {
        let kinds: Vec<_> = s
            .transitions()
            .iter()
            .map(|&t| system.switching(t).unwrap().to_string())
            .collect();
        println!("  {s}  [{}]", kinds.join(", "));
    }

    println!("\n=== Example Complete ===");
}
