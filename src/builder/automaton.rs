//! Builder for constructing graph automata.

use crate::builder::error::BuildError;
use crate::core::{AutomatonConfig, GraphAutomaton, StateId, Symbol};

/// Builder for a [`GraphAutomaton`] with a fixed number of states.
///
/// Transitions are added in the order they are declared, so the first one
/// gets id `t1`, the second `t2`, and so on.
#[derive(Clone, Debug, Default)]
pub struct AutomatonBuilder {
    nstates: u32,
    config: AutomatonConfig,
    transitions: Vec<(StateId, StateId, Symbol)>,
}

impl AutomatonBuilder {
    /// Create a new builder with no states.
    pub fn new() -> Self {
        Self::default()
    }

    /// Declare states `1..=n`.
    pub fn states(mut self, n: u32) -> Self {
        self.nstates = n;
        self
    }

    /// Set the configuration the automaton is created with.
    pub fn config(mut self, config: AutomatonConfig) -> Self {
        self.config = config;
        self
    }

    /// Add a transition from `source` to `target` labeled `symbol`.
    pub fn transition(
        mut self,
        source: impl Into<StateId>,
        target: impl Into<StateId>,
        symbol: Symbol,
    ) -> Self {
        self.transitions.push((source.into(), target.into(), symbol));
        self
    }

    /// Build the automaton.
    /// Returns an error naming the first transition endpoint outside `1..=n`.
    pub fn build(self) -> Result<GraphAutomaton, BuildError> {
        let nstates = self.nstates;
        let in_range = |state: StateId| (1..=nstates).contains(&state.raw());

        if let Some(state) = self
            .transitions
            .iter()
            .flat_map(|&(source, target, _)| [source, target])
            .find(|&state| !in_range(state))
        {
            return Err(BuildError::StateOutOfRange { state, nstates });
        }

        let mut automaton = GraphAutomaton::with_config(self.config);
        for _ in 0..nstates {
            automaton.add_state();
        }
        for (source, target, symbol) in self.transitions {
            automaton.add_transition(source, target, symbol)?;
        }

        Ok(automaton)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{Label, RemovalPolicy, TransitionId};

    #[test]
    fn builds_states_and_transitions_in_order() {
        let automaton = AutomatonBuilder::new()
            .states(2)
            .transition(1, 2, 1)
            .transition(2, 2, 1)
            .build()
            .unwrap();

        assert_eq!(automaton.nstates(), 2);
        assert_eq!(automaton.ntransitions(), 2);
        assert_eq!(
            automaton.label(TransitionId::new(2)),
            Ok(Label::new(StateId::new(2), StateId::new(2), 1))
        );
    }

    #[test]
    fn rejects_endpoints_outside_the_declared_states() {
        let result = AutomatonBuilder::new()
            .states(2)
            .transition(1, 2, 1)
            .transition(3, 1, 1)
            .build();

        assert_eq!(
            result.map(|_| ()),
            Err(BuildError::StateOutOfRange {
                state: StateId::new(3),
                nstates: 2
            })
        );
    }

    #[test]
    fn state_zero_is_out_of_range() {
        let result = AutomatonBuilder::new().states(1).transition(0, 1, 1).build();

        assert!(matches!(result, Err(BuildError::StateOutOfRange { .. })));
    }

    #[test]
    fn passes_config_through() {
        let config = AutomatonConfig::builder()
            .removal(RemovalPolicy::Reject)
            .build();
        let automaton = AutomatonBuilder::new()
            .states(1)
            .config(config)
            .build()
            .unwrap();

        assert_eq!(automaton.config(), &config);
    }

    #[test]
    fn empty_builder_gives_empty_automaton() {
        let automaton = AutomatonBuilder::new().build().unwrap();

        assert_eq!(automaton.nstates(), 0);
        assert_eq!(automaton.ntransitions(), 0);
    }
}
