//! Switching sequences: walks of transitions through an automaton.

use crate::core::{Automaton, AutomatonResult, StateId, Symbol, TransitionId};
use serde::{Deserialize, Serialize};
use std::fmt;

/// An ordered walk `t_1, …, t_k` with `target(t_i) = source(t_{i+1})`.
///
/// The walk remembers the state it starts at, so the empty sequence
/// (the trivial switching) still knows where it is.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SwitchingSequence {
    start: StateId,
    transitions: Vec<TransitionId>,
}

impl SwitchingSequence {
    /// Creates a sequence without checking it against any automaton.
    /// Use [`is_walk_in`](Self::is_walk_in) to validate it.
    pub fn new(start: StateId, transitions: Vec<TransitionId>) -> Self {
        Self { start, transitions }
    }

    /// The empty switching at `state`.
    pub fn empty(state: StateId) -> Self {
        Self::new(state, Vec::new())
    }

    pub fn start(&self) -> StateId {
        self.start
    }

    pub fn transitions(&self) -> &[TransitionId] {
        &self.transitions
    }

    pub fn len(&self) -> usize {
        self.transitions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.transitions.is_empty()
    }

    pub fn into_transitions(self) -> Vec<TransitionId> {
        self.transitions
    }

    /// State reached after the last transition.
    pub fn end<A: Automaton>(&self, automaton: &A) -> AutomatonResult<StateId> {
        match self.transitions.last() {
            Some(&last) => automaton.target(last),
            None => Ok(self.start),
        }
    }

    /// Event labels along the walk.
    pub fn events<A: Automaton>(&self, automaton: &A) -> AutomatonResult<Vec<Symbol>> {
        self.transitions
            .iter()
            .map(|&t| automaton.event(t))
            .collect()
    }

    /// Visited states: the start, then the target of every transition.
    pub fn states<A: Automaton>(&self, automaton: &A) -> AutomatonResult<Vec<StateId>> {
        let mut states = Vec::with_capacity(self.transitions.len() + 1);
        states.push(self.start);
        for &t in &self.transitions {
            states.push(automaton.target(t)?);
        }
        Ok(states)
    }

    /// Whether every transition is live and chains onto the previous one.
    pub fn is_walk_in<A: Automaton>(&self, automaton: &A) -> bool {
        if !automaton.has_state(self.start) {
            return false;
        }
        let mut at = self.start;
        for &t in &self.transitions {
            match automaton.label(t) {
                Ok(label) if label.source == at => at = label.target,
                _ => return false,
            }
        }
        true
    }
}

impl<'a> IntoIterator for &'a SwitchingSequence {
    type Item = &'a TransitionId;
    type IntoIter = std::slice::Iter<'a, TransitionId>;

    fn into_iter(self) -> Self::IntoIter {
        self.transitions.iter()
    }
}

impl fmt::Display for SwitchingSequence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:", self.start)?;
        for t in &self.transitions {
            write!(f, " {t}")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::GraphAutomaton;

    fn q(raw: u32) -> StateId {
        StateId::new(raw)
    }

    #[test]
    fn empty_sequence_ends_where_it_starts() {
        let a = GraphAutomaton::with_states(2);
        let s = SwitchingSequence::empty(q(2));

        assert!(s.is_empty());
        assert_eq!(s.end(&a), Ok(q(2)));
        assert_eq!(s.states(&a), Ok(vec![q(2)]));
        assert!(s.is_walk_in(&a));
    }

    #[test]
    fn walk_reports_states_and_events() {
        let mut a = GraphAutomaton::with_states(3);
        let t = a.add_transition(q(1), q(2), 4).unwrap();
        let u = a.add_transition(q(2), q(3), 5).unwrap();
        let s = SwitchingSequence::new(q(1), vec![t, u]);

        assert_eq!(s.len(), 2);
        assert_eq!(s.events(&a), Ok(vec![4, 5]));
        assert_eq!(s.states(&a), Ok(vec![q(1), q(2), q(3)]));
        assert_eq!(s.end(&a), Ok(q(3)));
        assert!(s.is_walk_in(&a));
        assert_eq!(s.to_string(), "q1: t1 t2");
    }

    #[test]
    fn broken_chain_is_not_a_walk() {
        let mut a = GraphAutomaton::with_states(3);
        let t = a.add_transition(q(1), q(2), 1).unwrap();
        let u = a.add_transition(q(3), q(1), 1).unwrap();

        assert!(!SwitchingSequence::new(q(1), vec![t, u]).is_walk_in(&a));
        assert!(!SwitchingSequence::new(q(2), vec![t]).is_walk_in(&a));

        a.remove_transition(t).unwrap();
        assert!(!SwitchingSequence::new(q(1), vec![t]).is_walk_in(&a));
    }
}
