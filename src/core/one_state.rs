//! Degenerate automaton with a single state.

use super::automaton::Automaton;
use super::error::{AutomatonError, AutomatonResult};
use super::ids::{Label, StateId, Symbol, TransitionId};
use serde::{Deserialize, Serialize};

const ONLY_STATE: StateId = StateId::new(1);

/// Automaton with one state and the events `1, …, nt`.
///
/// Transition `t` is the self-loop labeled `t.raw()`, so an arbitrary
/// switching between `nt` modes needs no graph at all. Events stay
/// contiguous: only event `nt + 1` can be added and only event `nt` removed.
///
/// # Example
///
/// ```rust
/// use hybrid_automata::core::{Automaton, OneStateAutomaton, StateId};
///
/// let a = OneStateAutomaton::new(3);
/// assert_eq!(a.nstates(), 1);
/// assert_eq!(a.ntransitions(), 3);
/// assert_eq!(a.out_transitions(StateId::new(1)).unwrap().count(), 3);
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct OneStateAutomaton {
    nt: Symbol,
}

impl OneStateAutomaton {
    pub fn new(nt: Symbol) -> Self {
        Self { nt }
    }

    /// The only state.
    pub fn state(&self) -> StateId {
        ONLY_STATE
    }

    fn all(&self) -> impl Iterator<Item = TransitionId> + Clone {
        (1..=self.nt).map(TransitionId::new)
    }

    fn check_state(state: StateId) -> AutomatonResult<()> {
        if state == ONLY_STATE {
            Ok(())
        } else {
            Err(AutomatonError::UnknownState { state })
        }
    }
}

impl Automaton for OneStateAutomaton {
    fn nstates(&self) -> usize {
        1
    }

    fn ntransitions(&self) -> usize {
        self.nt as usize
    }

    fn states(&self) -> impl Iterator<Item = StateId> + Clone + '_ {
        std::iter::once(ONLY_STATE)
    }

    fn transitions(&self) -> impl Iterator<Item = TransitionId> + Clone + '_ {
        self.all()
    }

    fn has_state(&self, state: StateId) -> bool {
        state == ONLY_STATE
    }

    fn add_transition(
        &mut self,
        source: StateId,
        target: StateId,
        symbol: Symbol,
    ) -> AutomatonResult<TransitionId> {
        Self::check_state(source)?;
        Self::check_state(target)?;
        match self.nt.checked_add(1) {
            Some(expected) if symbol == expected => {
                self.nt = expected;
                Ok(TransitionId::new(expected))
            }
            // Every event is taken once `nt` reaches the top of the range.
            next => Err(AutomatonError::NonContiguousEvent {
                expected: next.unwrap_or(self.nt),
                found: symbol,
            }),
        }
    }

    fn has_transition(&self, transition: TransitionId) -> bool {
        (1..=self.nt).contains(&transition.raw())
    }

    fn has_transition_between(&self, source: StateId, target: StateId) -> bool {
        source == ONLY_STATE && target == ONLY_STATE && self.nt > 0
    }

    fn remove_transition(&mut self, transition: TransitionId) -> AutomatonResult<Label> {
        let label = self.label(transition)?;
        if transition.raw() != self.nt {
            return Err(AutomatonError::NonContiguousEvent {
                expected: self.nt,
                found: transition.raw(),
            });
        }
        self.nt -= 1;
        Ok(label)
    }

    fn label(&self, transition: TransitionId) -> AutomatonResult<Label> {
        if self.has_transition(transition) {
            Ok(Label::new(ONLY_STATE, ONLY_STATE, transition.raw()))
        } else {
            Err(AutomatonError::UnknownTransition {
                transition: transition.into(),
            })
        }
    }

    fn in_transitions(
        &self,
        state: StateId,
    ) -> AutomatonResult<impl Iterator<Item = TransitionId> + Clone + '_> {
        Self::check_state(state)?;
        Ok(self.all())
    }

    fn out_transitions(
        &self,
        state: StateId,
    ) -> AutomatonResult<impl Iterator<Item = TransitionId> + Clone + '_> {
        Self::check_state(state)?;
        Ok(self.all())
    }
}
