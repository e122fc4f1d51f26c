//! Capability interface shared by every automaton backend.

use super::error::AutomatonResult;
use super::ids::{Label, StateId, Symbol, TransitionId};

/// Structural view of a hybrid automaton: states, labeled transitions and
/// incidence queries.
///
/// Analyses (switching enumeration, hybrid systems) depend only on this
/// trait, so any conforming backend can be plugged in.
/// [`GraphAutomaton`](super::GraphAutomaton) is the general backend,
/// [`OneStateAutomaton`](super::OneStateAutomaton) the degenerate one used
/// for arbitrary switching.
pub trait Automaton {
    /// Number of live states.
    fn nstates(&self) -> usize;

    /// Number of live transitions.
    fn ntransitions(&self) -> usize;

    /// Live states in ascending order. The iterator can be cloned to restart.
    fn states(&self) -> impl Iterator<Item = StateId> + Clone + '_;

    /// Live transitions in ascending id order.
    fn transitions(&self) -> impl Iterator<Item = TransitionId> + Clone + '_;

    fn has_state(&self, state: StateId) -> bool;

    /// Adds a transition from `source` to `target` labeled `symbol`.
    fn add_transition(
        &mut self,
        source: StateId,
        target: StateId,
        symbol: Symbol,
    ) -> AutomatonResult<TransitionId>;

    fn has_transition(&self, transition: TransitionId) -> bool;

    /// Whether any transition, whatever its symbol, goes from `source` to `target`.
    fn has_transition_between(&self, source: StateId, target: StateId) -> bool;

    /// Removes `transition` and returns the label it carried.
    fn remove_transition(&mut self, transition: TransitionId) -> AutomatonResult<Label>;

    /// The `(source, target, symbol)` triple of a live transition.
    fn label(&self, transition: TransitionId) -> AutomatonResult<Label>;

    fn source(&self, transition: TransitionId) -> AutomatonResult<StateId> {
        Ok(self.label(transition)?.source)
    }

    fn target(&self, transition: TransitionId) -> AutomatonResult<StateId> {
        Ok(self.label(transition)?.target)
    }

    /// Event (symbol) of a transition.
    fn event(&self, transition: TransitionId) -> AutomatonResult<Symbol> {
        Ok(self.label(transition)?.symbol)
    }

    /// Alias of [`event`](Automaton::event).
    fn symbol(&self, transition: TransitionId) -> AutomatonResult<Symbol> {
        self.event(transition)
    }

    /// Transitions whose target is `state`, in insertion order.
    fn in_transitions(
        &self,
        state: StateId,
    ) -> AutomatonResult<impl Iterator<Item = TransitionId> + Clone + '_>;

    /// Transitions whose source is `state`, in insertion order.
    fn out_transitions(
        &self,
        state: StateId,
    ) -> AutomatonResult<impl Iterator<Item = TransitionId> + Clone + '_>;
}

/// Automata whose state set can grow and shrink.
pub trait Resizable: Automaton {
    /// Appends a fresh state with no transitions.
    fn add_state(&mut self) -> StateId;

    /// Removes `state`, returning the ids of the transitions removed with it.
    fn remove_state(&mut self, state: StateId) -> AutomatonResult<Vec<TransitionId>>;
}
