//! Graph-backed automaton: a labeled multigraph with per-state adjacency.

use super::automaton::{Automaton, Resizable};
use super::config::{AutomatonConfig, RemovalPolicy};
use super::error::{AutomatonError, AutomatonResult};
use super::ids::{Label, StateId, Symbol, TransitionId};
use super::iter::{Incident, States, Transitions};
use super::labels::LabelStore;
use std::collections::BTreeSet;
use tracing::{debug, trace};

/// Adjacency of one state slot. Dead slots keep `alive == false` forever.
///
/// Transition ids are append-only, so the ordered sets below iterate in
/// insertion order of the surviving transitions.
#[derive(Clone, Debug)]
pub(crate) struct StateRecord {
    pub(crate) alive: bool,
    in_edges: BTreeSet<TransitionId>,
    out_edges: BTreeSet<TransitionId>,
}

impl StateRecord {
    fn new() -> Self {
        Self {
            alive: true,
            in_edges: BTreeSet::new(),
            out_edges: BTreeSet::new(),
        }
    }

    fn incident(&self) -> BTreeSet<TransitionId> {
        self.in_edges.union(&self.out_edges).copied().collect()
    }
}

/// Hybrid automaton backed by a labeled directed multigraph.
///
/// States are numbered `1, 2, …` in creation order and are never renumbered;
/// a removed state leaves a tombstone. Several transitions may join the same
/// pair of states, with equal or different symbols.
///
/// # Example
///
/// A two-state automaton with a self-loop labeled 1 on each state, a
/// transition from 1 to 2 labeled 2 and one from 2 to 1 labeled 3:
///
/// ```rust
/// use hybrid_automata::core::{GraphAutomaton, StateId};
///
/// let mut a = GraphAutomaton::with_states(2);
/// let (q1, q2) = (StateId::new(1), StateId::new(2));
///
/// a.add_transition(q1, q1, 1).unwrap();
/// a.add_transition(q2, q2, 1).unwrap();
/// let t = a.add_transition(q1, q2, 2).unwrap();
/// a.add_transition(q2, q1, 3).unwrap();
///
/// assert_eq!(a.nstates(), 2);
/// assert_eq!(a.ntransitions(), 4);
/// assert_eq!(a.out_transitions(q1).unwrap().count(), 2);
/// assert_eq!(a.event(t).unwrap(), 2);
/// ```
#[derive(Clone, Debug, Default)]
pub struct GraphAutomaton {
    config: AutomatonConfig,
    states: Vec<StateRecord>,
    live_states: usize,
    labels: LabelStore,
}

impl GraphAutomaton {
    /// Creates an automaton without states.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an automaton with states `1..=n` and no transitions.
    pub fn with_states(n: usize) -> Self {
        let mut automaton = Self::new();
        for _ in 0..n {
            automaton.add_state();
        }
        automaton
    }

    /// Creates an empty automaton with the given settings.
    pub fn with_config(config: AutomatonConfig) -> Self {
        Self {
            config,
            ..Self::default()
        }
    }

    pub fn config(&self) -> &AutomatonConfig {
        &self.config
    }

    /// The underlying id ↔ label store.
    pub fn labels(&self) -> &LabelStore {
        &self.labels
    }

    pub fn nstates(&self) -> usize {
        self.live_states
    }

    pub fn ntransitions(&self) -> usize {
        self.labels.len()
    }

    pub fn has_state(&self, state: StateId) -> bool {
        self.record(state).is_ok()
    }

    pub fn states(&self) -> States<'_> {
        States::new(&self.states, self.live_states)
    }

    pub fn transitions(&self) -> Transitions<'_> {
        Transitions::new(self.labels.slots(), self.labels.len())
    }

    /// Appends a new state with no transitions.
    pub fn add_state(&mut self) -> StateId {
        self.states.push(StateRecord::new());
        self.live_states += 1;
        let state = StateId::from_slot(self.states.len() - 1);
        trace!(state = %state, "Added state");
        state
    }

    /// Removes `state` according to the configured [`RemovalPolicy`].
    ///
    /// Under `Cascade` every incident transition is removed first and the
    /// removed ids are returned in ascending order. Under `Reject` the call
    /// fails with `StateHasTransitions` while any incident transition exists.
    /// The state id is never handed out again.
    pub fn remove_state(&mut self, state: StateId) -> AutomatonResult<Vec<TransitionId>> {
        let incident = self.record(state)?.incident();

        if self.config.removal == RemovalPolicy::Reject && !incident.is_empty() {
            return Err(AutomatonError::StateHasTransitions {
                state,
                count: incident.len(),
            });
        }

        let mut removed = Vec::with_capacity(incident.len());
        for transition in incident {
            self.detach(transition)?;
            removed.push(transition);
        }

        let record = self.record_mut(state)?;
        record.alive = false;
        self.live_states -= 1;

        debug!(state = %state, cascaded = removed.len(), "Removed state");
        Ok(removed)
    }

    /// Adds a transition from `source` to `target` labeled `symbol`.
    ///
    /// Duplicated triples are allowed; each call creates a distinct transition.
    pub fn add_transition(
        &mut self,
        source: StateId,
        target: StateId,
        symbol: Symbol,
    ) -> AutomatonResult<TransitionId> {
        self.record(source)?;
        self.record(target)?;

        let id = self.labels.insert(Label::new(source, target, symbol));
        self.record_mut(source)?.out_edges.insert(id);
        self.record_mut(target)?.in_edges.insert(id);

        trace!(
            transition = %id,
            source = %source,
            target = %target,
            symbol,
            "Added transition"
        );
        Ok(id)
    }

    pub fn has_transition(&self, transition: TransitionId) -> bool {
        self.labels.contains(transition)
    }

    pub fn has_transition_between(&self, source: StateId, target: StateId) -> bool {
        self.labels.between(source, target).next().is_some()
    }

    /// Live transitions carrying exactly `(source, target, symbol)`, oldest first.
    pub fn find_transitions(
        &self,
        source: StateId,
        target: StateId,
        symbol: Symbol,
    ) -> &[TransitionId] {
        self.labels.find(&Label::new(source, target, symbol))
    }

    /// Removes `transition` and returns its label.
    pub fn remove_transition(&mut self, transition: TransitionId) -> AutomatonResult<Label> {
        let label = self.detach(transition)?;
        debug!(transition = %transition, label = %label, "Removed transition");
        Ok(label)
    }

    /// Removes the oldest live transition labeled `(source, target, symbol)`.
    pub fn remove_transition_by_label(
        &mut self,
        source: StateId,
        target: StateId,
        symbol: Symbol,
    ) -> AutomatonResult<TransitionId> {
        let label = Label::new(source, target, symbol);
        let transition = self
            .labels
            .find(&label)
            .first()
            .copied()
            .ok_or(AutomatonError::UnknownTransition {
                transition: label.into(),
            })?;
        self.remove_transition(transition)?;
        Ok(transition)
    }

    pub fn label(&self, transition: TransitionId) -> AutomatonResult<Label> {
        self.labels.resolve(transition)
    }

    pub fn source(&self, transition: TransitionId) -> AutomatonResult<StateId> {
        Ok(self.label(transition)?.source)
    }

    pub fn target(&self, transition: TransitionId) -> AutomatonResult<StateId> {
        Ok(self.label(transition)?.target)
    }

    pub fn event(&self, transition: TransitionId) -> AutomatonResult<Symbol> {
        Ok(self.label(transition)?.symbol)
    }

    /// Alias of [`event`](Self::event).
    pub fn symbol(&self, transition: TransitionId) -> AutomatonResult<Symbol> {
        self.event(transition)
    }

    /// Transitions entering `state`, in insertion order.
    pub fn in_transitions(&self, state: StateId) -> AutomatonResult<Incident<'_>> {
        Ok(Incident::new(self.record(state)?.in_edges.iter()))
    }

    /// Transitions leaving `state`, in insertion order.
    pub fn out_transitions(&self, state: StateId) -> AutomatonResult<Incident<'_>> {
        Ok(Incident::new(self.record(state)?.out_edges.iter()))
    }

    pub fn in_degree(&self, state: StateId) -> AutomatonResult<usize> {
        Ok(self.record(state)?.in_edges.len())
    }

    pub fn out_degree(&self, state: StateId) -> AutomatonResult<usize> {
        Ok(self.record(state)?.out_edges.len())
    }

    fn detach(&mut self, transition: TransitionId) -> AutomatonResult<Label> {
        let label = self.labels.remove(transition)?;
        if let Ok(record) = self.record_mut(label.source) {
            record.out_edges.remove(&transition);
        }
        if let Ok(record) = self.record_mut(label.target) {
            record.in_edges.remove(&transition);
        }
        Ok(label)
    }

    fn record(&self, state: StateId) -> AutomatonResult<&StateRecord> {
        state
            .slot()
            .and_then(|slot| self.states.get(slot))
            .filter(|record| record.alive)
            .ok_or(AutomatonError::UnknownState { state })
    }

    fn record_mut(&mut self, state: StateId) -> AutomatonResult<&mut StateRecord> {
        state
            .slot()
            .and_then(|slot| self.states.get_mut(slot))
            .filter(|record| record.alive)
            .ok_or(AutomatonError::UnknownState { state })
    }
}

impl Automaton for GraphAutomaton {
    fn nstates(&self) -> usize {
        GraphAutomaton::nstates(self)
    }

    fn ntransitions(&self) -> usize {
        GraphAutomaton::ntransitions(self)
    }

    fn states(&self) -> impl Iterator<Item = StateId> + Clone + '_ {
        GraphAutomaton::states(self)
    }

    fn transitions(&self) -> impl Iterator<Item = TransitionId> + Clone + '_ {
        GraphAutomaton::transitions(self)
    }

    fn has_state(&self, state: StateId) -> bool {
        GraphAutomaton::has_state(self, state)
    }

    fn add_transition(
        &mut self,
        source: StateId,
        target: StateId,
        symbol: Symbol,
    ) -> AutomatonResult<TransitionId> {
        GraphAutomaton::add_transition(self, source, target, symbol)
    }

    fn has_transition(&self, transition: TransitionId) -> bool {
        GraphAutomaton::has_transition(self, transition)
    }

    fn has_transition_between(&self, source: StateId, target: StateId) -> bool {
        GraphAutomaton::has_transition_between(self, source, target)
    }

    fn remove_transition(&mut self, transition: TransitionId) -> AutomatonResult<Label> {
        GraphAutomaton::remove_transition(self, transition)
    }

    fn label(&self, transition: TransitionId) -> AutomatonResult<Label> {
        GraphAutomaton::label(self, transition)
    }

    fn in_transitions(
        &self,
        state: StateId,
    ) -> AutomatonResult<impl Iterator<Item = TransitionId> + Clone + '_> {
        GraphAutomaton::in_transitions(self, state)
    }

    fn out_transitions(
        &self,
        state: StateId,
    ) -> AutomatonResult<impl Iterator<Item = TransitionId> + Clone + '_> {
        GraphAutomaton::out_transitions(self, state)
    }
}

impl Resizable for GraphAutomaton {
    fn add_state(&mut self) -> StateId {
        GraphAutomaton::add_state(self)
    }

    fn remove_state(&mut self, state: StateId) -> AutomatonResult<Vec<TransitionId>> {
        GraphAutomaton::remove_state(self, state)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn q(raw: u32) -> StateId {
        StateId::new(raw)
    }

    /// Self-loops labeled 1 on both states, 1 -[2]-> 2 and 2 -[3]-> 1.
    fn two_state() -> (GraphAutomaton, [TransitionId; 4]) {
        let mut a = GraphAutomaton::with_states(2);
        let t11 = a.add_transition(q(1), q(1), 1).unwrap();
        let t22 = a.add_transition(q(2), q(2), 1).unwrap();
        let t12 = a.add_transition(q(1), q(2), 2).unwrap();
        let t21 = a.add_transition(q(2), q(1), 3).unwrap();
        (a, [t11, t22, t12, t21])
    }

    #[test]
    fn with_states_numbers_from_one() {
        let a = GraphAutomaton::with_states(3);
        let states: Vec<_> = a.states().collect();
        assert_eq!(states, vec![q(1), q(2), q(3)]);
        assert_eq!(a.nstates(), 3);
        assert_eq!(a.ntransitions(), 0);
    }

    #[test]
    fn added_transition_resolves_to_its_label() {
        let mut a = GraphAutomaton::with_states(2);
        let t = a.add_transition(q(1), q(2), 7).unwrap();

        assert_eq!(a.source(t), Ok(q(1)));
        assert_eq!(a.target(t), Ok(q(2)));
        assert_eq!(a.event(t), Ok(7));
        assert!(a.has_transition(t));
        assert!(a.has_transition_between(q(1), q(2)));
        assert!(!a.has_transition_between(q(2), q(1)));
    }

    #[test]
    fn add_transition_requires_live_states() {
        let mut a = GraphAutomaton::with_states(1);

        assert_eq!(
            a.add_transition(q(1), q(2), 1),
            Err(AutomatonError::UnknownState { state: q(2) })
        );
        assert_eq!(
            a.add_transition(q(0), q(1), 1),
            Err(AutomatonError::UnknownState { state: q(0) })
        );
        assert_eq!(a.ntransitions(), 0);
        assert_eq!(a.labels().capacity(), 0);
    }

    #[test]
    fn adjacency_follows_insertion_order() {
        let (a, [t11, t22, t12, t21]) = two_state();

        let out1: Vec<_> = a.out_transitions(q(1)).unwrap().collect();
        let in1: Vec<_> = a.in_transitions(q(1)).unwrap().collect();
        let out2: Vec<_> = a.out_transitions(q(2)).unwrap().collect();
        let in2: Vec<_> = a.in_transitions(q(2)).unwrap().collect();

        assert_eq!(out1, vec![t11, t12]);
        assert_eq!(in1, vec![t11, t21]);
        assert_eq!(out2, vec![t22, t21]);
        assert_eq!(in2, vec![t22, t12]);
    }

    #[test]
    fn parallel_edges_are_distinct() {
        let mut a = GraphAutomaton::with_states(2);
        let first = a.add_transition(q(1), q(2), 4).unwrap();
        let second = a.add_transition(q(1), q(2), 4).unwrap();

        assert_ne!(first, second);
        assert_eq!(a.find_transitions(q(1), q(2), 4), &[first, second]);
        assert_eq!(a.out_degree(q(1)), Ok(2));
    }

    #[test]
    fn remove_transition_round_trip() {
        let (mut a, _) = two_state();
        let before = a.ntransitions();

        let t = a.add_transition(q(1), q(2), 9).unwrap();
        let label = a.remove_transition(t).unwrap();

        assert_eq!(label, Label::new(q(1), q(2), 9));
        assert_eq!(a.ntransitions(), before);
        assert!(!a.has_transition(t));
        // The earlier 1 -[2]-> 2 edge still connects the pair.
        assert!(a.has_transition_between(q(1), q(2)));
    }

    #[test]
    fn removing_last_parallel_edge_disconnects_pair() {
        let mut a = GraphAutomaton::with_states(2);
        let t = a.add_transition(q(1), q(2), 1).unwrap();
        let u = a.add_transition(q(1), q(2), 2).unwrap();

        a.remove_transition(t).unwrap();
        assert!(a.has_transition_between(q(1), q(2)));
        a.remove_transition(u).unwrap();
        assert!(!a.has_transition_between(q(1), q(2)));
        assert_eq!(a.out_transitions(q(1)).unwrap().count(), 0);
        assert_eq!(a.in_transitions(q(2)).unwrap().count(), 0);
    }

    #[test]
    fn dead_transitions_are_rejected() {
        let (mut a, [t11, ..]) = two_state();
        a.remove_transition(t11).unwrap();

        let unknown = AutomatonError::UnknownTransition {
            transition: t11.into(),
        };
        assert_eq!(a.remove_transition(t11), Err(unknown.clone()));
        assert_eq!(a.source(t11), Err(unknown));
        assert!(a.event(t11).is_err());
        assert!(a.target(TransitionId::new(42)).is_err());
    }

    #[test]
    fn remove_by_label_takes_oldest_match() {
        let mut a = GraphAutomaton::with_states(2);
        let first = a.add_transition(q(1), q(2), 5).unwrap();
        let second = a.add_transition(q(1), q(2), 5).unwrap();

        assert_eq!(a.remove_transition_by_label(q(1), q(2), 5), Ok(first));
        assert_eq!(a.find_transitions(q(1), q(2), 5), &[second]);
        assert_eq!(a.remove_transition_by_label(q(1), q(2), 5), Ok(second));
        assert_eq!(
            a.remove_transition_by_label(q(1), q(2), 5),
            Err(AutomatonError::UnknownTransition {
                transition: Label::new(q(1), q(2), 5).into()
            })
        );
    }

    #[test]
    fn remove_state_cascades_incident_transitions() {
        let (mut a, [t11, t22, t12, t21]) = two_state();

        let removed = a.remove_state(q(1)).unwrap();

        assert_eq!(removed, vec![t11, t12, t21]);
        assert_eq!(a.nstates(), 1);
        assert_eq!(a.ntransitions(), 1);
        assert!(a.has_transition(t22));
        assert_eq!(a.out_transitions(q(2)).unwrap().collect::<Vec<_>>(), vec![t22]);
        assert_eq!(a.in_transitions(q(2)).unwrap().collect::<Vec<_>>(), vec![t22]);
    }

    #[test]
    fn removed_state_ids_are_not_reused() {
        let mut a = GraphAutomaton::with_states(2);
        a.remove_state(q(1)).unwrap();
        let fresh = a.add_state();

        assert_eq!(fresh, q(3));
        assert_eq!(a.states().collect::<Vec<_>>(), vec![q(2), q(3)]);
        assert_eq!(
            a.out_transitions(q(1)).map(|it| it.count()),
            Err(AutomatonError::UnknownState { state: q(1) })
        );
        assert_eq!(
            a.remove_state(q(1)),
            Err(AutomatonError::UnknownState { state: q(1) })
        );
    }

    #[test]
    fn reject_policy_keeps_graph_untouched() {
        let config = AutomatonConfig::builder()
            .removal(RemovalPolicy::Reject)
            .build();
        let mut a = GraphAutomaton::with_config(config);
        let q1 = a.add_state();
        let q2 = a.add_state();
        let t = a.add_transition(q1, q2, 1).unwrap();

        assert_eq!(
            a.remove_state(q1),
            Err(AutomatonError::StateHasTransitions {
                state: q1,
                count: 1
            })
        );
        assert_eq!(a.nstates(), 2);
        assert!(a.has_transition(t));

        a.remove_transition(t).unwrap();
        assert_eq!(a.remove_state(q1), Ok(vec![]));
        assert_eq!(a.nstates(), 1);
    }

    #[test]
    fn self_loop_counts_once_in_cascade() {
        let mut a = GraphAutomaton::with_states(1);
        let t = a.add_transition(q(1), q(1), 1).unwrap();

        assert_eq!(a.remove_state(q(1)), Ok(vec![t]));
        assert_eq!(a.ntransitions(), 0);
        assert_eq!(a.nstates(), 0);
    }

    #[test]
    fn iterators_are_restartable_and_sized() {
        let (a, ids) = two_state();
        let states = a.states();
        assert_eq!(states.len(), 2);
        assert_eq!(states.clone().count(), states.count());

        let transitions = a.transitions();
        assert_eq!(transitions.len(), 4);
        assert_eq!(transitions.collect::<Vec<_>>(), ids.to_vec());

        let labeled: Vec<_> = a.transitions().labeled().map(|(_, l)| l.symbol).collect();
        assert_eq!(labeled, vec![1, 1, 2, 3]);
    }

    #[test]
    fn transitions_skip_tombstones() {
        let (mut a, [t11, t22, t12, t21]) = two_state();
        a.remove_transition(t22).unwrap();

        let live: Vec<_> = a.transitions().collect();
        assert_eq!(live, vec![t11, t12, t21]);
        assert_eq!(a.transitions().len(), 3);
    }
}
