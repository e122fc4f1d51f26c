//! Hybrid system: an automaton plus the data attached to its states and
//! transitions.

use super::mode::Mode;
use super::reset::ResetMap;
use super::table::SideTable;
use crate::core::{
    Automaton, AutomatonError, AutomatonResult, Label, Resizable, SizeMismatch, StateId, Symbol,
    Table, TransitionId,
};
use crate::switching::{enumerate, Direction, Switching, Switchings};
use std::collections::BTreeMap;
use stillwater::validation::Validation;
use stillwater::NonEmptyVec;
use tracing::debug;

/// Side data released by [`HybridSystem::remove_transition`].
#[derive(Clone, Debug, PartialEq)]
pub struct RemovedTransition<R, W> {
    pub transition: TransitionId,
    pub label: Label,
    pub resetmap: R,
    pub switching: W,
}

/// Side data released by [`HybridSystem::remove_state`], including every
/// transition removed with the state.
#[derive(Clone, Debug, PartialEq)]
pub struct RemovedState<M, R, W> {
    pub state: StateId,
    pub mode: M,
    pub transitions: Vec<RemovedTransition<R, W>>,
}

/// A hybrid system modelled as a hybrid automaton.
///
/// - `automaton`: discrete states and labeled transitions, of type `A`
/// - `modes`: one `M` per state (dynamics and domain of the state)
/// - `resetmaps`: one `R` per transition (reset map, guard and assignment)
/// - `switchings`: one `W` per transition, usually [`Switching`]
/// - `ext`: typed payload for extensions, `()` by default
///
/// Every table stays in bijection with the automaton's ids: structural
/// changes go through the wrappers below, which update the tables in the
/// same call. The automaton itself is only lent out read-only.
///
/// # Example
///
/// ```rust
/// use hybrid_automata::core::{GraphAutomaton, StateId};
/// use hybrid_automata::switching::Switching;
/// use hybrid_automata::system::HybridSystem;
///
/// let mut a = GraphAutomaton::with_states(2);
/// let (on, off) = (StateId::new(1), StateId::new(2));
/// let t = a.add_transition(on, off, 1).unwrap();
///
/// let hs = HybridSystem::new(
///     a,
///     vec!["heating", "cooling"],
///     vec!["x >= 22"],
///     vec![Switching::Autonomous],
/// )
/// .unwrap();
///
/// assert_eq!(hs.mode(on), Ok(&"heating"));
/// assert_eq!(hs.target_mode(t), Ok(&"cooling"));
/// assert_eq!(hs.resetmap(t), Ok(&"x >= 22"));
/// ```
#[derive(Clone, Debug)]
pub struct HybridSystem<A, M, R, W = Switching, X = ()> {
    automaton: A,
    modes: SideTable<M>,
    resetmaps: SideTable<R>,
    switchings: SideTable<W>,
    ext: X,
}

impl<A: Automaton, M, R, W> HybridSystem<A, M, R, W> {
    /// Binds `automaton` to its per-state and per-transition data.
    ///
    /// `modes` are attached to the live states in ascending order, `resetmaps`
    /// and `switchings` to the live transitions in ascending order. Fails with
    /// `SizeMismatch` listing every table whose length is wrong.
    pub fn new(
        automaton: A,
        modes: Vec<M>,
        resetmaps: Vec<R>,
        switchings: Vec<W>,
    ) -> AutomatonResult<Self> {
        validate_sizes(&automaton, modes.len(), resetmaps.len(), switchings.len())?;

        let state_slots: Vec<usize> = automaton.states().filter_map(StateId::slot).collect();
        let transition_slots: Vec<usize> = automaton
            .transitions()
            .filter_map(TransitionId::slot)
            .collect();

        Ok(Self {
            modes: SideTable::from_live(modes, state_slots.into_iter()),
            resetmaps: SideTable::from_live(resetmaps, transition_slots.iter().copied()),
            switchings: SideTable::from_live(switchings, transition_slots.into_iter()),
            automaton,
            ext: (),
        })
    }
}

impl<A: Automaton, M, R, W, X> HybridSystem<A, M, R, W, X> {
    /// Replaces the extension payload.
    pub fn with_ext<Y>(self, ext: Y) -> HybridSystem<A, M, R, W, Y> {
        HybridSystem {
            automaton: self.automaton,
            modes: self.modes,
            resetmaps: self.resetmaps,
            switchings: self.switchings,
            ext,
        }
    }

    pub fn ext(&self) -> &X {
        &self.ext
    }

    pub fn ext_mut(&mut self) -> &mut X {
        &mut self.ext
    }

    pub fn automaton(&self) -> &A {
        &self.automaton
    }

    /// Number of modes, i.e. of live states.
    pub fn nmodes(&self) -> usize {
        self.automaton.nstates()
    }

    /// Mode of `state`.
    pub fn mode(&self, state: StateId) -> AutomatonResult<&M> {
        self.state_slot(state)
            .and_then(|slot| self.modes.get(slot))
            .ok_or(AutomatonError::UnknownState { state })
    }

    pub fn mode_mut(&mut self, state: StateId) -> AutomatonResult<&mut M> {
        let slot = self.state_slot(state);
        slot.and_then(|slot| self.modes.get_mut(slot))
            .ok_or(AutomatonError::UnknownState { state })
    }

    /// Every live state with its mode, ascending.
    pub fn modes(&self) -> impl Iterator<Item = (StateId, &M)> + '_ {
        self.automaton
            .states()
            .filter_map(|state| Some((state, self.modes.get(state.slot()?)?)))
    }

    /// Mode entered by `transition`.
    pub fn target_mode(&self, transition: TransitionId) -> AutomatonResult<&M> {
        self.mode(self.automaton.target(transition)?)
    }

    /// Mode left by `transition`.
    pub fn source_mode(&self, transition: TransitionId) -> AutomatonResult<&M> {
        self.mode(self.automaton.source(transition)?)
    }

    /// Reset map of `transition`.
    pub fn resetmap(&self, transition: TransitionId) -> AutomatonResult<&R> {
        self.transition_slot(transition)
            .and_then(|slot| self.resetmaps.get(slot))
            .ok_or(AutomatonError::UnknownTransition {
                transition: transition.into(),
            })
    }

    pub fn resetmap_mut(&mut self, transition: TransitionId) -> AutomatonResult<&mut R> {
        let slot = self.transition_slot(transition);
        slot.and_then(|slot| self.resetmaps.get_mut(slot))
            .ok_or(AutomatonError::UnknownTransition {
                transition: transition.into(),
            })
    }

    /// Switching nature of `transition`.
    pub fn switching(&self, transition: TransitionId) -> AutomatonResult<&W> {
        self.transition_slot(transition)
            .and_then(|slot| self.switchings.get(slot))
            .ok_or(AutomatonError::UnknownTransition {
                transition: transition.into(),
            })
    }

    pub fn switching_mut(&mut self, transition: TransitionId) -> AutomatonResult<&mut W> {
        let slot = self.transition_slot(transition);
        slot.and_then(|slot| self.switchings.get_mut(slot))
            .ok_or(AutomatonError::UnknownTransition {
                transition: transition.into(),
            })
    }

    /// Dimension of the continuous state space at `state`.
    pub fn statedim(&self, state: StateId) -> AutomatonResult<usize>
    where
        M: Mode,
    {
        Ok(self.mode(state)?.statedim())
    }

    /// Allowed continuous states at `state`.
    pub fn stateset(&self, state: StateId) -> AutomatonResult<&M::StateSet>
    where
        M: Mode,
    {
        Ok(self.mode(state)?.stateset())
    }

    /// Dimension of the input space at `state`.
    pub fn inputdim(&self, state: StateId) -> AutomatonResult<usize>
    where
        M: Mode,
    {
        Ok(self.mode(state)?.inputdim())
    }

    /// Allowed inputs at `state`.
    pub fn inputset(&self, state: StateId) -> AutomatonResult<&M::InputSet>
    where
        M: Mode,
    {
        Ok(self.mode(state)?.inputset())
    }

    /// Guard of `transition`, read through its reset map.
    pub fn guard(&self, transition: TransitionId) -> AutomatonResult<&R::Guard>
    where
        R: ResetMap,
    {
        Ok(self.resetmap(transition)?.guard())
    }

    /// Assignment of `transition`, read through its reset map.
    pub fn assignment(&self, transition: TransitionId) -> AutomatonResult<&R::Assignment>
    where
        R: ResetMap,
    {
        Ok(self.resetmap(transition)?.assignment())
    }

    /// Every switching sequence of `length` transitions starting (forward) or
    /// ending (backward) at `anchor`. See [`enumerate`].
    pub fn switchings(
        &self,
        length: usize,
        anchor: StateId,
        direction: Direction,
    ) -> AutomatonResult<Switchings<'_, A>> {
        enumerate(&self.automaton, length, anchor, direction)
    }

    /// Adds a transition together with its reset map and switching nature.
    pub fn add_transition(
        &mut self,
        source: StateId,
        target: StateId,
        symbol: Symbol,
        resetmap: R,
        switching: W,
    ) -> AutomatonResult<TransitionId> {
        let transition = self.automaton.add_transition(source, target, symbol)?;
        if let Some(slot) = transition.slot() {
            self.resetmaps.insert(slot, resetmap);
            self.switchings.insert(slot, switching);
        }
        debug!(
            transition = %transition,
            ntransitions = self.automaton.ntransitions(),
            "Attached transition"
        );
        Ok(transition)
    }

    /// Removes a transition and hands back its side data.
    pub fn remove_transition(
        &mut self,
        transition: TransitionId,
    ) -> AutomatonResult<RemovedTransition<R, W>> {
        let slot = self
            .transition_slot(transition)
            .filter(|&slot| self.resetmaps.contains(slot) && self.switchings.contains(slot))
            .ok_or(AutomatonError::UnknownTransition {
                transition: transition.into(),
            })?;

        let label = self.automaton.remove_transition(transition)?;
        let released = self.release_transition(slot, transition, label)?;
        debug!(
            transition = %transition,
            ntransitions = self.automaton.ntransitions(),
            "Detached transition"
        );
        Ok(released)
    }

    /// Re-checks that every table matches the automaton's id space.
    pub fn check_consistency(&self) -> AutomatonResult<()> {
        validate_sizes(
            &self.automaton,
            self.modes.len(),
            self.resetmaps.len(),
            self.switchings.len(),
        )
    }

    fn release_transition(
        &mut self,
        slot: usize,
        transition: TransitionId,
        label: Label,
    ) -> AutomatonResult<RemovedTransition<R, W>> {
        match (self.resetmaps.take(slot), self.switchings.take(slot)) {
            (Some(resetmap), Some(switching)) => Ok(RemovedTransition {
                transition,
                label,
                resetmap,
                switching,
            }),
            _ => Err(AutomatonError::UnknownTransition {
                transition: transition.into(),
            }),
        }
    }

    fn state_slot(&self, state: StateId) -> Option<usize> {
        state.slot().filter(|_| self.automaton.has_state(state))
    }

    fn transition_slot(&self, transition: TransitionId) -> Option<usize> {
        transition
            .slot()
            .filter(|_| self.automaton.has_transition(transition))
    }
}

impl<A: Resizable, M, R, W, X> HybridSystem<A, M, R, W, X> {
    /// Adds a state carrying `mode`.
    pub fn add_state(&mut self, mode: M) -> StateId {
        let state = self.automaton.add_state();
        if let Some(slot) = state.slot() {
            self.modes.insert(slot, mode);
        }
        debug!(state = %state, nstates = self.automaton.nstates(), "Attached state");
        state
    }

    /// Removes a state, with the side data of every transition removed along
    /// with it. Fails atomically if the automaton refuses the removal.
    pub fn remove_state(&mut self, state: StateId) -> AutomatonResult<RemovedState<M, R, W>> {
        let slot = self
            .state_slot(state)
            .filter(|&slot| self.modes.contains(slot))
            .ok_or(AutomatonError::UnknownState { state })?;

        let mut labels = BTreeMap::new();
        for transition in self
            .automaton
            .out_transitions(state)?
            .chain(self.automaton.in_transitions(state)?)
        {
            labels.insert(transition, self.automaton.label(transition)?);
        }

        let removed = self.automaton.remove_state(state)?;

        let mut transitions = Vec::with_capacity(removed.len());
        for transition in removed {
            let (Some(label), Some(slot)) = (labels.get(&transition), transition.slot()) else {
                continue;
            };
            transitions.push(self.release_transition(slot, transition, *label)?);
        }
        let mode = self
            .modes
            .take(slot)
            .ok_or(AutomatonError::UnknownState { state })?;

        debug!(
            state = %state,
            cascaded = transitions.len(),
            nstates = self.automaton.nstates(),
            "Detached state"
        );
        Ok(RemovedState {
            state,
            mode,
            transitions,
        })
    }
}

fn size_check(
    table: Table,
    expected: usize,
    found: usize,
) -> Validation<(), NonEmptyVec<SizeMismatch>> {
    if expected == found {
        Validation::success(())
    } else {
        Validation::fail(SizeMismatch {
            table,
            expected,
            found,
        })
    }
}

/// Accumulates every mismatching table instead of stopping at the first.
fn validate_sizes<A: Automaton>(
    automaton: &A,
    modes: usize,
    resetmaps: usize,
    switchings: usize,
) -> AutomatonResult<()> {
    let checks = vec![
        size_check(Table::Modes, automaton.nstates(), modes),
        size_check(Table::ResetMaps, automaton.ntransitions(), resetmaps),
        size_check(Table::Switchings, automaton.ntransitions(), switchings),
    ];

    match Validation::all_vec(checks).map(|_| ()) {
        Validation::Success(()) => Ok(()),
        Validation::Failure(errors) => Err(AutomatonError::SizeMismatch {
            mismatches: errors.iter().cloned().collect(),
        }),
    }
}
