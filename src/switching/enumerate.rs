//! Lazy enumeration of every switching sequence of a given length.

use super::sequence::SwitchingSequence;
use crate::core::{Automaton, AutomatonError, AutomatonResult, StateId, TransitionId};
use std::iter::FusedIterator;
use tracing::{trace, warn};

/// Direction in which walks are grown from the anchor state.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Direction {
    /// Walks start at the anchor and follow outgoing transitions.
    #[default]
    Forward,

    /// Walks end at the anchor and are grown through incoming transitions.
    Backward,
}

impl From<bool> for Direction {
    /// `true` is forward.
    fn from(forward: bool) -> Self {
        if forward {
            Self::Forward
        } else {
            Self::Backward
        }
    }
}

/// Candidates for one depth of the search and the next one to try.
#[derive(Clone, Debug)]
struct Frame {
    candidates: Vec<TransitionId>,
    next: usize,
}

/// Iterator over all switching sequences of a fixed length.
///
/// The search is a depth-first pre-order over the walk tree rooted at the
/// anchor; at every depth the transitions are tried in the automaton's
/// adjacency order. Only the current branch is kept between calls to
/// `next`, so dropping the iterator early abandons the rest of the tree.
#[derive(Clone, Debug)]
pub struct Switchings<'a, A> {
    automaton: &'a A,
    anchor: StateId,
    length: usize,
    direction: Direction,
    frames: Vec<Frame>,
    /// Chosen transitions, anchor side first, each with the state it reaches.
    path: Vec<(TransitionId, StateId)>,
    trivial: Option<SwitchingSequence>,
}

/// Enumerates every switching sequence of exactly `length` transitions
/// starting at `anchor` (forward) or ending at `anchor` (backward).
///
/// Backward sequences are still presented in chronological order: the last
/// transition of each one enters `anchor`. Length zero yields the single
/// empty sequence; a state without applicable transitions yields nothing.
/// Fails with `UnknownState` if `anchor` is not a live state.
///
/// # Example
///
/// ```rust
/// use hybrid_automata::core::{GraphAutomaton, StateId};
/// use hybrid_automata::switching::{enumerate, Direction};
///
/// let mut a = GraphAutomaton::with_states(2);
/// let (q1, q2) = (StateId::new(1), StateId::new(2));
/// a.add_transition(q1, q1, 1).unwrap();
/// a.add_transition(q2, q2, 1).unwrap();
/// a.add_transition(q1, q2, 2).unwrap();
/// a.add_transition(q2, q1, 3).unwrap();
///
/// let walks: Vec<_> = enumerate(&a, 2, q1, Direction::Forward).unwrap().collect();
/// assert_eq!(walks.len(), 4);
///
/// // Stop after the first result without exploring the rest of the tree.
/// let first = enumerate(&a, 30, q1, Direction::Forward).unwrap().next();
/// assert_eq!(first.map(|s| s.len()), Some(30));
/// ```
pub fn enumerate<A: Automaton>(
    automaton: &A,
    length: usize,
    anchor: StateId,
    direction: Direction,
) -> AutomatonResult<Switchings<'_, A>> {
    if !automaton.has_state(anchor) {
        return Err(AutomatonError::UnknownState { state: anchor });
    }
    trace!(anchor = %anchor, length, ?direction, "Enumerating switchings");

    let mut switchings = Switchings {
        automaton,
        anchor,
        length,
        direction,
        frames: Vec::with_capacity(length),
        path: Vec::with_capacity(length),
        trivial: None,
    };

    if length == 0 {
        switchings.trivial = Some(SwitchingSequence::empty(anchor));
    } else {
        let candidates = switchings.candidates(anchor)?;
        switchings.frames.push(Frame {
            candidates,
            next: 0,
        });
    }
    Ok(switchings)
}

impl<'a, A: Automaton> Switchings<'a, A> {
    pub fn anchor(&self) -> StateId {
        self.anchor
    }

    pub fn length(&self) -> usize {
        self.length
    }

    pub fn direction(&self) -> Direction {
        self.direction
    }

    fn candidates(&self, state: StateId) -> AutomatonResult<Vec<TransitionId>> {
        Ok(match self.direction {
            Direction::Forward => self.automaton.out_transitions(state)?.collect(),
            Direction::Backward => self.automaton.in_transitions(state)?.collect(),
        })
    }

    /// State on the far side of `transition` when walking away from the anchor.
    fn step(&self, transition: TransitionId) -> AutomatonResult<StateId> {
        match self.direction {
            Direction::Forward => self.automaton.target(transition),
            Direction::Backward => self.automaton.source(transition),
        }
    }

    fn emit(&self) -> SwitchingSequence {
        let chosen = self.path.iter().map(|(t, _)| *t);
        match self.direction {
            Direction::Forward => SwitchingSequence::new(self.anchor, chosen.collect()),
            Direction::Backward => {
                let start = self.path.last().map_or(self.anchor, |(_, reached)| *reached);
                SwitchingSequence::new(start, chosen.rev().collect())
            }
        }
    }
}

impl<'a, A: Automaton> Iterator for Switchings<'a, A> {
    type Item = SwitchingSequence;

    fn next(&mut self) -> Option<Self::Item> {
        if self.length == 0 {
            return self.trivial.take();
        }

        // Invariant at the loop head: `path.len() + 1 == frames.len()`.
        loop {
            let frame = self.frames.last_mut()?;
            let Some(&transition) = frame.candidates.get(frame.next) else {
                self.frames.pop();
                self.path.pop();
                continue;
            };
            frame.next += 1;

            // A backend whose adjacency lists a transition it cannot resolve
            // loses that branch only.
            let reached = match self.step(transition) {
                Ok(reached) => reached,
                Err(error) => {
                    warn!(transition = %transition, %error, "Skipping unresolvable transition");
                    continue;
                }
            };
            self.path.push((transition, reached));

            if self.path.len() == self.length {
                let sequence = self.emit();
                self.path.pop();
                return Some(sequence);
            }

            let candidates = self.candidates(reached).unwrap_or_else(|error| {
                warn!(state = %reached, %error, "Reached state has no adjacency");
                Vec::new()
            });
            self.frames.push(Frame {
                candidates,
                next: 0,
            });
        }
    }
}

impl<'a, A: Automaton> FusedIterator for Switchings<'a, A> {}
