//! Lazy iterators over the states and transitions of a graph automaton.
//!
//! All of them borrow the automaton, so it cannot be mutated while one is
//! alive. Cloning an iterator restarts it from its current position.

use super::graph::StateRecord;
use super::ids::{Label, StateId, TransitionId};
use std::collections::btree_set;
use std::iter::{Copied, Enumerate, FusedIterator};
use std::slice;

/// Live states of a [`GraphAutomaton`](super::GraphAutomaton), ascending.
#[derive(Clone, Debug)]
pub struct States<'a> {
    records: Enumerate<slice::Iter<'a, StateRecord>>,
    remaining: usize,
}

impl<'a> States<'a> {
    pub(crate) fn new(records: &'a [StateRecord], live: usize) -> Self {
        Self {
            records: records.iter().enumerate(),
            remaining: live,
        }
    }
}

impl Iterator for States<'_> {
    type Item = StateId;

    fn next(&mut self) -> Option<Self::Item> {
        let (slot, _) = self.records.by_ref().find(|(_, record)| record.alive)?;
        self.remaining -= 1;
        Some(StateId::from_slot(slot))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl ExactSizeIterator for States<'_> {}
impl FusedIterator for States<'_> {}

/// Live transitions of a [`GraphAutomaton`](super::GraphAutomaton), in id order.
#[derive(Clone, Debug)]
pub struct Transitions<'a> {
    slots: Enumerate<slice::Iter<'a, Option<Label>>>,
    remaining: usize,
}

impl<'a> Transitions<'a> {
    pub(crate) fn new(slots: &'a [Option<Label>], live: usize) -> Self {
        Self {
            slots: slots.iter().enumerate(),
            remaining: live,
        }
    }

    /// Pairs every transition with its label.
    pub fn labeled(self) -> impl Iterator<Item = (TransitionId, Label)> + 'a {
        self.slots.filter_map(|(slot, label)| {
            (*label).map(|label| (TransitionId::from_slot(slot), label))
        })
    }
}

impl Iterator for Transitions<'_> {
    type Item = TransitionId;

    fn next(&mut self) -> Option<Self::Item> {
        let (slot, _) = self.slots.by_ref().find(|(_, label)| label.is_some())?;
        self.remaining -= 1;
        Some(TransitionId::from_slot(slot))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl ExactSizeIterator for Transitions<'_> {}
impl FusedIterator for Transitions<'_> {}

/// Incoming or outgoing transitions of one state, in insertion order.
#[derive(Clone, Debug)]
pub struct Incident<'a> {
    inner: Copied<btree_set::Iter<'a, TransitionId>>,
}

impl<'a> Incident<'a> {
    pub(crate) fn new(ids: btree_set::Iter<'a, TransitionId>) -> Self {
        Self {
            inner: ids.copied(),
        }
    }
}

impl Iterator for Incident<'_> {
    type Item = TransitionId;

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl DoubleEndedIterator for Incident<'_> {
    fn next_back(&mut self) -> Option<Self::Item> {
        self.inner.next_back()
    }
}

impl ExactSizeIterator for Incident<'_> {}
impl FusedIterator for Incident<'_> {}
