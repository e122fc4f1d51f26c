//! Bidirectional store between transition ids and their labels.

use super::error::{AutomatonError, AutomatonResult};
use super::ids::{Label, StateId, Symbol, TransitionId};
use std::collections::BTreeMap;

/// Maps transition ids to `(source, target, symbol)` triples and back.
///
/// Ids are append-only: removal tombstones the slot and the id is never
/// handed out again, so side tables keyed by transition id never observe a
/// recycled id.
#[derive(Clone, Debug, Default)]
pub struct LabelStore {
    slots: Vec<Option<Label>>,
    index: BTreeMap<Label, Vec<TransitionId>>,
    live: usize,
}

impl LabelStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Stores `label` under a fresh id.
    ///
    /// The store does not know which states are live; callers check the
    /// endpoints before inserting.
    pub fn insert(&mut self, label: Label) -> TransitionId {
        let id = TransitionId::from_slot(self.slots.len());
        self.slots.push(Some(label));
        self.index.entry(label).or_default().push(id);
        self.live += 1;
        id
    }

    /// Tombstones `id` and returns the label it carried.
    pub fn remove(&mut self, id: TransitionId) -> AutomatonResult<Label> {
        let slot = id
            .slot()
            .and_then(|slot| self.slots.get_mut(slot))
            .ok_or(AutomatonError::UnknownTransition {
                transition: id.into(),
            })?;
        let label = slot
            .take()
            .ok_or(AutomatonError::UnknownTransition {
                transition: id.into(),
            })?;

        if let Some(ids) = self.index.get_mut(&label) {
            ids.retain(|other| *other != id);
            if ids.is_empty() {
                self.index.remove(&label);
            }
        }
        self.live -= 1;
        Ok(label)
    }

    /// Label carried by a live transition.
    pub fn resolve(&self, id: TransitionId) -> AutomatonResult<Label> {
        self.get(id)
            .ok_or(AutomatonError::UnknownTransition {
                transition: id.into(),
            })
    }

    pub fn get(&self, id: TransitionId) -> Option<Label> {
        id.slot()
            .and_then(|slot| self.slots.get(slot))
            .copied()
            .flatten()
    }

    pub fn contains(&self, id: TransitionId) -> bool {
        self.get(id).is_some()
    }

    /// Live ids carrying exactly `label`, oldest first.
    pub fn find(&self, label: &Label) -> &[TransitionId] {
        self.index.get(label).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Live ids from `source` to `target` with any symbol, grouped by symbol.
    pub fn between(
        &self,
        source: StateId,
        target: StateId,
    ) -> impl Iterator<Item = TransitionId> + '_ {
        let low = Label::new(source, target, Symbol::MIN);
        let high = Label::new(source, target, Symbol::MAX);
        self.index
            .range(low..=high)
            .flat_map(|(_, ids)| ids.iter().copied())
    }

    /// Number of live transitions.
    pub fn len(&self) -> usize {
        self.live
    }

    pub fn is_empty(&self) -> bool {
        self.live == 0
    }

    /// Number of ids ever handed out, live or not.
    pub fn capacity(&self) -> usize {
        self.slots.len()
    }

    pub(crate) fn slots(&self) -> &[Option<Label>] {
        &self.slots
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn label(q: u32, r: u32, s: Symbol) -> Label {
        Label::new(StateId::new(q), StateId::new(r), s)
    }

    #[test]
    fn insert_assigns_increasing_ids() {
        let mut store = LabelStore::new();
        let a = store.insert(label(1, 2, 1));
        let b = store.insert(label(1, 2, 1));

        assert_eq!(a, TransitionId::new(1));
        assert_eq!(b, TransitionId::new(2));
        assert_eq!(store.len(), 2);
        assert_eq!(store.find(&label(1, 2, 1)), &[a, b]);
    }

    #[test]
    fn removed_ids_are_never_reused() {
        let mut store = LabelStore::new();
        let a = store.insert(label(1, 1, 1));
        store.remove(a).unwrap();
        let b = store.insert(label(1, 1, 1));

        assert_ne!(a, b);
        assert!(!store.contains(a));
        assert_eq!(store.capacity(), 2);
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn resolve_fails_for_dead_and_unknown_ids() {
        let mut store = LabelStore::new();
        let a = store.insert(label(1, 2, 3));
        assert_eq!(store.resolve(a), Ok(label(1, 2, 3)));

        store.remove(a).unwrap();
        assert_eq!(
            store.resolve(a),
            Err(AutomatonError::UnknownTransition {
                transition: a.into()
            })
        );
        assert!(store.resolve(TransitionId::new(0)).is_err());
        assert!(store.resolve(TransitionId::new(99)).is_err());
    }

    #[test]
    fn double_remove_fails() {
        let mut store = LabelStore::new();
        let a = store.insert(label(1, 2, 3));
        store.remove(a).unwrap();

        assert!(store.remove(a).is_err());
        assert_eq!(store.len(), 0);
    }

    #[test]
    fn between_ignores_symbols_and_other_pairs() {
        let mut store = LabelStore::new();
        let a = store.insert(label(1, 2, 7));
        let _ = store.insert(label(2, 1, 7));
        let c = store.insert(label(1, 2, 1));
        let _ = store.insert(label(1, 3, 1));

        let found: Vec<_> = store.between(StateId::new(1), StateId::new(2)).collect();
        assert_eq!(found, vec![c, a]);

        store.remove(c).unwrap();
        store.remove(a).unwrap();
        assert_eq!(store.between(StateId::new(1), StateId::new(2)).count(), 0);
    }
}
