//! Per-index side tables kept in step with an automaton's id space.

/// Values keyed by the slot of a state or transition id.
///
/// Slots of removed ids stay empty; `len` counts the filled ones so it can
/// be compared with `nstates()` / `ntransitions()`.
#[derive(Clone, Debug)]
pub(crate) struct SideTable<T> {
    slots: Vec<Option<T>>,
    len: usize,
}

impl<T> SideTable<T> {
    /// Places `values[i]` at the `i`-th slot yielded by `live`.
    ///
    /// Extra values or extra slots are ignored; callers compare lengths first.
    pub(crate) fn from_live(values: Vec<T>, live: impl Iterator<Item = usize>) -> Self {
        let mut table = Self {
            slots: Vec::new(),
            len: 0,
        };
        for (slot, value) in live.zip(values) {
            table.insert(slot, value);
        }
        table
    }

    pub(crate) fn len(&self) -> usize {
        self.len
    }

    pub(crate) fn get(&self, slot: usize) -> Option<&T> {
        self.slots.get(slot).and_then(Option::as_ref)
    }

    pub(crate) fn get_mut(&mut self, slot: usize) -> Option<&mut T> {
        self.slots.get_mut(slot).and_then(Option::as_mut)
    }

    pub(crate) fn contains(&self, slot: usize) -> bool {
        self.get(slot).is_some()
    }

    /// Stores `value` at `slot`, returning the value it replaced.
    pub(crate) fn insert(&mut self, slot: usize, value: T) -> Option<T> {
        if self.slots.len() <= slot {
            self.slots.resize_with(slot + 1, || None);
        }
        let previous = self.slots[slot].replace(value);
        if previous.is_none() {
            self.len += 1;
        }
        previous
    }

    pub(crate) fn take(&mut self, slot: usize) -> Option<T> {
        let value = self.slots.get_mut(slot).and_then(Option::take);
        if value.is_some() {
            self.len -= 1;
        }
        value
    }
}
