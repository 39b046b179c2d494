use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use crate::slot::SlotDateTime;

/// Chosen candidate times, unique and kept in chronological order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SelectionSet {
    entries: BTreeSet<SlotDateTime>,
}

impl SelectionSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add `slot` if absent, remove it if present.
    ///
    /// Returns `true` when `slot` is selected after the call.
    pub fn toggle(&mut self, slot: SlotDateTime) -> bool {
        if self.entries.remove(&slot) {
            log::debug!("Deselected {}", slot);
            false
        } else {
            self.entries.insert(slot);
            log::debug!("Selected {}", slot);
            true
        }
    }

    pub fn reset(&mut self) {
        log::debug!("Clearing {} selected slots", self.entries.len());
        self.entries.clear();
    }

    pub fn is_selected(&self, slot: &SlotDateTime) -> bool {
        self.entries.contains(slot)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Entries in ascending chronological order.
    pub fn iter(&self) -> impl Iterator<Item = &SlotDateTime> {
        self.entries.iter()
    }
}

impl<'a> IntoIterator for &'a SelectionSet {
    type Item = &'a SlotDateTime;
    type IntoIter = std::collections::btree_set::Iter<'a, SlotDateTime>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}
