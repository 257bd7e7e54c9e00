//! Row selection tracked by record id.

use std::collections::HashSet;

use crate::model::RecordId;

/// Set of selected record ids.
///
/// Ids stay selected when the rows move between pages or disappear from the
/// filtered view. Iteration follows insertion order, which is the order
/// handed to the bulk-delete callback.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Selection {
    order: Vec<RecordId>,
    members: HashSet<RecordId>,
}

impl Selection {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_selected(&self, id: &RecordId) -> bool {
        self.members.contains(id)
    }

    pub fn len(&self) -> usize {
        self.order.len()
    }

    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    /// Selected ids in the order they were selected.
    pub fn ids(&self) -> Vec<RecordId> {
        self.order.clone()
    }

    /// Flip membership of `id`. Returns whether it is selected afterwards.
    pub fn toggle(&mut self, id: RecordId) -> bool {
        if self.members.remove(&id) {
            self.order.retain(|selected| selected != &id);
            false
        } else {
            self.members.insert(id.clone());
            self.order.push(id);
            true
        }
    }

    /// Replace the whole selection with `ids`. Duplicates are kept once.
    pub fn replace(&mut self, ids: impl IntoIterator<Item = RecordId>) {
        self.clear();
        for id in ids {
            if self.members.insert(id.clone()) {
                self.order.push(id);
            }
        }
    }

    /// Whether every id in `ids` is selected. False for an empty slice.
    pub fn contains_all(&self, ids: &[RecordId]) -> bool {
        !ids.is_empty() && ids.iter().all(|id| self.members.contains(id))
    }

    /// Deselect everything, returning what was selected.
    pub fn clear(&mut self) -> Vec<RecordId> {
        self.members.clear();
        std::mem::take(&mut self.order)
    }
}
