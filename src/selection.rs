//! Rows marked for a bulk action.

use crate::record::{Record, RecordId, Rows};
use std::collections::BTreeSet;
use std::sync::Arc;

/// Set of selected record identifiers.
///
/// Callers keep it a subset of the filtered list with [`Selection::retain`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Selection {
    ids: BTreeSet<RecordId>,
}

impl Selection {
    pub fn new() -> Self {
        Self::default()
    }

    /// Flip membership of `id`. Returns true when it is now selected.
    pub fn toggle(&mut self, id: RecordId) -> bool {
        if self.ids.remove(&id) {
            false
        } else {
            self.ids.insert(id);
            true
        }
    }

    pub fn select_all<R: Record>(&mut self, rows: &[Arc<R>]) {
        self.ids.extend(rows.iter().map(|r| r.id()));
    }

    pub fn contains(&self, id: &RecordId) -> bool {
        self.ids.contains(id)
    }

    /// Drop every identifier not present in `filtered`.
    pub fn retain<R: Record>(&mut self, filtered: &[Arc<R>]) {
        if self.ids.is_empty() {
            return;
        }
        let visible: BTreeSet<RecordId> = filtered.iter().map(|r| r.id()).collect();
        self.ids.retain(|id| visible.contains(id));
    }

    /// Selected rows in list order.
    pub fn records<R: Record>(&self, filtered: &[Arc<R>]) -> Rows<R> {
        filtered
            .iter()
            .filter(|r| self.ids.contains(&r.id()))
            .cloned()
            .collect()
    }

    pub fn ids(&self) -> impl Iterator<Item = &RecordId> {
        self.ids.iter()
    }

    pub fn len(&self) -> usize {
        self.ids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }

    pub fn clear(&mut self) {
        self.ids.clear();
    }
}
