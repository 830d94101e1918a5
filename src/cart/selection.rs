//! Checkout Selection
//!
//! The subset of cart lines picked for checkout. The cart keeps this a subset
//! of its lines; on its own the selection is just a set of ids.

use rustc_hash::FxHashSet;

use crate::schedules::ScheduleUuid;

/// Set of schedule ids selected for checkout.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CheckoutSelection {
    selected: FxHashSet<ScheduleUuid>,
}

impl CheckoutSelection {
    /// An empty selection.
    pub fn new() -> Self {
        Self::default()
    }

    /// Flip `uuid` in or out of the selection. Returns whether it is now selected.
    pub fn toggle(&mut self, uuid: ScheduleUuid) -> bool {
        if self.selected.remove(&uuid) {
            false
        } else {
            self.selected.insert(uuid);
            true
        }
    }

    /// Add `uuid` to the selection.
    pub fn select(&mut self, uuid: ScheduleUuid) {
        self.selected.insert(uuid);
    }

    /// Remove `uuid` from the selection. Returns whether it was selected.
    pub fn deselect(&mut self, uuid: &ScheduleUuid) -> bool {
        self.selected.remove(uuid)
    }

    /// Replace the selection with `uuids`.
    pub fn select_all(&mut self, uuids: impl IntoIterator<Item = ScheduleUuid>) {
        self.selected.clear();
        self.selected.extend(uuids);
    }

    /// Empty the selection.
    pub fn deselect_all(&mut self) {
        self.selected.clear();
    }

    /// Whether `uuid` is selected.
    pub fn contains(&self, uuid: &ScheduleUuid) -> bool {
        self.selected.contains(uuid)
    }

    /// Drop every id for which `keep` returns false.
    pub fn retain(&mut self, keep: impl FnMut(&ScheduleUuid) -> bool) {
        self.selected.retain(keep);
    }

    /// Number of selected ids.
    pub fn len(&self) -> usize {
        self.selected.len()
    }

    /// Whether nothing is selected.
    pub fn is_empty(&self) -> bool {
        self.selected.is_empty()
    }

    /// Iterate over selected ids, in no particular order.
    pub fn iter(&self) -> impl Iterator<Item = &ScheduleUuid> {
        self.selected.iter()
    }
}
