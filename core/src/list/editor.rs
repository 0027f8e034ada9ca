//! List editing operations
//!
//! Every operation borrows the current list and returns a new one. None of
//! them can add or remove the pin marker, only move it.

use super::{EffectInstance, EffectList, ListEntry};

/// Identity of a selectable list entry
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SelectionKey {
    /// The pin marker's own pseudo-id
    Pin,
    Effect(u32),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShiftDirection {
    /// Towards index 0
    Up,
    Down,
}

/// Multi-selection over the list, in the order entries were selected
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Selection {
    keys: Vec<SelectionKey>,
}

impl Selection {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn select(&mut self, key: SelectionKey) {
        if !self.contains(key) {
            self.keys.push(key);
        }
    }

    pub fn deselect(&mut self, key: SelectionKey) {
        self.keys.retain(|k| *k != key);
    }

    pub fn toggle(&mut self, key: SelectionKey) {
        if self.contains(key) {
            self.deselect(key);
        } else {
            self.select(key);
        }
    }

    pub fn contains(&self, key: SelectionKey) -> bool {
        self.keys.contains(&key)
    }

    pub fn clear(&mut self) {
        self.keys.clear();
    }

    pub fn keys(&self) -> &[SelectionKey] {
        &self.keys
    }

    pub fn len(&self) -> usize {
        self.keys.len()
    }

    pub fn is_empty(&self) -> bool {
        self.keys.is_empty()
    }
}

impl FromIterator<SelectionKey> for Selection {
    fn from_iter<I: IntoIterator<Item = SelectionKey>>(iter: I) -> Self {
        let mut selection = Self::new();
        for key in iter {
            selection.select(key);
        }
        selection
    }
}

impl EffectList {
    /// Append `{id, stacks: 0, target: 0}` at the end
    pub fn insert_effect(&self, id: u32) -> Self {
        let mut entries = self.entries.clone();
        entries.push(ListEntry::Effect(EffectInstance::new(id)));
        Self { entries }
    }

    /// Remove the first instance of `id`
    pub fn remove_effect(&self, id: u32) -> Self {
        let mut entries = self.entries.clone();
        if let Some(idx) = self.position_of(SelectionKey::Effect(id)) {
            entries.remove(idx);
        }
        Self { entries }
    }

    /// Library click: remove `id` if present, otherwise append it
    pub fn toggle_effect(&self, id: u32) -> Self {
        if self.contains_effect(id) {
            self.remove_effect(id)
        } else {
            self.insert_effect(id)
        }
    }

    /// Relocate the entry at `from` to `to`.
    ///
    /// `to` is a drop position in the list as it was before the move, so a
    /// later target is corrected for the hole left behind:
    /// `[A, B, C, D]` moving 0 to 3 gives `[B, C, A, D]`.
    /// An out-of-range `from` leaves the list unchanged; `to` is clamped.
    pub fn move_item(&self, from: usize, to: usize) -> Self {
        if from >= self.entries.len() {
            tracing::debug!(from, len = self.entries.len(), "Move source out of range");
            return self.clone();
        }

        let mut entries = self.entries.clone();
        let entry = entries.remove(from);
        let to = if to > from { to - 1 } else { to };
        entries.insert(to.min(entries.len()), entry);
        Self { entries }
    }

    /// Move every selected entry one slot as a batch.
    ///
    /// Entries are visited nearest-the-boundary first. An entry moves only if
    /// its distance from the boundary exceeds its rank among the selected
    /// entries, so a selected run already packed against the boundary stays
    /// put and adjacent selected entries never cross each other.
    /// Keys not present in the list are ignored.
    pub fn shift_selection(&self, selection: &Selection, direction: ShiftDirection) -> Self {
        let mut locations: Vec<usize> = selection
            .keys()
            .iter()
            .filter_map(|key| self.position_of(*key))
            .collect();
        locations.sort_unstable();
        locations.dedup();

        let mut entries = self.entries.clone();
        let last = entries.len() - 1;

        match direction {
            ShiftDirection::Up => {
                for (rank, idx) in locations.into_iter().enumerate() {
                    if idx > rank {
                        entries.swap(idx, idx - 1);
                    }
                }
            }
            ShiftDirection::Down => {
                for (rank, idx) in locations.into_iter().rev().enumerate() {
                    if last - idx > rank {
                        entries.swap(idx, idx + 1);
                    }
                }
            }
        }

        Self { entries }
    }

    /// Remove every selected effect and clear the selection.
    /// The pin marker survives even when selected.
    pub fn delete_selection(&self, selection: &mut Selection) -> Self {
        let entries = self
            .entries
            .iter()
            .filter(|entry| entry.is_pin() || !selection.contains(entry.key()))
            .copied()
            .collect();
        selection.clear();
        Self { entries }
    }
}
