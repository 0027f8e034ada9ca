//! Ordered effect list
//!
//! The list a user builds: effect instances in display order with exactly
//! one pin marker splitting them into a *pinned* prefix (fixed icons) and a
//! *rest* suffix (a rotating icon list).
//!
//! ```text
//!   [ Might, Fury, Pin, Bleeding, Superspeed ]
//!     └─ pinned ──┘       └──── rest ────┘
//! ```
//!
//! The entry vector is private, and every editing operation returns a new
//! list, so the single-marker invariant holds by construction.

mod editor;

#[cfg(test)]
mod editor_tests;

pub use editor::{Selection, SelectionKey, ShiftDirection};

/// A catalog reference plus the two user-chosen modifiers packed into share tokens
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct EffectInstance {
    pub id: u32,
    /// 0..=127
    pub stacks: u8,
    /// 0..=15
    pub target: u8,
}

impl EffectInstance {
    pub fn new(id: u32) -> Self {
        Self {
            id,
            stacks: 0,
            target: 0,
        }
    }

    pub fn with_modifiers(id: u32, stacks: u8, target: u8) -> Self {
        Self { id, stacks, target }
    }
}

/// One slot of the list
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ListEntry {
    Pin,
    Effect(EffectInstance),
}

impl ListEntry {
    pub fn as_effect(&self) -> Option<&EffectInstance> {
        match self {
            Self::Pin => None,
            Self::Effect(effect) => Some(effect),
        }
    }

    pub fn is_pin(&self) -> bool {
        matches!(self, Self::Pin)
    }

    /// Key used to select this entry
    pub fn key(&self) -> SelectionKey {
        match self {
            Self::Pin => SelectionKey::Pin,
            Self::Effect(effect) => SelectionKey::Effect(effect.id),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct EffectList {
    entries: Vec<ListEntry>,
}

impl Default for EffectList {
    fn default() -> Self {
        Self::new()
    }
}

impl EffectList {
    /// A fresh list holding only the pin marker
    pub fn new() -> Self {
        Self {
            entries: vec![ListEntry::Pin],
        }
    }

    /// Build a list from effects in order, with the pin marker inserted at
    /// `pin_index` (clamped to the number of effects).
    pub fn from_effects(
        effects: impl IntoIterator<Item = EffectInstance>,
        pin_index: usize,
    ) -> Self {
        let mut entries: Vec<ListEntry> = effects.into_iter().map(ListEntry::Effect).collect();
        let pin_index = pin_index.min(entries.len());
        entries.insert(pin_index, ListEntry::Pin);
        Self { entries }
    }

    pub fn entries(&self) -> &[ListEntry] {
        &self.entries
    }

    /// Number of entries including the pin marker
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// True when the list holds nothing but the pin marker
    pub fn is_empty(&self) -> bool {
        self.entries.len() == 1
    }

    pub fn pin_index(&self) -> usize {
        self.entries.iter().position(ListEntry::is_pin).unwrap_or(0)
    }

    /// Every effect instance in order, pin marker skipped
    pub fn effects(&self) -> impl Iterator<Item = &EffectInstance> {
        self.entries.iter().filter_map(ListEntry::as_effect)
    }

    /// Effects before the pin marker
    pub fn pinned(&self) -> impl Iterator<Item = &EffectInstance> {
        self.entries.iter().map_while(ListEntry::as_effect)
    }

    /// Effects after the pin marker
    pub fn rest(&self) -> impl Iterator<Item = &EffectInstance> {
        self.entries
            .iter()
            .skip_while(|entry| !entry.is_pin())
            .filter_map(ListEntry::as_effect)
    }

    pub fn contains_effect(&self, id: u32) -> bool {
        self.effects().any(|effect| effect.id == id)
    }

    /// Index of the first entry matching a selection key
    pub fn position_of(&self, key: SelectionKey) -> Option<usize> {
        self.entries.iter().position(|entry| entry.key() == key)
    }
}
