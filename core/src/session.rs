//! Editing session
//!
//! Owns the list being edited along with the selection, layout direction
//! and pack name. Every change goes through the list editor and keeps the
//! previous list as an undo snapshot. Share links and layouts are derived on
//! demand and never stored.

use std::collections::VecDeque;

use totem_types::Direction;

use crate::catalog::Catalog;
use crate::list::{EffectList, Selection, SelectionKey, ShiftDirection};
use crate::share::ShareState;
use crate::template::{Pack, TemplateGenerator, TemplateSet};

const HISTORY_LIMIT: usize = 64;

#[derive(Debug, Clone)]
pub struct ForgeSession {
    list: EffectList,
    selection: Selection,
    direction: Direction,
    name: String,
    history: VecDeque<EffectList>,
}

impl ForgeSession {
    pub fn new(direction: Direction, name: impl Into<String>) -> Self {
        Self::with_list(EffectList::new(), direction, name.into())
    }

    /// Restore a session from link state
    pub fn from_share(state: &ShareState, catalog: &Catalog) -> Self {
        Self::with_list(state.decode_list(catalog), state.direction, state.name.clone())
    }

    fn with_list(list: EffectList, direction: Direction, name: String) -> Self {
        Self {
            list,
            selection: Selection::new(),
            direction,
            name,
            history: VecDeque::new(),
        }
    }

    pub fn list(&self) -> &EffectList {
        &self.list
    }

    pub fn selection(&self) -> &Selection {
        &self.selection
    }

    pub fn direction(&self) -> Direction {
        self.direction
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn set_direction(&mut self, direction: Direction) {
        self.direction = direction;
    }

    pub fn set_name(&mut self, name: impl Into<String>) {
        self.name = name.into();
    }

    // --- List editing ---

    fn apply(&mut self, next: EffectList) {
        if next == self.list {
            return;
        }
        let previous = std::mem::replace(&mut self.list, next);
        self.history.push_back(previous);
        if self.history.len() > HISTORY_LIMIT {
            self.history.pop_front();
        }
    }

    /// Library click: add the effect, or remove it (and its selection) if present
    pub fn toggle_effect(&mut self, id: u32) {
        if self.list.contains_effect(id) {
            self.selection.deselect(SelectionKey::Effect(id));
        }
        let next = self.list.toggle_effect(id);
        self.apply(next);
    }

    pub fn move_item(&mut self, from: usize, to: usize) {
        let next = self.list.move_item(from, to);
        self.apply(next);
    }

    pub fn toggle_selected(&mut self, key: SelectionKey) {
        self.selection.toggle(key);
    }

    pub fn clear_selection(&mut self) {
        self.selection.clear();
    }

    pub fn shift_selected(&mut self, direction: ShiftDirection) {
        if self.selection.is_empty() {
            return;
        }
        let next = self.list.shift_selection(&self.selection, direction);
        self.apply(next);
    }

    pub fn delete_selected(&mut self) {
        if self.selection.is_empty() {
            return;
        }
        let next = self.list.delete_selection(&mut self.selection);
        self.apply(next);
    }

    /// Restore the previous list. Returns false when there is nothing to undo.
    pub fn undo(&mut self) -> bool {
        match self.history.pop_back() {
            Some(previous) => {
                self.list = previous;
                true
            }
            None => false,
        }
    }

    // --- Derived values ---

    pub fn share_state(&self, catalog: &Catalog) -> ShareState {
        ShareState::from_list(&self.list, self.direction, &self.name, catalog)
    }

    pub fn layout(&self, catalog: &Catalog, templates: &TemplateSet) -> Pack {
        TemplateGenerator::new(catalog, templates).generate(&self.list, self.direction, &self.name)
    }
}

impl Default for ForgeSession {
    fn default() -> Self {
        Self::new(Direction::default(), crate::share::DEFAULT_NAME)
    }
}
