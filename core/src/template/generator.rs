use totem_types::{Direction, EffectDefinition};

use super::assets::{
    CapMetrics, END_CAP, PINNED_FRAME_BLOCK, PINNED_FRAME_FILE, PINNED_FRAME_INDEX,
    PINNED_ITEM_SIZE, PINNED_MAX_BLOCK, PINNED_MAX_FILE, PINNED_MAX_INDEX, REST_CAP,
    REST_LIST_OFFSET_INLINE, START_CAP, TemplateSet, asset_path,
};
use super::document::{Element, ListIcon, Pack, Threshold};
use crate::catalog::Catalog;
use crate::list::{EffectList, ListEntry};

/// Builds overlay packs from effect lists.
///
/// Holds only shared read-only inputs; every call to [`generate`](Self::generate)
/// clones fresh parts out of the template set, so packs never share state.
#[derive(Debug, Clone, Copy)]
pub struct TemplateGenerator<'a> {
    catalog: &'a Catalog,
    templates: &'a TemplateSet,
}

impl<'a> TemplateGenerator<'a> {
    pub fn new(catalog: &'a Catalog, templates: &'a TemplateSet) -> Self {
        Self { catalog, templates }
    }

    pub fn generate(&self, list: &EffectList, direction: Direction, name: &str) -> Pack {
        let t = self.templates;
        let dir = direction.asset_dir();

        let start = self.cap(&t.start, START_CAP, direction);
        let mut end_icon = self.cap(&t.end_icon, END_CAP, direction);
        let mut rest_icon = self.cap(&t.rest_icon, REST_CAP, direction);

        let mut pinned_items = Vec::new();
        let mut unpinned_items = Vec::new();
        let mut pinned = true;
        let mut pin_end_index = 0;

        for (index, entry) in list.entries().iter().enumerate() {
            let effect = match entry {
                ListEntry::Pin => {
                    pinned = false;
                    pin_end_index = index;
                    continue;
                }
                ListEntry::Effect(effect) => effect,
            };

            let Some(def) = self.catalog.get(effect.id) else {
                tracing::debug!(id = effect.id, "Skipping unknown effect in layout");
                continue;
            };

            if pinned {
                pinned_items.push(self.pinned_item(def, index, direction));
            } else {
                unpinned_items.push(self.unpinned_item(def));
            }
        }

        let has_rest = !unpinned_items.is_empty();
        end_icon.enabled = !has_rest;
        rest_icon.enabled = has_rest;

        let mut rest_list = t.rest_list.clone();
        rest_list.pos = direction.place(REST_LIST_OFFSET_INLINE, 0);
        rest_list.set_list(direction.label(), unpinned_items);

        // Pinned items are centered on their slot, so the end group starts
        // half an item before the pin's slot.
        let mut end_group = t.end_group.clone();
        end_group.pos = direction.place(
            pin_end_index as i32 * PINNED_ITEM_SIZE - PINNED_ITEM_SIZE / 2,
            0,
        );
        end_group.extend_members([end_icon, rest_icon, rest_list]);

        let mut pinned_group = t.pinned_group.clone();
        pinned_group.extend_members(pinned_items);

        let mut root = t.root.clone();
        root.extend_members([start, pinned_group, end_group]);

        tracing::trace!(dir, pin_end_index, "Generated totem layout");

        let mut pack = t.pack.clone();
        pack.name = name.to_string();
        pack.elements = vec![root];
        pack
    }

    fn cap(&self, template: &Element, metrics: CapMetrics, direction: Direction) -> Element {
        let mut cap = template.clone();
        cap.set_icon_file(asset_path(direction.asset_dir(), metrics.file));
        cap.pos = direction.place(metrics.offset_inline, 0);
        cap.set_size(direction.extent(metrics.size_inline, metrics.size_block));
        cap
    }

    fn pinned_item(&self, def: &EffectDefinition, index: usize, direction: Direction) -> Element {
        let dir = direction.asset_dir();
        let mut part = self.templates.pinned_item.clone();

        part.name = def.display_name();
        part.trigger_mut().source.ids.extend(def.trigger_ids());
        part.pos = direction.place(index as i32 * PINNED_ITEM_SIZE, 0);

        if let Some(members) = part.members_mut() {
            if let Some(max) = members.get_mut(PINNED_MAX_INDEX) {
                max.set_icon_file(asset_path(dir, PINNED_MAX_FILE));
                max.set_size(direction.extent(PINNED_ITEM_SIZE, PINNED_MAX_BLOCK));
                if def.has_stack_threshold() {
                    let maximum = def.maximum.unwrap_or_default();
                    max.trigger_mut().threshold = Some(Threshold::above(maximum));
                }
            }
            if let Some(frame) = members.get_mut(PINNED_FRAME_INDEX) {
                frame.set_icon_file(asset_path(dir, PINNED_FRAME_FILE));
                frame.set_size(direction.extent(PINNED_ITEM_SIZE, PINNED_FRAME_BLOCK));
            }
        }

        part
    }

    fn unpinned_item(&self, def: &EffectDefinition) -> ListIcon {
        let mut part = self.templates.unpinned_item.clone();
        part.name = def.display_name();
        part.trigger.source.ids.extend(def.trigger_ids());
        part
    }
}
