//! Catalog grouping for the effect library
//!
//! Partitions catalog entries into the groups shown in the selection UI:
//! one group per profession followed by its specializations, then the fixed
//! boon / condition / common groups, then one group per item subtype.
//! Effects that fit no group are left out of every group but stay valid
//! list members.

use hashbrown::HashMap;
use totem_types::{EffectDefinition, EffectType};

use super::Catalog;

/// Item subtypes with their own group: (subtype, group id, label)
const ITEM_GROUPS: &[(&str, &str, &str)] = &[
    ("Sigil", "sigils", "Sigils"),
    ("Relic", "relics", "Relics"),
];

/// Filter value matching every ownerless group
pub const FILTER_COMMON: &str = "common";
/// Filter value matching item groups
pub const FILTER_ITEMS: &str = "items";

/// Who a group belongs to, for filtering
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GroupOwner {
    /// Shared groups (boons, conditions, common)
    None,
    Profession(String),
    Items,
}

impl GroupOwner {
    /// The filter value that selects this owner
    pub fn filter_key(&self) -> Option<&str> {
        match self {
            Self::None => None,
            Self::Profession(id) => Some(id),
            Self::Items => Some(FILTER_ITEMS),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EffectGroup {
    /// Lookup key, e.g. `profession:Guardian`, `specialization:42`, `items:Sigil`
    pub key: String,
    /// Stable element ID
    pub id: String,
    pub label: String,
    pub owner: GroupOwner,
    /// Member effect IDs in catalog order
    pub effects: Vec<u32>,
}

impl EffectGroup {
    fn new(key: String, id: String, label: &str, owner: GroupOwner) -> Self {
        Self {
            key,
            id,
            label: label.to_string(),
            owner,
            effects: Vec::new(),
        }
    }

    /// Whether the library hides this group under `filter`.
    ///
    /// An empty filter shows everything, `"common"` shows only ownerless
    /// groups, anything else shows that owner's groups plus the ownerless ones.
    pub fn is_hidden(&self, filter: &str) -> bool {
        let owner = self.owner.filter_key();
        match filter {
            "" => false,
            FILTER_COMMON => owner.is_some(),
            _ => owner.is_some_and(|owner| owner != filter),
        }
    }

    /// Member definitions whose names match a search query
    pub fn matching<'a>(
        &'a self,
        catalog: &'a Catalog,
        query: &'a str,
    ) -> impl Iterator<Item = &'a EffectDefinition> + 'a {
        self.effects
            .iter()
            .filter_map(|id| catalog.get(*id))
            .filter(move |def| matches_search(&def.name, query))
    }
}

/// Case-insensitive substring search; queries under two characters match everything
pub fn matches_search(name: &str, query: &str) -> bool {
    if query.chars().count() < 2 {
        return true;
    }
    name.to_lowercase().contains(&query.to_lowercase())
}

/// One entry of the library filter dropdown
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilterOption {
    pub value: String,
    pub label: String,
}

/// Ordered set of groups built from a catalog
#[derive(Debug, Clone, Default)]
pub struct EffectGroups {
    groups: Vec<EffectGroup>,
    /// Group key -> position in `groups`
    index: HashMap<String, usize>,
}

impl EffectGroups {
    pub fn build(catalog: &Catalog) -> Self {
        let mut groups = Self::default();

        for profession in catalog.professions() {
            let key = format!("profession:{}", profession.id);
            groups.insert(EffectGroup::new(
                key.clone(),
                key,
                &profession.name,
                GroupOwner::Profession(profession.id.clone()),
            ));

            for spec in catalog.specializations_of(&profession.id) {
                let key = format!("specialization:{}", spec.id);
                groups.insert(EffectGroup::new(
                    key.clone(),
                    key,
                    &spec.name,
                    GroupOwner::Profession(profession.id.clone()),
                ));
            }
        }

        for (key, label) in [("boon", "Boons"), ("condition", "Conditions"), ("common", "Common")] {
            groups.insert(EffectGroup::new(
                key.to_string(),
                key.to_string(),
                label,
                GroupOwner::None,
            ));
        }

        for (subtype, id, label) in ITEM_GROUPS {
            groups.insert(EffectGroup::new(
                format!("items:{subtype}"),
                id.to_string(),
                label,
                GroupOwner::Items,
            ));
        }

        let mut ungrouped = 0usize;
        for def in catalog.effects() {
            let slot = group_key(def).and_then(|key| groups.index.get(&key).copied());
            match slot {
                Some(idx) => groups.groups[idx].effects.push(def.id),
                None => ungrouped += 1,
            }
        }
        if ungrouped > 0 {
            tracing::debug!(ungrouped, "Effects without a library group");
        }

        groups
    }

    fn insert(&mut self, group: EffectGroup) {
        if self.index.contains_key(&group.key) {
            return;
        }
        self.index.insert(group.key.clone(), self.groups.len());
        self.groups.push(group);
    }

    pub fn get(&self, key: &str) -> Option<&EffectGroup> {
        self.index.get(key).map(|&idx| &self.groups[idx])
    }

    pub fn iter(&self) -> impl Iterator<Item = &EffectGroup> {
        self.groups.iter()
    }

    /// Groups shown under a filter value
    pub fn visible<'a>(&'a self, filter: &'a str) -> impl Iterator<Item = &'a EffectGroup> + 'a {
        self.groups.iter().filter(move |group| !group.is_hidden(filter))
    }

    pub fn len(&self) -> usize {
        self.groups.len()
    }

    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }

    /// Filter dropdown entries: all, each profession, common, items
    pub fn filter_options(catalog: &Catalog) -> Vec<FilterOption> {
        let option = |value: &str, label: &str| FilterOption {
            value: value.to_string(),
            label: label.to_string(),
        };

        let mut options = vec![option("", "All")];
        options.extend(catalog.professions().iter().map(|p| option(&p.id, &p.name)));
        options.push(option(FILTER_COMMON, "Common"));
        options.push(option(FILTER_ITEMS, "Items"));
        options
    }
}

/// Group key an effect belongs to, if any
fn group_key(def: &EffectDefinition) -> Option<String> {
    match def.effect_type {
        EffectType::Boon => Some("boon".to_string()),
        EffectType::Condition => Some("condition".to_string()),
        EffectType::Common => Some("common".to_string()),
        EffectType::Item => def.subtype.as_ref().map(|subtype| format!("items:{subtype}")),
        EffectType::Trait => def.specialization.map(|spec| format!("specialization:{spec}")),
        EffectType::Skill => match (def.specialization, def.professions.first()) {
            (Some(spec), _) => Some(format!("specialization:{spec}")),
            (None, Some(profession)) => Some(format!("profession:{profession}")),
            (None, None) => None,
        },
    }
}
