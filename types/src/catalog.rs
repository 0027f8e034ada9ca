//! Effect catalog records
//!
//! These mirror the JSON files produced by the data import step
//! (`effects.json`, `professions.json`, `specializations.json`).

use std::fmt;

use serde::{Deserialize, Deserializer, Serialize};

// ═══════════════════════════════════════════════════════════════════════════
// Effect classification
// ═══════════════════════════════════════════════════════════════════════════

/// Broad classification of an effect, used for grouping and display names
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EffectType {
    Boon,
    Condition,
    Common,
    Trait,
    Skill,
    Item,
}

impl EffectType {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Boon => "Boon",
            Self::Condition => "Condition",
            Self::Common => "Common",
            Self::Trait => "Trait",
            Self::Skill => "Skill",
            Self::Item => "Item",
        }
    }
}

impl fmt::Display for EffectType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// How repeated applications of an effect combine
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Stacking {
    /// Each application adds a stack (up to `maximum`)
    Intensity,
    /// Applications extend the remaining duration
    #[default]
    Duration,
}

// ═══════════════════════════════════════════════════════════════════════════
// Effect Definitions
// ═══════════════════════════════════════════════════════════════════════════

/// Alternate skill that applies the same effect from a different slot
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct EffectVariant {
    #[serde(default)]
    pub slot: Option<String>,
    #[serde(default)]
    pub weapon_type: Option<String>,
}

/// Immutable catalog entry describing one trackable effect
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EffectDefinition {
    /// Game effect ID (1..2^18, 0 is reserved). The import step writes `null`
    /// for effects it could not resolve; those read as 0.
    #[serde(default, deserialize_with = "null_as_default")]
    pub id: u32,

    /// Display name
    pub name: String,

    /// Icon URL or asset path
    #[serde(default, deserialize_with = "null_as_default")]
    pub icon: String,

    #[serde(rename = "type")]
    pub effect_type: EffectType,

    #[serde(default)]
    pub stacking: Stacking,

    /// Maximum stack count for intensity-stacking effects
    #[serde(default)]
    pub maximum: Option<u32>,

    /// Owning specialization (traits and specialization skills)
    #[serde(default)]
    pub specialization: Option<u32>,

    /// Professions able to use this skill, in catalog order
    #[serde(default, deserialize_with = "null_as_default")]
    pub professions: Vec<String>,

    /// Item subtype such as `Sigil` or `Relic`
    #[serde(default)]
    pub subtype: Option<String>,

    /// Other game IDs that should trigger the same display
    #[serde(default, rename = "variantIds", deserialize_with = "null_as_default")]
    pub variant_ids: Vec<u32>,

    // ─── Source provenance (skills) ─────────────────────────────────────────
    #[serde(default)]
    pub slot: Option<String>,

    #[serde(default)]
    pub weapon_type: Option<String>,

    #[serde(default, rename = "_variants", deserialize_with = "null_as_default")]
    pub variants: Vec<EffectVariant>,

    #[serde(default, deserialize_with = "null_as_default")]
    pub description: String,
}

impl EffectDefinition {
    /// Name shown on generated layout elements, e.g. `"Boon: Might"`
    pub fn display_name(&self) -> String {
        format!("{}: {}", self.effect_type, self.name)
    }

    /// True if the stack count is worth highlighting (intensity stacking past 1)
    pub fn has_stack_threshold(&self) -> bool {
        self.stacking == Stacking::Intensity && self.maximum.is_some_and(|max| max > 1)
    }

    /// The primary ID followed by every variant ID
    pub fn trigger_ids(&self) -> impl Iterator<Item = u32> + '_ {
        std::iter::once(self.id).chain(self.variant_ids.iter().copied())
    }

    /// Short provenance description for list rows.
    ///
    /// Skills list the slots they come from, weapon slots named after the weapon
    /// (`Weapon_2` on an axe skill reads `"Skill (Axe 2)"`). Everything else is
    /// just the type name.
    pub fn source_label(&self) -> String {
        if self.effect_type != EffectType::Skill {
            return self.effect_type.to_string();
        }

        let mut slots: Vec<String> = Vec::new();
        let mut push = |slot: Option<&str>, weapon: Option<&str>| {
            let Some(slot) = slot else {
                return;
            };
            let label = slot_label(slot, weapon);
            if !slots.contains(&label) {
                slots.push(label);
            }
        };

        push(self.slot.as_deref(), self.weapon_type.as_deref());
        for variant in &self.variants {
            let slot = variant.slot.as_deref().or(self.slot.as_deref());
            let weapon = variant.weapon_type.as_deref().or(self.weapon_type.as_deref());
            push(slot, weapon);
        }

        if slots.is_empty() {
            self.effect_type.to_string()
        } else {
            format!("{} ({})", self.effect_type, slots.join(", "))
        }
    }
}

/// Explicit `null` reads the same as a missing field
fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

/// `Weapon_2` + `Axe` -> `Axe 2`, `Utility_1` -> `Utility 1`
fn slot_label(slot: &str, weapon: Option<&str>) -> String {
    let slot = match (slot.strip_prefix("Weapon_"), weapon) {
        (Some(rest), Some(weapon)) => format!("{weapon}_{rest}"),
        _ => slot.to_string(),
    };
    slot.replacen('_', " ", 1)
}

// ═══════════════════════════════════════════════════════════════════════════
// Professions
// ═══════════════════════════════════════════════════════════════════════════

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Profession {
    /// Profession key, e.g. `"Guardian"`
    pub id: String,
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Specialization {
    pub id: u32,
    pub name: String,
    /// Owning profession key
    pub profession: String,
    /// Elite specializations are listed after core ones
    #[serde(default)]
    pub elite: bool,
}
