//! Shared fixtures for unit tests

use totem_types::{EffectDefinition, EffectType, Profession, Specialization, Stacking};

use crate::catalog::Catalog;

pub fn effect(id: u32, name: &str, effect_type: EffectType) -> EffectDefinition {
    EffectDefinition {
        id,
        name: name.to_string(),
        icon: format!("https://render.example/{id}.png"),
        effect_type,
        stacking: Stacking::Duration,
        maximum: None,
        specialization: None,
        professions: vec![],
        subtype: None,
        variant_ids: vec![],
        slot: None,
        weapon_type: None,
        variants: vec![],
        description: String::new(),
    }
}

pub fn boon(id: u32, name: &str) -> EffectDefinition {
    effect(id, name, EffectType::Boon)
}

fn intensity(mut def: EffectDefinition, maximum: u32) -> EffectDefinition {
    def.stacking = Stacking::Intensity;
    def.maximum = Some(maximum);
    def
}

fn profession(id: &str) -> Profession {
    Profession {
        id: id.to_string(),
        name: id.to_string(),
    }
}

fn specialization(id: u32, name: &str, profession: &str, elite: bool) -> Specialization {
    Specialization {
        id,
        name: name.to_string(),
        profession: profession.to_string(),
        elite,
    }
}

/// Small catalog covering every grouping rule
pub fn fixture_catalog() -> Catalog {
    let mut might = intensity(boon(740, "Might"), 25);
    might.variant_ids = vec![7400, 7401];

    let mut virtue = effect(30000, "Inspiring Virtue", EffectType::Trait);
    virtue.specialization = Some(46);

    let mut symbol = intensity(effect(31000, "Symbolic Avenger", EffectType::Skill), 5);
    symbol.specialization = Some(42);
    symbol.professions = vec!["Guardian".to_string()];

    let mut banner = effect(32000, "Banner of Strength", EffectType::Skill);
    banner.professions = vec!["Warrior".to_string(), "Guardian".to_string()];
    banner.slot = Some("Utility".to_string());

    let mut orphan_trait = effect(33000, "Lost Trait", EffectType::Trait);
    orphan_trait.specialization = Some(999);

    let mut sigil = effect(34000, "Sigil of Strength", EffectType::Item);
    sigil.subtype = Some("Sigil".to_string());

    let mut relic = effect(35000, "Relic of Fireworks", EffectType::Item);
    relic.subtype = Some("Relic".to_string());

    let mut rune = effect(36000, "Rune of the Pack", EffectType::Item);
    rune.subtype = Some("Rune".to_string());

    let loose_item = effect(37000, "Loose Item", EffectType::Item);

    Catalog::new(
        vec![
            might,
            boon(725, "Fury"),
            intensity(boon(1122, "Stability"), 25),
            intensity(effect(736, "Bleeding", EffectType::Condition), 1500),
            effect(5974, "Superspeed", EffectType::Common),
            virtue,
            symbol,
            banner,
            orphan_trait,
            sigil,
            relic,
            rune,
            loose_item,
        ],
        vec![profession("Guardian"), profession("Warrior")],
        vec![
            specialization(42, "Zeal", "Guardian", false),
            specialization(27, "Dragonhunter", "Guardian", true),
            specialization(46, "Virtues", "Guardian", false),
            specialization(4, "Strength", "Warrior", false),
        ],
    )
}
