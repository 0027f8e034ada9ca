use totem_core::catalog::EffectGroups;
use totem_core::share::ShareState;
use totem_core::{Catalog, EffectList, ListEntry, TemplateGenerator, TemplateSet};
use totem_types::Direction;

/// Print the share query string for a list
pub fn encode(
    list: &EffectList,
    direction: Direction,
    name: &str,
    catalog: &Catalog,
) -> Result<(), String> {
    let skipped = list.effects().filter(|e| !catalog.contains(e.id)).count();
    if skipped > 0 {
        tracing::warn!(skipped, "Effects not in catalog were left out of the token");
    }
    println!("{}", ShareState::from_list(list, direction, name, catalog).to_query());
    Ok(())
}

/// Print a decoded list, one entry per line
pub fn decode(state: &ShareState, catalog: &Catalog) -> Result<(), String> {
    let list = state.decode_list(catalog);
    for (index, entry) in list.entries().iter().enumerate() {
        match entry {
            ListEntry::Pin => println!("{index:>3}  ── pin ──"),
            ListEntry::Effect(effect) => {
                let Some(def) = catalog.get(effect.id) else {
                    continue;
                };
                println!(
                    "{index:>3}  {:>6}  {:<32} stacks={:<3} target={:<2} {}",
                    effect.id,
                    def.display_name(),
                    effect.stacks,
                    effect.target,
                    def.source_label()
                );
            }
        }
    }
    Ok(())
}

/// Print the generated overlay pack as JSON
pub fn generate(
    state: &ShareState,
    catalog: &Catalog,
    templates: &TemplateSet,
) -> Result<(), String> {
    let list = state.decode_list(catalog);
    let pack =
        TemplateGenerator::new(catalog, templates).generate(&list, state.direction, &state.name);
    let json = serde_json::to_string_pretty(&pack).map_err(|e| e.to_string())?;
    println!("{json}");
    Ok(())
}

/// Print library groups visible under a filter and search
pub fn groups(catalog: &Catalog, filter: &str, search: &str) -> Result<(), String> {
    let groups = EffectGroups::build(catalog);
    for group in groups.visible(filter) {
        let members: Vec<_> = group.matching(catalog, search).collect();
        if members.is_empty() && search.chars().count() >= 2 {
            continue;
        }
        println!("{} [{}]", group.label, group.key);
        for def in members {
            println!("    {:>6}  {:<32} {}", def.id, def.name, def.source_label());
        }
    }
    Ok(())
}
