//! Effect list syntax for the command line
//!
//! Comma separated entries, each either `pin` or `id[:stacks[:target]]`:
//! `740:25,725,pin,736:0:2`. Without a `pin` entry every effect is pinned.

use totem_core::codec::{MAX_STACKS, MAX_TARGET};
use totem_core::{EffectInstance, EffectList};

pub fn parse_items(input: &str) -> Result<EffectList, String> {
    let mut effects = Vec::new();
    let mut pin = None;

    for raw in input.split(',').map(str::trim).filter(|s| !s.is_empty()) {
        if raw.eq_ignore_ascii_case("pin") {
            if pin.replace(effects.len()).is_some() {
                return Err("error: more than one pin entry".to_string());
            }
            continue;
        }
        effects.push(parse_instance(raw)?);
    }

    let pin = pin.unwrap_or(effects.len());
    Ok(EffectList::from_effects(effects, pin))
}

fn parse_instance(raw: &str) -> Result<EffectInstance, String> {
    let mut parts = raw.split(':');
    let id = parse_field(parts.next(), "id", raw, u32::MAX)?;
    let stacks = parse_field(parts.next(), "stacks", raw, MAX_STACKS as u32)?;
    let target = parse_field(parts.next(), "target", raw, MAX_TARGET as u32)?;
    if parts.next().is_some() {
        return Err(format!("error: too many fields in '{raw}'"));
    }
    Ok(EffectInstance::with_modifiers(id, stacks as u8, target as u8))
}

fn parse_field(field: Option<&str>, what: &str, raw: &str, max: u32) -> Result<u32, String> {
    let Some(field) = field else {
        return Ok(0);
    };
    let value: u32 = field
        .parse()
        .map_err(|_| format!("error: invalid {what} '{field}' in '{raw}'"))?;
    if value > max {
        return Err(format!("error: {what} {value} exceeds {max} in '{raw}'"));
    }
    Ok(value)
}
