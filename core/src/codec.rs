//! Pack codec
//!
//! Packs an effect list into a compact URL-safe token. Each effect instance
//! becomes one little-endian `u32`:
//!
//! ```text
//!  31  29 28   25 24        18 17                      0
//! ┌──────┬───────┬────────────┬─────────────────────────┐
//! │ rsvd │target │   stacks   │           id            │
//! └──────┴───────┴────────────┴─────────────────────────┘
//! ```
//!
//! The pin marker is not part of the token. Its position travels separately
//! (the `pin` share parameter) and is reinserted on decode.

use base64::Engine;
use base64::alphabet;
use base64::engine::{DecodePaddingMode, GeneralPurpose, GeneralPurposeConfig};

use crate::catalog::Catalog;
use crate::list::{EffectInstance, EffectList, ListEntry};

pub const ID_BITS: u32 = 18;
pub const STACKS_BITS: u32 = 7;
pub const TARGET_BITS: u32 = 4;
pub const RESERVED_BITS: u32 = 3;

const _: () = assert!(ID_BITS + STACKS_BITS + TARGET_BITS + RESERVED_BITS == u32::BITS);

pub const ID_SHIFT: u32 = 0;
pub const STACKS_SHIFT: u32 = ID_SHIFT + ID_BITS;
pub const TARGET_SHIFT: u32 = STACKS_SHIFT + STACKS_BITS;

pub const ID_MASK: u32 = (1 << ID_BITS) - 1;
pub const STACKS_MASK: u32 = (1 << STACKS_BITS) - 1;
pub const TARGET_MASK: u32 = (1 << TARGET_BITS) - 1;

/// Largest effect ID that fits in a packed word
pub const MAX_EFFECT_ID: u32 = ID_MASK;
pub const MAX_STACKS: u8 = STACKS_MASK as u8;
pub const MAX_TARGET: u8 = TARGET_MASK as u8;

const WORD_BYTES: usize = 4;

/// `base64url`, written without padding, accepted with or without it
const TOKEN_ENGINE: GeneralPurpose = GeneralPurpose::new(
    &alphabet::URL_SAFE,
    GeneralPurposeConfig::new()
        .with_encode_padding(false)
        .with_decode_padding_mode(DecodePaddingMode::Indifferent),
);

/// Pack one instance. Modifiers beyond their field width saturate.
pub fn pack_word(effect: &EffectInstance) -> u32 {
    let stacks = effect.stacks.min(MAX_STACKS) as u32;
    let target = effect.target.min(MAX_TARGET) as u32;
    (target << TARGET_SHIFT) | (stacks << STACKS_SHIFT) | ((effect.id & ID_MASK) << ID_SHIFT)
}

pub fn unpack_word(word: u32) -> EffectInstance {
    EffectInstance {
        id: (word >> ID_SHIFT) & ID_MASK,
        stacks: ((word >> STACKS_SHIFT) & STACKS_MASK) as u8,
        target: ((word >> TARGET_SHIFT) & TARGET_MASK) as u8,
    }
}

/// Effects that survive encoding: resolvable in the catalog and packable
fn encodable<'a>(
    list: &'a EffectList,
    catalog: &'a Catalog,
) -> impl Iterator<Item = (usize, &'a EffectInstance)> + 'a {
    list.entries()
        .iter()
        .enumerate()
        .filter_map(|(idx, entry)| entry.as_effect().map(|effect| (idx, effect)))
        .filter(move |(_, effect)| {
            let known = catalog.contains(effect.id);
            if !known {
                tracing::debug!(id = effect.id, "Skipping unknown effect while encoding");
            }
            known
        })
}

/// Encode every resolvable effect instance, in list order, into a token
pub fn encode(list: &EffectList, catalog: &Catalog) -> String {
    let bytes: Vec<u8> = encodable(list, catalog)
        .flat_map(|(_, effect)| pack_word(effect).to_le_bytes())
        .collect();
    TOKEN_ENGINE.encode(bytes)
}

/// Pin position to send alongside [`encode`]'s token.
///
/// Counts only the entries the token actually carries, so it equals
/// [`EffectList::pin_index`] whenever every effect resolves.
pub fn encoded_pin_index(list: &EffectList, catalog: &Catalog) -> usize {
    let pin = list.pin_index();
    encodable(list, catalog).take_while(|(idx, _)| *idx < pin).count()
}

/// Decode a token, dropping unknown IDs and reinserting the pin marker at
/// `pin_index` (clamped). Malformed input decodes to an empty list.
pub fn decode(token: &str, pin_index: usize, catalog: &Catalog) -> EffectList {
    let bytes = match TOKEN_ENGINE.decode(token.trim()) {
        Ok(bytes) => bytes,
        Err(e) => {
            tracing::debug!(error = %e, "Malformed effects token, starting empty");
            return EffectList::new();
        }
    };

    let trailing = bytes.len() % WORD_BYTES;
    if trailing != 0 {
        tracing::debug!(trailing, "Discarding partial word at end of token");
    }

    let effects: Vec<EffectInstance> = bytes
        .chunks_exact(WORD_BYTES)
        .map(|chunk| unpack_word(u32::from_le_bytes([chunk[0], chunk[1], chunk[2], chunk[3]])))
        .filter(|effect| {
            let known = catalog.contains(effect.id);
            if !known {
                tracing::debug!(id = effect.id, "Dropping unknown effect from token");
            }
            known
        })
        .collect();

    EffectList::from_effects(effects, pin_index)
}

/// Entries of `list` that [`encode`] would carry, with the pin marker kept
/// in place. Decoding an encoded list yields exactly this.
pub fn canonical(list: &EffectList, catalog: &Catalog) -> EffectList {
    let effects: Vec<EffectInstance> = list
        .entries()
        .iter()
        .filter_map(ListEntry::as_effect)
        .filter(|effect| catalog.contains(effect.id))
        .map(|effect| unpack_word(pack_word(effect)))
        .collect();
    EffectList::from_effects(effects, encoded_pin_index(list, catalog))
}
