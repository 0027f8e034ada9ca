//! Shareable link state
//!
//! The four query parameters that fully describe a totem:
//! `direction` (`r|d|l|u`), `name`, `pin` and `effects` (pack token).

use std::num::IntErrorKind;

use totem_types::Direction;
use url::form_urlencoded;

use crate::catalog::Catalog;
use crate::codec;
use crate::list::EffectList;

pub const DEFAULT_NAME: &str = "my totem";

pub const PARAM_DIRECTION: &str = "direction";
pub const PARAM_NAME: &str = "name";
pub const PARAM_PIN: &str = "pin";
pub const PARAM_EFFECTS: &str = "effects";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShareState {
    pub direction: Direction,
    pub name: String,
    /// Pin marker index among the encoded effects
    pub pin: usize,
    /// Pack codec token
    pub effects: String,
}

impl Default for ShareState {
    fn default() -> Self {
        Self {
            direction: Direction::default(),
            name: DEFAULT_NAME.to_string(),
            pin: 0,
            effects: String::new(),
        }
    }
}

impl ShareState {
    /// Capture a list for sharing
    pub fn from_list(
        list: &EffectList,
        direction: Direction,
        name: &str,
        catalog: &Catalog,
    ) -> Self {
        Self {
            direction,
            name: name.to_string(),
            pin: codec::encoded_pin_index(list, catalog),
            effects: codec::encode(list, catalog),
        }
    }

    /// Parse a query string (leading `?` optional). The first occurrence of a
    /// key wins; missing or invalid values keep their defaults.
    pub fn from_query(query: &str) -> Self {
        let query = query.strip_prefix('?').unwrap_or(query);
        let mut state = Self::default();
        let mut seen = [false; 4];

        for (key, value) in form_urlencoded::parse(query.as_bytes()) {
            let slot = match key.as_ref() {
                PARAM_DIRECTION => 0,
                PARAM_NAME => 1,
                PARAM_PIN => 2,
                PARAM_EFFECTS => 3,
                _ => continue,
            };
            if std::mem::replace(&mut seen[slot], true) {
                continue;
            }

            match slot {
                0 => match Direction::from_code(&value) {
                    Some(direction) => state.direction = direction,
                    None => tracing::debug!(value = %value, "Unknown direction in link"),
                },
                1 => state.name = value.into_owned(),
                2 => match value.parse::<usize>() {
                    Ok(pin) => state.pin = pin,
                    // Too large to represent; the list clamps it to its end
                    Err(e) if *e.kind() == IntErrorKind::PosOverflow => state.pin = usize::MAX,
                    Err(e) => {
                        tracing::debug!(value = %value, error = %e, "Invalid pin index in link")
                    }
                },
                _ => state.effects = value.into_owned(),
            }
        }

        state
    }

    pub fn to_query(&self) -> String {
        form_urlencoded::Serializer::new(String::new())
            .append_pair(PARAM_DIRECTION, self.direction.code())
            .append_pair(PARAM_NAME, &self.name)
            .append_pair(PARAM_PIN, &self.pin.to_string())
            .append_pair(PARAM_EFFECTS, &self.effects)
            .finish()
    }

    /// Rebuild the effect list this state describes
    pub fn decode_list(&self, catalog: &Catalog) -> EffectList {
        codec::decode(&self.effects, self.pin, catalog)
    }
}
