//! Effect catalog
//!
//! Read-only lookup of effect metadata by game ID, plus the profession and
//! specialization tables used to group effects for display. The catalog is
//! built once by the import step and shared by every consumer.

mod groups;

use std::fs;
use std::path::{Path, PathBuf};

use hashbrown::HashMap;
use serde::de::DeserializeOwned;
use thiserror::Error;
use totem_types::{EffectDefinition, Profession, Specialization};

use crate::codec::MAX_EFFECT_ID;

pub use groups::{EffectGroup, EffectGroups, FilterOption, GroupOwner, matches_search};

pub const EFFECTS_FILE: &str = "effects.json";
pub const PROFESSIONS_FILE: &str = "professions.json";
pub const SPECIALIZATIONS_FILE: &str = "specializations.json";

/// Errors that can occur while loading catalog files
#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("IO error reading {path:?}: {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("Parse error in {path:?}: {source}")]
    Parse {
        path: PathBuf,
        source: serde_json::Error,
    },
}

/// Fixed mapping from effect ID to definition
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    /// Definitions in declaration order
    effects: Vec<EffectDefinition>,
    /// Effect ID -> position in `effects`
    index: HashMap<u32, usize>,
    professions: Vec<Profession>,
    specializations: Vec<Specialization>,
}

impl Catalog {
    /// Build a catalog from already-parsed records.
    ///
    /// IDs that cannot be packed into a share token (0, or wider than 18 bits)
    /// are skipped, as are duplicate IDs (first declaration wins).
    pub fn new(
        effects: Vec<EffectDefinition>,
        professions: Vec<Profession>,
        specializations: Vec<Specialization>,
    ) -> Self {
        let mut catalog = Self {
            effects: Vec::with_capacity(effects.len()),
            index: HashMap::with_capacity(effects.len()),
            professions,
            specializations,
        };

        for def in effects {
            if def.id == 0 || def.id > MAX_EFFECT_ID {
                tracing::warn!(id = def.id, name = %def.name, "Effect ID out of range, skipping");
                continue;
            }
            if catalog.index.contains_key(&def.id) {
                tracing::warn!(id = def.id, name = %def.name, "Duplicate effect ID, keeping first");
                continue;
            }
            catalog.index.insert(def.id, catalog.effects.len());
            catalog.effects.push(def);
        }

        catalog
    }

    /// Load `effects.json`, `professions.json` and `specializations.json` from a directory
    pub fn load(dir: &Path) -> Result<Self, CatalogError> {
        let effects: Vec<EffectDefinition> = load_json(&dir.join(EFFECTS_FILE))?;
        let professions: Vec<Profession> = load_json(&dir.join(PROFESSIONS_FILE))?;
        let specializations: Vec<Specialization> = load_json(&dir.join(SPECIALIZATIONS_FILE))?;

        let catalog = Self::new(effects, professions, specializations);
        tracing::info!(
            effects = catalog.len(),
            professions = catalog.professions.len(),
            specializations = catalog.specializations.len(),
            dir = %dir.display(),
            "Loaded effect catalog"
        );
        Ok(catalog)
    }

    /// Look up an effect. ID 0 is never found.
    pub fn get(&self, id: u32) -> Option<&EffectDefinition> {
        self.index.get(&id).map(|&idx| &self.effects[idx])
    }

    pub fn contains(&self, id: u32) -> bool {
        self.index.contains_key(&id)
    }

    /// All definitions in declaration order
    pub fn effects(&self) -> &[EffectDefinition] {
        &self.effects
    }

    pub fn professions(&self) -> &[Profession] {
        &self.professions
    }

    pub fn specializations(&self) -> &[Specialization] {
        &self.specializations
    }

    /// Specializations of one profession: core first, then elite
    pub fn specializations_of<'a>(
        &'a self,
        profession: &'a str,
    ) -> impl Iterator<Item = &'a Specialization> + 'a {
        let of_profession = move |spec: &&Specialization| spec.profession == profession;
        let core = self
            .specializations
            .iter()
            .filter(of_profession)
            .filter(|spec| !spec.elite);
        let elite = self
            .specializations
            .iter()
            .filter(of_profession)
            .filter(|spec| spec.elite);
        core.chain(elite)
    }

    pub fn len(&self) -> usize {
        self.effects.len()
    }

    pub fn is_empty(&self) -> bool {
        self.effects.is_empty()
    }
}

fn load_json<T: DeserializeOwned>(path: &Path) -> Result<T, CatalogError> {
    let contents = fs::read_to_string(path).map_err(|e| CatalogError::Io {
        path: path.to_path_buf(),
        source: e,
    })?;

    serde_json::from_str(&contents).map_err(|e| CatalogError::Parse {
        path: path.to_path_buf(),
        source: e,
    })
}

/// Default catalog location under the user data directory
pub fn default_catalog_dir() -> Option<PathBuf> {
    dirs::data_dir().map(|p| p.join("totem-forge").join("catalog"))
}
