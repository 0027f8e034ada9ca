//! Template assets and pack metrics
//!
//! The base pack and its pinned/unpinned item parts. The built-in set is
//! used unless a `templates.json` asset is loaded from disk.

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::document::{Element, IconSource, ListIcon, Pack};

pub const TEMPLATES_FILE: &str = "templates.json";

// ═══════════════════════════════════════════════════════════════════════════
// Metrics
// ═══════════════════════════════════════════════════════════════════════════

/// Placement of a fixed cap icon along the totem axis
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CapMetrics {
    pub offset_inline: i32,
    pub size_inline: i32,
    pub size_block: i32,
    /// Asset file name inside the direction folder
    pub file: &'static str,
}

pub const START_CAP: CapMetrics = CapMetrics {
    offset_inline: -38,
    size_inline: 24,
    size_block: 44,
    file: "totem-start.png",
};

pub const END_CAP: CapMetrics = CapMetrics {
    offset_inline: 6,
    size_inline: 12,
    size_block: 44,
    file: "totem-end.png",
};

pub const REST_CAP: CapMetrics = CapMetrics {
    offset_inline: 24,
    size_inline: 48,
    size_block: 44,
    file: "totem-rest.png",
};

pub const REST_LIST_OFFSET_INLINE: i32 = 32;

/// Inline extent of one pinned item; pinned items are spaced by this much
pub const PINNED_ITEM_SIZE: i32 = 52;

/// Stack-count glow, first member of a pinned item
pub const PINNED_MAX_INDEX: usize = 0;
pub const PINNED_MAX_BLOCK: i32 = 104;
pub const PINNED_MAX_FILE: &str = "glow-a.png";

/// Frame, second member of a pinned item
pub const PINNED_FRAME_INDEX: usize = 1;
pub const PINNED_FRAME_BLOCK: i32 = 44;
pub const PINNED_FRAME_FILE: &str = "totem-frame.png";

/// `totem\<direction>\<file>`, the overlay's icon path convention
pub fn asset_path(direction_dir: &str, file: &str) -> String {
    format!("totem\\{direction_dir}\\{file}")
}

// ═══════════════════════════════════════════════════════════════════════════
// Template set
// ═══════════════════════════════════════════════════════════════════════════

/// Errors that can occur while loading template assets
#[derive(Debug, Error)]
pub enum TemplateError {
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
    #[error("Template slot '{slot}' must be {expected}, found {found}")]
    Shape {
        slot: &'static str,
        expected: &'static str,
        found: &'static str,
    },
}

/// Every template part the generator assembles a pack from
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TemplateSet {
    /// Pack header; its elements are replaced on generation
    pub pack: Pack,
    pub root: Element,
    pub start: Element,
    pub pinned_group: Element,
    pub end_group: Element,
    pub end_icon: Element,
    pub rest_icon: Element,
    pub rest_list: Element,
    pub pinned_item: Element,
    pub unpinned_item: ListIcon,
}

impl Default for TemplateSet {
    fn default() -> Self {
        Self::builtin()
    }
}

impl TemplateSet {
    pub fn builtin() -> Self {
        let pinned_item = Element::group("")
            .with_trigger()
            .with_member(Element::icon("Max Stacks", IconSource::Empty).with_trigger())
            .with_member(Element::icon("Frame", IconSource::Empty))
            .with_member(Element::icon("Effect", IconSource::Dynamic));

        Self {
            pack: Pack {
                enabled: true,
                name: String::new(),
                author: "Totem Forge".to_string(),
                layer: 0,
                anchor: "ScreenCenter".to_string(),
                pos: [0, 0],
                elements: Vec::new(),
            },
            root: Element::group("Totem"),
            start: Element::icon("Start", IconSource::Empty),
            pinned_group: Element::group("Pinned"),
            end_group: Element::group("End"),
            end_icon: Element::icon("End Cap", IconSource::Empty),
            rest_icon: Element::icon("Rest Cap", IconSource::Empty),
            rest_list: Element::icon_list("Rest"),
            pinned_item,
            unpinned_item: ListIcon {
                name: String::new(),
                enabled: true,
                icon: IconSource::Dynamic,
                trigger: Default::default(),
            },
        }
    }

    /// Load `templates.json` from an asset directory
    pub fn load(dir: &Path) -> Result<Self, TemplateError> {
        let path = dir.join(TEMPLATES_FILE);
        let contents = fs::read_to_string(&path).map_err(|e| TemplateError::Io {
            path: path.clone(),
            source: e,
        })?;
        let set: Self = serde_json::from_str(&contents).map_err(|e| TemplateError::Parse {
            path: path.clone(),
            source: e,
        })?;
        set.validate()?;
        Ok(set)
    }

    /// Check every slot has the element kind the generator fills in
    pub fn validate(&self) -> Result<(), TemplateError> {
        expect_kind("root", &self.root, "Group")?;
        expect_kind("start", &self.start, "Icon")?;
        expect_kind("pinned_group", &self.pinned_group, "Group")?;
        expect_kind("end_group", &self.end_group, "Group")?;
        expect_kind("end_icon", &self.end_icon, "Icon")?;
        expect_kind("rest_icon", &self.rest_icon, "Icon")?;
        expect_kind("rest_list", &self.rest_list, "IconList")?;
        expect_kind("pinned_item", &self.pinned_item, "Group")?;

        let members = self.pinned_item.members();
        let parts = [
            ("pinned_item.max", PINNED_MAX_INDEX),
            ("pinned_item.frame", PINNED_FRAME_INDEX),
        ];
        for (slot, idx) in parts {
            match members.get(idx) {
                Some(member) => expect_kind(slot, member, "Icon")?,
                None => {
                    return Err(TemplateError::Shape {
                        slot,
                        expected: "Icon",
                        found: "nothing",
                    });
                }
            }
        }
        Ok(())
    }
}

fn expect_kind(
    slot: &'static str,
    element: &Element,
    expected: &'static str,
) -> Result<(), TemplateError> {
    let found = element.kind.kind_name();
    if found == expected {
        Ok(())
    } else {
        Err(TemplateError::Shape {
            slot,
            expected,
            found,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn temp_dir(tag: &str) -> PathBuf {
        let dir = std::env::temp_dir()
            .join(format!("totem-templates-{tag}-{}", std::process::id()));
        fs::create_dir_all(&dir).unwrap();
        dir
    }

    #[test]
    fn test_builtin_is_valid() {
        TemplateSet::builtin().validate().unwrap();
    }

    #[test]
    fn test_asset_path() {
        assert_eq!(asset_path("left", START_CAP.file), "totem\\left\\totem-start.png");
    }

    #[test]
    fn test_load_round_trip() {
        let dir = temp_dir("ok");
        let mut set = TemplateSet::builtin();
        set.pack.author = "Someone".to_string();
        fs::write(dir.join(TEMPLATES_FILE), serde_json::to_string_pretty(&set).unwrap()).unwrap();

        let loaded = TemplateSet::load(&dir).unwrap();
        assert_eq!(loaded, set);

        fs::remove_dir_all(&dir).unwrap();
    }

    #[test]
    fn test_load_rejects_wrong_shape() {
        let dir = temp_dir("shape");
        let mut set = TemplateSet::builtin();
        set.start = Element::group("Start");
        fs::write(dir.join(TEMPLATES_FILE), serde_json::to_string(&set).unwrap()).unwrap();

        let err = TemplateSet::load(&dir).unwrap_err();
        assert!(matches!(err, TemplateError::Shape { slot: "start", .. }));

        fs::remove_dir_all(&dir).unwrap();
    }

    #[test]
    fn test_pinned_item_needs_two_icons() {
        let mut set = TemplateSet::builtin();
        set.pinned_item = Element::group("").with_member(Element::icon("Max", IconSource::Empty));
        let err = set.validate().unwrap_err();
        assert!(matches!(err, TemplateError::Shape { slot: "pinned_item.frame", .. }));
    }

    #[test]
    fn test_load_missing_file() {
        let err = TemplateSet::load(Path::new("/nonexistent/totem")).unwrap_err();
        assert!(matches!(err, TemplateError::Io { .. }));
    }
}
