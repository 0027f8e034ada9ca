//! Overlay pack document
//!
//! Serde model of the overlay pack schema the generator emits. Only the
//! fields the generator touches are modelled; everything else comes from the
//! template assets unchanged.

use serde::{Deserialize, Serialize};

/// Root of an overlay pack
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Pack {
    #[serde(default = "default_true")]
    pub enabled: bool,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub author: String,
    #[serde(default)]
    pub layer: i32,
    #[serde(default)]
    pub anchor: String,
    #[serde(default)]
    pub pos: [i32; 2],
    #[serde(default)]
    pub elements: Vec<Element>,
}

/// A positioned element of the pack tree
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Element {
    #[serde(default)]
    pub name: String,
    #[serde(default = "default_true")]
    pub enabled: bool,
    #[serde(default)]
    pub pos: [i32; 2],
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub trigger: Option<Trigger>,
    #[serde(flatten)]
    pub kind: ElementKind,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum ElementKind {
    Group {
        #[serde(default)]
        members: Vec<Element>,
    },
    Icon {
        icon: IconSource,
        #[serde(default)]
        size: [i32; 2],
    },
    IconList {
        #[serde(default)]
        direction: String,
        #[serde(default)]
        icons: Vec<ListIcon>,
    },
}

impl ElementKind {
    pub fn kind_name(&self) -> &'static str {
        match self {
            Self::Group { .. } => "Group",
            Self::Icon { .. } => "Icon",
            Self::IconList { .. } => "IconList",
        }
    }
}

/// One entry of an icon list (rotating, not individually positioned)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ListIcon {
    #[serde(default)]
    pub name: String,
    #[serde(default = "default_true")]
    pub enabled: bool,
    #[serde(default = "default_dynamic")]
    pub icon: IconSource,
    #[serde(default)]
    pub trigger: Trigger,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum IconSource {
    /// No icon
    Empty,
    /// Icon of whatever effect the trigger matched
    Dynamic,
    /// Path relative to the overlay's icon folder
    File(String),
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Trigger {
    #[serde(default)]
    pub source: TriggerSource,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub threshold: Option<Threshold>,
}

/// Effect IDs that activate a trigger
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct TriggerSource {
    #[serde(default)]
    pub ids: Vec<u32>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Threshold {
    pub threshold_type: ThresholdType,
}

impl Threshold {
    pub fn above(value: u32) -> Self {
        Self {
            threshold_type: ThresholdType::Above(value),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ThresholdType {
    Present,
    Above(u32),
}

impl Element {
    pub fn group(name: &str) -> Self {
        Self::new(
            name,
            ElementKind::Group {
                members: Vec::new(),
            },
        )
    }

    pub fn icon(name: &str, icon: IconSource) -> Self {
        Self::new(name, ElementKind::Icon { icon, size: [0, 0] })
    }

    pub fn icon_list(name: &str) -> Self {
        Self::new(
            name,
            ElementKind::IconList {
                direction: String::new(),
                icons: Vec::new(),
            },
        )
    }

    fn new(name: &str, kind: ElementKind) -> Self {
        Self {
            name: name.to_string(),
            enabled: true,
            pos: [0, 0],
            trigger: None,
            kind,
        }
    }

    pub fn with_trigger(mut self) -> Self {
        self.trigger = Some(Trigger::default());
        self
    }

    pub fn with_member(mut self, member: Element) -> Self {
        if let ElementKind::Group { members } = &mut self.kind {
            members.push(member);
        }
        self
    }

    pub fn trigger_mut(&mut self) -> &mut Trigger {
        self.trigger.get_or_insert_with(Trigger::default)
    }

    pub fn members(&self) -> &[Element] {
        match &self.kind {
            ElementKind::Group { members } => members,
            _ => &[],
        }
    }

    pub fn members_mut(&mut self) -> Option<&mut Vec<Element>> {
        match &mut self.kind {
            ElementKind::Group { members } => Some(members),
            _ => None,
        }
    }

    // ─── Setters below are no-ops on elements of another kind ───────────────

    pub fn set_icon_file(&mut self, path: String) {
        if let ElementKind::Icon { icon, .. } = &mut self.kind {
            *icon = IconSource::File(path);
        }
    }

    pub fn set_size(&mut self, extent: [i32; 2]) {
        if let ElementKind::Icon { size, .. } = &mut self.kind {
            *size = extent;
        }
    }

    pub fn set_list(&mut self, list_direction: &str, list_icons: Vec<ListIcon>) {
        if let ElementKind::IconList { direction, icons } = &mut self.kind {
            *direction = list_direction.to_string();
            *icons = list_icons;
        }
    }

    pub fn extend_members(&mut self, new_members: impl IntoIterator<Item = Element>) {
        if let Some(members) = self.members_mut() {
            members.extend(new_members);
        }
    }
}

fn default_true() -> bool {
    true
}

fn default_dynamic() -> IconSource {
    IconSource::Dynamic
}
