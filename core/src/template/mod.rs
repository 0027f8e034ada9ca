//! Overlay template generation
//!
//! Turns an effect list into an overlay pack laid out as a "totem": a start
//! cap, the pinned effects as fixed icons, then an end group holding either a
//! plain end cap or a rest cap followed by a rotating list of the remaining
//! effects.
//!
//! ```text
//!  direction = Right
//!
//!  ┌─────┐┌──────┐┌──────┐┌──────┐┌─────┐┌──────────────┐
//!  │start││pinned││pinned││pinned││rest ││ rest list ...│
//!  └─────┘└──────┘└──────┘└──────┘└─────┘└──────────────┘
//!   -38      0      52     104    └──── end group ─────┘
//! ```
//!
//! Output tree (`elements[0].members`): `[start, pinned group, end group]`,
//! end group members: `[end cap, rest cap, rest list]`.

mod assets;
mod document;
mod generator;


pub use assets::{
    CapMetrics, END_CAP, PINNED_FRAME_BLOCK, PINNED_FRAME_INDEX, PINNED_ITEM_SIZE, PINNED_MAX_BLOCK,
    PINNED_MAX_INDEX, REST_CAP, REST_LIST_OFFSET_INLINE, START_CAP, TEMPLATES_FILE, TemplateError,
    TemplateSet, asset_path,
};
pub use document::{
    Element, ElementKind, IconSource, ListIcon, Pack, Threshold, ThresholdType, Trigger,
    TriggerSource,
};
pub use generator::TemplateGenerator;
