//! Totem Forge core
//!
//! Pure transforms over an ordered effect list:
//! - [`codec`] packs the list into a share token and back
//! - [`list`] edits the list without ever losing the pin marker
//! - [`template`] lays the list out as an overlay pack
//! - [`catalog`] resolves effect IDs and groups them for the library view
//!
//! [`session::ForgeSession`] ties them together for an interactive front end.

pub mod catalog;
pub mod codec;
pub mod config;
pub mod list;
pub mod session;
pub mod share;
pub mod template;

#[cfg(test)]
mod test_support;

// Re-exports for convenience
pub use catalog::{Catalog, CatalogError, EffectGroup, EffectGroups};
pub use codec::{decode, encode};
pub use config::{ConfigError, ForgeConfig};
pub use list::{EffectInstance, EffectList, ListEntry, Selection, SelectionKey, ShiftDirection};
pub use session::ForgeSession;
pub use share::ShareState;
pub use template::{Pack, TemplateError, TemplateGenerator, TemplateSet};
