//! Shared types for Totem Forge
//!
//! Everything in here is plain serde data shared between the core engine and
//! its front ends: the effect catalog records written by the import step and
//! the layout direction carried in share links.

pub mod catalog;
pub mod direction;

pub use catalog::{
    EffectDefinition, EffectType, EffectVariant, Profession, Specialization, Stacking,
};
pub use direction::{Axis, Direction};
