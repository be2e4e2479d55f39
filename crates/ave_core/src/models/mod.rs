//! Data models for sources, cut ranges, quality presets, and outcomes.

mod enums;
mod media;

pub use enums::QualityPreset;
pub use media::{CutRange, EditOutcome, SourceVideo};
