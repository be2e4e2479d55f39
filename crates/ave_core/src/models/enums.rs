//! Core enums used throughout the application.

use serde::{Deserialize, Serialize};

/// Output quality preset for resolution conversion.
///
/// A closed set mapping each label to fixed pixel dimensions. An
/// unrecognized label is a validation error, never a silent fallback
/// to some default.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum QualityPreset {
    #[serde(rename = "480p")]
    Q480p,
    /// Default selection in the UI.
    #[default]
    #[serde(rename = "720p")]
    Q720p,
    #[serde(rename = "1080p")]
    Q1080p,
    #[serde(rename = "1440p")]
    Q1440p,
    #[serde(rename = "4K")]
    Q4k,
}

impl QualityPreset {
    /// All presets, in dropdown order.
    pub const ALL: [QualityPreset; 5] = [
        QualityPreset::Q480p,
        QualityPreset::Q720p,
        QualityPreset::Q1080p,
        QualityPreset::Q1440p,
        QualityPreset::Q4k,
    ];

    /// Parse a UI label. Returns `None` for anything outside the closed set.
    pub fn from_label(label: &str) -> Option<Self> {
        match label {
            "480p" => Some(Self::Q480p),
            "720p" => Some(Self::Q720p),
            "1080p" => Some(Self::Q1080p),
            "1440p" => Some(Self::Q1440p),
            "4K" => Some(Self::Q4k),
            _ => None,
        }
    }

    /// The label shown in the UI and accepted by `from_label`.
    pub fn label(self) -> &'static str {
        match self {
            Self::Q480p => "480p",
            Self::Q720p => "720p",
            Self::Q1080p => "1080p",
            Self::Q1440p => "1440p",
            Self::Q4k => "4K",
        }
    }

    /// Fixed output pixel dimensions as (width, height).
    pub fn dimensions(self) -> (u32, u32) {
        match self {
            Self::Q480p => (854, 480),
            Self::Q720p => (1280, 720),
            Self::Q1080p => (1920, 1080),
            Self::Q1440p => (2560, 1440),
            Self::Q4k => (3840, 2160),
        }
    }
}

impl std::fmt::Display for QualityPreset {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}
