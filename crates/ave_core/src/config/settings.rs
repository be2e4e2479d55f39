//! Settings struct with TOML-based sections.
//!
//! Settings are organized into logical sections that map to TOML tables.
//! Each section can be updated independently for atomic section-level
//! updates.

use serde::{Deserialize, Serialize};

use crate::logging::LogLevel;
use crate::models::QualityPreset;

/// Root settings structure containing all configuration sections.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Settings {
    /// Path-related settings.
    #[serde(default)]
    pub paths: PathSettings,

    /// Logging configuration.
    #[serde(default)]
    pub logging: LoggingSettings,

    /// UI defaults and remembered state.
    #[serde(default)]
    pub ui: UiSettings,
}

/// Path configuration for outputs and logs.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PathSettings {
    /// Root folder for per-request output namespaces.
    #[serde(default = "default_output_root")]
    pub output_root: String,

    /// Folder for log files.
    #[serde(default = "default_logs_folder")]
    pub logs_folder: String,

    /// Last source used in the cutter panel.
    #[serde(default)]
    pub last_cut_source: String,

    /// Last source used in the resolution panel.
    #[serde(default)]
    pub last_resolution_source: String,
}

fn default_output_root() -> String {
    "edit_output".to_string()
}

fn default_logs_folder() -> String {
    ".logs".to_string()
}

impl Default for PathSettings {
    fn default() -> Self {
        Self {
            output_root: default_output_root(),
            logs_folder: default_logs_folder(),
            last_cut_source: String::new(),
            last_resolution_source: String::new(),
        }
    }
}

/// Logging configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct LoggingSettings {
    /// Application log level (overridden by RUST_LOG when set).
    #[serde(default)]
    pub level: LogLevel,
}

/// UI defaults.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UiSettings {
    /// Preselected quality in the resolution dropdown.
    #[serde(default)]
    pub default_quality: QualityPreset,
}

/// Identifies one settings section for targeted updates.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigSection {
    Paths,
    Logging,
    Ui,
}

impl ConfigSection {
    /// The TOML table key for this section.
    pub fn key(self) -> &'static str {
        match self {
            ConfigSection::Paths => "paths",
            ConfigSection::Logging => "logging",
            ConfigSection::Ui => "ui",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_sensible() {
        let settings = Settings::default();
        assert_eq!(settings.paths.output_root, "edit_output");
        assert_eq!(settings.paths.logs_folder, ".logs");
        assert_eq!(settings.ui.default_quality, QualityPreset::Q720p);
    }

    #[test]
    fn partial_toml_fills_missing_fields() {
        let settings: Settings =
            toml::from_str("[paths]\noutput_root = \"custom_out\"\n").unwrap();
        assert_eq!(settings.paths.output_root, "custom_out");
        assert_eq!(settings.paths.logs_folder, ".logs");
        assert_eq!(settings.ui.default_quality, QualityPreset::Q720p);
    }

    #[test]
    fn quality_round_trips_through_toml() {
        let mut settings = Settings::default();
        settings.ui.default_quality = QualityPreset::Q4k;

        let text = toml::to_string(&settings).unwrap();
        let parsed: Settings = toml::from_str(&text).unwrap();
        assert_eq!(parsed.ui.default_quality, QualityPreset::Q4k);
    }
}
