//! Application configuration.
//!
//! TOML settings with atomic writes and section-level updates, stored at
//! `.config/settings.toml` relative to the working directory.

mod manager;
mod settings;

pub use manager::{ConfigError, ConfigManager, ConfigResult};
pub use settings::{ConfigSection, LoggingSettings, PathSettings, Settings, UiSettings};
