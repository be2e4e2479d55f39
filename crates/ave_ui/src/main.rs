//! Advanced Video Editor - main entry point.
//!
//! Handles application-level logging initialization, configuration
//! loading, directory creation, and application launch.

use std::path::PathBuf;

use ave_core::config::ConfigManager;
use ave_core::logging::init_tracing_with_file;

mod app;
mod tabs;
mod worker;

use app::EditorApp;

/// Default config path: .config/settings.toml (relative to current working directory)
fn default_config_path() -> PathBuf {
    PathBuf::from(".config").join("settings.toml")
}

fn main() -> eframe::Result {
    // Load configuration first (needed for the log level)
    let config_path = default_config_path();
    let mut config = ConfigManager::new(&config_path);

    if let Err(e) = config.load_or_create() {
        eprintln!("Warning: Failed to load config: {}. Using defaults.", e);
    }

    if let Err(e) = config.ensure_dirs_exist() {
        eprintln!("Warning: Failed to create directories: {}", e);
    }

    // The guard flushes the log file on exit; keep it for the whole run.
    let _log_guard =
        init_tracing_with_file(config.settings().logging.level, &config.logs_folder());

    tracing::info!("Advanced Video Editor starting");
    tracing::info!("Config: {}", config_path.display());
    tracing::info!("Core version: {}", ave_core::version());

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([900.0, 620.0])
            .with_title("Advanced Video Editor"),
        ..Default::default()
    };

    eframe::run_native(
        "Advanced Video Editor",
        options,
        Box::new(move |_cc| Ok(Box::new(EditorApp::new(config)))),
    )
}
