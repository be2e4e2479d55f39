//! Panel implementations, one module per tab.

mod cutter;
mod home;
mod merger;
mod resolution;

pub use cutter::CutterTab;
pub use home::HomeTab;
pub use merger::MergerTab;
pub use resolution::ResolutionTab;

use std::path::PathBuf;

/// Shared file picker row: a browse button plus the selected path.
///
/// Returns true when a new file was picked.
fn source_picker(ui: &mut egui::Ui, label: &str, source: &mut Option<PathBuf>) -> bool {
    let mut changed = false;
    ui.horizontal(|ui| {
        if ui.button(label).clicked() {
            if let Some(path) = rfd::FileDialog::new()
                .add_filter("Video", &["mp4", "mkv", "mov", "avi", "webm"])
                .pick_file()
            {
                *source = Some(path);
                changed = true;
            }
        }
        match source {
            Some(path) => ui.monospace(path.display().to_string()),
            None => ui.weak("No file selected"),
        };
    });
    changed
}

/// Shared results block: status line plus artifact paths.
fn results_block(ui: &mut egui::Ui, status: &str, artifacts: &[PathBuf]) {
    ui.add_space(8.0);
    ui.separator();
    ui.horizontal(|ui| {
        ui.label("Status:");
        ui.label(status);
    });
    for path in artifacts {
        ui.monospace(path.display().to_string());
    }
}
