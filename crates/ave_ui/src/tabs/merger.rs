//! Video merger panel: three sources, concatenated in order.

use std::path::{Path, PathBuf};
use std::sync::mpsc::Receiver;

use ave_core::models::EditOutcome;

use crate::worker::{self, WorkerReply};

use super::{results_block, source_picker};

#[derive(Default)]
pub struct MergerTab {
    sources: [Option<PathBuf>; 3],
    status: String,
    artifacts: Vec<PathBuf>,
    busy: bool,
}

impl MergerTab {
    pub fn ui(&mut self, ui: &mut egui::Ui, output_root: &Path) -> Option<Receiver<WorkerReply>> {
        ui.heading("Video Merger");
        ui.add_space(8.0);
        ui.label("Clips are joined in upload order.");
        ui.add_space(8.0);

        for (idx, source) in self.sources.iter_mut().enumerate() {
            source_picker(ui, &format!("Upload Video {}…", idx + 1), source);
        }

        ui.add_space(8.0);
        let mut request = None;
        if ui
            .add_enabled(!self.busy, egui::Button::new("Merge Videos"))
            .clicked()
        {
            // Presence validation lives in the handler.
            self.busy = true;
            self.status = "Merging…".to_string();
            self.artifacts.clear();
            request = Some(worker::spawn_merge(
                output_root.to_path_buf(),
                self.sources.clone(),
            ));
        }

        results_block(ui, &self.status, &self.artifacts);

        request
    }

    pub fn finish(&mut self, result: Result<EditOutcome, String>) {
        self.busy = false;
        match result {
            Ok(outcome) => {
                self.status = outcome.status;
                self.artifacts = outcome.artifacts;
            }
            Err(message) => {
                self.status = format!("Error merging videos: {}", message);
                self.artifacts.clear();
            }
        }
    }
}
