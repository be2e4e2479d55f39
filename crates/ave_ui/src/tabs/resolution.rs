//! Resolution change panel: one source, one quality preset.

use std::path::{Path, PathBuf};
use std::sync::mpsc::Receiver;

use ave_core::media;
use ave_core::models::{EditOutcome, QualityPreset, SourceVideo};

use crate::worker::{self, WorkerReply};

use super::{results_block, source_picker};

pub struct ResolutionTab {
    source: Option<PathBuf>,
    /// Probe result for the picked source, shown next to the picker.
    probed: Option<SourceVideo>,
    quality: QualityPreset,
    status: String,
    artifacts: Vec<PathBuf>,
    busy: bool,
}

impl ResolutionTab {
    pub fn new(default_quality: QualityPreset, last_source: &str) -> Self {
        let source = if last_source.is_empty() {
            None
        } else {
            Some(PathBuf::from(last_source))
        };

        Self {
            source,
            probed: None,
            quality: default_quality,
            status: String::new(),
            artifacts: Vec::new(),
            busy: false,
        }
    }

    pub fn source_path(&self) -> Option<&Path> {
        self.source.as_deref()
    }

    pub fn ui(&mut self, ui: &mut egui::Ui, output_root: &Path) -> Option<Receiver<WorkerReply>> {
        ui.heading("Change Resolution");
        ui.add_space(8.0);

        if source_picker(ui, "Upload Video…", &mut self.source) {
            self.probed = self
                .source
                .as_deref()
                .and_then(|path| media::probe_source(path).ok());
        }
        if let Some(info) = &self.probed {
            ui.weak(info.summary());
        }

        ui.add_space(8.0);
        egui::ComboBox::from_label("Select Quality")
            .selected_text(self.quality.label())
            .show_ui(ui, |ui| {
                for preset in QualityPreset::ALL {
                    ui.selectable_value(&mut self.quality, preset, preset.label());
                }
            });

        ui.add_space(8.0);
        let mut request = None;
        if ui
            .add_enabled(!self.busy, egui::Button::new("Convert Quality"))
            .clicked()
        {
            request = self.submit(output_root);
        }

        results_block(ui, &self.status, &self.artifacts);

        request
    }

    fn submit(&mut self, output_root: &Path) -> Option<Receiver<WorkerReply>> {
        let Some(source) = self.source.clone() else {
            self.status = "Please upload a video first.".to_string();
            return None;
        };

        self.busy = true;
        self.status = "Converting…".to_string();
        self.artifacts.clear();
        Some(worker::spawn_resolution(
            output_root.to_path_buf(),
            source,
            self.quality.label().to_string(),
        ))
    }

    pub fn finish(&mut self, result: Result<EditOutcome, String>) {
        self.busy = false;
        match result {
            Ok(outcome) => {
                self.status = outcome.status;
                self.artifacts = outcome.artifacts;
            }
            Err(message) => {
                self.status = format!("Error: {}", message);
                self.artifacts.clear();
            }
        }
    }
}
