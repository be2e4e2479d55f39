//! Video cutter panel: one source, three independent cut ranges.

use std::path::{Path, PathBuf};
use std::sync::mpsc::Receiver;

use ave_core::media;
use ave_core::models::{CutRange, EditOutcome, SourceVideo};

use crate::worker::{self, WorkerReply};

use super::{results_block, source_picker};

/// Form state for one (start, end) pair, kept as text until submit.
#[derive(Default)]
struct RangeInput {
    start: String,
    end: String,
}

impl RangeInput {
    fn parse(&self) -> Option<CutRange> {
        let start = self.start.trim().parse().ok()?;
        let end = self.end.trim().parse().ok()?;
        Some(CutRange::new(start, end))
    }
}

#[derive(Default)]
pub struct CutterTab {
    source: Option<PathBuf>,
    /// Probe result for the picked source, shown next to the picker.
    probed: Option<SourceVideo>,
    ranges: [RangeInput; 3],
    status: String,
    artifacts: Vec<PathBuf>,
    busy: bool,
}

impl CutterTab {
    /// Restore the last used source path from settings.
    pub fn with_last_source(last_source: &str) -> Self {
        let mut tab = Self::default();
        if !last_source.is_empty() {
            tab.source = Some(PathBuf::from(last_source));
        }
        tab
    }

    pub fn source_path(&self) -> Option<&Path> {
        self.source.as_deref()
    }

    pub fn ui(&mut self, ui: &mut egui::Ui, output_root: &Path) -> Option<Receiver<WorkerReply>> {
        ui.heading("Video Cutter");
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
        egui::Grid::new("cut_ranges")
            .num_columns(4)
            .spacing([8.0, 6.0])
            .show(ui, |ui| {
                for (idx, range) in self.ranges.iter_mut().enumerate() {
                    ui.label(format!("Start Cut {}", idx + 1));
                    ui.add(egui::TextEdit::singleline(&mut range.start).desired_width(80.0));
                    ui.label(format!("End Cut {}", idx + 1));
                    ui.add(egui::TextEdit::singleline(&mut range.end).desired_width(80.0));
                    ui.end_row();
                }
            });

        ui.add_space(8.0);
        let mut request = None;
        if ui
            .add_enabled(!self.busy, egui::Button::new("Cut Video"))
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

        let mut ranges = [CutRange::new(0.0, 0.0); 3];
        for (idx, input) in self.ranges.iter().enumerate() {
            match input.parse() {
                Some(range) => ranges[idx] = range,
                None => {
                    self.status = format!("Cut {} times must be numbers.", idx + 1);
                    return None;
                }
            }
        }

        self.busy = true;
        self.status = "Cutting…".to_string();
        self.artifacts.clear();
        Some(worker::spawn_cut(output_root.to_path_buf(), source, ranges))
    }

    #[cfg(test)]
    pub fn mark_busy(&mut self) {
        self.busy = true;
    }

    #[cfg(test)]
    pub fn is_busy(&self) -> bool {
        self.busy
    }

    pub fn finish(&mut self, result: Result<EditOutcome, String>) {
        self.busy = false;
        match result {
            Ok(outcome) => {
                self.status = outcome.status;
                self.artifacts = outcome.artifacts;
            }
            Err(message) => {
                self.status = format!("Error cutting video: {}", message);
                self.artifacts.clear();
            }
        }
    }
}
