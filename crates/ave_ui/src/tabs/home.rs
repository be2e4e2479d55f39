//! Welcome tab.

pub struct HomeTab;

impl HomeTab {
    pub fn ui(&self, ui: &mut egui::Ui) {
        ui.heading("Welcome to Advanced Video Editor");
        ui.add_space(12.0);

        ui.label("Features:");
        ui.add_space(4.0);
        ui.label("• Video Cutter: trim multiple parts of a video with ease.");
        ui.label("• Video Merger: combine multiple video clips seamlessly.");
        ui.label(
            "• Resolution Changer: convert videos to different resolutions \
             (480p, 720p, 1080p, 1440p, 4K).",
        );

        ui.add_space(12.0);
        ui.weak("Requires ffmpeg and ffprobe in PATH.");
    }
}
