//! Root application: tab strip plus per-tab panels.

use std::sync::mpsc::{Receiver, TryRecvError};

use ave_core::config::{ConfigManager, ConfigSection};
use ave_core::models::EditOutcome;

use crate::tabs::{CutterTab, HomeTab, MergerTab, ResolutionTab};
use crate::worker::{Panel, WorkerReply};

/// Active tab.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Tab {
    Home,
    Cutter,
    Merger,
    Resolution,
}

pub struct EditorApp {
    config: ConfigManager,
    tab: Tab,
    home: HomeTab,
    cutter: CutterTab,
    merger: MergerTab,
    resolution: ResolutionTab,
    /// Receivers for in-flight background requests, tagged with the
    /// panel that submitted them.
    pending: Vec<(Panel, Receiver<WorkerReply>)>,
}

impl EditorApp {
    pub fn new(config: ConfigManager) -> Self {
        let settings = config.settings();
        let cutter = CutterTab::with_last_source(&settings.paths.last_cut_source);
        let resolution = ResolutionTab::new(
            settings.ui.default_quality,
            &settings.paths.last_resolution_source,
        );

        Self {
            config,
            tab: Tab::Home,
            home: HomeTab,
            cutter,
            merger: MergerTab::default(),
            resolution,
            pending: Vec::new(),
        }
    }

    /// Drain completed worker replies into their panels.
    ///
    /// A disconnected channel means the worker thread died without
    /// replying; the panel is reset with an error so it does not stay
    /// busy forever.
    fn poll_workers(&mut self) {
        let mut finished = Vec::new();
        self.pending.retain(|(panel, rx)| match rx.try_recv() {
            Ok(reply) => {
                finished.push((reply.panel, reply.result));
                false
            }
            Err(TryRecvError::Disconnected) => {
                finished.push((
                    *panel,
                    Err("worker thread terminated unexpectedly".to_string()),
                ));
                false
            }
            Err(TryRecvError::Empty) => true,
        });
        for (panel, result) in finished {
            self.deliver(panel, result);
        }
    }

    fn deliver(&mut self, panel: Panel, result: Result<EditOutcome, String>) {
        match panel {
            Panel::Cutter => self.cutter.finish(result),
            Panel::Merger => self.merger.finish(result),
            Panel::Resolution => self.resolution.finish(result),
        }
    }

    /// Remember the last used source paths across sessions.
    fn persist_last_sources(&mut self) {
        let cut_source = self
            .cutter
            .source_path()
            .map(|p| p.to_string_lossy().into_owned())
            .unwrap_or_default();
        let resolution_source = self
            .resolution
            .source_path()
            .map(|p| p.to_string_lossy().into_owned())
            .unwrap_or_default();

        let paths = &mut self.config.settings_mut().paths;
        if paths.last_cut_source == cut_source
            && paths.last_resolution_source == resolution_source
        {
            return;
        }
        paths.last_cut_source = cut_source;
        paths.last_resolution_source = resolution_source;

        if let Err(e) = self.config.update_section(ConfigSection::Paths) {
            tracing::warn!("Failed to persist last source paths: {}", e);
        }
    }
}

impl eframe::App for EditorApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.poll_workers();
        if !self.pending.is_empty() {
            ctx.request_repaint_after(std::time::Duration::from_millis(100));
        }

        egui::TopBottomPanel::top("tab_bar").show(ctx, |ui| {
            ui.horizontal(|ui| {
                ui.selectable_value(&mut self.tab, Tab::Home, "Home");
                ui.selectable_value(&mut self.tab, Tab::Cutter, "Video Cutter");
                ui.selectable_value(&mut self.tab, Tab::Merger, "Video Merger");
                ui.selectable_value(&mut self.tab, Tab::Resolution, "Change Resolution");
            });
        });

        let output_root = self.config.output_root();
        let mut submitted = None;

        egui::CentralPanel::default().show(ctx, |ui| match self.tab {
            Tab::Home => self.home.ui(ui),
            Tab::Cutter => {
                submitted = self
                    .cutter
                    .ui(ui, &output_root)
                    .map(|rx| (Panel::Cutter, rx));
            }
            Tab::Merger => {
                submitted = self
                    .merger
                    .ui(ui, &output_root)
                    .map(|rx| (Panel::Merger, rx));
            }
            Tab::Resolution => {
                submitted = self
                    .resolution
                    .ui(ui, &output_root)
                    .map(|rx| (Panel::Resolution, rx));
            }
        });

        if let Some(entry) = submitted {
            self.pending.push(entry);
            self.persist_last_sources();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::mpsc;

    fn test_app() -> EditorApp {
        EditorApp::new(ConfigManager::new("settings.toml"))
    }

    #[test]
    fn dead_worker_channel_resets_its_panel() {
        let mut app = test_app();
        let (tx, rx) = mpsc::channel::<WorkerReply>();
        app.cutter.mark_busy();
        app.pending.push((Panel::Cutter, rx));
        drop(tx);

        app.poll_workers();

        assert!(app.pending.is_empty());
        assert!(!app.cutter.is_busy());
    }

    #[test]
    fn completed_reply_is_delivered_and_receiver_removed() {
        let mut app = test_app();
        let (tx, rx) = mpsc::channel::<WorkerReply>();
        app.cutter.mark_busy();
        app.pending.push((Panel::Cutter, rx));
        tx.send(WorkerReply {
            panel: Panel::Cutter,
            result: Err("missing input".to_string()),
        })
        .unwrap();

        app.poll_workers();

        assert!(app.pending.is_empty());
        assert!(!app.cutter.is_busy());
    }

    #[test]
    fn in_flight_request_stays_pending() {
        let mut app = test_app();
        let (tx, rx) = mpsc::channel::<WorkerReply>();
        app.cutter.mark_busy();
        app.pending.push((Panel::Cutter, rx));

        app.poll_workers();

        assert_eq!(app.pending.len(), 1);
        assert!(app.cutter.is_busy());
        drop(tx);
    }
}
