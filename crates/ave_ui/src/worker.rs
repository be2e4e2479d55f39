//! Background request execution.
//!
//! Each submit spawns one worker thread that runs a handler to
//! completion and posts the result back over an mpsc channel polled by
//! the UI, so a long-running encode never blocks the event loop.

use std::path::PathBuf;
use std::sync::mpsc::{self, Receiver};
use std::thread;

use ave_core::handlers::{self, EditResult};
use ave_core::media;
use ave_core::models::{CutRange, EditOutcome};
use ave_core::outputs::OutputNamespace;

/// Which panel a reply belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Panel {
    Cutter,
    Merger,
    Resolution,
}

/// Result of one background request.
pub struct WorkerReply {
    pub panel: Panel,
    pub result: Result<EditOutcome, String>,
}

/// Spawn a cut request.
pub fn spawn_cut(
    output_root: PathBuf,
    source: PathBuf,
    ranges: [CutRange; 3],
) -> Receiver<WorkerReply> {
    spawn(Panel::Cutter, move || {
        let source = media::probe_source(&source)?;
        let outputs = OutputNamespace::create_under(&output_root)?;
        handlers::cut(&source, &ranges, &outputs)
    })
}

/// Spawn a merge request.
pub fn spawn_merge(
    output_root: PathBuf,
    sources: [Option<PathBuf>; 3],
) -> Receiver<WorkerReply> {
    spawn(Panel::Merger, move || {
        let outputs = OutputNamespace::create_under(&output_root)?;
        handlers::merge(&sources, &outputs)
    })
}

/// Spawn a resolution change request.
pub fn spawn_resolution(
    output_root: PathBuf,
    source: PathBuf,
    quality_label: String,
) -> Receiver<WorkerReply> {
    spawn(Panel::Resolution, move || {
        let source = media::probe_source(&source)?;
        let outputs = OutputNamespace::create_under(&output_root)?;
        handlers::change_resolution(&source, &quality_label, &outputs)
    })
}

fn spawn<F>(panel: Panel, job: F) -> Receiver<WorkerReply>
where
    F: FnOnce() -> EditResult<EditOutcome> + Send + 'static,
{
    let (tx, rx) = mpsc::channel();
    thread::spawn(move || {
        let result = job().map_err(|e| e.to_string());
        if let Err(ref message) = result {
            tracing::error!("Request failed: {}", message);
        }
        let _ = tx.send(WorkerReply { panel, result });
    });
    rx
}
