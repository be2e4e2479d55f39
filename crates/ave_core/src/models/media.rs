//! Source, range, and outcome types shared by the handlers.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

/// A probed source video.
///
/// Opened (probed) per request via [`crate::media::probe_source`];
/// nothing persists across requests.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SourceVideo {
    /// Path to the source file.
    pub path: PathBuf,
    /// Duration in seconds as reported by the probe.
    pub duration: f64,
    /// Pixel width of the first video stream, when reported.
    pub width: Option<u32>,
    /// Pixel height of the first video stream, when reported.
    pub height: Option<u32>,
}

impl SourceVideo {
    /// Create a source with known duration and no dimension info.
    pub fn new(path: impl Into<PathBuf>, duration: f64) -> Self {
        Self {
            path: path.into(),
            duration,
            width: None,
            height: None,
        }
    }

    /// One-line summary for display: dimensions when known, then duration.
    pub fn summary(&self) -> String {
        match (self.width, self.height) {
            (Some(width), Some(height)) => {
                format!("{}x{}, {:.2} s", width, height, self.duration)
            }
            _ => format!("{:.2} s", self.duration),
        }
    }
}

/// One (start, end) trim range in seconds.
///
/// The three ranges of a cut request are independent of each other:
/// they may overlap and need not be ordered relative to one another.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CutRange {
    pub start: f64,
    pub end: f64,
}

impl CutRange {
    pub fn new(start: f64, end: f64) -> Self {
        Self { start, end }
    }

    /// Start is strictly before end.
    pub fn is_ordered(&self) -> bool {
        self.start < self.end
    }

    /// Range ends within a source of the given duration.
    pub fn fits(&self, duration: f64) -> bool {
        self.end <= duration
    }
}

/// Uniform success value returned by every handler.
#[derive(Debug, Clone)]
pub struct EditOutcome {
    /// Human-readable status line for the UI.
    pub status: String,
    /// Paths of the files written by this request.
    pub artifacts: Vec<PathBuf>,
}

impl EditOutcome {
    pub fn new(status: impl Into<String>, artifacts: Vec<PathBuf>) -> Self {
        Self {
            status: status.into(),
            artifacts,
        }
    }
}
