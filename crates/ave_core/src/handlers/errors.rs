//! Error types for the edit handlers.
//!
//! Validation failures keep their own variants so callers can tell them
//! apart from collaborator failures; the UI only renders the Display text.

use thiserror::Error;

use crate::media::MediaError;

/// Closed error set for the three edit operations.
#[derive(Error, Debug)]
pub enum EditError {
    /// A cut range with start >= end.
    #[error("Start time must be less than end time.")]
    InvalidRange { start: f64, end: f64 },

    /// A cut range extends past the measured source duration.
    #[error("One or more cuts exceed the video duration ({duration:.2} seconds).")]
    DurationExceeded { duration: f64 },

    /// A merge input was not provided.
    #[error("Please upload all three videos.")]
    MissingInput,

    /// Quality label outside the closed preset set.
    #[error("Invalid quality selection.")]
    InvalidPreset { label: String },

    /// The media collaborator failed.
    #[error(transparent)]
    Media(#[from] MediaError),
}

/// Result type for handler operations.
pub type EditResult<T> = Result<T, EditError>;
