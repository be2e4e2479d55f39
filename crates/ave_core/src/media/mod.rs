//! External media collaborator boundary.
//!
//! All decoding, frame seeking, scaling, encoding, and multiplexing is
//! owned by the ffmpeg/ffprobe command-line tools; this module wraps
//! them behind typed operations. Every write re-encodes with the fixed
//! libx264/aac codec pair.

mod ffmpeg;
mod probe;

pub use ffmpeg::{concatenate, extract_range, resize_and_encode};
pub use probe::probe_source;

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Video codec used for every write.
pub const VIDEO_CODEC: &str = "libx264";

/// Audio codec used for every write.
pub const AUDIO_CODEC: &str = "aac";

/// Error type for collaborator operations.
#[derive(Error, Debug)]
pub enum MediaError {
    /// Input file does not exist.
    #[error("File not found: {0}")]
    FileNotFound(PathBuf),

    /// The tool could not be launched at all (not installed, not in PATH).
    #[error("Failed to run {tool}: {source}")]
    ToolLaunchFailed {
        tool: String,
        #[source]
        source: io::Error,
    },

    /// The tool ran but exited with a failure.
    #[error("{tool} failed with exit code {exit_code}: {message}")]
    CommandFailed {
        tool: String,
        exit_code: i32,
        message: String,
    },

    /// Tool output could not be interpreted.
    #[error("Failed to parse {tool} output: {message}")]
    ParseError { tool: String, message: String },

    /// The tool reported success but the output file is missing or empty.
    #[error("Output file missing or empty: {0}")]
    OutputMissing(PathBuf),

    /// File I/O error around a collaborator call.
    #[error("I/O error in {operation}: {source}")]
    Io {
        operation: String,
        #[source]
        source: io::Error,
    },
}

impl MediaError {
    /// Create a tool launch failure.
    pub fn tool_launch_failed(tool: impl Into<String>, source: io::Error) -> Self {
        Self::ToolLaunchFailed {
            tool: tool.into(),
            source,
        }
    }

    /// Create a command failed error.
    pub fn command_failed(
        tool: impl Into<String>,
        exit_code: i32,
        message: impl Into<String>,
    ) -> Self {
        Self::CommandFailed {
            tool: tool.into(),
            exit_code,
            message: message.into(),
        }
    }

    /// Create a parse error.
    pub fn parse_error(tool: impl Into<String>, message: impl Into<String>) -> Self {
        Self::ParseError {
            tool: tool.into(),
            message: message.into(),
        }
    }

    /// Create an I/O error with operation context.
    pub fn io(operation: impl Into<String>, source: io::Error) -> Self {
        Self::Io {
            operation: operation.into(),
            source,
        }
    }
}

/// Result type for collaborator operations.
pub type MediaResult<T> = Result<T, MediaError>;
