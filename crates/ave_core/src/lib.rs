//! AVE Core - Backend logic for Advanced Video Editor
//!
//! This crate contains all business logic with zero UI dependencies:
//! the three edit handlers (cut, merge, resolution change), the ffmpeg
//! collaborator boundary, output namespacing, configuration, and logging.

pub mod config;
pub mod handlers;
pub mod logging;
pub mod media;
pub mod models;
pub mod outputs;

/// Returns the crate version.
pub fn version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn version_returns_value() {
        assert!(!version().is_empty());
    }
}
