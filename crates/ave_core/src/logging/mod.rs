//! Logging infrastructure.
//!
//! Application-wide logging goes through the `tracing` ecosystem; the
//! level comes from configuration and can be overridden with RUST_LOG.
//! Output goes to stderr and to a daily-rolling file in the configured
//! logs folder.

use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Application log level.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    Trace,
    Debug,
    #[default]
    Info,
    Warn,
    Error,
}

/// Initialize the global tracing subscriber with stderr and file output.
///
/// Respects the RUST_LOG environment variable, falling back to the
/// provided default level. Besides stderr, log lines go to a
/// daily-rolling file under `logs_dir`. The returned guard flushes
/// buffered lines on drop; keep it alive for the lifetime of the
/// application. Should be called once at application startup.
pub fn init_tracing_with_file(default_level: LogLevel, logs_dir: &Path) -> WorkerGuard {
    let file_appender = tracing_appender::rolling::daily(logs_dir, "advanced-video-editor.log");
    let (file_writer, guard) = tracing_appender::non_blocking(file_appender);

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(level_to_filter_str(default_level)));

    let _ = tracing_subscriber::registry()
        .with(fmt::layer().with_target(true).with_thread_ids(false))
        .with(fmt::layer().with_writer(file_writer).with_ansi(false))
        .with(filter)
        .try_init();

    guard
}

/// Convert LogLevel to filter string.
fn level_to_filter_str(level: LogLevel) -> &'static str {
    match level {
        LogLevel::Trace => "trace",
        LogLevel::Debug => "debug",
        LogLevel::Info => "info",
        LogLevel::Warn => "warn",
        LogLevel::Error => "error",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn level_to_filter_works() {
        assert_eq!(level_to_filter_str(LogLevel::Debug), "debug");
        assert_eq!(level_to_filter_str(LogLevel::Info), "info");
    }

    #[test]
    fn file_logging_writes_into_logs_dir() {
        let dir = tempfile::tempdir().unwrap();
        let guard = init_tracing_with_file(LogLevel::Info, dir.path());

        tracing::info!("startup line");
        drop(guard);

        let entries: Vec<_> = std::fs::read_dir(dir.path())
            .unwrap()
            .filter_map(|e| e.ok())
            .collect();
        assert!(!entries.is_empty());
    }

    #[test]
    fn level_deserializes_from_lowercase() {
        #[derive(Deserialize)]
        struct Wrapper {
            level: LogLevel,
        }
        let wrapper: Wrapper = toml::from_str("level = \"warn\"").unwrap();
        assert_eq!(wrapper.level, LogLevel::Warn);
    }
}
