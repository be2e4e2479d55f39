//! Source probing using ffprobe.
//!
//! Reads container duration and first-video-stream dimensions from the
//! JSON output of `ffprobe -show_format -show_streams`.

use std::path::Path;
use std::process::Command;

use serde_json::Value;

use super::{MediaError, MediaResult};
use crate::models::SourceVideo;

/// Probe a source file for duration and video dimensions.
pub fn probe_source(path: &Path) -> MediaResult<SourceVideo> {
    if !path.exists() {
        return Err(MediaError::FileNotFound(path.to_path_buf()));
    }

    tracing::debug!("Probing source: {}", path.display());

    let output = Command::new("ffprobe")
        .args([
            "-v",
            "error",
            "-print_format",
            "json",
            "-show_format",
            "-show_streams",
        ])
        .arg(path)
        .output()
        .map_err(|e| MediaError::tool_launch_failed("ffprobe", e))?;

    if !output.status.success() {
        let stderr = String::from_utf8_lossy(&output.stderr);
        return Err(MediaError::command_failed(
            "ffprobe",
            output.status.code().unwrap_or(-1),
            stderr,
        ));
    }

    let json: Value = serde_json::from_slice(&output.stdout)
        .map_err(|e| MediaError::parse_error("ffprobe", e.to_string()))?;

    parse_probe_json(&json, path)
}

/// Parse the JSON output from ffprobe.
fn parse_probe_json(json: &Value, path: &Path) -> MediaResult<SourceVideo> {
    // ffprobe reports duration as a decimal string in format properties.
    let duration = json
        .get("format")
        .and_then(|f| f.get("duration"))
        .and_then(|d| d.as_str())
        .and_then(|s| s.parse::<f64>().ok())
        .ok_or_else(|| {
            MediaError::parse_error("ffprobe", format!("no duration reported for {}", path.display()))
        })?;

    let mut source = SourceVideo::new(path, duration);

    // Dimensions come from the first video stream, when there is one.
    if let Some(streams) = json.get("streams").and_then(|s| s.as_array()) {
        if let Some(video) = streams
            .iter()
            .find(|s| s.get("codec_type").and_then(|t| t.as_str()) == Some("video"))
        {
            source.width = video.get("width").and_then(|w| w.as_u64()).map(|w| w as u32);
            source.height = video
                .get("height")
                .and_then(|h| h.as_u64())
                .map(|h| h as u32);
        }
    }

    Ok(source)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_duration_and_dimensions() {
        let json: Value = serde_json::from_str(
            r#"{
                "streams": [
                    {"codec_type": "audio", "sample_rate": "48000"},
                    {"codec_type": "video", "width": 1920, "height": 1080}
                ],
                "format": {"duration": "63.520000"}
            }"#,
        )
        .unwrap();

        let source = parse_probe_json(&json, Path::new("clip.mp4")).unwrap();
        assert!((source.duration - 63.52).abs() < 1e-9);
        assert_eq!(source.width, Some(1920));
        assert_eq!(source.height, Some(1080));
    }

    #[test]
    fn audio_only_source_has_no_dimensions() {
        let json: Value = serde_json::from_str(
            r#"{
                "streams": [{"codec_type": "audio"}],
                "format": {"duration": "10.0"}
            }"#,
        )
        .unwrap();

        let source = parse_probe_json(&json, Path::new("track.m4a")).unwrap();
        assert_eq!(source.width, None);
        assert_eq!(source.height, None);
    }

    #[test]
    fn missing_duration_is_a_parse_error() {
        let json: Value = serde_json::from_str(r#"{"format": {}}"#).unwrap();

        let err = parse_probe_json(&json, Path::new("clip.mp4")).unwrap_err();
        assert!(matches!(err, MediaError::ParseError { .. }));
    }

    #[test]
    fn nonexistent_file_is_rejected_before_running_ffprobe() {
        let err = probe_source(Path::new("/no/such/file.mp4")).unwrap_err();
        assert!(matches!(err, MediaError::FileNotFound(_)));
    }
}
