//! Low-level ffmpeg command wrappers.
//!
//! Three operations back the edit handlers: range extraction,
//! concatenation via the concat demuxer, and resize-and-encode.
//! All of them re-encode with the fixed libx264/aac pair and overwrite
//! existing outputs (`-y`).

use std::fs;
use std::path::Path;
use std::process::Command;

use super::{MediaError, MediaResult, AUDIO_CODEC, VIDEO_CODEC};
use crate::models::CutRange;

/// Run ffmpeg with the given arguments.
fn run_ffmpeg(args: &[&str]) -> MediaResult<()> {
    tracing::debug!("Running: ffmpeg {}", args.join(" "));

    let output = Command::new("ffmpeg")
        .args(args)
        .output()
        .map_err(|e| MediaError::tool_launch_failed("ffmpeg", e))?;

    if !output.status.success() {
        let stderr = String::from_utf8_lossy(&output.stderr);
        return Err(MediaError::command_failed(
            "ffmpeg",
            output.status.code().unwrap_or(-1),
            stderr,
        ));
    }

    Ok(())
}

/// Verify an encode produced a non-empty output file.
fn verify_output(path: &Path) -> MediaResult<()> {
    match fs::metadata(path) {
        Ok(meta) if meta.len() > 0 => Ok(()),
        _ => Err(MediaError::OutputMissing(path.to_path_buf())),
    }
}

/// Extract a time range from a source into a new file.
pub fn extract_range(input: &Path, range: CutRange, output: &Path) -> MediaResult<()> {
    if !input.exists() {
        return Err(MediaError::FileNotFound(input.to_path_buf()));
    }

    let start = format!("{:.3}", range.start);
    let end = format!("{:.3}", range.end);
    let input_arg = input.to_string_lossy();
    let output_arg = output.to_string_lossy();

    // -ss after -i seeks on the decoded stream for frame accuracy.
    run_ffmpeg(&[
        "-y",
        "-i",
        input_arg.as_ref(),
        "-ss",
        &start,
        "-to",
        &end,
        "-c:v",
        VIDEO_CODEC,
        "-c:a",
        AUDIO_CODEC,
        output_arg.as_ref(),
    ])?;
    verify_output(output)?;

    tracing::info!(
        "Extracted {}-{}s from {} to {}",
        start,
        end,
        input.display(),
        output.display()
    );

    Ok(())
}

/// Concatenate sources in the given order into a single output.
///
/// Uses the concat demuxer with a generated list file placed next to the
/// output. Mismatched resolutions or frame rates between inputs are the
/// collaborator's concern, not validated here.
pub fn concatenate(inputs: &[&Path], output: &Path) -> MediaResult<()> {
    for input in inputs {
        if !input.exists() {
            return Err(MediaError::FileNotFound(input.to_path_buf()));
        }
    }

    let list_path = output.with_extension("concat.txt");
    let list_content: String = inputs
        .iter()
        .map(|p| format!("file '{}'\n", escape_concat_path(p)))
        .collect();
    fs::write(&list_path, list_content).map_err(|e| MediaError::io("write concat list", e))?;

    let list_arg = list_path.to_string_lossy().into_owned();
    let output_arg = output.to_string_lossy().into_owned();

    let result = run_ffmpeg(&[
        "-y",
        "-f",
        "concat",
        "-safe",
        "0",
        "-i",
        &list_arg,
        "-c:v",
        VIDEO_CODEC,
        "-c:a",
        AUDIO_CODEC,
        &output_arg,
    ]);
    let _ = fs::remove_file(&list_path);
    result?;
    verify_output(output)?;

    tracing::info!("Concatenated {} clips to {}", inputs.len(), output.display());

    Ok(())
}

/// Escape a path for a concat demuxer list entry.
///
/// Entries are wrapped in single quotes; an embedded quote must be
/// closed, backslash-escaped, and reopened.
fn escape_concat_path(path: &Path) -> String {
    path.to_string_lossy().replace('\'', r"'\''")
}

/// Resize a source to exact pixel dimensions and encode it.
///
/// A direct resize: aspect ratio is not preserved, no letterboxing.
pub fn resize_and_encode(input: &Path, width: u32, height: u32, output: &Path) -> MediaResult<()> {
    if !input.exists() {
        return Err(MediaError::FileNotFound(input.to_path_buf()));
    }

    let scale = format!("scale={}:{}", width, height);
    let input_arg = input.to_string_lossy();
    let output_arg = output.to_string_lossy();

    run_ffmpeg(&[
        "-y",
        "-i",
        input_arg.as_ref(),
        "-vf",
        &scale,
        "-c:v",
        VIDEO_CODEC,
        "-c:a",
        AUDIO_CODEC,
        output_arg.as_ref(),
    ])?;
    verify_output(output)?;

    tracing::info!(
        "Resized {} to {}x{} at {}",
        input.display(),
        width,
        height,
        output.display()
    );

    Ok(())
}
