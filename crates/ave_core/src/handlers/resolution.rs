//! Resolution conversion handler.

use crate::media;
use crate::models::{EditOutcome, QualityPreset, SourceVideo};
use crate::outputs::{OutputNamespace, RESIZED_FILENAME};

use super::errors::{EditError, EditResult};

/// Status line reported on success, independent of the chosen preset.
const SUCCESS_STATUS: &str = "Conversion successful.";

/// Resize a source to a preset's exact pixel dimensions.
///
/// The label is parsed against the closed preset set; anything else is
/// a validation error. The resize is direct: aspect ratio is not
/// preserved.
pub fn change_resolution(
    source: &SourceVideo,
    quality_label: &str,
    outputs: &OutputNamespace,
) -> EditResult<EditOutcome> {
    let preset = QualityPreset::from_label(quality_label).ok_or_else(|| {
        EditError::InvalidPreset {
            label: quality_label.to_string(),
        }
    })?;

    let (width, height) = preset.dimensions();
    let output = outputs.path_for(RESIZED_FILENAME);
    media::resize_and_encode(&source.path, width, height, &output)?;

    Ok(EditOutcome::new(SUCCESS_STATUS, vec![output]))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::media::MediaError;
    use tempfile::tempdir;

    fn namespace() -> (tempfile::TempDir, OutputNamespace) {
        let root = tempdir().unwrap();
        let ns = OutputNamespace::create_under(root.path()).unwrap();
        (root, ns)
    }

    fn source() -> SourceVideo {
        SourceVideo::new("/no/such/source.mp4", 60.0)
    }

    #[test]
    fn unknown_label_is_rejected() {
        let (_root, ns) = namespace();

        let err = change_resolution(&source(), "8K", &ns).unwrap_err();
        assert!(matches!(err, EditError::InvalidPreset { .. }));
        assert_eq!(err.to_string(), "Invalid quality selection.");
    }

    #[test]
    fn success_status_does_not_mention_the_preset() {
        assert_eq!(SUCCESS_STATUS, "Conversion successful.");
    }

    #[test]
    fn known_label_reaches_the_collaborator() {
        let (_root, ns) = namespace();

        let err = change_resolution(&source(), "720p", &ns).unwrap_err();
        assert!(matches!(err, EditError::Media(MediaError::FileNotFound(_))));
    }
}
