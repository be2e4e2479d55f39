//! Three-way merge handler.

use std::path::PathBuf;

use crate::media;
use crate::models::EditOutcome;
use crate::outputs::{OutputNamespace, MERGED_FILENAME};

use super::errors::{EditError, EditResult};

/// Concatenate three sources in literal argument order.
///
/// Playback order is the argument order; inputs are never reordered.
/// Mismatched resolutions or frame rates between the inputs are the
/// collaborator's concern, not validated here.
pub fn merge(
    sources: &[Option<PathBuf>; 3],
    outputs: &OutputNamespace,
) -> EditResult<EditOutcome> {
    let mut inputs = Vec::with_capacity(sources.len());
    for source in sources {
        match source {
            Some(path) => inputs.push(path.as_path()),
            None => return Err(EditError::MissingInput),
        }
    }

    let output = outputs.path_for(MERGED_FILENAME);
    media::concatenate(&inputs, &output)?;

    Ok(EditOutcome::new("Merging successful!", vec![output]))
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

    #[test]
    fn any_absent_input_is_rejected() {
        let (_root, ns) = namespace();
        let present = || Some(PathBuf::from("/no/such/clip.mp4"));

        for absent_idx in 0..3 {
            let mut sources = [present(), present(), present()];
            sources[absent_idx] = None;

            let err = merge(&sources, &ns).unwrap_err();
            assert!(matches!(err, EditError::MissingInput));
        }
    }

    #[test]
    fn all_present_reaches_the_collaborator() {
        let (_root, ns) = namespace();
        let sources = [
            Some(PathBuf::from("/no/such/a.mp4")),
            Some(PathBuf::from("/no/such/b.mp4")),
            Some(PathBuf::from("/no/such/c.mp4")),
        ];

        let err = merge(&sources, &ns).unwrap_err();
        assert!(matches!(err, EditError::Media(MediaError::FileNotFound(_))));
    }
}
