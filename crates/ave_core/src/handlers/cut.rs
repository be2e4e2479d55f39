//! Three-way cut handler.

use crate::media;
use crate::models::{CutRange, EditOutcome, SourceVideo};
use crate::outputs::{OutputNamespace, CUT_FILENAMES};

use super::errors::{EditError, EditResult};

/// Extract three sub-ranges from one source.
///
/// The ranges are independent: they may overlap and need not be ordered
/// relative to one another. Validation checks ordering on every range
/// first, then bounds against the probed duration, so an out-of-order
/// range is always reported before an out-of-bounds one.
///
/// The first collaborator failure aborts the whole call; files already
/// written by earlier extractions are left in place.
pub fn cut(
    source: &SourceVideo,
    ranges: &[CutRange; 3],
    outputs: &OutputNamespace,
) -> EditResult<EditOutcome> {
    for range in ranges {
        if !range.is_ordered() {
            return Err(EditError::InvalidRange {
                start: range.start,
                end: range.end,
            });
        }
    }

    if ranges.iter().any(|r| !r.fits(source.duration)) {
        return Err(EditError::DurationExceeded {
            duration: source.duration,
        });
    }

    let mut artifacts = Vec::with_capacity(CUT_FILENAMES.len());
    for (range, filename) in ranges.iter().zip(CUT_FILENAMES) {
        let output = outputs.path_for(filename);
        media::extract_range(&source.path, *range, &output)?;
        artifacts.push(output);
    }

    Ok(EditOutcome::new("Cuts successful.", artifacts))
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

    fn source(duration: f64) -> SourceVideo {
        SourceVideo::new("/no/such/source.mp4", duration)
    }

    #[test]
    fn unordered_range_is_rejected() {
        let (_root, ns) = namespace();
        let ranges = [
            CutRange::new(0.0, 5.0),
            CutRange::new(9.0, 4.0),
            CutRange::new(6.0, 8.0),
        ];

        let err = cut(&source(60.0), &ranges, &ns).unwrap_err();
        assert!(matches!(err, EditError::InvalidRange { .. }));
    }

    #[test]
    fn empty_range_is_rejected() {
        let (_root, ns) = namespace();
        let ranges = [
            CutRange::new(5.0, 5.0),
            CutRange::new(0.0, 1.0),
            CutRange::new(0.0, 1.0),
        ];

        let err = cut(&source(60.0), &ranges, &ns).unwrap_err();
        assert!(matches!(err, EditError::InvalidRange { .. }));
    }

    #[test]
    fn out_of_bounds_range_reports_measured_duration() {
        let (_root, ns) = namespace();
        let ranges = [
            CutRange::new(0.0, 5.0),
            CutRange::new(10.0, 99.0),
            CutRange::new(6.0, 8.0),
        ];

        let err = cut(&source(63.52), &ranges, &ns).unwrap_err();
        assert!(matches!(err, EditError::DurationExceeded { .. }));
        assert!(err.to_string().contains("63.52"));
    }

    #[test]
    fn ordering_is_checked_before_bounds() {
        // Second range is both unordered and out of bounds; ordering wins.
        let (_root, ns) = namespace();
        let ranges = [
            CutRange::new(0.0, 5.0),
            CutRange::new(99.0, 98.0),
            CutRange::new(6.0, 8.0),
        ];

        let err = cut(&source(60.0), &ranges, &ns).unwrap_err();
        assert!(matches!(err, EditError::InvalidRange { .. }));
    }

    #[test]
    fn valid_ranges_reach_the_collaborator() {
        // Source path does not exist, so the first extraction fails at the
        // collaborator boundary rather than in validation.
        let (_root, ns) = namespace();
        let ranges = [
            CutRange::new(0.0, 5.0),
            CutRange::new(10.0, 15.0),
            CutRange::new(20.0, 25.0),
        ];

        let err = cut(&source(60.0), &ranges, &ns).unwrap_err();
        assert!(matches!(err, EditError::Media(MediaError::FileNotFound(_))));
    }

    #[test]
    fn range_end_equal_to_duration_is_in_bounds() {
        let (_root, ns) = namespace();
        let ranges = [
            CutRange::new(0.0, 60.0),
            CutRange::new(0.0, 1.0),
            CutRange::new(0.0, 1.0),
        ];

        // Passes validation, fails only at the missing source file.
        let err = cut(&source(60.0), &ranges, &ns).unwrap_err();
        assert!(matches!(err, EditError::Media(_)));
    }
}
