//! Per-request output namespacing.
//!
//! Every request writes its artifacts into a fresh uuid-named directory
//! under the configured output root, so concurrent requests can never
//! collide on the literal artifact filenames. Re-running a request inside
//! its own namespace overwrites cleanly (ffmpeg is always invoked with -y).

use std::fs;
use std::path::{Path, PathBuf};

use uuid::Uuid;

use crate::media::{MediaError, MediaResult};

/// Artifact filenames written by the cut handler, in range order.
pub const CUT_FILENAMES: [&str; 3] = ["cut1.mp4", "cut2.mp4", "cut3.mp4"];

/// Artifact filename written by the merge handler.
pub const MERGED_FILENAME: &str = "merged_video.mp4";

/// Artifact filename written by the resolution handler.
pub const RESIZED_FILENAME: &str = "output_video.mp4";

/// A per-request output directory.
#[derive(Debug, Clone)]
pub struct OutputNamespace {
    request_id: Uuid,
    dir: PathBuf,
}

impl OutputNamespace {
    /// Create a fresh namespace directory under `root`.
    pub fn create_under(root: &Path) -> MediaResult<Self> {
        let request_id = Uuid::new_v4();
        let dir = root.join(request_id.to_string());
        fs::create_dir_all(&dir).map_err(|e| MediaError::io("create output namespace", e))?;

        tracing::debug!("Created output namespace {}", dir.display());

        Ok(Self { request_id, dir })
    }

    /// Unique id of the request this namespace belongs to.
    pub fn request_id(&self) -> Uuid {
        self.request_id
    }

    /// The namespace directory.
    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Full path for an artifact filename inside this namespace.
    pub fn path_for(&self, filename: &str) -> PathBuf {
        self.dir.join(filename)
    }
}
