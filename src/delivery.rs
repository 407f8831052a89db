//! Local download delivery
//!
//! The transformed PDF comes back as raw bytes; delivery writes them into
//! the download directory through a scoped temporary file, so the target
//! name only ever appears fully written.

use crate::capability::DownloadSink;
use eyre::{Context, Result};
use std::io::Write;
use std::path::{Path, PathBuf};
use tempfile::NamedTempFile;

/// Download sink that saves transformed files into a local directory.
///
/// Each delivery acquires a temporary file in the target directory,
/// writes the bytes, and persists it to the final name. The temporary
/// file is released exactly once: renamed on success, removed on drop if
/// any step fails first.
pub struct DiskDownloadSink {
    dir: PathBuf,
}

impl DiskDownloadSink {
    /// Create a sink targeting the given directory.
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    /// The download directory.
    pub fn dir(&self) -> &Path {
        &self.dir
    }
}

impl DownloadSink for DiskDownloadSink {
    fn deliver(&self, bytes: &[u8], filename: &str) -> Result<PathBuf> {
        std::fs::create_dir_all(&self.dir).with_context(|| {
            format!("Failed to create download directory: {}", self.dir.display())
        })?;

        let target = self.dir.join(filename);

        let mut temp = NamedTempFile::new_in(&self.dir).with_context(|| {
            format!("Failed to create temporary file in {}", self.dir.display())
        })?;
        temp.write_all(bytes)
            .with_context(|| "Failed to write transformed file")?;
        temp.persist(&target)
            .with_context(|| format!("Failed to save {}", target.display()))?;

        log::info!("✓ Saved transformed file to {}", target.display());

        Ok(target)
    }
}

/// Build the download filename for a transformed CV.
///
/// A trailing `.pdf` on the original name is stripped case-insensitively
/// before wrapping: `resume.pdf` becomes `CV_resume_Transformed.pdf`.
pub fn transformed_filename(original_name: &str) -> String {
    let len = original_name.len();
    let base = if len >= 4
        && original_name.is_char_boundary(len - 4)
        && original_name[len - 4..].eq_ignore_ascii_case(".pdf")
    {
        &original_name[..len - 4]
    } else {
        original_name
    };
    format!("CV_{}_Transformed.pdf", base)
}
