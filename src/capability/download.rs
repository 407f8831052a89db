//! Download sink trait for delivering transformed files

use eyre::Result;
use std::path::PathBuf;

/// Local delivery side-channel for a transformed file.
///
/// The workflow hands the sink the response bytes and a generated
/// filename; the sink decides where and how the "download" lands. The
/// production implementation writes into the download directory on disk.
pub trait DownloadSink: Send + Sync {
    /// Deliver the bytes under the given filename.
    ///
    /// Returns the path the file landed at.
    ///
    /// # Errors
    /// Returns an error if the delivery target cannot be written.
    fn deliver(&self, bytes: &[u8], filename: &str) -> Result<PathBuf>;
}
