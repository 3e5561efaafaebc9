//! Archive creation reporting.

use crate::types::Encryption;
use std::path::PathBuf;
use std::time::Duration;

/// Report of an archive creation operation.
///
/// # Examples
///
/// ```
/// use dirzip_core::CreationReport;
///
/// let mut report = CreationReport::default();
/// report.files_added = 2;
/// report.directories_added = 1;
/// report.bytes_written = 1024;
/// report.bytes_compressed = 512;
///
/// assert_eq!(report.entries_written(), 3);
/// assert_eq!(report.compression_ratio(), 2.0);
/// ```
#[derive(Debug, Clone, Default)]
pub struct CreationReport {
    /// Path of the archive that was written.
    pub archive_path: PathBuf,

    /// Number of files added to the archive.
    pub files_added: usize,

    /// Number of directories added to the archive.
    pub directories_added: usize,

    /// Total bytes of file content read (uncompressed).
    pub bytes_written: u64,

    /// Size of the finished archive on disk.
    pub bytes_compressed: u64,

    /// `Some` when file entries were encrypted.
    pub encryption: Option<Encryption>,

    /// Duration of the creation operation.
    pub duration: Duration,

    /// Warnings generated during creation, such as skipped symlinks.
    pub warnings: Vec<String>,
}

impl CreationReport {
    /// Creates a new empty creation report.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of entries written: files plus directories.
    #[must_use]
    pub fn entries_written(&self) -> usize {
        self.files_added + self.directories_added
    }

    /// Adds a warning message to the report.
    pub fn add_warning(&mut self, msg: impl Into<String>) {
        self.warnings.push(msg.into());
    }

    /// Returns whether any warnings were generated.
    #[must_use]
    pub fn has_warnings(&self) -> bool {
        !self.warnings.is_empty()
    }

    /// Returns the compression ratio (uncompressed / archive size).
    ///
    /// Returns 0.0 if either side is 0.
    #[must_use]
    pub fn compression_ratio(&self) -> f64 {
        if self.bytes_compressed == 0 || self.bytes_written == 0 {
            return 0.0;
        }
        self.bytes_written as f64 / self.bytes_compressed as f64
    }

    /// Returns the space saved as a percentage of the uncompressed size.
    ///
    /// Small inputs grow once zip headers are added; the result is then 0.
    #[must_use]
    pub fn compression_percentage(&self) -> f64 {
        if self.bytes_written == 0 {
            return 0.0;
        }
        let saved = self.bytes_written.saturating_sub(self.bytes_compressed);
        (saved as f64 / self.bytes_written as f64) * 100.0
    }
}
