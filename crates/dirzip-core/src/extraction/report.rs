//! Extraction operation reporting.

use crate::types::Encryption;
use std::path::PathBuf;
use std::time::Duration;

/// Report of an archive extraction operation.
#[derive(Debug, Clone, Default)]
pub struct ExtractionReport {
    /// Directory the archive was extracted into.
    pub dest_dir: PathBuf,

    /// Number of files written.
    pub files_extracted: usize,

    /// Number of directory entries created.
    pub directories_created: usize,

    /// Total bytes written to disk.
    pub bytes_written: u64,

    /// Entry names rejected as unsafe, as stored in the archive.
    pub rejected: Vec<String>,

    /// Encryption found in the archive.
    pub encryption: Option<Encryption>,

    /// Duration of the extraction operation.
    pub duration: Duration,

    /// Warnings generated during extraction.
    pub warnings: Vec<String>,
}

impl ExtractionReport {
    /// Creates a new empty extraction report.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Entries written to disk. Rejected entries are not counted.
    ///
    /// # Examples
    ///
    /// ```
    /// use dirzip_core::ExtractionReport;
    ///
    /// let mut report = ExtractionReport::new();
    /// report.files_extracted = 2;
    /// report.directories_created = 1;
    /// report.reject("../evil.txt");
    ///
    /// assert_eq!(report.entries_written(), 3);
    /// assert_eq!(report.rejected, vec!["../evil.txt"]);
    /// ```
    #[must_use]
    pub fn entries_written(&self) -> usize {
        self.files_extracted + self.directories_created
    }

    /// Records an unsafe entry and a matching warning.
    pub fn reject(&mut self, name: impl Into<String>) {
        let name = name.into();
        self.warnings.push(format!("Rejected unsafe entry: {name}"));
        self.rejected.push(name);
    }

    /// Adds a warning message to the report.
    pub fn add_warning(&mut self, message: impl Into<String>) {
        self.warnings.push(message.into());
    }

    /// Returns whether any warnings were generated.
    #[must_use]
    pub fn has_warnings(&self) -> bool {
        !self.warnings.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default() {
        let report = ExtractionReport::default();
        assert_eq!(report.entries_written(), 0);
        assert!(report.rejected.is_empty());
        assert!(!report.has_warnings());
    }

    #[test]
    fn test_reject_adds_warning() {
        let mut report = ExtractionReport::new();
        report.reject("/etc/passwd");
        assert!(report.has_warnings());
        assert!(report.warnings[0].contains("/etc/passwd"));
        assert_eq!(report.entries_written(), 0);
    }
}
