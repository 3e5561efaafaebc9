//! High-level public API for archive creation and extraction.

use std::path::Path;

use crate::CreationConfig;
use crate::CreationReport;
use crate::ExtractionConfig;
use crate::ExtractionReport;
use crate::Result;
use crate::progress::NoopProgress;
use crate::progress::ProgressCallback;

/// Zips `source_folder` into the archive at `dest_path`.
///
/// # Errors
///
/// See [`create_archive_with_progress`].
///
/// # Examples
///
/// ```no_run
/// use dirzip_core::CreationConfig;
/// use dirzip_core::create_archive;
///
/// # fn main() -> Result<(), Box<dyn std::error::Error>> {
/// let report = create_archive("docs", "docs.zip", &CreationConfig::default())?;
/// println!("Created archive with {} entries", report.entries_written());
/// # Ok(())
/// # }
/// ```
pub fn create_archive<P: AsRef<Path>, Q: AsRef<Path>>(
    source_folder: P,
    dest_path: Q,
    config: &CreationConfig,
) -> Result<CreationReport> {
    create_archive_with_progress(source_folder, dest_path, config, &mut NoopProgress)
}

/// Zips `source_folder` into `dest_path`, reporting progress per entry.
///
/// # Errors
///
/// Returns an error if:
/// - the source folder does not exist or is not a directory
/// - the configuration is invalid
/// - the archive cannot be written
/// - a source file cannot be read
/// - the operation was cancelled
pub fn create_archive_with_progress<P: AsRef<Path>, Q: AsRef<Path>>(
    source_folder: P,
    dest_path: Q,
    config: &CreationConfig,
    progress: &mut dyn ProgressCallback,
) -> Result<CreationReport> {
    crate::creation::zip::create_zip(
        source_folder.as_ref(),
        dest_path.as_ref(),
        config,
        progress,
    )
}

/// Extracts `archive_path` into `dest_folder`.
///
/// `dest_folder` is used as given; use [`crate::naming::extract_dir_for`] to
/// get the conventional `<name>-unzip` directory.
///
/// # Errors
///
/// See [`extract_archive_with_progress`].
///
/// # Examples
///
/// ```no_run
/// use dirzip_core::ExtractionConfig;
/// use dirzip_core::Password;
/// use dirzip_core::extract_archive;
///
/// # fn main() -> Result<(), Box<dyn std::error::Error>> {
/// let config = ExtractionConfig::default().with_password(Some(Password::new("abc123")?));
/// let report = extract_archive("docs.zip", "docs-unzip", &config)?;
/// println!("Extracted {} files", report.files_extracted);
/// # Ok(())
/// # }
/// ```
pub fn extract_archive<P: AsRef<Path>, Q: AsRef<Path>>(
    archive_path: P,
    dest_folder: Q,
    config: &ExtractionConfig,
) -> Result<ExtractionReport> {
    extract_archive_with_progress(archive_path, dest_folder, config, &mut NoopProgress)
}

/// Extracts `archive_path` into `dest_folder`, reporting progress per entry.
///
/// # Errors
///
/// Returns an error if:
/// - the file is not a valid zip archive
/// - the archive is encrypted and the password is missing or wrong
/// - filesystem operations fail
/// - the operation was cancelled
///
/// Unsafe entry names are skipped and listed in the report instead.
pub fn extract_archive_with_progress<P: AsRef<Path>, Q: AsRef<Path>>(
    archive_path: P,
    dest_folder: Q,
    config: &ExtractionConfig,
    progress: &mut dyn ProgressCallback,
) -> Result<ExtractionReport> {
    crate::extraction::zip::extract_zip(
        archive_path.as_ref(),
        dest_folder.as_ref(),
        config,
        progress,
    )
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::progress::ProgressUpdate;
    use std::fs;
    use tempfile::TempDir;

    #[derive(Default)]
    struct Percents(Vec<f64>);

    impl ProgressCallback for Percents {
        fn on_progress(&mut self, update: &ProgressUpdate) {
            self.0.push(update.percent);
        }
    }

    #[test]
    #[allow(clippy::float_cmp)]
    fn test_round_trip_with_progress() {
        let temp = TempDir::new().unwrap();
        let source = temp.path().join("docs");
        fs::create_dir_all(source.join("sub")).unwrap();
        fs::write(source.join("a.txt"), "hello").unwrap();
        fs::write(source.join("sub/b.txt"), "0123456789").unwrap();

        let archive = temp.path().join("docs.zip");
        let mut created = Percents::default();
        create_archive_with_progress(&source, &archive, &CreationConfig::default(), &mut created)
            .unwrap();
        assert_eq!(created.0.len(), 3);
        assert_eq!(created.0.last().copied(), Some(100.0));

        let dest = temp.path().join("docs-unzip");
        let mut extracted = Percents::default();
        let report = extract_archive_with_progress(
            &archive,
            &dest,
            &ExtractionConfig::default(),
            &mut extracted,
        )
        .unwrap();
        assert_eq!(report.entries_written(), 3);
        assert_eq!(extracted.0.last().copied(), Some(100.0));
        assert!(extracted.0.windows(2).all(|w| w[0] <= w[1]));
    }

    #[test]
    fn test_wrappers_use_noop_progress() {
        let temp = TempDir::new().unwrap();
        let source = temp.path().join("empty");
        fs::create_dir(&source).unwrap();

        let archive = temp.path().join("empty.zip");
        let report = create_archive(&source, &archive, &CreationConfig::default()).unwrap();
        assert_eq!(report.entries_written(), 0);

        let report =
            extract_archive(&archive, temp.path().join("empty-unzip"), &ExtractionConfig::default())
                .unwrap();
        assert_eq!(report.entries_written(), 0);
        assert!(temp.path().join("empty-unzip").is_dir());
    }
}
