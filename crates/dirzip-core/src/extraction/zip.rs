//! Zip archive reader.
//!
//! Extraction runs in two phases. The password is first checked against
//! every encrypted entry, before the destination is touched. Entries are then
//! streamed one at a time: the name is sanitized, validated into a
//! [`SafePath`], and the content written atomically.

use crate::ArchiveError;
use crate::ExtractionConfig;
use crate::Result;
use crate::extraction::atomic::ExtractionGuard;
use crate::extraction::atomic::write_file_atomic;
use crate::extraction::report::ExtractionReport;
use crate::formats::zip::ZipReader;
use crate::formats::zip::detect_encryption;
use crate::formats::zip::is_encrypted;
use crate::formats::zip::map_read_error;
use crate::formats::zip::map_zip_error;
use crate::formats::zip::open_archive;
use crate::formats::zip::verify_password;
use crate::progress::ProgressCallback;
use crate::progress::ProgressReporter;
use crate::sanitize::sanitize_with;
use crate::types::DestDir;
use crate::types::SafePath;
use std::path::Path;
use std::time::Instant;
use tracing::debug;
use tracing::info;
use tracing::warn;

const COPY_BUFFER_SIZE: usize = 64 * 1024;

/// Extracts the zip archive at `archive_path` into `dest`.
///
/// `dest` is created if it does not exist and removed again if extraction
/// fails. Existing files with the same name as an entry are replaced; other
/// contents of `dest` are left alone.
///
/// # Examples
///
/// ```no_run
/// use dirzip_core::ExtractionConfig;
/// use dirzip_core::extraction::zip::extract_zip;
/// use dirzip_core::progress::NoopProgress;
/// use std::path::Path;
///
/// let report = extract_zip(
///     Path::new("docs.zip"),
///     Path::new("docs-unzip"),
///     &ExtractionConfig::default(),
///     &mut NoopProgress,
/// )?;
/// println!("Extracted {} entries", report.entries_written());
/// # Ok::<(), dirzip_core::ArchiveError>(())
/// ```
///
/// # Errors
///
/// - `ArchiveFormat` if the file is not a zip archive
/// - `Authentication` if the archive is encrypted and the password is
///   missing or wrong, or encrypted data fails its integrity check
/// - `Io` for filesystem failures
/// - `Cancelled` if the configured token fires
///
/// Unsafe entry names are not errors: they are skipped and listed in
/// [`ExtractionReport::rejected`]. Conflicting entry kinds are fatal: a file
/// entry `a` followed by `a/b.txt` fails with `Io` and the destination is
/// cleaned up like any other failure.
pub fn extract_zip(
    archive_path: &Path,
    dest: &Path,
    config: &ExtractionConfig,
    progress: &mut dyn ProgressCallback,
) -> Result<ExtractionReport> {
    let start = Instant::now();

    let mut archive = open_archive(archive_path)?;
    let encryption = detect_encryption(&mut archive, archive_path)?;
    verify_password(&mut archive, archive_path, config.password.as_ref())?;

    info!(
        archive = %archive_path.display(),
        dest = %dest.display(),
        entries = archive.len(),
        encrypted = encryption.is_some(),
        "extracting archive"
    );

    let guard = ExtractionGuard::prepare(dest)?;
    let dest_dir = DestDir::new(guard.path())?;

    let mut report = ExtractionReport {
        dest_dir: dest.to_path_buf(),
        encryption,
        ..ExtractionReport::default()
    };
    let mut reporter = ProgressReporter::new(progress, archive.len());

    extract_entries(
        &mut archive,
        archive_path,
        &dest_dir,
        config,
        &mut report,
        &mut reporter,
    )?;

    guard.commit();
    report.duration = start.elapsed();
    reporter.complete();

    info!(
        entries = report.entries_written(),
        rejected = report.rejected.len(),
        bytes = report.bytes_written,
        "archive extracted"
    );

    Ok(report)
}

fn extract_entries(
    archive: &mut ZipReader,
    archive_path: &Path,
    dest_dir: &DestDir,
    config: &ExtractionConfig,
    report: &mut ExtractionReport,
    reporter: &mut ProgressReporter<'_>,
) -> Result<()> {
    let mut buffer = vec![0u8; COPY_BUFFER_SIZE];

    for index in 0..archive.len() {
        config.check_cancelled()?;

        let encrypted = is_encrypted(archive, archive_path, index)?;
        let opened = match (encrypted, config.password.as_ref()) {
            (true, Some(password)) => archive.by_index_decrypt(index, password.as_bytes()),
            (true, None) => {
                return Err(ArchiveError::Authentication {
                    path: archive_path.to_path_buf(),
                });
            }
            (false, _) => archive.by_index(index),
        };
        let mut file = opened.map_err(|e| map_zip_error(archive_path, e))?;

        let raw_name = file.name().to_string();
        reporter.start(&raw_name);

        let sanitized = sanitize_with(&raw_name, config.name_policy);
        match SafePath::validate(&sanitized, dest_dir) {
            Ok(safe) => {
                let target = dest_dir.join(&safe);
                if file.is_dir() {
                    std::fs::create_dir_all(&target)?;
                    report.directories_created += 1;
                } else {
                    if let Some(parent) = target.parent() {
                        std::fs::create_dir_all(parent)?;
                    }
                    let written = write_file_atomic(&target, &mut file, &mut buffer, |e| {
                        map_read_error(archive_path, e, encrypted)
                    })?;
                    report.files_extracted += 1;
                    report.bytes_written += written;
                }
                debug!(entry = %raw_name, path = %safe.as_path().display(), "entry extracted");
            }
            Err(e) if e.is_recoverable() => {
                warn!(entry = %raw_name, "rejected unsafe entry");
                report.reject(raw_name);
            }
            Err(e) => return Err(e),
        }

        reporter.advance();
    }

    Ok(())
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::Password;
    use crate::progress::NoopProgress;
    use crate::sanitize::NamePolicy;
    use std::fs;
    use std::io::Write;
    use tempfile::TempDir;
    use zip::write::SimpleFileOptions;

    fn write_zip(path: &Path, entries: &[(&str, &[u8])]) {
        let mut zip = zip::ZipWriter::new(fs::File::create(path).unwrap());
        for (name, data) in entries {
            if name.ends_with('/') {
                zip.add_directory(*name, SimpleFileOptions::default())
                    .unwrap();
            } else {
                zip.start_file(*name, SimpleFileOptions::default()).unwrap();
                zip.write_all(data).unwrap();
            }
        }
        zip.finish().unwrap();
    }

    fn write_encrypted_zip(path: &Path, password: &str) {
        let mut zip = zip::ZipWriter::new(fs::File::create(path).unwrap());
        let options = SimpleFileOptions::default()
            .with_aes_encryption(zip::AesMode::Aes256, password);
        zip.start_file("secret.txt", options).unwrap();
        zip.write_all(b"top secret").unwrap();
        zip.finish().unwrap();
    }

    #[test]
    fn test_extract_plain() {
        let temp = TempDir::new().unwrap();
        let archive = temp.path().join("docs.zip");
        write_zip(
            &archive,
            &[("a.txt", b"hello"), ("sub/", b""), ("sub/b.txt", b"0123456789")],
        );

        let dest = temp.path().join("docs-unzip");
        let report =
            extract_zip(&archive, &dest, &ExtractionConfig::default(), &mut NoopProgress)
                .unwrap();

        assert_eq!(report.entries_written(), 3);
        assert_eq!(report.files_extracted, 2);
        assert_eq!(report.directories_created, 1);
        assert_eq!(report.bytes_written, 15);
        assert!(report.encryption.is_none());
        assert_eq!(fs::read(dest.join("a.txt")).unwrap(), b"hello");
        assert_eq!(fs::read(dest.join("sub/b.txt")).unwrap(), b"0123456789");
    }

    #[test]
    fn test_extract_rejects_traversal_and_continues() {
        let temp = TempDir::new().unwrap();
        let archive = temp.path().join("evil.zip");
        write_zip(
            &archive,
            &[
                ("../escape.txt", b"x"),
                ("/abs.txt", b"x"),
                ("ok.txt", b"fine"),
                ("a/../../b.txt", b"x"),
            ],
        );

        let dest = temp.path().join("out");
        let report =
            extract_zip(&archive, &dest, &ExtractionConfig::default(), &mut NoopProgress)
                .unwrap();

        assert_eq!(report.entries_written(), 1);
        assert_eq!(report.rejected.len(), 3);
        assert_eq!(fs::read(dest.join("ok.txt")).unwrap(), b"fine");
        assert!(!temp.path().join("escape.txt").exists());
        assert!(!temp.path().join("b.txt").exists());
    }

    #[test]
    fn test_extract_sanitizes_names() {
        let temp = TempDir::new().unwrap();
        let archive = temp.path().join("names.zip");
        write_zip(&archive, &[("dir\\what?.txt", b"q")]);

        let dest = temp.path().join("out");
        let config = ExtractionConfig::default().with_name_policy(NamePolicy::Portable);
        extract_zip(&archive, &dest, &config, &mut NoopProgress).unwrap();

        assert_eq!(fs::read(dest.join("dir").join("what_.txt")).unwrap(), b"q");
    }

    #[test]
    fn test_extract_encrypted_with_password() {
        let temp = TempDir::new().unwrap();
        let archive = temp.path().join("secret.zip");
        write_encrypted_zip(&archive, "abc123");

        let dest = temp.path().join("out");
        let config =
            ExtractionConfig::default().with_password(Some(Password::new("abc123").unwrap()));
        let report = extract_zip(&archive, &dest, &config, &mut NoopProgress).unwrap();

        assert!(report.encryption.is_some());
        assert_eq!(fs::read(dest.join("secret.txt")).unwrap(), b"top secret");
    }

    #[test]
    fn test_extract_wrong_password_writes_nothing() {
        let temp = TempDir::new().unwrap();
        let archive = temp.path().join("secret.zip");
        write_encrypted_zip(&archive, "abc123");

        let dest = temp.path().join("out");
        let config =
            ExtractionConfig::default().with_password(Some(Password::new("wrong1").unwrap()));
        let result = extract_zip(&archive, &dest, &config, &mut NoopProgress);

        assert!(matches!(result, Err(ArchiveError::Authentication { .. })));
        assert!(!dest.exists());
    }

    #[test]
    fn test_extract_missing_password() {
        let temp = TempDir::new().unwrap();
        let archive = temp.path().join("secret.zip");
        write_encrypted_zip(&archive, "abc123");

        let dest = temp.path().join("out");
        let result =
            extract_zip(&archive, &dest, &ExtractionConfig::default(), &mut NoopProgress);

        assert!(matches!(result, Err(ArchiveError::Authentication { .. })));
        assert!(!dest.exists());
    }

    #[test]
    fn test_extract_password_ignored_for_plain_archive() {
        let temp = TempDir::new().unwrap();
        let archive = temp.path().join("plain.zip");
        write_zip(&archive, &[("a.txt", b"hello")]);

        let dest = temp.path().join("out");
        let config =
            ExtractionConfig::default().with_password(Some(Password::new("unused").unwrap()));
        let report = extract_zip(&archive, &dest, &config, &mut NoopProgress).unwrap();
        assert_eq!(report.files_extracted, 1);
    }

    #[test]
    fn test_extract_not_a_zip() {
        let temp = TempDir::new().unwrap();
        let archive = temp.path().join("fake.zip");
        fs::write(&archive, "plain text").unwrap();

        let dest = temp.path().join("out");
        let result =
            extract_zip(&archive, &dest, &ExtractionConfig::default(), &mut NoopProgress);
        assert!(matches!(result, Err(ArchiveError::ArchiveFormat { .. })));
        assert!(!dest.exists());
    }

    #[test]
    fn test_extract_cancelled_removes_created_dest() {
        let temp = TempDir::new().unwrap();
        let archive = temp.path().join("docs.zip");
        write_zip(&archive, &[("a.txt", b"hello")]);

        let token = crate::CancelToken::new();
        token.cancel();
        let dest = temp.path().join("out");
        let config = ExtractionConfig::default().with_cancel(token);
        let result = extract_zip(&archive, &dest, &config, &mut NoopProgress);

        assert!(matches!(result, Err(ArchiveError::Cancelled)));
        assert!(!dest.exists());
    }

    #[test]
    fn test_extract_file_then_child_entry_is_fatal() {
        let temp = TempDir::new().unwrap();
        let archive = temp.path().join("clash.zip");
        write_zip(&archive, &[("a", b"file"), ("a/b.txt", b"child")]);

        let dest = temp.path().join("out");
        let result =
            extract_zip(&archive, &dest, &ExtractionConfig::default(), &mut NoopProgress);

        assert!(matches!(result, Err(ArchiveError::Io(_))));
        assert!(!dest.exists());
    }

    #[test]
    fn test_extract_into_existing_keeps_unrelated_files() {
        let temp = TempDir::new().unwrap();
        let archive = temp.path().join("docs.zip");
        write_zip(&archive, &[("a.txt", b"new")]);

        let dest = temp.path().join("out");
        fs::create_dir(&dest).unwrap();
        fs::write(dest.join("a.txt"), "old").unwrap();
        fs::write(dest.join("mine.txt"), "keep").unwrap();

        extract_zip(&archive, &dest, &ExtractionConfig::default(), &mut NoopProgress).unwrap();

        assert_eq!(fs::read_to_string(dest.join("a.txt")).unwrap(), "new");
        assert_eq!(fs::read_to_string(dest.join("mine.txt")).unwrap(), "keep");
    }
}
