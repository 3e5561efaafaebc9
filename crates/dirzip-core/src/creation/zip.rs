//! Zip archive writer.
//!
//! Serializes a walked source folder into a zip file. File entries are
//! Deflate-compressed and, when a password is configured, encrypted with
//! AES-256 (WinZip AE-2, random salt per entry). Names and directory entries
//! stay in clear.

use crate::ArchiveError;
use crate::Result;
use crate::creation::config::CreationConfig;
use crate::creation::report::CreationReport;
use crate::creation::walker::SourceEntry;
use crate::creation::walker::collect_entries;
use crate::progress::ProgressCallback;
use crate::progress::ProgressReporter;
use crate::types::Encryption;
use crate::types::EntryKind;
use std::fs::File;
use std::io::Read;
use std::io::Seek;
use std::io::Write;
use std::path::Path;
use std::time::Instant;
use tracing::debug;
use tracing::info;
use tracing::warn;
use zip::AesMode;
use zip::CompressionMethod;
use zip::ZipWriter;
use zip::write::SimpleFileOptions;

/// Copy buffer size for streaming file content into the archive.
const COPY_BUFFER_SIZE: usize = 64 * 1024;

/// Zip64 threshold for a single entry.
const LARGE_FILE_THRESHOLD: u64 = 0xFFFF_FFFF;

/// Creates a zip archive at `dest` from every entry under `source`.
///
/// An existing file at `dest` is deleted first. The archive is written to a
/// temporary file in the same directory and renamed over `dest` only once it
/// is complete, so a failed run never leaves a partial archive behind.
///
/// # Examples
///
/// ```no_run
/// use dirzip_core::CreationConfig;
/// use dirzip_core::creation::zip::create_zip;
/// use dirzip_core::progress::NoopProgress;
/// use std::path::Path;
///
/// let config = CreationConfig::default();
/// let report = create_zip(
///     Path::new("docs"),
///     Path::new("docs.zip"),
///     &config,
///     &mut NoopProgress,
/// )?;
/// println!("Added {} entries", report.entries_written());
/// # Ok::<(), dirzip_core::ArchiveError>(())
/// ```
///
/// # Errors
///
/// - `SourceNotFound` / `SourceNotDirectory` for a bad `source`
/// - `InvalidCompressionLevel` if the configuration is invalid
/// - `Write` if `dest` cannot be removed, created or persisted
/// - `Io` if a source file cannot be read
/// - `Cancelled` if the configured token fires
pub fn create_zip(
    source: &Path,
    dest: &Path,
    config: &CreationConfig,
    progress: &mut dyn ProgressCallback,
) -> Result<CreationReport> {
    config.validate()?;
    let start = Instant::now();

    if !source.exists() {
        return Err(ArchiveError::SourceNotFound {
            path: source.to_path_buf(),
        });
    }
    if !source.is_dir() {
        return Err(ArchiveError::SourceNotDirectory {
            path: source.to_path_buf(),
        });
    }

    remove_existing(dest)?;

    let collected = collect_entries(source, config.follow_symlinks)?;
    let mut report = CreationReport {
        archive_path: dest.to_path_buf(),
        warnings: collected.warnings,
        ..CreationReport::default()
    };
    for warning in &report.warnings {
        warn!("{warning}");
    }

    info!(
        source = %source.display(),
        dest = %dest.display(),
        entries = collected.entries.len(),
        encrypted = config.password.is_some(),
        "creating archive"
    );

    let parent = match dest.parent() {
        Some(p) if !p.as_os_str().is_empty() => p,
        _ => Path::new("."),
    };
    let temp = tempfile::Builder::new()
        .prefix(".dirzip-")
        .suffix(".tmp")
        .tempfile_in(parent)
        .map_err(|e| write_error(dest, e))?;

    let mut zip = ZipWriter::new(temp);
    let mut reporter = ProgressReporter::new(progress, collected.entries.len());
    write_entries(
        &mut zip,
        &collected.entries,
        config,
        dest,
        &mut report,
        &mut reporter,
    )?;

    let temp = zip
        .finish()
        .map_err(|e| write_error(dest, std::io::Error::other(e)))?;
    temp.persist(dest).map_err(|e| write_error(dest, e.error))?;

    report.bytes_compressed = std::fs::metadata(dest)
        .map_err(|e| write_error(dest, e))?
        .len();
    report.duration = start.elapsed();
    reporter.complete();

    info!(
        entries = report.entries_written(),
        bytes = report.bytes_written,
        archive_bytes = report.bytes_compressed,
        "archive created"
    );

    Ok(report)
}

fn write_entries<W: Write + Seek>(
    zip: &mut ZipWriter<W>,
    entries: &[SourceEntry],
    config: &CreationConfig,
    dest: &Path,
    report: &mut CreationReport,
    reporter: &mut ProgressReporter<'_>,
) -> Result<()> {
    let options = base_options(config.level());
    let mut buffer = vec![0u8; COPY_BUFFER_SIZE];

    for source in entries {
        config.check_cancelled()?;

        let name = source.entry.archive_name();
        reporter.start(&name);

        match source.entry.kind {
            EntryKind::Directory => {
                zip.add_directory(name.as_str(), options).map_err(|e| {
                    write_error(
                        dest,
                        std::io::Error::other(format!("failed to add directory {name}: {e}")),
                    )
                })?;
                report.directories_added += 1;
            }
            EntryKind::File => {
                let file_options =
                    options.large_file(source.entry.size >= LARGE_FILE_THRESHOLD);
                let started = match &config.password {
                    Some(password) => zip.start_file(
                        name.as_str(),
                        file_options.with_aes_encryption(AesMode::Aes256, password.expose()),
                    ),
                    None => zip.start_file(name.as_str(), file_options),
                };
                started.map_err(|e| {
                    write_error(
                        dest,
                        std::io::Error::other(format!("failed to start file {name}: {e}")),
                    )
                })?;

                let copied = copy_file(zip, &source.path, dest, &mut buffer)?;
                report.files_added += 1;
                report.bytes_written += copied;
                if config.password.is_some() {
                    report.encryption = Some(Encryption::Aes256);
                }
            }
        }

        let update = reporter.advance();
        debug!(entry = %name, percent = update.percent, "entry written");
    }

    Ok(())
}

fn base_options(level: u8) -> SimpleFileOptions {
    if level == 0 {
        SimpleFileOptions::default().compression_method(CompressionMethod::Stored)
    } else {
        SimpleFileOptions::default()
            .compression_method(CompressionMethod::Deflated)
            .compression_level(Some(i64::from(level)))
    }
}

fn copy_file<W: Write + Seek>(
    zip: &mut ZipWriter<W>,
    path: &Path,
    dest: &Path,
    buffer: &mut [u8],
) -> Result<u64> {
    let mut file = File::open(path)?;
    let mut copied = 0u64;
    loop {
        let read = file.read(buffer)?;
        if read == 0 {
            break;
        }
        zip.write_all(&buffer[..read])
            .map_err(|e| write_error(dest, e))?;
        copied += read as u64;
    }
    Ok(copied)
}

fn remove_existing(dest: &Path) -> Result<()> {
    match std::fs::remove_file(dest) {
        Ok(()) => {
            debug!(dest = %dest.display(), "removed existing archive");
            Ok(())
        }
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(()),
        Err(e) => Err(write_error(dest, e)),
    }
}

fn write_error(dest: &Path, source: std::io::Error) -> ArchiveError {
    ArchiveError::Write {
        path: dest.to_path_buf(),
        source,
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::Password;
    use crate::progress::NoopProgress;
    use std::fs;
    use tempfile::TempDir;

    fn sample_tree() -> TempDir {
        let source = TempDir::new().unwrap();
        fs::write(source.path().join("a.txt"), "hello").unwrap();
        fs::create_dir(source.path().join("sub")).unwrap();
        fs::write(source.path().join("sub/b.txt"), "0123456789").unwrap();
        source
    }

    fn entry_names(path: &Path) -> Vec<String> {
        let mut archive = zip::ZipArchive::new(File::open(path).unwrap()).unwrap();
        (0..archive.len())
            .map(|i| archive.by_index_raw(i).unwrap().name().to_string())
            .collect()
    }

    #[test]
    fn test_create_zip_entries_and_report() {
        let source = sample_tree();
        let out = TempDir::new().unwrap();
        let dest = out.path().join("docs.zip");

        let report =
            create_zip(source.path(), &dest, &CreationConfig::default(), &mut NoopProgress)
                .unwrap();

        assert_eq!(report.entries_written(), 3);
        assert_eq!(report.files_added, 2);
        assert_eq!(report.directories_added, 1);
        assert_eq!(report.bytes_written, 15);
        assert!(report.bytes_compressed > 0);
        assert!(report.encryption.is_none());
        assert_eq!(entry_names(&dest), vec!["a.txt", "sub/", "sub/b.txt"]);
    }

    #[test]
    fn test_create_zip_encrypted_entries() {
        let source = sample_tree();
        let out = TempDir::new().unwrap();
        let dest = out.path().join("secret.zip");
        let config =
            CreationConfig::default().with_password(Some(Password::new("abc123").unwrap()));

        let report = create_zip(source.path(), &dest, &config, &mut NoopProgress).unwrap();
        assert_eq!(report.encryption, Some(Encryption::Aes256));

        let mut archive = zip::ZipArchive::new(File::open(&dest).unwrap()).unwrap();
        for i in 0..archive.len() {
            let entry = archive.by_index_raw(i).unwrap();
            assert_eq!(entry.encrypted(), !entry.is_dir(), "{}", entry.name());
        }
    }

    #[test]
    fn test_create_zip_stored_level() {
        let source = sample_tree();
        let out = TempDir::new().unwrap();
        let dest = out.path().join("stored.zip");
        let config = CreationConfig::default().with_compression_level(0);

        create_zip(source.path(), &dest, &config, &mut NoopProgress).unwrap();

        let mut archive = zip::ZipArchive::new(File::open(&dest).unwrap()).unwrap();
        let entry = archive.by_name("a.txt").unwrap();
        assert_eq!(entry.compression(), CompressionMethod::Stored);
    }

    #[test]
    fn test_create_zip_replaces_existing() {
        let source = sample_tree();
        let out = TempDir::new().unwrap();
        let dest = out.path().join("docs.zip");
        fs::write(&dest, "stale contents, not a zip").unwrap();

        create_zip(source.path(), &dest, &CreationConfig::default(), &mut NoopProgress).unwrap();
        assert_eq!(entry_names(&dest).len(), 3);
    }

    #[test]
    fn test_create_zip_missing_source() {
        let out = TempDir::new().unwrap();
        let result = create_zip(
            &out.path().join("missing"),
            &out.path().join("x.zip"),
            &CreationConfig::default(),
            &mut NoopProgress,
        );
        assert!(matches!(result, Err(ArchiveError::SourceNotFound { .. })));
    }

    #[test]
    fn test_create_zip_source_is_file() {
        let out = TempDir::new().unwrap();
        let file = out.path().join("file.txt");
        fs::write(&file, "x").unwrap();
        let result = create_zip(
            &file,
            &out.path().join("x.zip"),
            &CreationConfig::default(),
            &mut NoopProgress,
        );
        assert!(matches!(result, Err(ArchiveError::SourceNotDirectory { .. })));
    }

    #[test]
    #[cfg(unix)]
    fn test_create_zip_skips_fifo() {
        let source = sample_tree();
        let status = std::process::Command::new("mkfifo")
            .arg(source.path().join("pipe"))
            .status()
            .unwrap();
        assert!(status.success());
        let out = TempDir::new().unwrap();
        let dest = out.path().join("docs.zip");

        let report =
            create_zip(source.path(), &dest, &CreationConfig::default(), &mut NoopProgress)
                .unwrap();

        assert_eq!(report.entries_written(), 3);
        assert!(report.warnings.iter().any(|w| w.contains("pipe")));
        assert_eq!(entry_names(&dest), vec!["a.txt", "sub/", "sub/b.txt"]);
    }

    #[test]
    fn test_create_zip_cancelled_leaves_no_archive() {
        let source = sample_tree();
        let out = TempDir::new().unwrap();
        let dest = out.path().join("docs.zip");
        let token = crate::CancelToken::new();
        token.cancel();
        let config = CreationConfig::default().with_cancel(token);

        let result = create_zip(source.path(), &dest, &config, &mut NoopProgress);
        assert!(matches!(result, Err(ArchiveError::Cancelled)));
        assert!(!dest.exists());
        assert_eq!(fs::read_dir(out.path()).unwrap().count(), 0);
    }

    #[test]
    fn test_create_zip_invalid_level() {
        let source = sample_tree();
        let out = TempDir::new().unwrap();
        let config = CreationConfig::default().with_compression_level(12);
        let result = create_zip(
            source.path(),
            &out.path().join("x.zip"),
            &config,
            &mut NoopProgress,
        );
        assert!(matches!(
            result,
            Err(ArchiveError::InvalidCompressionLevel { level: 12 })
        ));
    }
}
