//! Error conversion utilities for CLI.
//!
//! Converts dirzip-core's typed errors (thiserror) into user-friendly
//! contextual errors (anyhow) with actionable guidance.

use anyhow::anyhow;
use dirzip_core::ArchiveError;
use std::path::Path;

/// Converts `ArchiveError` to user-friendly anyhow error with context.
///
/// `target` is the folder being archived or the archive being read.
pub fn convert_archive_error(err: ArchiveError, target: &Path) -> anyhow::Error {
    match err {
        ArchiveError::SourceNotFound { path } => {
            anyhow!(
                "Folder not found: {}\n\
                 HINT: Check the path and try again.",
                path.display()
            )
        }
        ArchiveError::SourceNotDirectory { path } => {
            anyhow!(
                "Not a folder: {}\n\
                 HINT: Only whole folders can be zipped.",
                path.display()
            )
        }
        ArchiveError::Write { path, source } => {
            anyhow!(
                "Cannot write archive '{}': {}\n\
                 HINT: Check that the output directory exists and is writable.",
                path.display(),
                source
            )
        }
        ArchiveError::ArchiveFormat { path, reason } => {
            anyhow!(
                "Invalid archive '{}': {}\n\
                 HINT: The archive may be corrupted or not a zip file.",
                path.display(),
                reason
            )
        }
        ArchiveError::Authentication { path } => {
            anyhow!(
                "Wrong password or corrupted archive: {}\n\
                 HINT: Pass the password used at creation with --password or DIRZIP_PASSWORD.",
                path.display()
            )
        }
        ArchiveError::InvalidPassword { reason } => {
            anyhow!(
                "Invalid password: {reason}\n\
                 HINT: Use a non-empty password made of letters and digits."
            )
        }
        ArchiveError::InvalidCompressionLevel { level } => {
            anyhow!(
                "Invalid compression level {level}\n\
                 HINT: Use a level from 0 (store) to 9 (best)."
            )
        }
        ArchiveError::Io(io_err) => {
            anyhow!("I/O error while processing '{}': {}", target.display(), io_err)
        }
        ArchiveError::Cancelled => anyhow!("Operation cancelled: {}", target.display()),
        err @ ArchiveError::UnsafePath { .. } => {
            anyhow::Error::from(err).context(format!("Error processing '{}'", target.display()))
        }
    }
}

/// Adds context to the result of a core operation.
pub fn add_archive_context<T>(
    result: Result<T, ArchiveError>,
    target: &Path,
) -> anyhow::Result<T> {
    result.map_err(|e| convert_archive_error(e, target))
}
