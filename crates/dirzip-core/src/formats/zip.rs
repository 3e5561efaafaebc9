//! Zip container access shared by the writer, reader and listing.
//!
//! Maps `zip` crate failures onto [`ArchiveError`] so callers see one error
//! vocabulary: structural problems become `ArchiveFormat`, every password
//! problem becomes `Authentication`.

use crate::ArchiveError;
use crate::Password;
use crate::Result;
use crate::types::Encryption;
use std::fs::File;
use std::io::BufReader;
use std::path::Path;
use zip::ZipArchive;
use zip::result::ZipError;

/// Reader type used for every archive this crate opens.
pub type ZipReader = ZipArchive<BufReader<File>>;

/// Opens `path` as a zip archive.
///
/// # Errors
///
/// Returns `ArchiveError::Io` if the file cannot be opened and
/// `ArchiveError::ArchiveFormat` if it is not a zip container.
pub fn open_archive(path: &Path) -> Result<ZipReader> {
    let file = File::open(path)?;
    ZipArchive::new(BufReader::new(file)).map_err(|e| map_zip_error(path, e))
}

/// Converts a `zip` crate error for the archive at `path`.
pub fn map_zip_error(path: &Path, error: ZipError) -> ArchiveError {
    match error {
        ZipError::InvalidPassword => ArchiveError::Authentication {
            path: path.to_path_buf(),
        },
        ZipError::UnsupportedArchive(detail) if detail == ZipError::PASSWORD_REQUIRED => {
            ArchiveError::Authentication {
                path: path.to_path_buf(),
            }
        }
        ZipError::Io(e) => ArchiveError::Io(e),
        ZipError::InvalidArchive(reason) => ArchiveError::ArchiveFormat {
            path: path.to_path_buf(),
            reason: reason.to_string(),
        },
        other => ArchiveError::ArchiveFormat {
            path: path.to_path_buf(),
            reason: other.to_string(),
        },
    }
}

/// Converts an I/O error raised while streaming an entry out of the archive.
///
/// Decryption failures surface as `InvalidData` (HMAC mismatch) and are
/// reported as `Authentication` when the entry is encrypted.
pub fn map_read_error(path: &Path, error: std::io::Error, encrypted: bool) -> ArchiveError {
    if encrypted && error.kind() == std::io::ErrorKind::InvalidData {
        return ArchiveError::Authentication {
            path: path.to_path_buf(),
        };
    }
    ArchiveError::Io(error)
}

/// Returns whether entry `index` is encrypted, without a password.
///
/// # Errors
///
/// Returns `ArchiveError::ArchiveFormat` if the entry header is unreadable.
pub fn is_encrypted(archive: &mut ZipReader, path: &Path, index: usize) -> Result<bool> {
    let raw = archive
        .by_index_raw(index)
        .map_err(|e| map_zip_error(path, e))?;
    Ok(raw.encrypted())
}

/// Returns `Some(Encryption::Aes256)` if any entry is encrypted.
///
/// # Errors
///
/// Returns `ArchiveError::ArchiveFormat` if an entry header is unreadable.
pub fn detect_encryption(archive: &mut ZipReader, path: &Path) -> Result<Option<Encryption>> {
    for index in 0..archive.len() {
        if is_encrypted(archive, path, index)? {
            return Ok(Some(Encryption::Aes256));
        }
    }
    Ok(None)
}

/// Checks `password` against the stored verifier of every encrypted entry.
///
/// Runs before anything is written so a wrong password leaves no files
/// behind.
///
/// # Errors
///
/// Returns `ArchiveError::Authentication` if an encrypted entry exists and
/// `password` is `None` or does not match.
pub fn verify_password(
    archive: &mut ZipReader,
    path: &Path,
    password: Option<&Password>,
) -> Result<()> {
    for index in 0..archive.len() {
        if !is_encrypted(archive, path, index)? {
            continue;
        }
        let Some(password) = password else {
            return Err(ArchiveError::Authentication {
                path: path.to_path_buf(),
            });
        };
        archive
            .by_index_decrypt(index, password.as_bytes())
            .map_err(|e| map_zip_error(path, e))?;
    }
    Ok(())
}
