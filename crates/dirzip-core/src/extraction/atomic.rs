//! Atomic extraction primitives.
//!
//! Files are written to a temporary sibling and renamed into place, so a
//! reader never observes a half-written file. The destination directory is
//! owned by an [`ExtractionGuard`] that removes it again when extraction
//! fails, together with any parent directories it had to create, but only
//! if the guard created it.

use crate::ArchiveError;
use crate::Result;
use std::io::Read;
use std::io::Write;
use std::path::Path;
use std::path::PathBuf;
use tracing::debug;
use tracing::warn;

/// Removes a freshly created destination directory unless committed.
///
/// # Examples
///
/// ```
/// use dirzip_core::extraction::atomic::ExtractionGuard;
///
/// let temp = tempfile::tempdir()?;
/// let dest = temp.path().join("docs-unzip");
///
/// {
///     let guard = ExtractionGuard::prepare(&dest)?;
///     assert!(guard.created());
///     // dropped without commit: extraction failed
/// }
/// assert!(!dest.exists());
///
/// let guard = ExtractionGuard::prepare(&dest)?;
/// guard.commit();
/// assert!(dest.exists());
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
#[derive(Debug)]
pub struct ExtractionGuard {
    path: PathBuf,
    /// Highest directory created by `prepare`; `dest` itself or a new parent.
    created_root: Option<PathBuf>,
    armed: bool,
}

impl ExtractionGuard {
    /// Ensures `dest` exists as a directory, creating it (and any missing
    /// parents) if needed.
    ///
    /// # Errors
    ///
    /// Returns `ArchiveError::Io` if the directory cannot be created or
    /// `dest` exists but is not a directory.
    pub fn prepare(dest: &Path) -> Result<Self> {
        let created_root = if dest.is_dir() {
            None
        } else if dest.exists() {
            return Err(ArchiveError::Io(std::io::Error::new(
                std::io::ErrorKind::AlreadyExists,
                format!("destination exists and is not a directory: {}", dest.display()),
            )));
        } else {
            let root = topmost_missing(dest);
            std::fs::create_dir_all(dest)?;
            debug!(dest = %dest.display(), root = %root.display(), "created destination directory");
            Some(root)
        };

        Ok(Self {
            path: dest.to_path_buf(),
            created_root,
            armed: true,
        })
    }

    /// Destination directory.
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Whether this guard created the directory.
    #[must_use]
    pub fn created(&self) -> bool {
        self.created_root.is_some()
    }

    /// Keeps the directory: extraction succeeded.
    pub fn commit(mut self) {
        self.armed = false;
    }
}

impl Drop for ExtractionGuard {
    fn drop(&mut self) {
        if !self.armed {
            return;
        }
        if let Some(root) = &self.created_root {
            if let Err(e) = std::fs::remove_dir_all(root) {
                warn!(dest = %root.display(), error = %e, "failed to remove destination");
            } else {
                debug!(dest = %root.display(), "removed destination after failure");
            }
        }
    }
}

/// Returns the highest ancestor of `dest` (or `dest` itself) that does not
/// exist yet.
fn topmost_missing(dest: &Path) -> PathBuf {
    let mut top = dest;
    for ancestor in dest.ancestors().skip(1) {
        if ancestor.as_os_str().is_empty() || ancestor.exists() {
            break;
        }
        top = ancestor;
    }
    top.to_path_buf()
}

/// Streams `reader` into `target` through a temporary file in the same
/// directory, replacing any existing file.
///
/// Read failures go through `map_read` so the caller can classify them;
/// write failures become `ArchiveError::Io`. Returns the number of bytes
/// written.
///
/// # Errors
///
/// Returns the mapped read error, or `ArchiveError::Io` if the temporary
/// file cannot be created, written or renamed.
pub fn write_file_atomic<R: Read>(
    target: &Path,
    mut reader: R,
    buffer: &mut [u8],
    map_read: impl Fn(std::io::Error) -> ArchiveError,
) -> Result<u64> {
    let parent = target.parent().ok_or_else(|| {
        ArchiveError::Io(std::io::Error::new(
            std::io::ErrorKind::InvalidInput,
            format!("no parent directory for {}", target.display()),
        ))
    })?;

    let mut temp = tempfile::Builder::new()
        .prefix(".dirzip-")
        .suffix(".part")
        .tempfile_in(parent)?;

    let mut written = 0u64;
    loop {
        let read = reader.read(buffer).map_err(&map_read)?;
        if read == 0 {
            break;
        }
        temp.write_all(&buffer[..read])?;
        written += read as u64;
    }
    temp.flush()?;

    temp.persist(target).map_err(|e| ArchiveError::Io(e.error))?;
    Ok(written)
}
