//! Source folder traversal.
//!
//! Produces the ordered entry list the writer serializes. Traversal is sorted
//! by file name so archives, and therefore progress, are deterministic.

use crate::ArchiveError;
use crate::Result;
use crate::types::Entry;
use std::path::Component;
use std::path::Path;
use std::path::PathBuf;
use tracing::debug;
use walkdir::WalkDir;

/// An archive entry together with the file it is read from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceEntry {
    /// Full filesystem path.
    pub path: PathBuf,
    /// Entry as it will appear in the archive.
    pub entry: Entry,
}

/// Everything found under a source folder.
#[derive(Debug, Default)]
pub struct CollectedEntries {
    /// Entries in traversal order, root excluded.
    pub entries: Vec<SourceEntry>,
    /// Symlinks and special files that were skipped, one message each.
    pub warnings: Vec<String>,
}

/// Walks `root` and collects every file and directory below it.
///
/// Symlinks are skipped with a warning unless `follow_symlinks` is set, in
/// which case they are resolved and their targets added under the link's
/// name. FIFOs, sockets and device nodes are always skipped with a warning.
///
/// # Examples
///
/// ```no_run
/// use dirzip_core::creation::walker::collect_entries;
/// use std::path::Path;
///
/// let collected = collect_entries(Path::new("./docs"), false)?;
/// for source in &collected.entries {
///     println!("{}", source.entry.archive_name());
/// }
/// # Ok::<(), dirzip_core::ArchiveError>(())
/// ```
///
/// # Errors
///
/// Returns `ArchiveError::Io` if a directory cannot be read, metadata is
/// unavailable, or an entry name is not valid UTF-8.
pub fn collect_entries(root: &Path, follow_symlinks: bool) -> Result<CollectedEntries> {
    let mut collected = CollectedEntries::default();

    let walker = WalkDir::new(root)
        .min_depth(1)
        .follow_links(follow_symlinks)
        .sort_by_file_name();

    for entry in walker {
        let entry = entry.map_err(|e| {
            ArchiveError::Io(std::io::Error::other(format!("walkdir error: {e}")))
        })?;
        let path = entry.path();

        if entry.path_is_symlink() && !follow_symlinks {
            debug!(path = %path.display(), "skipping symlink");
            collected
                .warnings
                .push(format!("Skipped symlink: {}", path.display()));
            continue;
        }

        let file_type = entry.file_type();
        if !file_type.is_dir() && !file_type.is_file() {
            debug!(path = %path.display(), "skipping special file");
            collected
                .warnings
                .push(format!("Skipped special file: {}", path.display()));
            continue;
        }

        let relative = relative_name(path, root)?;
        let archive_entry = if file_type.is_dir() {
            Entry::directory(relative)
        } else {
            let metadata = entry.metadata().map_err(|e| {
                ArchiveError::Io(std::io::Error::other(format!(
                    "cannot read metadata for {}: {e}",
                    path.display()
                )))
            })?;
            Entry::file(relative, metadata.len())
        };

        collected.entries.push(SourceEntry {
            path: path.to_path_buf(),
            entry: archive_entry,
        });
    }

    Ok(collected)
}

/// Converts `path` below `root` into a `/`-separated archive name.
fn relative_name(path: &Path, root: &Path) -> Result<String> {
    let relative = path.strip_prefix(root).map_err(|_| {
        ArchiveError::Io(std::io::Error::other(format!(
            "{} is outside {}",
            path.display(),
            root.display()
        )))
    })?;

    let mut parts = Vec::new();
    for component in relative.components() {
        if let Component::Normal(part) = component {
            let part = part.to_str().ok_or_else(|| {
                ArchiveError::Io(std::io::Error::other(format!(
                    "path is not valid UTF-8: {}",
                    path.display()
                )))
            })?;
            parts.push(part);
        }
    }
    Ok(parts.join("/"))
}
