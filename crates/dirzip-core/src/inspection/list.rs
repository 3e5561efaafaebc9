//! Archive listing implementation.

use crate::Result;
use crate::formats::zip::map_zip_error;
use crate::formats::zip::open_archive;
use crate::inspection::manifest::ArchiveManifest;
use crate::inspection::manifest::ManifestEntry;
use crate::types::EntryKind;
use std::path::Path;
use tracing::debug;

/// Lists archive contents without extracting.
///
/// Reads only the central directory, so encrypted archives can be listed
/// without a password. Nothing is written to disk.
///
/// # Errors
///
/// Returns `ArchiveError::Io` if the file cannot be opened and
/// `ArchiveError::ArchiveFormat` if it is not a zip archive.
///
/// # Examples
///
/// ```no_run
/// use dirzip_core::list_archive;
///
/// # fn main() -> Result<(), Box<dyn std::error::Error>> {
/// let manifest = list_archive("docs.zip")?;
/// for entry in &manifest.entries {
///     println!("{}: {} bytes", entry.name, entry.size);
/// }
/// # Ok(())
/// # }
/// ```
pub fn list_archive<P: AsRef<Path>>(archive_path: P) -> Result<ArchiveManifest> {
    let archive_path = archive_path.as_ref();
    let mut archive = open_archive(archive_path)?;
    let mut manifest = ArchiveManifest::new(archive_path);

    for index in 0..archive.len() {
        let entry = archive
            .by_index_raw(index)
            .map_err(|e| map_zip_error(archive_path, e))?;

        manifest.push(ManifestEntry {
            name: entry.name().to_string(),
            kind: if entry.is_dir() {
                EntryKind::Directory
            } else {
                EntryKind::File
            },
            size: entry.size(),
            compressed_size: entry.compressed_size(),
            encrypted: entry.encrypted(),
        });
    }

    debug!(
        archive = %archive_path.display(),
        entries = manifest.total_entries,
        "listed archive"
    );

    Ok(manifest)
}
