//! Archive listing model.

use crate::types::Encryption;
use crate::types::EntryKind;
use std::path::PathBuf;

/// One entry as recorded in the archive's central directory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ManifestEntry {
    /// Entry name as stored, directories ending with `/`.
    pub name: String,
    /// File or directory.
    pub kind: EntryKind,
    /// Uncompressed size in bytes.
    pub size: u64,
    /// Stored size in bytes, including encryption overhead.
    pub compressed_size: u64,
    /// Whether the entry content is encrypted.
    pub encrypted: bool,
}

/// Contents of an archive.
#[derive(Debug, Clone, Default)]
pub struct ArchiveManifest {
    /// Archive that was listed.
    pub archive_path: PathBuf,
    /// Entries in archive order.
    pub entries: Vec<ManifestEntry>,
    /// `Some` if any entry is encrypted.
    pub encryption: Option<Encryption>,
    /// Number of entries.
    pub total_entries: usize,
    /// Sum of uncompressed sizes.
    pub total_size: u64,
    /// Sum of stored sizes.
    pub total_compressed: u64,
}

impl ArchiveManifest {
    /// Creates an empty manifest for `archive_path`.
    #[must_use]
    pub fn new(archive_path: impl Into<PathBuf>) -> Self {
        Self {
            archive_path: archive_path.into(),
            ..Self::default()
        }
    }

    /// Appends an entry and updates the totals.
    pub fn push(&mut self, entry: ManifestEntry) {
        self.total_entries += 1;
        self.total_size += entry.size;
        self.total_compressed += entry.compressed_size;
        if entry.encrypted {
            self.encryption = Some(Encryption::Aes256);
        }
        self.entries.push(entry);
    }

    /// Number of file entries.
    #[must_use]
    pub fn file_count(&self) -> usize {
        self.entries
            .iter()
            .filter(|e| e.kind == EntryKind::File)
            .count()
    }

    /// Number of directory entries.
    #[must_use]
    pub fn directory_count(&self) -> usize {
        self.total_entries - self.file_count()
    }
}
