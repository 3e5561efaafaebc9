//! Archive entries and the encryption descriptor.

use std::fmt;

/// Whether an entry is a regular file or a directory.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EntryKind {
    /// Regular file with content.
    File,
    /// Directory, possibly empty.
    Directory,
}

impl EntryKind {
    /// Returns `true` for directories.
    #[must_use]
    pub const fn is_dir(self) -> bool {
        matches!(self, Self::Directory)
    }
}

impl fmt::Display for EntryKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::File => f.write_str("file"),
            Self::Directory => f.write_str("directory"),
        }
    }
}

/// Encryption applied to the file entries of an archive.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Encryption {
    /// WinZip AE-2: AES-256-CTR with HMAC-SHA1, PBKDF2 key per entry.
    Aes256,
}

impl fmt::Display for Encryption {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Aes256 => f.write_str("AES-256"),
        }
    }
}

/// One file or directory inside an archive.
///
/// `relative_path` always uses `/` separators and never carries the trailing
/// `/` that directory names get in the container; see [`Entry::archive_name`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Entry {
    /// Path relative to the archive root.
    pub relative_path: String,
    /// File or directory.
    pub kind: EntryKind,
    /// Uncompressed size in bytes, 0 for directories.
    pub size: u64,
}

impl Entry {
    /// Creates a file entry.
    #[must_use]
    pub fn file(relative_path: impl Into<String>, size: u64) -> Self {
        Self {
            relative_path: relative_path.into(),
            kind: EntryKind::File,
            size,
        }
    }

    /// Creates a directory entry.
    #[must_use]
    pub fn directory(relative_path: impl Into<String>) -> Self {
        Self {
            relative_path: relative_path.into(),
            kind: EntryKind::Directory,
            size: 0,
        }
    }

    /// Name as stored in the container: directories end with `/`.
    ///
    /// # Examples
    ///
    /// ```
    /// use dirzip_core::types::Entry;
    ///
    /// assert_eq!(Entry::directory("sub").archive_name(), "sub/");
    /// assert_eq!(Entry::file("sub/b.txt", 10).archive_name(), "sub/b.txt");
    /// ```
    #[must_use]
    pub fn archive_name(&self) -> String {
        match self.kind {
            EntryKind::File => self.relative_path.clone(),
            EntryKind::Directory => format!("{}/", self.relative_path),
        }
    }
}
