//! Error types for archive creation and extraction.

use std::path::Path;
use std::path::PathBuf;
use thiserror::Error;

/// Result type alias using `ArchiveError`.
pub type Result<T> = std::result::Result<T, ArchiveError>;

/// Errors that can occur while creating, listing or extracting archives.
#[derive(Error, Debug)]
pub enum ArchiveError {
    /// Source folder does not exist.
    #[error("source folder not found: {path}")]
    SourceNotFound {
        /// The missing source path.
        path: PathBuf,
    },

    /// Source path exists but is not a directory.
    #[error("source is not a directory: {path}")]
    SourceNotDirectory {
        /// The offending source path.
        path: PathBuf,
    },

    /// Destination archive could not be created or persisted.
    #[error("cannot write archive {path}: {source}")]
    Write {
        /// Destination archive path.
        path: PathBuf,
        /// Underlying I/O failure.
        source: std::io::Error,
    },

    /// File is not a valid zip container.
    #[error("invalid archive {path}: {reason}")]
    ArchiveFormat {
        /// Archive path.
        path: PathBuf,
        /// Description of the structural problem.
        reason: String,
    },

    /// Wrong password, missing password or corrupted encrypted data.
    ///
    /// The two causes are indistinguishable at this layer.
    #[error("authentication failed for {path}: wrong password or corrupted archive")]
    Authentication {
        /// Archive path.
        path: PathBuf,
    },

    /// Entry name escapes the destination directory after sanitization.
    #[error("unsafe entry path rejected: {name}")]
    UnsafePath {
        /// Entry name as stored in the archive.
        name: String,
    },

    /// Password was rejected by the password policy.
    #[error("invalid password: {reason}")]
    InvalidPassword {
        /// Why the password was rejected.
        reason: String,
    },

    /// Compression level outside `0..=9`.
    #[error("invalid compression level {level}, must be 0-9")]
    InvalidCompressionLevel {
        /// The rejected level.
        level: u8,
    },

    /// I/O operation failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Operation was cancelled through a `CancelToken`.
    #[error("operation cancelled")]
    Cancelled,
}

impl ArchiveError {
    /// Returns `true` if the operation can continue past this error.
    ///
    /// Only unsafe entry paths are recoverable: the entry is skipped and the
    /// remaining entries are still extracted.
    ///
    /// # Examples
    ///
    /// ```
    /// use dirzip_core::ArchiveError;
    ///
    /// let err = ArchiveError::UnsafePath {
    ///     name: "../../etc/passwd".into(),
    /// };
    /// assert!(err.is_recoverable());
    /// assert!(!ArchiveError::Cancelled.is_recoverable());
    /// ```
    #[must_use]
    pub const fn is_recoverable(&self) -> bool {
        matches!(self, Self::UnsafePath { .. })
    }

    /// Returns `true` for wrong-password or corrupted-ciphertext failures.
    #[must_use]
    pub const fn is_authentication_failure(&self) -> bool {
        matches!(self, Self::Authentication { .. })
    }

    /// Returns the archive or source path this error refers to, if any.
    #[must_use]
    pub fn path(&self) -> Option<&Path> {
        match self {
            Self::SourceNotFound { path }
            | Self::SourceNotDirectory { path }
            | Self::Write { path, .. }
            | Self::ArchiveFormat { path, .. }
            | Self::Authentication { path } => Some(path),
            _ => None,
        }
    }

    /// Returns a context string for this error, if available.
    ///
    /// # Examples
    ///
    /// ```
    /// use dirzip_core::ArchiveError;
    ///
    /// let err = ArchiveError::InvalidPassword {
    ///     reason: "password is empty".into(),
    /// };
    /// assert_eq!(err.context(), Some("password is empty"));
    /// assert_eq!(ArchiveError::Cancelled.context(), None);
    /// ```
    #[must_use]
    pub fn context(&self) -> Option<&str> {
        match self {
            Self::ArchiveFormat { reason, .. } | Self::InvalidPassword { reason } => Some(reason),
            Self::UnsafePath { name } => Some(name),
            _ => None,
        }
    }
}
