//! Folder-to-zip archive engine with optional AES-256 encryption.
//!
//! `dirzip-core` turns a directory tree into a single zip archive and back.
//! Archives can be protected with a password (WinZip AE-2, AES-256 per
//! entry). Extraction sanitizes entry names for the local filesystem,
//! rejects entries that would escape the destination, and writes every
//! file atomically.
//!
//! # Examples
//!
//! ```no_run
//! use dirzip_core::CreationConfig;
//! use dirzip_core::ExtractionConfig;
//! use dirzip_core::Password;
//! use dirzip_core::create_archive;
//! use dirzip_core::extract_archive;
//! use dirzip_core::naming::extract_dir_for;
//! use std::path::Path;
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let password = Some(Password::new("abc123")?);
//!
//! let config = CreationConfig::default().with_password(password.clone());
//! create_archive("docs", "docs.zip", &config)?;
//!
//! let dest = extract_dir_for(Path::new("docs.zip"), Path::new("."));
//! let config = ExtractionConfig::default().with_password(password);
//! let report = extract_archive("docs.zip", &dest, &config)?;
//! println!("Extracted {} entries", report.entries_written());
//! # Ok(())
//! # }
//! ```

#![deny(unsafe_code)]
#![warn(missing_docs)]

pub mod api;
pub mod config;
pub mod creation;
pub mod error;
pub mod extraction;
pub mod formats;
pub mod inspection;
pub mod naming;
pub mod password;
pub mod progress;
pub mod sanitize;
pub mod types;

pub use api::create_archive;
pub use api::create_archive_with_progress;
pub use api::extract_archive;
pub use api::extract_archive_with_progress;
pub use config::ExtractionConfig;
pub use creation::CreationConfig;
pub use creation::CreationReport;
pub use error::ArchiveError;
pub use error::Result;
pub use extraction::ExtractionReport;
pub use inspection::ArchiveManifest;
pub use inspection::ManifestEntry;
pub use inspection::list_archive;
pub use password::Password;
pub use password::PasswordPolicy;
pub use progress::NoopProgress;
pub use progress::ProgressCallback;
pub use progress::ProgressTracker;
pub use progress::ProgressUpdate;
pub use sanitize::NamePolicy;
pub use types::CancelToken;
pub use types::Encryption;
pub use types::EntryKind;
