//! Type-safe wrappers and the archive data model.
//!
//! `DestDir` and `SafePath` can only be built through validation, so an
//! unchecked entry name can never reach the filesystem.

pub mod cancel;
pub mod dest_dir;
pub mod entry;
pub mod safe_path;

pub use cancel::CancelToken;
pub use dest_dir::DestDir;
pub use entry::Encryption;
pub use entry::Entry;
pub use entry::EntryKind;
pub use safe_path::SafePath;
