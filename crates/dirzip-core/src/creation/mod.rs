//! Archive creation: walk a source folder and write it as a zip archive.

pub mod config;
pub mod report;
pub mod walker;
pub mod zip;

pub use config::CreationConfig;
pub use report::CreationReport;
pub use walker::CollectedEntries;
pub use walker::SourceEntry;
