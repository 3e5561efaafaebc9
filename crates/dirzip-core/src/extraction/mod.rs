//! Archive extraction: decode entries, sanitize names and write them safely.

pub mod atomic;
pub mod report;
pub mod zip;

pub use atomic::ExtractionGuard;
pub use report::ExtractionReport;
