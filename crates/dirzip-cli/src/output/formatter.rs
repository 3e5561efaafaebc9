//! Output formatter trait for CLI results.

use anyhow::Result;
use dirzip_core::ArchiveManifest;
use dirzip_core::CreationReport;
use dirzip_core::ExtractionReport;
use serde::Serialize;

/// Common output formatter trait
pub trait OutputFormatter {
    /// Format the result of `create`
    fn format_creation_result(&self, report: &CreationReport) -> Result<()>;

    /// Format the result of `extract`
    fn format_extraction_result(&self, report: &ExtractionReport) -> Result<()>;

    /// Format `list` output, one name per line
    fn format_manifest_short(&self, manifest: &ArchiveManifest) -> Result<()>;

    /// Format `list --long` output
    fn format_manifest_long(&self, manifest: &ArchiveManifest, human_readable: bool)
    -> Result<()>;

    /// Format a failed command. Never suppressed by `--quiet`.
    fn format_error(&self, operation: &str, error: &anyhow::Error);
}

/// Generic JSON output structure
#[derive(Debug, Serialize)]
pub struct JsonOutput<T> {
    pub operation: String,
    pub status: Status,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Status {
    Success,
    Error,
}

impl<T: Serialize> JsonOutput<T> {
    pub fn success(operation: impl Into<String>, data: T) -> Self {
        Self {
            operation: operation.into(),
            status: Status::Success,
            data: Some(data),
            error: None,
        }
    }
}

impl JsonOutput<()> {
    pub fn error(operation: impl Into<String>, error: impl Into<String>) -> Self {
        Self {
            operation: operation.into(),
            status: Status::Error,
            data: None,
            error: Some(error.into()),
        }
    }
}
