//! JSON output formatter for machine-readable results.

use super::formatter::JsonOutput;
use super::formatter::OutputFormatter;
use anyhow::Result;
use dirzip_core::ArchiveManifest;
use dirzip_core::CreationReport;
use dirzip_core::ExtractionReport;
use serde::Serialize;
use std::io::Write;
use std::io::{self};

pub struct JsonFormatter;

impl JsonFormatter {
    fn output<T: Serialize>(value: &T) -> Result<()> {
        let json = serde_json::to_string_pretty(value)?;
        writeln!(io::stdout(), "{json}")?;
        Ok(())
    }
}

#[derive(Serialize)]
struct ManifestEntryOutput<'a> {
    name: &'a str,
    kind: String,
    size: u64,
    compressed_size: u64,
    encrypted: bool,
}

#[derive(Serialize)]
struct ManifestOutput<'a> {
    archive: String,
    encryption: Option<String>,
    total_entries: usize,
    total_size: u64,
    total_compressed: u64,
    entries: Vec<ManifestEntryOutput<'a>>,
}

impl<'a> ManifestOutput<'a> {
    fn new(manifest: &'a ArchiveManifest) -> Self {
        let entries = manifest
            .entries
            .iter()
            .map(|e| ManifestEntryOutput {
                name: &e.name,
                kind: e.kind.to_string(),
                size: e.size,
                compressed_size: e.compressed_size,
                encrypted: e.encrypted,
            })
            .collect();

        Self {
            archive: manifest.archive_path.display().to_string(),
            encryption: manifest.encryption.map(|e| e.to_string()),
            total_entries: manifest.total_entries,
            total_size: manifest.total_size,
            total_compressed: manifest.total_compressed,
            entries,
        }
    }
}

impl OutputFormatter for JsonFormatter {
    fn format_creation_result(&self, report: &CreationReport) -> Result<()> {
        #[derive(Serialize)]
        struct CreationOutput {
            output_path: String,
            entries_written: usize,
            files_added: usize,
            directories_added: usize,
            bytes_written: u64,
            bytes_compressed: u64,
            compression_ratio: f64,
            compression_percentage: f64,
            encryption: Option<String>,
            duration_ms: u128,
            warnings: Vec<String>,
        }

        let data = CreationOutput {
            output_path: report.archive_path.display().to_string(),
            entries_written: report.entries_written(),
            files_added: report.files_added,
            directories_added: report.directories_added,
            bytes_written: report.bytes_written,
            bytes_compressed: report.bytes_compressed,
            compression_ratio: report.compression_ratio(),
            compression_percentage: report.compression_percentage(),
            encryption: report.encryption.map(|e| e.to_string()),
            duration_ms: report.duration.as_millis(),
            warnings: report.warnings.clone(),
        };

        Self::output(&JsonOutput::success("create", data))
    }

    fn format_extraction_result(&self, report: &ExtractionReport) -> Result<()> {
        #[derive(Serialize)]
        struct ExtractionOutput<'a> {
            output_dir: String,
            entries_written: usize,
            files_extracted: usize,
            directories_created: usize,
            bytes_written: u64,
            rejected: &'a [String],
            encryption: Option<String>,
            duration_ms: u128,
            warnings: &'a [String],
        }

        let data = ExtractionOutput {
            output_dir: report.dest_dir.display().to_string(),
            entries_written: report.entries_written(),
            files_extracted: report.files_extracted,
            directories_created: report.directories_created,
            bytes_written: report.bytes_written,
            rejected: &report.rejected,
            encryption: report.encryption.map(|e| e.to_string()),
            duration_ms: report.duration.as_millis(),
            warnings: &report.warnings,
        };

        Self::output(&JsonOutput::success("extract", data))
    }

    fn format_manifest_short(&self, manifest: &ArchiveManifest) -> Result<()> {
        Self::output(&JsonOutput::success("list", ManifestOutput::new(manifest)))
    }

    fn format_manifest_long(
        &self,
        manifest: &ArchiveManifest,
        _human_readable: bool,
    ) -> Result<()> {
        // Entries always carry every field in JSON.
        self.format_manifest_short(manifest)
    }

    fn format_error(&self, operation: &str, error: &anyhow::Error) {
        let output = JsonOutput::error(operation, format!("{error:#}"));
        let _ = Self::output(&output);
    }
}
