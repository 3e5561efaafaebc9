//! Human-readable output formatter with colors and styling.

use super::formatter::OutputFormatter;
use anyhow::Result;
use console::Term;
use console::style;
use dirzip_core::ArchiveManifest;
use dirzip_core::CreationReport;
use dirzip_core::EntryKind;
use dirzip_core::ExtractionReport;

pub struct HumanFormatter {
    verbose: bool,
    quiet: bool,
    use_colors: bool,
    term: Term,
}

impl HumanFormatter {
    pub fn new(verbose: bool, quiet: bool) -> Self {
        Self {
            verbose,
            quiet,
            use_colors: console::colors_enabled(),
            term: Term::stdout(),
        }
    }

    #[allow(clippy::cast_precision_loss)]
    fn format_size(bytes: u64) -> String {
        const KB: u64 = 1024;
        const MB: u64 = KB * 1024;
        const GB: u64 = MB * 1024;

        if bytes >= GB {
            format!("{:.1} GB", bytes as f64 / GB as f64)
        } else if bytes >= MB {
            format!("{:.1} MB", bytes as f64 / MB as f64)
        } else if bytes >= KB {
            format!("{:.1} KB", bytes as f64 / KB as f64)
        } else {
            format!("{bytes} B")
        }
    }

    fn format_number(n: usize) -> String {
        let digits = n.to_string();
        let mut out = String::with_capacity(digits.len() + digits.len() / 3);
        for (i, c) in digits.chars().enumerate() {
            if i > 0 && (digits.len() - i) % 3 == 0 {
                out.push(',');
            }
            out.push(c);
        }
        out
    }

    fn line(&self, text: &str) {
        let _ = self.term.write_line(text);
    }

    fn headline(&self, text: &str) {
        if self.use_colors {
            self.line(&format!("{} {text}", style("✓").green().bold()));
        } else {
            self.line(text);
        }
    }

    fn warnings(&self, warnings: &[String]) {
        if warnings.is_empty() {
            return;
        }
        self.line("");
        if self.use_colors {
            self.line(&format!("{}", style("Warnings:").yellow().bold()));
        } else {
            self.line("Warnings:");
        }
        for warning in warnings {
            self.line(&format!("  - {warning}"));
        }
    }
}

impl OutputFormatter for HumanFormatter {
    fn format_creation_result(&self, report: &CreationReport) -> Result<()> {
        if self.quiet {
            return Ok(());
        }

        self.headline(&format!(
            "Archive created: {}",
            report.archive_path.display()
        ));
        self.line("");
        self.line(&format!(
            "  Files added:      {}",
            Self::format_number(report.files_added)
        ));
        self.line(&format!(
            "  Directories:      {}",
            Self::format_number(report.directories_added)
        ));
        self.line(&format!(
            "  Total size:       {}",
            Self::format_size(report.bytes_written)
        ));
        self.line(&format!(
            "  Archive size:     {}",
            Self::format_size(report.bytes_compressed)
        ));
        if let Some(encryption) = report.encryption {
            self.line(&format!("  Encryption:       {encryption}"));
        }

        if self.verbose {
            self.line(&format!(
                "  Compression:      {:.1}%",
                report.compression_percentage()
            ));
            self.line(&format!("  Duration:         {:?}", report.duration));
        }

        self.warnings(&report.warnings);
        Ok(())
    }

    fn format_extraction_result(&self, report: &ExtractionReport) -> Result<()> {
        if self.quiet {
            return Ok(());
        }

        self.headline(&format!(
            "Extraction complete: {}",
            report.dest_dir.display()
        ));
        self.line(&format!("  Files extracted: {}", report.files_extracted));
        self.line(&format!("  Directories: {}", report.directories_created));
        self.line(&format!(
            "  Total size: {}",
            Self::format_size(report.bytes_written)
        ));
        if !report.rejected.is_empty() {
            self.line(&format!("  Rejected entries: {}", report.rejected.len()));
        }

        if self.verbose {
            if let Some(encryption) = report.encryption {
                self.line(&format!("  Encryption: {encryption}"));
            }
            self.line(&format!("  Duration: {:?}", report.duration));
        }

        self.warnings(&report.warnings);
        Ok(())
    }

    fn format_manifest_short(&self, manifest: &ArchiveManifest) -> Result<()> {
        if self.quiet {
            return Ok(());
        }

        for entry in &manifest.entries {
            self.line(&entry.name);
        }

        Ok(())
    }

    fn format_manifest_long(&self, manifest: &ArchiveManifest, human_readable: bool) -> Result<()> {
        if self.quiet {
            return Ok(());
        }

        let size = |bytes: u64| {
            if human_readable {
                Self::format_size(bytes)
            } else {
                bytes.to_string()
            }
        };

        for entry in &manifest.entries {
            let type_char = match entry.kind {
                EntryKind::File => '-',
                EntryKind::Directory => 'd',
            };
            let lock = if entry.encrypted { '*' } else { ' ' };

            self.line(&format!(
                "{type_char}{lock} {:>10} {:>10}  {}",
                size(entry.size),
                size(entry.compressed_size),
                entry.name
            ));
        }

        self.line("");
        self.line(&format!(
            "Total: {} files, {} directories, {}",
            Self::format_number(manifest.file_count()),
            Self::format_number(manifest.directory_count()),
            Self::format_size(manifest.total_size)
        ));
        if let Some(encryption) = manifest.encryption {
            self.line(&format!("Encryption: {encryption} (entries marked *)"));
        }

        Ok(())
    }

    fn format_error(&self, _operation: &str, error: &anyhow::Error) {
        let stderr = Term::stderr();
        if self.use_colors {
            let _ = stderr.write_line(&format!("{} {error:?}", style("ERROR:").red().bold()));
        } else {
            let _ = stderr.write_line(&format!("ERROR: {error:?}"));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_size() {
        assert_eq!(HumanFormatter::format_size(0), "0 B");
        assert_eq!(HumanFormatter::format_size(1023), "1023 B");
        assert_eq!(HumanFormatter::format_size(1536), "1.5 KB");
        assert_eq!(HumanFormatter::format_size(2 * 1024 * 1024), "2.0 MB");
        assert_eq!(HumanFormatter::format_size(1536 * 1024 * 1024), "1.5 GB");
    }

    #[test]
    fn test_format_number() {
        assert_eq!(HumanFormatter::format_number(0), "0");
        assert_eq!(HumanFormatter::format_number(999), "999");
        assert_eq!(HumanFormatter::format_number(1000), "1,000");
        assert_eq!(HumanFormatter::format_number(1_234_567), "1,234,567");
        assert_eq!(HumanFormatter::format_number(123_456_789_012), "123,456,789,012");
    }
}
