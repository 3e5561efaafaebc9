//! Extract command implementation.

use crate::cli::ExtractArgs;
use crate::error::add_archive_context;
use crate::output::OutputFormatter;
use crate::progress::CliProgress;
use anyhow::Context;
use anyhow::Result;
use dirzip_core::ExtractionConfig;
use dirzip_core::NamePolicy;
use dirzip_core::NoopProgress;
use dirzip_core::Password;
use dirzip_core::extract_archive_with_progress;
use dirzip_core::naming::extract_dir_for;
use std::env;

pub fn execute(
    args: &ExtractArgs,
    formatter: &dyn OutputFormatter,
    show_progress: bool,
) -> Result<()> {
    let output_dir = match &args.output_dir {
        Some(dir) => dir.clone(),
        None => {
            let cwd = env::current_dir().context("failed to get current directory")?;
            extract_dir_for(&args.archive, &cwd)
        }
    };

    let name_policy = if args.portable_names {
        NamePolicy::Portable
    } else {
        NamePolicy::Platform
    };

    let config = ExtractionConfig::default()
        .with_password(Password::from_optional(args.password.as_deref()))
        .with_name_policy(name_policy);

    let report = if show_progress {
        let mut progress = CliProgress::new("Unzipping");
        add_archive_context(
            extract_archive_with_progress(&args.archive, &output_dir, &config, &mut progress),
            &args.archive,
        )?
    } else {
        let mut noop = NoopProgress;
        add_archive_context(
            extract_archive_with_progress(&args.archive, &output_dir, &config, &mut noop),
            &args.archive,
        )?
    };

    formatter.format_extraction_result(&report)?;

    Ok(())
}
