//! Create command implementation.

use crate::cli::CreateArgs;
use crate::error::add_archive_context;
use crate::output::OutputFormatter;
use crate::progress::CliProgress;
use anyhow::Context;
use anyhow::Result;
use dirzip_core::CreationConfig;
use dirzip_core::NoopProgress;
use dirzip_core::Password;
use dirzip_core::PasswordPolicy;
use dirzip_core::create_archive_with_progress;
use dirzip_core::naming::archive_path_for;
use dirzip_core::password::confirm_password;
use dirzip_core::password::validate_password;
use std::env;

pub fn execute(
    args: &CreateArgs,
    formatter: &dyn OutputFormatter,
    show_progress: bool,
) -> Result<()> {
    let output = match &args.output {
        Some(path) => path.clone(),
        None => {
            let cwd = env::current_dir().context("failed to get current directory")?;
            archive_path_for(&args.folder, &cwd)
        }
    };

    let password = add_archive_context(resolve_password(args), &args.folder)?;

    let mut config = CreationConfig::default()
        .with_password(password)
        .with_follow_symlinks(args.follow_symlinks);
    if let Some(level) = args.compression_level {
        config = config.with_compression_level(level);
    }

    let report = if show_progress {
        let mut progress = CliProgress::new("Zipping");
        add_archive_context(
            create_archive_with_progress(&args.folder, &output, &config, &mut progress),
            &args.folder,
        )?
    } else {
        let mut noop = NoopProgress;
        add_archive_context(
            create_archive_with_progress(&args.folder, &output, &config, &mut noop),
            &args.folder,
        )?
    };

    formatter.format_creation_result(&report)?;

    Ok(())
}

/// Applies the password policy, and the confirmation check when requested.
fn resolve_password(args: &CreateArgs) -> dirzip_core::Result<Option<Password>> {
    let Some(first) = args.password.as_deref().filter(|p| !p.is_empty()) else {
        return Ok(None);
    };

    let password = match args.confirm_password.as_deref() {
        Some(second) => confirm_password(first, second, PasswordPolicy::default())?,
        None => validate_password(first)?,
    };
    Ok(Some(password))
}
