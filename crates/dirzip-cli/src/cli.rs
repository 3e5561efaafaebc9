//! CLI argument parsing using clap.

use clap::Parser;
use clap::Subcommand;
use clap_complete::Shell;
use std::path::PathBuf;

/// Environment variable read when `--password` is not given.
pub const PASSWORD_ENV: &str = "DIRZIP_PASSWORD";

#[derive(Parser)]
#[command(name = "dirzip")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Suppress non-error output
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Output results in JSON format
    #[arg(short, long, global = true)]
    pub json: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Zip a folder into `<FOLDER>.zip`
    Create(CreateArgs),
    /// Unzip an archive into `<ARCHIVE>-unzip`
    Extract(ExtractArgs),
    /// List archive contents without extraction
    List(ListArgs),
    /// Generate shell completions
    Completion(CompletionArgs),
}

impl Commands {
    /// Subcommand name as typed on the command line.
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Create(_) => "create",
            Self::Extract(_) => "extract",
            Self::List(_) => "list",
            Self::Completion(_) => "completion",
        }
    }
}

#[derive(clap::Args)]
pub struct CreateArgs {
    /// Folder to archive
    #[arg(value_name = "FOLDER")]
    pub folder: PathBuf,

    /// Output archive path (default: `<FOLDER name>.zip` in the current
    /// directory)
    #[arg(short, long, value_name = "OUTPUT")]
    pub output: Option<PathBuf>,

    /// Encrypt file contents with AES-256 (letters and digits only)
    #[arg(short, long, env = PASSWORD_ENV, hide_env_values = true)]
    pub password: Option<String>,

    /// Repeat the password; creation fails if the two differ
    #[arg(long, value_name = "PASSWORD", requires = "password")]
    pub confirm_password: Option<String>,

    /// Compression level (0 = store, 9 = best)
    #[arg(short = 'l', long, value_parser = clap::value_parser!(u8).range(0..=9))]
    pub compression_level: Option<u8>,

    /// Follow symbolic links instead of skipping them
    #[arg(long)]
    pub follow_symlinks: bool,
}

#[derive(clap::Args)]
pub struct ExtractArgs {
    /// Path to the archive file
    #[arg(value_name = "ARCHIVE")]
    pub archive: PathBuf,

    /// Output directory (default: `<ARCHIVE stem>-unzip` in the current
    /// directory)
    #[arg(short, long, value_name = "OUTPUT_DIR")]
    pub output_dir: Option<PathBuf>,

    /// Password for encrypted archives
    #[arg(short, long, env = PASSWORD_ENV, hide_env_values = true)]
    pub password: Option<String>,

    /// Replace characters that are invalid on any common filesystem
    #[arg(long)]
    pub portable_names: bool,
}

#[derive(clap::Args)]
pub struct ListArgs {
    /// Path to the archive file
    #[arg(value_name = "ARCHIVE")]
    pub archive: PathBuf,

    /// Show detailed entry information
    #[arg(short, long)]
    pub long: bool,

    /// Show sizes in human-readable format
    #[arg(short = 'H', long)]
    pub human_readable: bool,
}

#[derive(clap::Args)]
pub struct CompletionArgs {
    /// Target shell
    #[arg(value_enum)]
    pub shell: Shell,
}
