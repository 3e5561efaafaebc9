//! Progress rendering for CLI operations.

use console::Term;
use dirzip_core::ProgressCallback;
use dirzip_core::ProgressUpdate;
use indicatif::ProgressBar;
use indicatif::ProgressStyle;
use std::io::Write;
use std::io::{self};

/// Progress sink for the CLI.
///
/// On a terminal it draws an indicatif bar labelled with the entry being
/// processed. Otherwise it prints one `progress: NN.NN%` line per update to
/// stderr, so piped stdout keeps only the result.
pub struct CliProgress {
    bar: Option<ProgressBar>,
}

impl CliProgress {
    /// Creates a progress sink.
    ///
    /// # Arguments
    ///
    /// * `message` - Prefix for the bar (e.g., "Zipping", "Unzipping")
    #[must_use]
    pub fn new(message: &str) -> Self {
        let bar = Self::should_draw_bar().then(|| {
            let bar = ProgressBar::new(0);
            bar.set_style(
                ProgressStyle::default_bar()
                    .template("{prefix} [{bar:40.cyan/blue}] {pos}/{len} entries {percent}% {wide_msg}")
                    .unwrap_or_else(|_| ProgressStyle::default_bar())
                    .progress_chars("█▓░"),
            );
            bar.set_prefix(message.to_string());
            bar
        });

        Self { bar }
    }

    /// Checks if an interactive bar should be drawn (TTY detection).
    #[must_use]
    pub fn should_draw_bar() -> bool {
        Term::stdout().is_term()
    }
}

/// Formats an update the way the line renderer prints it.
pub fn format_percent(update: &ProgressUpdate) -> String {
    format!("progress: {:.2}%", update.percent)
}

impl Drop for CliProgress {
    fn drop(&mut self) {
        if let Some(bar) = &self.bar {
            bar.finish_and_clear();
        }
    }
}

impl ProgressCallback for CliProgress {
    fn on_entry_start(&mut self, name: &str, total: usize, _current: usize) {
        if let Some(bar) = &self.bar {
            bar.set_length(total as u64);
            bar.set_message(name.to_string());
        }
    }

    fn on_progress(&mut self, update: &ProgressUpdate) {
        match &self.bar {
            Some(bar) => {
                bar.set_length(update.total as u64);
                bar.set_position(update.processed as u64);
            }
            None => {
                let _ = writeln!(io::stderr(), "{}", format_percent(update));
            }
        }
    }

    fn on_complete(&mut self) {
        if let Some(bar) = &self.bar {
            bar.finish_and_clear();
        }
    }
}
