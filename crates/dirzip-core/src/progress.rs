//! Progress tracking for archive creation and extraction.
//!
//! # Components
//!
//! - **`ProgressTracker`**: counts processed-of-total entries and computes a
//!   percentage. It performs no I/O.
//! - **`ProgressCallback`**: sink trait the caller passes into an operation.
//! - **`ProgressReporter`**: pairs a tracker with a sink for the duration of
//!   one operation.
//! - **`NoopProgress`** and **`ChannelProgress`**: ready-made sinks.

use std::sync::mpsc::Sender;

/// One progress update: `processed` of `total` entries, as a percentage.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ProgressUpdate {
    /// Entries finished so far.
    pub processed: usize,
    /// Entries in the whole operation.
    pub total: usize,
    /// `processed * 100 / total`, in `[0, 100]`.
    pub percent: f64,
}

/// Counts processed entries against a fixed total.
///
/// # Examples
///
/// ```
/// use dirzip_core::progress::ProgressTracker;
///
/// let mut tracker = ProgressTracker::new(4);
/// assert_eq!(tracker.advance().percent, 25.0);
/// assert_eq!(tracker.advance().percent, 50.0);
///
/// // Nothing to process counts as done.
/// assert_eq!(ProgressTracker::new(0).percent(), 100.0);
/// ```
#[derive(Debug, Clone)]
pub struct ProgressTracker {
    total: usize,
    processed: usize,
}

impl ProgressTracker {
    /// Creates a tracker for `total` entries.
    #[must_use]
    pub fn new(total: usize) -> Self {
        Self {
            total,
            processed: 0,
        }
    }

    /// Marks one more entry as processed and returns the new state.
    ///
    /// `processed` saturates at `total`, so the percentage never exceeds 100.
    /// With `total == 0` this is a no-op that reports 100.
    pub fn advance(&mut self) -> ProgressUpdate {
        if self.processed < self.total {
            self.processed += 1;
        }
        self.update()
    }

    /// Returns the current state without advancing.
    #[must_use]
    pub fn update(&self) -> ProgressUpdate {
        ProgressUpdate {
            processed: self.processed,
            total: self.total,
            percent: self.percent(),
        }
    }

    /// Current percentage in `[0, 100]`.
    #[must_use]
    pub fn percent(&self) -> f64 {
        if self.total == 0 {
            return 100.0;
        }
        self.processed as f64 * 100.0 / self.total as f64
    }

    /// Entries processed so far.
    #[must_use]
    pub fn processed(&self) -> usize {
        self.processed
    }

    /// Total entries.
    #[must_use]
    pub fn total(&self) -> usize {
        self.total
    }

    /// Returns `true` once every entry has been processed.
    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.processed >= self.total
    }
}

/// Callback trait for progress reporting during archive operations.
///
/// The trait requires `Send` so sinks can forward updates to another thread.
///
/// # Examples
///
/// ```
/// use dirzip_core::progress::ProgressCallback;
/// use dirzip_core::progress::ProgressUpdate;
///
/// struct PrintProgress;
///
/// impl ProgressCallback for PrintProgress {
///     fn on_progress(&mut self, update: &ProgressUpdate) {
///         println!("progress: {:.2}%", update.percent);
///     }
/// }
/// ```
pub trait ProgressCallback: Send {
    /// Called before an entry is processed.
    ///
    /// * `name` - Entry name inside the archive
    /// * `total` - Total number of entries
    /// * `current` - Current entry number (1-indexed)
    fn on_entry_start(&mut self, _name: &str, _total: usize, _current: usize) {}

    /// Called after an entry was written, or rejected during extraction.
    fn on_progress(&mut self, update: &ProgressUpdate);

    /// Called once when the whole operation succeeded.
    fn on_complete(&mut self) {}
}

/// No-op implementation of `ProgressCallback`.
#[derive(Debug, Default)]
pub struct NoopProgress;

impl ProgressCallback for NoopProgress {
    fn on_progress(&mut self, _update: &ProgressUpdate) {}
}

/// Forwards every update over an `mpsc` channel.
///
/// Send failures (receiver dropped) are ignored; the operation keeps going.
///
/// # Examples
///
/// ```
/// use dirzip_core::progress::ChannelProgress;
/// use dirzip_core::progress::ProgressCallback;
/// use dirzip_core::progress::ProgressTracker;
///
/// let (tx, rx) = std::sync::mpsc::channel();
/// let mut sink = ChannelProgress::new(tx);
/// let mut tracker = ProgressTracker::new(2);
/// sink.on_progress(&tracker.advance());
///
/// assert_eq!(rx.recv().unwrap().percent, 50.0);
/// ```
#[derive(Debug)]
pub struct ChannelProgress {
    sender: Sender<ProgressUpdate>,
}

impl ChannelProgress {
    /// Wraps the sending half of a channel.
    #[must_use]
    pub fn new(sender: Sender<ProgressUpdate>) -> Self {
        Self { sender }
    }
}

impl ProgressCallback for ChannelProgress {
    fn on_progress(&mut self, update: &ProgressUpdate) {
        let _ = self.sender.send(*update);
    }
}

/// Drives a `ProgressCallback` from a `ProgressTracker`.
///
/// Keeps the entry counter and the sink together so the writer and reader
/// loops only call `start`, `advance` and `complete`.
pub struct ProgressReporter<'a> {
    tracker: ProgressTracker,
    sink: &'a mut dyn ProgressCallback,
    started: usize,
}

impl<'a> ProgressReporter<'a> {
    /// Creates a reporter for `total` entries.
    #[must_use]
    pub fn new(sink: &'a mut dyn ProgressCallback, total: usize) -> Self {
        Self {
            tracker: ProgressTracker::new(total),
            sink,
            started: 0,
        }
    }

    /// Reports that processing started for an entry.
    pub fn start(&mut self, name: &str) {
        self.started += 1;
        self.sink
            .on_entry_start(name, self.tracker.total(), self.started);
    }

    /// Advances the tracker by one entry and forwards the update.
    pub fn advance(&mut self) -> ProgressUpdate {
        let update = self.tracker.advance();
        self.sink.on_progress(&update);
        update
    }

    /// Reports that the operation completed.
    ///
    /// An operation with nothing to process never advanced, so the final
    /// 100% update is sent here.
    pub fn complete(&mut self) {
        if self.tracker.total() == 0 {
            let update = self.tracker.update();
            self.sink.on_progress(&update);
        }
        self.sink.on_complete();
    }
}
