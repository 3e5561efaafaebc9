//! Cooperative cancellation shared between a caller and a running operation.

use crate::ArchiveError;
use crate::Result;
use std::sync::Arc;
use std::sync::atomic::AtomicBool;
use std::sync::atomic::Ordering;

/// A cloneable flag checked between entries.
///
/// # Examples
///
/// ```
/// use dirzip_core::CancelToken;
///
/// let token = CancelToken::new();
/// let handle = token.clone();
/// assert!(token.check().is_ok());
///
/// handle.cancel();
/// assert!(token.is_cancelled());
/// assert!(token.check().is_err());
/// ```
#[derive(Debug, Clone, Default)]
pub struct CancelToken(Arc<AtomicBool>);

impl CancelToken {
    /// Creates a token that is not cancelled.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Requests cancellation. Every clone observes it.
    pub fn cancel(&self) {
        self.0.store(true, Ordering::Relaxed);
    }

    /// Returns `true` once `cancel` has been called on any clone.
    #[must_use]
    pub fn is_cancelled(&self) -> bool {
        self.0.load(Ordering::Relaxed)
    }

    /// Returns `Err(ArchiveError::Cancelled)` if cancellation was requested.
    ///
    /// # Errors
    ///
    /// Returns `ArchiveError::Cancelled` after `cancel` was called.
    pub fn check(&self) -> Result<()> {
        if self.is_cancelled() {
            return Err(ArchiveError::Cancelled);
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cancel_visible_across_threads() {
        let token = CancelToken::new();
        let remote = token.clone();
        std::thread::spawn(move || remote.cancel())
            .join()
            .ok();
        assert!(matches!(token.check(), Err(ArchiveError::Cancelled)));
    }

    #[test]
    fn test_default_not_cancelled() {
        assert!(!CancelToken::default().is_cancelled());
    }
}
