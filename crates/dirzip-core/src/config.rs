//! Configuration for archive extraction.

use crate::Password;
use crate::sanitize::NamePolicy;
use crate::types::CancelToken;

/// Options for [`crate::extract_archive`].
///
/// # Examples
///
/// ```
/// use dirzip_core::ExtractionConfig;
/// use dirzip_core::Password;
/// use dirzip_core::sanitize::NamePolicy;
///
/// let config = ExtractionConfig::default()
///     .with_password(Some(Password::new("abc123")?))
///     .with_name_policy(NamePolicy::Portable);
/// assert!(config.password.is_some());
/// # Ok::<(), dirzip_core::ArchiveError>(())
/// ```
#[derive(Debug, Clone, Default)]
pub struct ExtractionConfig {
    /// Password for encrypted archives. Ignored for unencrypted ones.
    ///
    /// Default: `None`.
    pub password: Option<Password>,

    /// Which characters are replaced in entry names before extraction.
    ///
    /// Default: [`NamePolicy::Platform`].
    pub name_policy: NamePolicy,

    /// Checked between entries; a cancelled token aborts the extraction.
    ///
    /// Default: `None`.
    pub cancel: Option<CancelToken>,
}

impl ExtractionConfig {
    /// Creates a configuration with defaults.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the password.
    #[must_use]
    pub fn with_password(mut self, password: Option<Password>) -> Self {
        self.password = password;
        self
    }

    /// Sets the entry name policy.
    #[must_use]
    pub fn with_name_policy(mut self, policy: NamePolicy) -> Self {
        self.name_policy = policy;
        self
    }

    /// Sets the cancellation token.
    #[must_use]
    pub fn with_cancel(mut self, token: CancelToken) -> Self {
        self.cancel = Some(token);
        self
    }

    pub(crate) fn check_cancelled(&self) -> crate::Result<()> {
        self.cancel.as_ref().map_or(Ok(()), CancelToken::check)
    }
}
