//! Configuration for archive creation.

use crate::ArchiveError;
use crate::Password;
use crate::Result;
use crate::types::CancelToken;

/// Default Deflate level.
pub const DEFAULT_COMPRESSION_LEVEL: u8 = 6;

/// Options for [`crate::create_archive`].
///
/// # Examples
///
/// ```
/// use dirzip_core::CreationConfig;
/// use dirzip_core::Password;
///
/// // Plain archive, default compression
/// let config = CreationConfig::default();
///
/// // Encrypted, best compression
/// let custom = CreationConfig::default()
///     .with_password(Some(Password::new("abc123")?))
///     .with_compression_level(9);
/// assert!(custom.validate().is_ok());
/// # Ok::<(), dirzip_core::ArchiveError>(())
/// ```
#[derive(Debug, Clone)]
pub struct CreationConfig {
    /// Encrypt every file entry with AES-256 under this password.
    ///
    /// Default: `None`.
    pub password: Option<Password>,

    /// Deflate level, 0 (stored) to 9 (best).
    ///
    /// `None` uses [`DEFAULT_COMPRESSION_LEVEL`].
    ///
    /// Default: `Some(6)`.
    pub compression_level: Option<u8>,

    /// Follow symlinks while walking the source folder.
    ///
    /// Default: `false` (symlinks are skipped with a warning).
    pub follow_symlinks: bool,

    /// Checked between entries; a cancelled token aborts creation.
    ///
    /// Default: `None`.
    pub cancel: Option<CancelToken>,
}

impl Default for CreationConfig {
    fn default() -> Self {
        Self {
            password: None,
            compression_level: Some(DEFAULT_COMPRESSION_LEVEL),
            follow_symlinks: false,
            cancel: None,
        }
    }
}

impl CreationConfig {
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

    /// Sets the compression level. Out-of-range values are reported by
    /// [`CreationConfig::validate`].
    #[must_use]
    pub fn with_compression_level(mut self, level: u8) -> Self {
        self.compression_level = Some(level);
        self
    }

    /// Sets whether symlinks are followed.
    #[must_use]
    pub fn with_follow_symlinks(mut self, follow: bool) -> Self {
        self.follow_symlinks = follow;
        self
    }

    /// Sets the cancellation token.
    #[must_use]
    pub fn with_cancel(mut self, token: CancelToken) -> Self {
        self.cancel = Some(token);
        self
    }

    /// Effective compression level.
    #[must_use]
    pub fn level(&self) -> u8 {
        self.compression_level.unwrap_or(DEFAULT_COMPRESSION_LEVEL)
    }

    /// Validates the configuration.
    ///
    /// # Errors
    ///
    /// Returns `ArchiveError::InvalidCompressionLevel` if the level is above 9.
    pub fn validate(&self) -> Result<()> {
        if let Some(level) = self.compression_level
            && level > 9
        {
            return Err(ArchiveError::InvalidCompressionLevel { level });
        }
        Ok(())
    }

    pub(crate) fn check_cancelled(&self) -> Result<()> {
        self.cancel.as_ref().map_or(Ok(()), CancelToken::check)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default() {
        let config = CreationConfig::default();
        assert!(config.password.is_none());
        assert_eq!(config.compression_level, Some(6));
        assert!(!config.follow_symlinks);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_level_fallback() {
        let config = CreationConfig {
            compression_level: None,
            ..CreationConfig::default()
        };
        assert_eq!(config.level(), DEFAULT_COMPRESSION_LEVEL);
    }

    #[test]
    fn test_validate_level_bounds() {
        assert!(
            CreationConfig::default()
                .with_compression_level(0)
                .validate()
                .is_ok()
        );
        assert!(
            CreationConfig::default()
                .with_compression_level(9)
                .validate()
                .is_ok()
        );
        assert!(matches!(
            CreationConfig::default()
                .with_compression_level(10)
                .validate(),
            Err(ArchiveError::InvalidCompressionLevel { level: 10 })
        ));
    }

    #[test]
    fn test_builders() {
        let token = CancelToken::new();
        let config = CreationConfig::new()
            .with_follow_symlinks(true)
            .with_cancel(token.clone());
        assert!(config.follow_symlinks);
        assert!(config.check_cancelled().is_ok());
        token.cancel();
        assert!(config.check_cancelled().is_err());
    }
}
