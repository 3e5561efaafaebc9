//! Archive passwords and the caller-facing password policy.
//!
//! Key derivation strength comes from the zip AES scheme (PBKDF2 with a
//! random salt per entry); the policy here only restricts which characters a
//! user may type.

use crate::ArchiveError;
use crate::Result;
use std::fmt;

/// A non-empty archive password.
///
/// `Debug` output is redacted so configs can be logged safely.
///
/// # Examples
///
/// ```
/// use dirzip_core::Password;
///
/// let password = Password::new("abc123")?;
/// assert_eq!(password.expose(), "abc123");
/// assert_eq!(format!("{password:?}"), "Password(***)");
///
/// assert!(Password::new("").is_err());
/// # Ok::<(), dirzip_core::ArchiveError>(())
/// ```
#[derive(Clone, PartialEq, Eq)]
pub struct Password(String);

impl Password {
    /// Wraps `value`, rejecting the empty string.
    ///
    /// # Errors
    ///
    /// Returns `ArchiveError::InvalidPassword` if `value` is empty.
    pub fn new(value: impl Into<String>) -> Result<Self> {
        let value = value.into();
        if value.is_empty() {
            return Err(ArchiveError::InvalidPassword {
                reason: "password is empty".to_string(),
            });
        }
        Ok(Self(value))
    }

    /// Builds a password from optional user input, treating an empty string
    /// as "no password".
    #[must_use]
    pub fn from_optional(value: Option<&str>) -> Option<Self> {
        value.and_then(|v| Self::new(v).ok())
    }

    /// Returns the secret text.
    #[must_use]
    pub fn expose(&self) -> &str {
        &self.0
    }

    /// Returns the secret as bytes, as the zip decryptor expects.
    #[must_use]
    pub fn as_bytes(&self) -> &[u8] {
        self.0.as_bytes()
    }
}

impl fmt::Debug for Password {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Password(***)")
    }
}

/// Which characters a password may contain.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum PasswordPolicy {
    /// ASCII letters and digits only.
    #[default]
    AsciiAlphanumeric,
    /// Any non-empty string.
    NonEmpty,
}

impl PasswordPolicy {
    /// Checks `candidate` against this policy.
    ///
    /// # Errors
    ///
    /// Returns `ArchiveError::InvalidPassword` describing the first violation.
    pub fn check(self, candidate: &str) -> Result<()> {
        if candidate.is_empty() {
            return Err(ArchiveError::InvalidPassword {
                reason: "password is empty".to_string(),
            });
        }
        if self == Self::AsciiAlphanumeric
            && let Some(bad) = candidate.chars().find(|c| !c.is_ascii_alphanumeric())
        {
            return Err(ArchiveError::InvalidPassword {
                reason: format!("only ASCII letters and digits are allowed, found {bad:?}"),
            });
        }
        Ok(())
    }
}

/// Validates `candidate` with the default policy and wraps it.
///
/// # Errors
///
/// Returns `ArchiveError::InvalidPassword` if the password is empty or has
/// characters other than ASCII letters and digits.
pub fn validate_password(candidate: &str) -> Result<Password> {
    validate_password_with(candidate, PasswordPolicy::default())
}

/// Validates `candidate` with an explicit policy and wraps it.
///
/// # Errors
///
/// Returns `ArchiveError::InvalidPassword` if the policy rejects it.
pub fn validate_password_with(candidate: &str, policy: PasswordPolicy) -> Result<Password> {
    policy.check(candidate)?;
    Password::new(candidate)
}

/// Validates a password entered twice, as a confirmation prompt would.
///
/// # Errors
///
/// Returns `ArchiveError::InvalidPassword` if `first` fails the policy or the
/// two entries differ.
///
/// # Examples
///
/// ```
/// use dirzip_core::password::PasswordPolicy;
/// use dirzip_core::password::confirm_password;
///
/// assert!(confirm_password("abc123", "abc123", PasswordPolicy::default()).is_ok());
/// assert!(confirm_password("abc123", "abc124", PasswordPolicy::default()).is_err());
/// assert!(confirm_password("", "", PasswordPolicy::default()).is_err());
/// ```
pub fn confirm_password(first: &str, second: &str, policy: PasswordPolicy) -> Result<Password> {
    let password = validate_password_with(first, policy)?;
    if first != second {
        return Err(ArchiveError::InvalidPassword {
            reason: "passwords do not match".to_string(),
        });
    }
    Ok(password)
}
