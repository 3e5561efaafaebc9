//! Entry name sanitization.
//!
//! Archive entry names may contain characters that cannot appear in a file
//! name on the local filesystem. [`sanitize`] replaces them with
//! [`SUBSTITUTE`] while keeping both `/` and `\` so the directory structure
//! of the entry survives. Sanitization never makes a name safe to join onto
//! a destination directory by itself; see [`crate::types::SafePath`] for the
//! traversal checks that run afterwards.

/// Character written in place of every invalid character.
pub const SUBSTITUTE: char = '_';

/// Which set of characters counts as invalid.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum NamePolicy {
    /// Characters invalid on the platform this binary was built for.
    #[default]
    Platform,
    /// Characters invalid on any mainstream filesystem (the Windows set).
    Portable,
}

impl NamePolicy {
    /// Returns `true` if `c` must be replaced under this policy.
    ///
    /// Path separators are never reported as invalid.
    #[must_use]
    pub fn is_invalid(self, c: char) -> bool {
        if is_separator(c) {
            return false;
        }
        match self {
            Self::Platform => is_platform_invalid(c),
            Self::Portable => is_windows_invalid(c),
        }
    }
}

/// Sanitizes `raw` with the platform policy.
///
/// # Examples
///
/// ```
/// use dirzip_core::sanitize::sanitize;
///
/// assert_eq!(sanitize("docs/a.txt"), "docs/a.txt");
/// assert_eq!(sanitize("nul\0byte"), "nul_byte");
/// ```
#[must_use]
pub fn sanitize(raw: &str) -> String {
    sanitize_with(raw, NamePolicy::Platform)
}

/// Sanitizes `raw`, replacing every character invalid under `policy`.
///
/// The function is pure and idempotent: the substitute character is valid
/// under every policy, so a second pass changes nothing.
///
/// # Examples
///
/// ```
/// use dirzip_core::sanitize::NamePolicy;
/// use dirzip_core::sanitize::sanitize_with;
///
/// let safe = sanitize_with("report: v2?/draft*.txt", NamePolicy::Portable);
/// assert_eq!(safe, "report_ v2_/draft_.txt");
/// ```
#[must_use]
pub fn sanitize_with(raw: &str, policy: NamePolicy) -> String {
    raw.chars()
        .map(|c| if policy.is_invalid(c) { SUBSTITUTE } else { c })
        .collect()
}

const fn is_separator(c: char) -> bool {
    matches!(c, '/' | '\\')
}

const fn is_windows_invalid(c: char) -> bool {
    matches!(c, '<' | '>' | ':' | '"' | '|' | '?' | '*') || (c as u32) < 0x20
}

#[cfg(windows)]
const fn is_platform_invalid(c: char) -> bool {
    is_windows_invalid(c)
}

#[cfg(not(windows))]
const fn is_platform_invalid(c: char) -> bool {
    c == '\0'
}
