//! Validated entry path type for extraction.

use crate::ArchiveError;
use crate::Result;
use std::path::Component;
use std::path::Path;
use std::path::PathBuf;

use super::DestDir;

/// A relative path that stays inside a destination directory.
///
/// Built from a sanitized entry name. Both `/` and `\` are treated as
/// separators so names written on any platform are split the same way.
///
/// # Rejected names
///
/// - empty names, or names made only of separators and `.`
/// - a leading separator or a platform path prefix (absolute paths)
/// - any `..` segment
/// - NUL bytes
/// - paths whose nearest existing ancestor resolves outside the
///   destination, such as through a symlinked directory already present
///
/// # Examples
///
/// ```no_run
/// use dirzip_core::types::DestDir;
/// use dirzip_core::types::SafePath;
///
/// # fn main() -> Result<(), Box<dyn std::error::Error>> {
/// let dest = DestDir::new("/tmp")?;
///
/// let safe = SafePath::validate("docs\\a.txt", &dest)?;
/// assert_eq!(safe.as_path(), std::path::Path::new("docs/a.txt"));
///
/// assert!(SafePath::validate("../etc/passwd", &dest).is_err());
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct SafePath(PathBuf);

impl SafePath {
    /// Validates `name` against `dest` and returns the normalized path.
    ///
    /// # Errors
    ///
    /// Returns `ArchiveError::UnsafePath` for any rejected name, or
    /// `ArchiveError::Io` if an existing ancestor cannot be canonicalized.
    pub fn validate(name: &str, dest: &DestDir) -> Result<Self> {
        if name.contains('\0') || name.starts_with(['/', '\\']) {
            return Err(unsafe_path(name));
        }

        let mut normalized = PathBuf::new();
        for segment in name.split(['/', '\\']) {
            match segment {
                "" | "." => {}
                ".." => return Err(unsafe_path(name)),
                _ => normalized.push(segment),
            }
        }

        if normalized.as_os_str().is_empty()
            || !normalized
                .components()
                .all(|c| matches!(c, Component::Normal(_)))
        {
            return Err(unsafe_path(name));
        }

        ensure_within(&dest.as_path().join(&normalized), dest.as_path(), name)?;

        Ok(Self(normalized))
    }

    /// Returns the path as a `&Path`.
    #[inline]
    #[must_use]
    pub fn as_path(&self) -> &Path {
        &self.0
    }

    /// Converts into the inner `PathBuf`.
    #[inline]
    #[must_use]
    pub fn into_path_buf(self) -> PathBuf {
        self.0
    }
}

/// Canonicalizes the nearest existing ancestor of `resolved` and checks it
/// is still under `root`.
fn ensure_within(resolved: &Path, root: &Path, name: &str) -> Result<()> {
    let mut probe = resolved;
    loop {
        match probe.canonicalize() {
            Ok(canonical) => {
                if canonical.starts_with(root) {
                    return Ok(());
                }
                return Err(unsafe_path(name));
            }
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => match probe.parent() {
                Some(parent) => probe = parent,
                None => return Err(unsafe_path(name)),
            },
            Err(e) => {
                return Err(ArchiveError::Io(std::io::Error::new(
                    e.kind(),
                    format!("failed to canonicalize {}: {e}", probe.display()),
                )));
            }
        }
    }
}

fn unsafe_path(name: &str) -> ArchiveError {
    ArchiveError::UnsafePath {
        name: name.to_string(),
    }
}

#[cfg(test)]
#[allow(clippy::expect_used)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn create_test_dest() -> (TempDir, DestDir) {
        let temp = TempDir::new().expect("failed to create temp dir");
        let dest = DestDir::new(temp.path()).expect("failed to create dest");
        (temp, dest)
    }

    fn assert_rejected(name: &str, dest: &DestDir) {
        assert!(
            matches!(
                SafePath::validate(name, dest),
                Err(ArchiveError::UnsafePath { .. })
            ),
            "{name:?} should be rejected"
        );
    }

    #[test]
    fn test_valid_relative() {
        let (_temp, dest) = create_test_dest();
        let safe = SafePath::validate("foo/bar/baz.txt", &dest).expect("should be valid");
        assert_eq!(safe.as_path(), Path::new("foo/bar/baz.txt"));
    }

    #[test]
    fn test_backslash_is_separator() {
        let (_temp, dest) = create_test_dest();
        let safe = SafePath::validate("foo\\bar.txt", &dest).expect("should be valid");
        assert_eq!(safe.as_path(), Path::new("foo").join("bar.txt"));
    }

    #[test]
    fn test_directory_trailing_slash() {
        let (_temp, dest) = create_test_dest();
        let safe = SafePath::validate("sub/", &dest).expect("should be valid");
        assert_eq!(safe.as_path(), Path::new("sub"));
    }

    #[test]
    fn test_reject_parent_traversal() {
        let (_temp, dest) = create_test_dest();
        assert_rejected("../etc/passwd", &dest);
        assert_rejected("a/../../b", &dest);
        assert_rejected("a/b/..", &dest);
        assert_rejected("..\\..\\windows\\system32", &dest);
    }

    #[test]
    fn test_reject_absolute() {
        let (_temp, dest) = create_test_dest();
        assert_rejected("/etc/passwd", &dest);
        assert_rejected("\\windows\\system32", &dest);
    }

    #[test]
    fn test_reject_empty() {
        let (_temp, dest) = create_test_dest();
        assert_rejected("", &dest);
        assert_rejected("./", &dest);
        assert_rejected(".//.", &dest);
    }

    #[test]
    fn test_reject_nul() {
        let (_temp, dest) = create_test_dest();
        assert_rejected("a\0b", &dest);
    }

    #[test]
    fn test_dot_segments_normalized() {
        let (_temp, dest) = create_test_dest();
        let safe = SafePath::validate("./a/./b.txt", &dest).expect("should be valid");
        assert_eq!(safe.as_path(), Path::new("a/b.txt"));
    }

    #[test]
    fn test_dotdot_inside_name_allowed() {
        let (_temp, dest) = create_test_dest();
        let safe = SafePath::validate("notes..txt", &dest).expect("should be valid");
        assert_eq!(safe.as_path(), Path::new("notes..txt"));
    }

    #[test]
    fn test_unicode() {
        let (_temp, dest) = create_test_dest();
        assert!(SafePath::validate("文件/报告.txt", &dest).is_ok());
    }

    #[test]
    #[cfg(unix)]
    fn test_symlink_in_parent_chain() {
        use std::os::unix::fs::symlink;

        let (temp, dest) = create_test_dest();
        let outside = TempDir::new().expect("failed to create temp dir");
        symlink(outside.path(), temp.path().join("parent_dir")).expect("failed to symlink");

        assert_rejected("parent_dir/evil.txt", &dest);
        assert_rejected("parent_dir/new/deeper/evil.txt", &dest);
    }

    #[test]
    #[cfg(unix)]
    fn test_symlink_in_middle_of_path() {
        use std::os::unix::fs::symlink;

        let (temp, dest) = create_test_dest();
        let outside = TempDir::new().expect("failed to create temp dir");
        let legit = temp.path().join("legit");
        std::fs::create_dir(&legit).expect("failed to create dir");
        symlink(outside.path(), legit.join("escape")).expect("failed to symlink");

        assert_rejected("legit/escape/passwd", &dest);
    }

    #[test]
    fn test_existing_real_directory() {
        let (temp, dest) = create_test_dest();
        std::fs::create_dir(temp.path().join("real_dir")).expect("failed to create dir");
        assert!(SafePath::validate("real_dir/file.txt", &dest).is_ok());
    }
}
