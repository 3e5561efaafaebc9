//! Default output locations for archives and extraction directories.

use std::path::Path;
use std::path::PathBuf;

/// Extension of every archive this crate writes.
pub const ARCHIVE_EXTENSION: &str = "zip";

/// Suffix appended to the archive stem to name the extraction directory.
pub const EXTRACT_DIR_SUFFIX: &str = "-unzip";

/// Returns `<out_dir>/<folder name>.zip`.
///
/// Trailing separators and `.` components of `folder` are ignored. A folder
/// without a usable name (such as `/`) produces `archive.zip`.
///
/// # Examples
///
/// ```
/// use dirzip_core::naming::archive_path_for;
/// use std::path::Path;
///
/// let path = archive_path_for(Path::new("projects/docs/"), Path::new("out"));
/// assert_eq!(path, Path::new("out/docs.zip"));
/// ```
#[must_use]
pub fn archive_path_for(folder: &Path, out_dir: &Path) -> PathBuf {
    let name = folder
        .components()
        .next_back()
        .and_then(|c| match c {
            std::path::Component::Normal(name) => Some(name.to_os_string()),
            _ => None,
        })
        .or_else(|| {
            folder
                .canonicalize()
                .ok()
                .and_then(|p| p.file_name().map(std::ffi::OsStr::to_os_string))
        })
        .unwrap_or_else(|| "archive".into());

    let mut file_name = name;
    file_name.push(".");
    file_name.push(ARCHIVE_EXTENSION);
    out_dir.join(file_name)
}

/// Returns `<out_dir>/<archive stem>-unzip`.
///
/// # Examples
///
/// ```
/// use dirzip_core::naming::extract_dir_for;
/// use std::path::Path;
///
/// let dir = extract_dir_for(Path::new("downloads/docs.zip"), Path::new("."));
/// assert_eq!(dir, Path::new("./docs-unzip"));
/// ```
#[must_use]
pub fn extract_dir_for(archive: &Path, out_dir: &Path) -> PathBuf {
    let mut name = archive
        .file_stem()
        .map_or_else(|| "archive".into(), std::ffi::OsStr::to_os_string);
    name.push(EXTRACT_DIR_SUFFIX);
    out_dir.join(name)
}
