//! Whole-file reads and crash-safe replacement of store files

use std::ffi::OsString;
use std::fs::{self, File};
use std::io::{self, ErrorKind, Write};
use std::path::{Path, PathBuf};

use crate::error::SpendError;

/// Read a file as UTF-8 text; a missing file reads as `None`
pub fn read_text<P: AsRef<Path>>(path: P) -> Result<Option<String>, SpendError> {
    let path = path.as_ref();
    match fs::read_to_string(path) {
        Ok(text) => Ok(Some(text)),
        Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
        Err(e) => Err(SpendError::Storage(format!(
            "Failed to read {}: {}",
            path.display(),
            e
        ))),
    }
}

/// Replace the contents of `path` with `contents`.
///
/// Writes a sibling `<name>.tmp`, syncs it, then renames it over the target,
/// so readers see either the old file or the new one. Missing parent
/// directories are created.
pub fn write_text_atomic<P: AsRef<Path>>(path: P, contents: &str) -> Result<(), SpendError> {
    let path = path.as_ref();
    let staged = staging_path(path);

    let replace = || -> io::Result<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        let mut file = File::create(&staged)?;
        file.write_all(contents.as_bytes())?;
        file.sync_all()?;
        fs::rename(&staged, path)
    };

    replace().map_err(|e| {
        let _ = fs::remove_file(&staged);
        SpendError::Storage(format!("Failed to write {}: {}", path.display(), e))
    })
}

fn staging_path(path: &Path) -> PathBuf {
    let mut name = path
        .file_name()
        .map(OsString::from)
        .unwrap_or_default();
    name.push(".tmp");
    path.with_file_name(name)
}
