//! Whole-file replacement shared by the data and config stores.

use std::{
    ffi::OsString,
    fs, io,
    path::{Path, PathBuf},
};

/// Sibling path a rewrite is staged to before the final rename. The full
/// original name is kept, so `expenses.dat` stages as `expenses.dat.tmp`.
pub fn staging_path(path: &Path) -> PathBuf {
    let mut name = path.file_name().map(OsString::from).unwrap_or_default();
    name.push(".tmp");
    path.with_file_name(name)
}

/// Replaces `path` with `contents` by writing a staged sibling and renaming
/// it into place. The previous contents survive any failure before the
/// rename.
pub fn replace_file(path: &Path, contents: &str) -> io::Result<()> {
    let staged = staging_path(path);
    fs::write(&staged, contents)?;
    fs::rename(&staged, path)?;
    Ok(())
}
