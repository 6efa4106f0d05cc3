use anyhow::{Context, Result};
use std::fs::{self, OpenOptions};
use std::io::{ErrorKind, Write};
use std::os::unix::fs::OpenOptionsExt;
use std::path::Path;

/// Mode for files created by this tool
pub const READ_ONLY_MODE: u32 = 0o444;

/// Write `contents` to `path`, truncating any existing file.
///
/// A newly created file gets [`READ_ONLY_MODE`]; an existing file keeps its
/// current permissions.
pub fn write_read_only(path: &Path, contents: &[u8]) -> Result<()> {
    let mut file = OpenOptions::new()
        .write(true)
        .create(true)
        .truncate(true)
        .mode(READ_ONLY_MODE)
        .open(path)
        .with_context(|| format!("Failed to open {} for writing", path.display()))?;

    file.write_all(contents)
        .with_context(|| format!("Failed to write {}", path.display()))?;

    Ok(())
}

/// Remove a file or symlink. Returns `false` if nothing was there.
pub fn remove_if_present(path: &Path) -> Result<bool> {
    match fs::remove_file(path) {
        Ok(()) => Ok(true),
        Err(e) if e.kind() == ErrorKind::NotFound => Ok(false),
        Err(e) => Err(e).with_context(|| format!("Failed to remove {}", path.display())),
    }
}

/// Point `link` at `target`, dropping whatever was at `link` before.
pub fn replace_symlink(target: &Path, link: &Path) -> Result<()> {
    // Remove existing link if present
    if let Err(e) = fs::remove_file(link) {
        tracing::debug!("Nothing removed at {}: {}", link.display(), e);
    }

    std::os::unix::fs::symlink(target, link).with_context(|| {
        format!(
            "Failed to link {} -> {}",
            link.display(),
            target.display()
        )
    })
}
