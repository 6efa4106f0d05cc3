//! Shell startup file patching
//!
//! macOS updates regularly replace `/etc/zshrc` and `/etc/bashrc`, dropping
//! the lines the Nix installer added. This module puts them back.

use anyhow::{Context, Result};
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use crate::util;

/// Environment script whose presence marks a file as already patched
pub const NIX_DAEMON_PROFILE: &str = "/nix/var/nix/profiles/default/etc/profile.d/nix-daemon.sh";

/// Suffix of the copy written before a file is patched
pub const BACKUP_SUFFIX: &str = ".backup-before-nix";

/// Lines appended to a shell startup file
pub const SNIPPET: &str = "
# Nix
if [ -e '/nix/var/nix/profiles/default/etc/profile.d/nix-daemon.sh' ]; then
  . '/nix/var/nix/profiles/default/etc/profile.d/nix-daemon.sh'
fi
# End Nix
";

/// What [`patch_file`] did with a file
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PatchOutcome {
    /// The file does not exist; nothing was created
    Missing,
    /// The file already references the Nix environment script
    AlreadyPatched,
    /// A backup was written and the snippet appended
    Patched,
}

/// Backup location for `path`
pub fn backup_path(path: &Path) -> PathBuf {
    let mut backup = path.as_os_str().to_owned();
    backup.push(BACKUP_SUFFIX);
    PathBuf::from(backup)
}

/// Whether `content` already sources the Nix environment script.
///
/// Any occurrence counts, including one inside a comment. Works on raw bytes
/// since shell files are not guaranteed to be UTF-8.
pub fn is_patched(content: &[u8]) -> bool {
    let marker = NIX_DAEMON_PROFILE.as_bytes();
    content.windows(marker.len()).any(|w| w == marker)
}

/// Append [`SNIPPET`] to `path` unless it is missing or already patched.
pub fn patch_file(path: &Path) -> Result<PatchOutcome> {
    println!("Checking {}", path.display());

    let text = match fs::read(path) {
        Ok(text) => text,
        Err(e) if e.kind() == ErrorKind::NotFound => {
            println!("File does not exist, skipping");
            return Ok(PatchOutcome::Missing);
        }
        Err(e) => return Err(e).with_context(|| format!("Failed to read {}", path.display())),
    };

    if is_patched(&text) {
        println!("File already fixed, skipping");
        return Ok(PatchOutcome::AlreadyPatched);
    }

    let backup = backup_path(path);
    util::write_read_only(&backup, &text)
        .with_context(|| format!("Failed to back up {}", path.display()))?;
    tracing::debug!("Saved {} to {}", path.display(), backup.display());

    let mut patched = text;
    patched.extend_from_slice(SNIPPET.as_bytes());
    util::write_read_only(path, &patched)
        .with_context(|| format!("Failed to patch {}", path.display()))?;

    println!("File fixed");

    Ok(PatchOutcome::Patched)
}
