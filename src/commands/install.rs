use anyhow::{Context, Result};
use std::env;
use std::path::Path;

use crate::cmd;
use crate::error::FixerError;
use crate::launchd::{self, ServiceManager};
use crate::paths::{Layout, DAEMON_LABEL, STORE_PATH_ENV};
use crate::util;

/// Validate the store path handed over by the Nix package wrapper
pub fn parse_store_path(value: Option<String>) -> Result<String, FixerError> {
    match value {
        Some(path) if !path.is_empty() => Ok(path),
        _ => Err(FixerError::MissingStorePath),
    }
}

pub fn install(layout: &Layout, manager: &dyn ServiceManager) -> Result<()> {
    super::warn_if_not_root("install");

    install_from(layout, manager, env::var(STORE_PATH_ENV).ok())
}

/// Install from the raw `SELF_NIX_STORE_PATH` value.
///
/// An unset or empty value fails before anything is written.
pub fn install_from(
    layout: &Layout,
    manager: &dyn ServiceManager,
    store_path: Option<String>,
) -> Result<()> {
    let store_path = parse_store_path(store_path)?;
    install_with(layout, manager, &store_path)
}

/// Install the LaunchDaemon and GC root for the package at `store_path`.
///
/// Loading the daemon is best-effort: launchd picks the definition up on the
/// next boot even when the immediate load fails.
pub fn install_with(
    layout: &Layout,
    manager: &dyn ServiceManager,
    store_path: &str,
) -> Result<()> {
    println!(
        "Installing LaunchDaemon {} to {}",
        DAEMON_LABEL,
        layout.launch_daemon.display()
    );

    let plist = launchd::render_plist(store_path);
    util::write_read_only(&layout.launch_daemon, plist.as_bytes())
        .context("Failed to write LaunchDaemon")?;

    println!("Creating GC root at {}", layout.gc_root.display());

    util::replace_symlink(Path::new(store_path), &layout.gc_root)
        .context("Failed to create GC root")?;

    cmd::advisory(&format!("{} load", manager.name()), || {
        manager.load(&layout.launch_daemon)
    });

    println!("✓ Installed {}", DAEMON_LABEL);

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::testing::{is_installed, RecordingManager};
    use crate::launchd::STORE_PATH_PLACEHOLDER;
    use std::fs;
    use std::path::PathBuf;

    fn sandbox() -> (tempfile::TempDir, Layout) {
        let dir = tempfile::tempdir().unwrap();
        let layout = Layout::under(dir.path());
        fs::create_dir_all(layout.launch_daemon.parent().unwrap()).unwrap();
        fs::create_dir_all(layout.gc_root.parent().unwrap()).unwrap();
        (dir, layout)
    }

    #[test]
    fn parse_store_path_rejects_missing_and_empty() {
        assert_eq!(parse_store_path(None), Err(FixerError::MissingStorePath));
        assert_eq!(
            parse_store_path(Some(String::new())),
            Err(FixerError::MissingStorePath)
        );
        assert_eq!(
            parse_store_path(Some("/nix/store/abc-pkg".into())),
            Ok("/nix/store/abc-pkg".to_string())
        );
    }

    #[test]
    fn missing_store_path_writes_nothing() {
        let (_dir, layout) = sandbox();
        let manager = RecordingManager::default();

        for value in [None, Some(String::new())] {
            let err = install_from(&layout, &manager, value).unwrap_err();

            assert_eq!(
                err.downcast_ref::<FixerError>(),
                Some(&FixerError::MissingStorePath)
            );
            assert!(!layout.launch_daemon.exists());
            assert!(fs::symlink_metadata(&layout.gc_root).is_err());
            assert!(manager.calls.borrow().is_empty());
        }
    }

    #[test]
    fn install_from_uses_given_store_path() {
        let (_dir, layout) = sandbox();

        install_from(
            &layout,
            &RecordingManager::default(),
            Some("/nix/store/abc-pkg".into()),
        )
        .unwrap();

        assert_eq!(
            fs::read_link(&layout.gc_root).unwrap(),
            PathBuf::from("/nix/store/abc-pkg")
        );
    }

    #[test]
    fn install_writes_rendered_definition() {
        let (_dir, layout) = sandbox();
        let manager = RecordingManager::default();

        install_with(&layout, &manager, "/nix/store/abc-pkg").unwrap();

        let plist = fs::read_to_string(&layout.launch_daemon).unwrap();
        assert!(plist.contains("/nix/store/abc-pkg/bin/nix-darwin-fixer"));
        assert!(!plist.contains(STORE_PATH_PLACEHOLDER));
    }

    #[test]
    fn install_links_gc_root_to_store_path() {
        let (_dir, layout) = sandbox();
        let manager = RecordingManager::default();

        install_with(&layout, &manager, "/nix/store/abc-pkg").unwrap();

        assert_eq!(
            fs::read_link(&layout.gc_root).unwrap(),
            PathBuf::from("/nix/store/abc-pkg")
        );
        assert!(is_installed(&layout));
    }

    #[test]
    fn install_replaces_existing_gc_root() {
        let (_dir, layout) = sandbox();
        std::os::unix::fs::symlink("/nix/store/old-pkg", &layout.gc_root).unwrap();

        install_with(&layout, &RecordingManager::default(), "/nix/store/new-pkg").unwrap();

        assert_eq!(
            fs::read_link(&layout.gc_root).unwrap(),
            PathBuf::from("/nix/store/new-pkg")
        );
    }

    #[test]
    fn install_loads_the_definition() {
        let (_dir, layout) = sandbox();
        let manager = RecordingManager::default();

        install_with(&layout, &manager, "/nix/store/abc-pkg").unwrap();

        assert_eq!(
            *manager.calls.borrow(),
            vec![format!("load {}", layout.launch_daemon.display())]
        );
    }

    #[test]
    fn failed_load_still_counts_as_installed() {
        let (_dir, layout) = sandbox();
        let manager = RecordingManager::failing();

        install_with(&layout, &manager, "/nix/store/abc-pkg").unwrap();

        assert_eq!(manager.calls.borrow().len(), 1);
        assert!(is_installed(&layout));
    }

    #[test]
    fn unwritable_definition_path_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let layout = Layout::under(dir.path());
        let manager = RecordingManager::default();

        assert!(install_with(&layout, &manager, "/nix/store/abc-pkg").is_err());
        assert!(fs::symlink_metadata(&layout.gc_root).is_err());
        assert!(manager.calls.borrow().is_empty());
    }

    #[test]
    fn missing_gc_root_directory_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let layout = Layout::under(dir.path());
        fs::create_dir_all(layout.launch_daemon.parent().unwrap()).unwrap();
        let manager = RecordingManager::default();

        let err = install_with(&layout, &manager, "/nix/store/abc-pkg").unwrap_err();

        assert!(err.to_string().contains("GC root"));
        assert!(manager.calls.borrow().is_empty());
    }
}
