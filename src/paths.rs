use std::path::{Path, PathBuf};

/// launchd label of the fixer daemon
pub const DAEMON_LABEL: &str = "be.mrhenry.nix-darwin-fixer";

/// LaunchDaemon definition, relative to the filesystem root
pub const LAUNCH_DAEMON_PATH: &str = "Library/LaunchDaemons/be.mrhenry.nix-darwin-fixer.plist";

/// GC root keeping the installed store path alive, relative to the filesystem root
pub const NIX_GC_ROOT_PATH: &str = "nix/var/nix/gcroots/nix-darwin-fixer";

/// Shell startup files patched by `fix`, in order, relative to the filesystem root
pub const SHELL_RC_FILES: &[&str] = &["etc/zshrc", "etc/bashrc"];

/// Environment variable carrying the store path of the running package
pub const STORE_PATH_ENV: &str = "SELF_NIX_STORE_PATH";

/// Concrete locations touched by the install, uninstall and fix commands.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Layout {
    pub launch_daemon: PathBuf,
    pub gc_root: PathBuf,
    pub rc_files: Vec<PathBuf>,
}

impl Layout {
    /// The real host paths
    pub fn system() -> Self {
        Self::under(Path::new("/"))
    }

    /// Every fixed path re-rooted under `root`
    pub fn under(root: &Path) -> Self {
        Self {
            launch_daemon: root.join(LAUNCH_DAEMON_PATH),
            gc_root: root.join(NIX_GC_ROOT_PATH),
            rc_files: SHELL_RC_FILES.iter().map(|f| root.join(f)).collect(),
        }
    }
}
