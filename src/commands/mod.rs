pub mod fix;
pub mod install;
pub mod uninstall;

/// Warn when touching system paths without root; the write itself reports the failure.
fn warn_if_not_root(command: &str) {
    if !nix::unistd::Uid::effective().is_root() {
        tracing::warn!(
            "nix-darwin-fixer {} normally needs root (use sudo)",
            command
        );
    }
}
