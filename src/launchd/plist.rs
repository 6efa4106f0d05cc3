/// Token replaced by the store path when rendering the daemon definition
pub const STORE_PATH_PLACEHOLDER: &str = "[[NIX_STORE_PATH]]";

const LAUNCH_DAEMON_TEMPLATE: &str = include_str!("../../templates/launch-daemon.plist");

/// Render the LaunchDaemon plist for the package installed at `store_path`.
///
/// The daemon waits for `<store_path>/bin/nix-darwin-fixer` to appear (the
/// Nix volume mounts late during boot) and then runs `fix` once.
pub fn render_plist(store_path: &str) -> String {
    LAUNCH_DAEMON_TEMPLATE.replace(STORE_PATH_PLACEHOLDER, store_path)
}
