use anyhow::{Context, Result};

use crate::cmd;
use crate::launchd::ServiceManager;
use crate::paths::Layout;
use crate::util;

pub fn uninstall(layout: &Layout, manager: &dyn ServiceManager) -> Result<()> {
    super::warn_if_not_root("uninstall");

    cmd::advisory(&format!("{} unload", manager.name()), || {
        manager.unload(&layout.launch_daemon)
    });

    println!("Removing LaunchDaemon at {}", layout.launch_daemon.display());
    let removed =
        util::remove_if_present(&layout.launch_daemon).context("Failed to remove LaunchDaemon")?;
    if !removed {
        println!("LaunchDaemon does not exist, skipping");
    }

    println!("Removing GC root at {}", layout.gc_root.display());
    let removed = util::remove_if_present(&layout.gc_root).context("Failed to remove GC root")?;
    if !removed {
        println!("GC root does not exist, skipping");
    }

    Ok(())
}
