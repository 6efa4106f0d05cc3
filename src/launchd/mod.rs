mod launchctl;
mod plist;

pub use launchctl::Launchctl;
pub use plist::{render_plist, STORE_PATH_PLACEHOLDER};

use anyhow::Result;
use std::path::Path;

/// Trait for the OS service manager that loads daemon definitions
pub trait ServiceManager {
    /// Name of the service manager
    fn name(&self) -> &str;

    /// Load a daemon definition so it runs now and at boot
    fn load(&self, definition: &Path) -> Result<()>;

    /// Unload a previously loaded daemon definition
    fn unload(&self, definition: &Path) -> Result<()>;
}
