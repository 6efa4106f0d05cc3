use super::ServiceManager;
use anyhow::Result;
use std::ffi::OsStr;
use std::path::Path;

use crate::cmd;

/// macOS launchd, driven through the `launchctl` binary
pub struct Launchctl {
    program: &'static str,
}

impl Launchctl {
    pub fn new() -> Self {
        Self {
            program: "launchctl",
        }
    }
}

impl Default for Launchctl {
    fn default() -> Self {
        Self::new()
    }
}

impl ServiceManager for Launchctl {
    fn name(&self) -> &str {
        self.program
    }

    fn load(&self, definition: &Path) -> Result<()> {
        cmd::run(self.program, [OsStr::new("load"), definition.as_os_str()])
    }

    fn unload(&self, definition: &Path) -> Result<()> {
        cmd::run(self.program, [OsStr::new("unload"), definition.as_os_str()])
    }
}
