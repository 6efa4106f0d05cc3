//! Command line interface

use anyhow::Result;
use clap::{Parser, Subcommand};

use crate::commands::{fix, install, uninstall};
use crate::launchd::Launchctl;
use crate::paths::Layout;

/// Restores the Nix shell hook after macOS updates overwrite /etc/zshrc and /etc/bashrc
#[derive(Debug, Parser)]
#[command(name = "nix-darwin-fixer")]
#[command(version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Enable debug logging
    #[arg(long, global = true)]
    pub debug: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Subcommand)]
pub enum Command {
    /// Install the LaunchDaemon
    Install,
    /// Uninstall the LaunchDaemon
    Uninstall,
    /// Run the fixer just once
    Fix,
}

impl Command {
    /// Run the command against the real host paths
    pub fn run(self) -> Result<()> {
        let layout = Layout::system();
        let launchctl = Launchctl::new();

        match self {
            Command::Install => install::install(&layout, &launchctl),
            Command::Uninstall => uninstall::uninstall(&layout, &launchctl),
            Command::Fix => fix::fix(&layout).map(|_| ()),
        }
    }
}
