//! Keeps a Nix installation usable on macOS.
//!
//! macOS updates reset `/etc/zshrc` and `/etc/bashrc`, which removes the hook
//! that sources the Nix daemon environment. This crate re-applies that hook
//! (`fix`) and can register itself as a boot-time LaunchDaemon (`install`)
//! so the repair happens automatically.

pub mod cli;
pub mod cmd;
pub mod commands;
pub mod error;
pub mod launchd;
pub mod paths;
pub mod shellrc;
pub mod util;
