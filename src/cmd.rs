use anyhow::{Context, Result};
use std::ffi::OsStr;
use std::process::Command;

const CYAN: &str = "\x1b[36m";
const RESET: &str = "\x1b[0m";

/// Run `program`, failing on a spawn error or non-zero exit.
///
/// The command line is echoed to stdout first; under launchd that lands in
/// the daemon's log file next to the fixer's own output.
pub fn run<I, S>(program: &str, args: I) -> Result<()>
where
    I: IntoIterator<Item = S>,
    S: AsRef<OsStr>,
{
    let args: Vec<_> = args.into_iter().collect();
    let args_str: Vec<_> = args.iter().map(|s| s.as_ref().to_string_lossy()).collect();

    println!("{}> {} {}{}", CYAN, program, args_str.join(" "), RESET);

    let status = Command::new(program)
        .args(&args)
        .status()
        .with_context(|| format!("Failed to run {}", program))?;

    if !status.success() {
        anyhow::bail!("{} failed with exit code {:?}", program, status.code());
    }

    Ok(())
}

/// Run a best-effort step.
///
/// Failures are logged and dropped; the caller always continues. Returns
/// whether the step succeeded so callers and tests can observe it.
pub fn advisory<F>(what: &str, step: F) -> bool
where
    F: FnOnce() -> Result<()>,
{
    match step() {
        Ok(()) => true,
        Err(e) => {
            tracing::warn!("{} failed (ignored): {:#}", what, e);
            false
        }
    }
}
