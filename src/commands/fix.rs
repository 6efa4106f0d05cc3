use anyhow::Result;

use crate::paths::Layout;
use crate::shellrc::{self, PatchOutcome};

/// Patch every shell startup file in order, stopping at the first error.
pub fn fix(layout: &Layout) -> Result<Vec<PatchOutcome>> {
    let mut outcomes = Vec::with_capacity(layout.rc_files.len());

    for path in &layout.rc_files {
        outcomes.push(shellrc::patch_file(path)?);
    }

    Ok(outcomes)
}
