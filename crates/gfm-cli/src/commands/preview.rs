//! `gfm preview` command - Print a formatted branch name.

use anyhow::{Result, bail};
use gfm_core::{BranchKind, format_branch_name};

use crate::output;

/// Run the preview command. Needs no repository.
pub fn run(kind: BranchKind, issue: &str, name: &str) -> Result<()> {
    if issue.trim().is_empty() && name.trim().is_empty() {
        bail!("Provide an issue number, a branch name, or both");
    }

    output::essential(&format_branch_name(kind, issue, name));
    Ok(())
}
