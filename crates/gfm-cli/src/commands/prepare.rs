//! `gfm prepare` command - Bring `develop` and the trunk up to date.

use std::path::Path;

use anyhow::Result;
use gfm_core::BranchOrchestrator;

use crate::commands::utils::{self, Workspace};
use crate::output;

/// Run the prepare command.
pub fn run(dir: Option<&Path>, repo: &str) -> Result<()> {
    let workspace = Workspace::load(dir)?;
    let repository = workspace.repository(repo)?;

    let spinner = utils::spinner(format!("Syncing {}...", repository.name()));
    let result = BranchOrchestrator::new(&workspace.git).prepare(&repository);
    spinner.finish_and_clear();

    let trunk = result?;
    output::success(&format!(
        "{} is ready: develop and {} are up to date",
        repository.name(),
        output::trunk_label(trunk)
    ));
    Ok(())
}
