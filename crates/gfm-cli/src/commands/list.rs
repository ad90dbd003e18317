//! `gfm list` command - Show the repositories gfm can work on.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use gfm_core::{Repository, Trunk};
use serde::Serialize;

use crate::commands::utils::Workspace;
use crate::output;

/// JSON shape of one repository.
#[derive(Debug, Serialize)]
struct RepoInfo {
    id: String,
    name: String,
    path: PathBuf,
    trunk: Trunk,
}

impl From<&Repository> for RepoInfo {
    fn from(repo: &Repository) -> Self {
        Self {
            id: repo.id().to_string(),
            name: repo.name().to_string(),
            path: repo.path().to_path_buf(),
            trunk: repo.trunk(),
        }
    }
}

/// Run the list command.
pub fn run(dir: Option<&Path>, json: bool) -> Result<()> {
    let workspace = Workspace::load(dir)?;
    let repos = workspace.repositories()?;

    if json {
        let infos: Vec<RepoInfo> = repos.iter().map(RepoInfo::from).collect();
        let rendered =
            serde_json::to_string_pretty(&infos).context("Failed to serialize repositories")?;
        output::essential(&rendered);
        return Ok(());
    }

    if repos.is_empty() {
        output::warn(&format!(
            "No git repositories found in {}",
            workspace.projects_directory.display()
        ));
        return Ok(());
    }

    let width = repos.iter().map(|r| r.name().len()).max().unwrap_or(0);
    for repo in &repos {
        output::essential(&output::repo_line(repo.name(), repo.trunk(), repo.path(), width));
    }

    Ok(())
}
