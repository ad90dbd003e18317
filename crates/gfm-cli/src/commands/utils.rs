use std::path::{Path, PathBuf};
use std::time::Duration;

use anyhow::{Context, Result};
use gfm_core::{Repository, RepositoryDiscovery, Settings};
use gfm_git::GitCommand;
use indicatif::{ProgressBar, ProgressStyle};

use crate::output;

/// Settings plus the directory the current command scans.
pub struct Workspace {
    pub settings: Settings,
    pub projects_directory: PathBuf,
    pub git: GitCommand,
}

impl Workspace {
    /// Load settings and apply the `--dir` override.
    pub fn load(dir: Option<&Path>) -> Result<Self> {
        let path = Settings::path()?;
        let settings = Settings::load(&path)
            .with_context(|| format!("Failed to load settings from {}", path.display()))?;
        let projects_directory = dir.map_or_else(
            || settings.projects_directory.clone(),
            Path::to_path_buf,
        );

        Ok(Self {
            settings,
            projects_directory,
            git: GitCommand::new(),
        })
    }

    pub const fn discovery(&self) -> RepositoryDiscovery<'_, GitCommand> {
        RepositoryDiscovery::new(&self.git)
    }

    /// All repositories under the projects directory.
    pub fn repositories(&self) -> Result<Vec<Repository>> {
        Ok(self.discovery().discover(&self.projects_directory)?)
    }

    /// The repository named `name` under the projects directory.
    pub fn repository(&self, name: &str) -> Result<Repository> {
        Ok(self.discovery().find(&self.projects_directory, name)?)
    }
}

/// Spinner on stderr, hidden in quiet mode or when stderr isn't a terminal.
pub fn spinner(message: impl Into<String>) -> ProgressBar {
    if output::is_quiet() || !console::user_attended_stderr() {
        return ProgressBar::hidden();
    }

    let pb = ProgressBar::new_spinner();
    if let Ok(style) = ProgressStyle::with_template("{spinner:.blue} {msg}") {
        pb.set_style(style);
    }
    pb.set_message(message.into());
    pb.enable_steady_tick(Duration::from_millis(80));
    pb
}
