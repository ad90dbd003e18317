//! `gfm create` command - Create a feature or hotfix branch.

use std::path::Path;

use anyhow::{Context, Result, bail};
use gfm_core::{BranchKind, BranchRequest, Repository};
use inquire::{Select, Text};

use crate::commands::utils::{self, Workspace};
use crate::launcher::SystemLauncher;
use crate::output;
use crate::services::{CreateOptions, CreateService};

/// Arguments as given on the command line; missing ones are prompted for.
#[derive(Debug, Default)]
pub struct CreateArgs {
    pub repo: Option<String>,
    pub kind: Option<BranchKind>,
    pub issue: Option<String>,
    pub name: Option<String>,
    pub no_prepare: bool,
    pub dry_run: bool,
    pub no_open: bool,
}

/// Run the create command.
pub fn run(dir: Option<&Path>, args: CreateArgs) -> Result<()> {
    let workspace = Workspace::load(dir)?;
    let interactive = console::user_attended();

    let repository = select_repository(&workspace, args.repo.as_deref(), interactive)?;
    let kind = match args.kind {
        Some(kind) => kind,
        None if interactive => Select::new("Branch type:", BranchKind::ALL.to_vec())
            .prompt()
            .context("Failed to get branch type")?,
        None => bail!("Specify a branch type with --kind"),
    };

    let (issue, name) = match (args.issue, args.name) {
        (None, None) if interactive => (
            prompt_text("Issue number:", "Leave empty if there is no issue")?,
            prompt_text("Branch name:", "A few words describing the work")?,
        ),
        (issue, name) => (issue.unwrap_or_default(), name.unwrap_or_default()),
    };

    let request = BranchRequest::new(&repository, kind, issue, name);
    if !request.has_content() {
        bail!("Provide an issue number, a branch name, or both");
    }

    output::summary(&request.summary());

    if args.dry_run {
        output::info("Dry run - no changes made");
        return Ok(());
    }

    let options = CreateOptions {
        prepare: !args.no_prepare,
        open: !args.no_open,
    };
    let launcher = SystemLauncher;
    let service = CreateService::new(&workspace.git, &launcher);

    let spinner = utils::spinner(format!("Creating branch in {}...", repository.name()));
    let result = service.create(&request, &workspace.settings, options);
    spinner.finish_and_clear();
    let result = result?;

    if let Some(trunk) = result.prepared {
        output::info(&format!(
            "Synced develop and {}",
            output::trunk_label(trunk)
        ));
    }
    if output::is_quiet() {
        output::essential(&result.branch);
    } else {
        output::success(&format!("Created branch {}", result.branch));
    }

    for opened in &result.opened {
        output::info(&format!("Opened {} in {}", repository.name(), opened.target));
    }
    for failure in &result.launch_failures {
        output::warn(&format!(
            "Could not open {} ({}): {}",
            failure.request.target,
            failure.request.app.display(),
            failure.error
        ));
    }

    Ok(())
}

fn select_repository(
    workspace: &Workspace,
    name: Option<&str>,
    interactive: bool,
) -> Result<Repository> {
    if let Some(name) = name {
        return workspace.repository(name);
    }
    if !interactive {
        bail!("Specify a repository name");
    }

    let repos = workspace.repositories()?;
    if repos.is_empty() {
        bail!(
            "No git repositories found in {}",
            workspace.projects_directory.display()
        );
    }

    let names: Vec<String> = repos.iter().map(|r| r.name().to_string()).collect();
    let choice = Select::new("Repository:", names)
        .prompt()
        .context("Failed to get repository selection")?;

    repos
        .into_iter()
        .find(|r| r.name() == choice)
        .context("Selected repository disappeared")
}

fn prompt_text(message: &str, help: &str) -> Result<String> {
    Text::new(message)
        .with_help_message(help)
        .prompt()
        .with_context(|| format!("Failed to read {}", message.trim_end_matches(':')))
}
