//! Create service for syncing, branching, and opening a repository.
//!
//! This module sequences a full `gfm create`, separated from prompting and
//! terminal output.

use anyhow::Result;
use gfm_core::{BranchOrchestrator, BranchRequest, Launcher, OpenRequest, Settings, Trunk};
use gfm_git::GitRunner;

/// Which optional steps to run around branch creation.
#[derive(Debug, Clone, Copy)]
pub struct CreateOptions {
    /// Sync `develop` and the trunk before creating.
    pub prepare: bool,
    /// Open the configured terminal and editor afterwards.
    pub open: bool,
}

impl Default for CreateOptions {
    fn default() -> Self {
        Self {
            prepare: true,
            open: true,
        }
    }
}

/// An application that could not be opened.
#[derive(Debug)]
pub struct LaunchFailure {
    pub request: OpenRequest,
    pub error: String,
}

/// Result of a branch creation.
#[derive(Debug)]
pub struct CreateResult {
    /// The name of the created branch.
    pub branch: String,
    /// Trunk that was synced, if preparation ran.
    pub prepared: Option<Trunk>,
    /// Applications that were opened.
    pub opened: Vec<OpenRequest>,
    /// Applications that failed to open. These never fail the creation.
    pub launch_failures: Vec<LaunchFailure>,
}

/// Service for creating Git Flow branches with trait-based dependencies.
pub struct CreateService<'a, G: GitRunner, L: Launcher> {
    git: &'a G,
    launcher: &'a L,
}

impl<'a, G: GitRunner, L: Launcher> CreateService<'a, G, L> {
    /// Create a new create service.
    #[must_use]
    pub const fn new(git: &'a G, launcher: &'a L) -> Self {
        Self { git, launcher }
    }

    /// Create the requested branch.
    ///
    /// This will:
    /// 1. Optionally check out and pull `develop` and the trunk
    /// 2. Create the branch from its base and switch to it
    /// 3. Optionally open the repository in the configured applications
    ///
    /// A failure in step 1 or 2 stops the sequence. Launch failures are
    /// collected in the result instead.
    pub fn create(
        &self,
        request: &BranchRequest<'_>,
        settings: &Settings,
        options: CreateOptions,
    ) -> Result<CreateResult> {
        let orchestrator = BranchOrchestrator::new(self.git);

        let prepared = if options.prepare {
            Some(orchestrator.prepare(request.repository)?)
        } else {
            None
        };

        let branch = orchestrator.create(request)?;

        let mut opened = Vec::new();
        let mut launch_failures = Vec::new();
        if options.open {
            for open in settings.open_requests(request.repository.path()) {
                match self.launcher.open(&open) {
                    Ok(()) => opened.push(open),
                    Err(e) => {
                        tracing::warn!(target = %open.target, error = %e, "launch failed");
                        launch_failures.push(LaunchFailure {
                            request: open,
                            error: e.to_string(),
                        });
                    }
                }
            }
        }

        Ok(CreateResult {
            branch,
            prepared,
            opened,
            launch_failures,
        })
    }
}
