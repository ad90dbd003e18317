//! Git Flow branch orchestration.
//!
//! Two sequences, each run strictly in order against one working tree:
//!
//! - **prepare**: checkout and pull `develop`, then checkout and pull the
//!   trunk. Failures are reworded to name the branch and step.
//! - **create**: `checkout -b <formatted name> <base>`. Failures pass
//!   through untouched.
//!
//! Nothing is rolled back on failure. Git's working tree is left as the
//! failing command left it.

use gfm_git::{Error as GitError, GitRunner, Result as GitResult};

use crate::branch::{BranchKind, BranchRequest, DEVELOP};
use crate::discovery::RepositoryDiscovery;
use crate::repository::{Repository, Trunk};

/// Runs prepare/create sequences using an injected git runner.
pub struct BranchOrchestrator<'a, G: GitRunner> {
    git: &'a G,
    discovery: RepositoryDiscovery<'a, G>,
}

impl<'a, G: GitRunner> BranchOrchestrator<'a, G> {
    /// Create a new orchestrator.
    #[must_use]
    pub const fn new(git: &'a G) -> Self {
        Self {
            git,
            discovery: RepositoryDiscovery::new(git),
        }
    }

    /// Bring `develop` and the trunk up to date.
    ///
    /// Safe to repeat; every call checks out and pulls both branches again.
    /// Returns the trunk that was synced.
    ///
    /// # Errors
    /// Returns the first failing step's error with its message rewritten,
    /// e.g. a missing `develop` becomes a `BranchNotFound` explaining that
    /// feature branches need it.
    pub fn prepare(&self, repository: &Repository) -> GitResult<Trunk> {
        let path = repository.path();

        tracing::info!(repository = repository.name(), branch = DEVELOP, "syncing");
        self.git
            .checkout_and_pull(DEVELOP, path)
            .map_err(|e| describe_sync_failure(e, DEVELOP))?;

        let trunk = self.discovery.resolve_trunk(path);
        tracing::info!(repository = repository.name(), branch = %trunk, "syncing");
        self.git
            .checkout_and_pull(trunk.branch(), path)
            .map_err(|e| describe_sync_failure(e, trunk.branch()))?;

        Ok(trunk)
    }

    /// Create the requested branch from its base and switch to it.
    ///
    /// Hotfix bases are resolved live, not from the repository's cached
    /// trunk. Returns the created branch name.
    ///
    /// # Errors
    /// Returns the git error from branch creation unchanged.
    pub fn create(&self, request: &BranchRequest<'_>) -> GitResult<String> {
        let path = request.repository.path();
        let base = match request.kind {
            BranchKind::Feature => DEVELOP,
            BranchKind::Hotfix => self.discovery.resolve_trunk(path).branch(),
        };
        let name = request.branch_name();

        tracing::info!(repository = request.repository.name(), %name, base, "creating branch");
        self.git.create_branch(&name, base, path)?;

        Ok(name)
    }
}

/// Reword a checkout/pull failure so it names the branch being synced.
fn describe_sync_failure(error: GitError, branch: &str) -> GitError {
    match error {
        GitError::BranchNotFound(_) if branch == DEVELOP => GitError::BranchNotFound(
            "This repository doesn't have a 'develop' branch. Feature branches require a develop branch to be present."
                .into(),
        ),
        GitError::BranchNotFound(_) => {
            GitError::BranchNotFound(format!("This repository doesn't have a '{branch}' branch."))
        }
        GitError::CheckoutFailed(m) => {
            GitError::CheckoutFailed(format!("Failed to checkout {branch} branch: {m}"))
        }
        GitError::PullFailed(m) => {
            GitError::PullFailed(format!("Failed to update {branch} branch: {m}"))
        }
        other => other,
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::test_mocks::MockGitRunner;

    fn repo() -> Repository {
        Repository::new("app", "/projects/app")
    }

    #[test]
    fn test_prepare_syncs_develop_then_trunk() {
        let git = MockGitRunner::new()
            .with_branch("develop")
            .with_branch("main");
        let repository = repo();

        let trunk = BranchOrchestrator::new(&git).prepare(&repository).unwrap();

        assert_eq!(trunk, Trunk::Main);
        assert_eq!(
            *git.calls.borrow(),
            vec![
                "checkout develop",
                "pull",
                "show-ref --verify --quiet refs/heads/main",
                "checkout main",
                "pull",
            ]
        );
    }

    #[test]
    fn test_prepare_falls_back_to_master() {
        let git = MockGitRunner::new()
            .with_branch("develop")
            .with_branch("master");

        let trunk = BranchOrchestrator::new(&git).prepare(&repo()).unwrap();

        assert_eq!(trunk, Trunk::Master);
        assert_eq!(git.count("checkout master"), 1);
    }

    #[test]
    fn test_prepare_without_develop() {
        let git = MockGitRunner::new().with_branch("main");

        let err = BranchOrchestrator::new(&git).prepare(&repo()).unwrap_err();

        assert!(matches!(err, GitError::BranchNotFound(ref m) if m.contains("'develop'")));
        assert_eq!(git.count("pull"), 0);
        assert_eq!(git.count("checkout main"), 0);
    }

    #[test]
    fn test_prepare_without_any_trunk() {
        let git = MockGitRunner::new().with_branch("develop");

        let err = BranchOrchestrator::new(&git).prepare(&repo()).unwrap_err();

        assert_eq!(
            err,
            GitError::BranchNotFound("This repository doesn't have a 'master' branch.".into())
        );
    }

    #[test]
    fn test_prepare_rewrites_checkout_failure() {
        let git = MockGitRunner::new().with_branch("develop").with_failure(
            "checkout develop",
            GitError::CheckoutFailed("You have uncommitted changes.".into()),
        );

        let err = BranchOrchestrator::new(&git).prepare(&repo()).unwrap_err();

        assert_eq!(
            err,
            GitError::CheckoutFailed(
                "Failed to checkout develop branch: You have uncommitted changes.".into()
            )
        );
        assert_eq!(git.count("pull"), 0);
    }

    #[test]
    fn test_prepare_rewrites_pull_failure() {
        let git = MockGitRunner::new()
            .with_branch("develop")
            .with_branch("main")
            .with_failure("pull", GitError::PullFailed("no tracking information".into()));

        let err = BranchOrchestrator::new(&git).prepare(&repo()).unwrap_err();

        // The first pull (develop) is the one that fails.
        assert_eq!(
            err,
            GitError::PullFailed("Failed to update develop branch: no tracking information".into())
        );
        assert_eq!(git.count("checkout main"), 0);
    }

    #[test]
    fn test_prepare_passes_other_errors_through() {
        let invalid = GitError::InvalidRepository("fatal: not a git repository".into());
        let git = MockGitRunner::new().with_failure("checkout develop", invalid.clone());

        let err = BranchOrchestrator::new(&git).prepare(&repo()).unwrap_err();
        assert_eq!(err, invalid);
    }

    #[test]
    fn test_prepare_is_repeatable() {
        let git = MockGitRunner::new()
            .with_branch("develop")
            .with_branch("main");
        let orchestrator = BranchOrchestrator::new(&git);
        let repository = repo();

        orchestrator.prepare(&repository).unwrap();
        orchestrator.prepare(&repository).unwrap();

        assert_eq!(git.count("pull"), 4);
    }

    #[test]
    fn test_create_feature_from_develop() {
        let git = MockGitRunner::new().with_branch("develop");
        let repository = repo();
        let request = BranchRequest::new(&repository, BranchKind::Feature, "123", "Add Login");

        let name = BranchOrchestrator::new(&git).create(&request).unwrap();

        assert_eq!(name, "feature/123-add_login");
        assert_eq!(
            *git.calls.borrow(),
            vec!["checkout -b feature/123-add_login develop"]
        );
        assert!(git.branch_exists(&name, repository.path()));
    }

    #[test]
    fn test_create_hotfix_resolves_trunk_live() {
        let git = MockGitRunner::new().with_branch("main");
        // Cached trunk is stale on purpose.
        let repository = repo().with_trunk(Trunk::Master);
        let request = BranchRequest::new(&repository, BranchKind::Hotfix, "", "Fix Crash!!");

        let name = BranchOrchestrator::new(&git).create(&request).unwrap();

        assert_eq!(name, "hotfix/fix_crash");
        assert_eq!(git.count("checkout -b hotfix/fix_crash main"), 1);
    }

    #[test]
    fn test_create_passes_errors_through_unchanged() {
        let git = MockGitRunner::new()
            .with_branch("develop")
            .with_branch("feature/dup");
        let repository = repo();
        let request = BranchRequest::new(&repository, BranchKind::Feature, "", "dup");

        let err = BranchOrchestrator::new(&git).create(&request).unwrap_err();

        assert_eq!(
            err,
            GitError::CreateBranchFailed("A branch with this name already exists.".into())
        );
    }

    #[test]
    fn test_create_uses_same_name_as_preview() {
        let git = MockGitRunner::new().with_branch("develop");
        let repository = repo();
        let request = BranchRequest::new(&repository, BranchKind::Feature, " PRJ-1 ", "Dark Mode");

        let preview = request.summary();
        let created = BranchOrchestrator::new(&git).create(&request).unwrap();

        assert_eq!(preview.branch, created);
    }
}
