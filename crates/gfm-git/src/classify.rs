//! Translation of git's stderr into typed errors.
//!
//! Git's porcelain commands report failures as free text on stderr, and the
//! exit code alone does not tell a missing branch from a dirty working tree.
//! All message sniffing lives in [`classify_failure`] so it can be swapped
//! out if git's phrasing changes. Matching is locale-sensitive.

use crate::error::Error;

const UNKNOWN_PATHSPEC: &str = "did not match any file(s) known to git";
const NOT_A_REPOSITORY: &str = "not a git repository";
const UNCOMMITTED_CHANGES: &str = "Please commit your changes or stash them";
const UNTRACKED_FILES: &str = "untracked working tree files";
const UNSTAGED_CHANGES: &str = "You have unstaged changes";
const WOULD_BE_OVERWRITTEN: &str = "would be overwritten";
const ALREADY_EXISTS: &str = "already exists";

/// Which porcelain command produced the failure.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum CommandKind {
    CreateBranch,
    Checkout,
    Pull,
    Other,
}

impl CommandKind {
    fn of(args: &[&str]) -> Self {
        match args {
            ["checkout", "-b", ..] => Self::CreateBranch,
            ["checkout", ..] => Self::Checkout,
            ["pull", ..] => Self::Pull,
            _ => Self::Other,
        }
    }
}

/// Classify a failed git invocation from its arguments and stderr.
#[must_use]
pub fn classify_failure(args: &[&str], stderr: &str) -> Error {
    let stderr = stderr.trim();

    if stderr.contains(UNKNOWN_PATHSPEC) {
        let target = args.last().copied().unwrap_or_default();
        return Error::BranchNotFound(target.to_string());
    }

    if stderr.contains(NOT_A_REPOSITORY) {
        return Error::InvalidRepository(stderr.to_string());
    }

    match CommandKind::of(args) {
        CommandKind::CreateBranch => {
            if stderr.contains(ALREADY_EXISTS) {
                Error::CreateBranchFailed("A branch with this name already exists.".into())
            } else {
                Error::CreateBranchFailed(stderr.to_string())
            }
        }
        CommandKind::Checkout => {
            if stderr.contains(UNCOMMITTED_CHANGES) {
                Error::CheckoutFailed(
                    "You have uncommitted changes. Please commit or stash them before switching branches."
                        .into(),
                )
            } else if stderr.contains(UNTRACKED_FILES) {
                Error::CheckoutFailed(
                    "You have untracked files that would be overwritten. Please commit, stash, or remove them."
                        .into(),
                )
            } else {
                Error::CheckoutFailed(stderr.to_string())
            }
        }
        CommandKind::Pull => {
            if stderr.contains(UNSTAGED_CHANGES) || stderr.contains(WOULD_BE_OVERWRITTEN) {
                Error::PullFailed(
                    "You have local changes that would be overwritten by pull. Please commit or stash them."
                        .into(),
                )
            } else {
                Error::PullFailed(stderr.to_string())
            }
        }
        CommandKind::Other if stderr.is_empty() => Error::ExecutionFailed("unknown error".into()),
        CommandKind::Other => Error::ExecutionFailed(stderr.to_string()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unknown_branch_on_checkout() {
        let err = classify_failure(
            &["checkout", "develop"],
            "error: pathspec 'develop' did not match any file(s) known to git\n",
        );
        assert_eq!(err, Error::BranchNotFound("develop".into()));
    }

    #[test]
    fn test_checkout_with_uncommitted_changes() {
        let stderr = "error: Your local changes to the following files would be overwritten by checkout:\n\
                      \tsrc/main.rs\n\
                      Please commit your changes or stash them before you switch branches.\n\
                      Aborting";
        let err = classify_failure(&["checkout", "main"], stderr);
        assert!(matches!(err, Error::CheckoutFailed(ref m) if m.contains("uncommitted changes")));
    }

    #[test]
    fn test_checkout_with_untracked_files() {
        let stderr = "error: The following untracked working tree files would be overwritten by checkout:";
        let err = classify_failure(&["checkout", "main"], stderr);
        assert!(matches!(err, Error::CheckoutFailed(ref m) if m.contains("untracked files")));
    }

    #[test]
    fn test_checkout_other_failure_keeps_stderr() {
        let err = classify_failure(&["checkout", "main"], "  fatal: something odd  ");
        assert_eq!(err, Error::CheckoutFailed("fatal: something odd".into()));
    }

    #[test]
    fn test_pull_with_local_changes() {
        let err = classify_failure(
            &["pull"],
            "error: cannot pull with rebase: You have unstaged changes.",
        );
        assert!(matches!(err, Error::PullFailed(ref m) if m.contains("local changes")));

        let err = classify_failure(
            &["pull"],
            "error: Your local changes to the following files would be overwritten by merge:",
        );
        assert!(matches!(err, Error::PullFailed(ref m) if m.contains("local changes")));
    }

    #[test]
    fn test_pull_other_failure() {
        let err = classify_failure(&["pull"], "There is no tracking information for the current branch.");
        assert_eq!(
            err,
            Error::PullFailed("There is no tracking information for the current branch.".into())
        );
    }

    #[test]
    fn test_create_branch_already_exists() {
        let err = classify_failure(
            &["checkout", "-b", "feature/x", "develop"],
            "fatal: a branch named 'feature/x' already exists",
        );
        assert_eq!(
            err,
            Error::CreateBranchFailed("A branch with this name already exists.".into())
        );
    }

    #[test]
    fn test_create_branch_bad_base() {
        let stderr = "fatal: 'develop' is not a commit and a branch 'feature/x' cannot be created from it";
        let err = classify_failure(&["checkout", "-b", "feature/x", "develop"], stderr);
        assert_eq!(err, Error::CreateBranchFailed(stderr.into()));
    }

    #[test]
    fn test_not_a_repository() {
        let err = classify_failure(
            &["pull"],
            "fatal: not a git repository (or any of the parent directories): .git",
        );
        assert!(matches!(err, Error::InvalidRepository(_)));
    }

    #[test]
    fn test_other_command_falls_back_to_execution_failed() {
        let err = classify_failure(&["show-ref", "--verify", "--quiet", "refs/heads/main"], "");
        assert_eq!(err, Error::ExecutionFailed("unknown error".into()));

        let err = classify_failure(&["fetch"], "fatal: unable to access remote");
        assert_eq!(err, Error::ExecutionFailed("fatal: unable to access remote".into()));
    }
}
