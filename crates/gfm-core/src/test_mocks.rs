//! Mock git runner for testing discovery and orchestration.
//!
//! Emulates just enough of git's behaviour (`show-ref`, `checkout`,
//! `checkout -b`, `pull`) over an in-memory branch set, and records every
//! call so tests can assert on sequencing.

use std::cell::RefCell;
use std::collections::{HashMap, HashSet};
use std::path::{Path, PathBuf};

use gfm_git::{Error as GitError, GitRunner, Result as GitResult};

/// Mock implementation of `GitRunner` for testing.
#[derive(Default)]
pub struct MockGitRunner {
    /// Branches visible in every workdir.
    pub branches: RefCell<HashSet<String>>,
    /// Branches visible only in one workdir.
    pub branches_at: RefCell<HashSet<(PathBuf, String)>>,
    /// Forced failures keyed by the space-joined argument list.
    pub failures: RefCell<HashMap<String, GitError>>,
    /// Every call, as the space-joined argument list.
    pub calls: RefCell<Vec<String>>,
}

impl MockGitRunner {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_branch(self, name: &str) -> Self {
        self.branches.borrow_mut().insert(name.to_string());
        self
    }

    pub fn with_branch_at(self, workdir: &Path, name: &str) -> Self {
        self.branches_at
            .borrow_mut()
            .insert((workdir.to_path_buf(), name.to_string()));
        self
    }

    pub fn with_failure(self, command: &str, error: GitError) -> Self {
        self.failures
            .borrow_mut()
            .insert(command.to_string(), error);
        self
    }

    /// Number of recorded calls whose argument list starts with `prefix`.
    pub fn count(&self, prefix: &str) -> usize {
        self.calls
            .borrow()
            .iter()
            .filter(|c| c.starts_with(prefix))
            .count()
    }

    fn has_branch(&self, workdir: &Path, name: &str) -> bool {
        self.branches.borrow().contains(name)
            || self
                .branches_at
                .borrow()
                .contains(&(workdir.to_path_buf(), name.to_string()))
    }
}

impl GitRunner for MockGitRunner {
    fn execute(&self, args: &[&str], workdir: &Path) -> GitResult<String> {
        let command = args.join(" ");
        self.calls.borrow_mut().push(command.clone());

        if let Some(error) = self.failures.borrow().get(&command) {
            return Err(error.clone());
        }

        match args {
            ["show-ref", "--verify", "--quiet", reference] => {
                let name = reference.trim_start_matches("refs/heads/");
                if self.has_branch(workdir, name) {
                    Ok(String::new())
                } else {
                    Err(GitError::ExecutionFailed("unknown error".into()))
                }
            }
            ["checkout", "-b", name, base] => {
                if self.has_branch(workdir, name) {
                    return Err(GitError::CreateBranchFailed(
                        "A branch with this name already exists.".into(),
                    ));
                }
                if !self.has_branch(workdir, base) {
                    return Err(GitError::CreateBranchFailed(format!(
                        "fatal: '{base}' is not a commit and a branch '{name}' cannot be created from it"
                    )));
                }
                self.branches.borrow_mut().insert((*name).to_string());
                Ok(String::new())
            }
            ["checkout", branch] => {
                if self.has_branch(workdir, branch) {
                    Ok(format!("Switched to branch '{branch}'"))
                } else {
                    Err(GitError::BranchNotFound((*branch).to_string()))
                }
            }
            ["pull"] => Ok("Already up to date.".into()),
            _ => Ok(String::new()),
        }
    }
}
