//! Mock implementations for testing services.
//!
//! These mocks implement `GitRunner` and `Launcher` so service logic can be
//! unit tested without real repositories or applications.

use std::cell::RefCell;
use std::collections::{HashMap, HashSet};
use std::io;
use std::path::Path;

use gfm_core::{Launcher, OpenRequest, OpenTarget};
use gfm_git::{Error as GitError, GitRunner, Result as GitResult};

/// Mock implementation of `GitRunner` over an in-memory branch set.
#[derive(Default)]
pub struct MockGitRunner {
    pub branches: RefCell<HashSet<String>>,
    pub failures: RefCell<HashMap<String, GitError>>,
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

    pub fn with_failure(self, command: &str, error: GitError) -> Self {
        self.failures
            .borrow_mut()
            .insert(command.to_string(), error);
        self
    }

    pub fn calls(&self) -> Vec<String> {
        self.calls.borrow().clone()
    }
}

impl GitRunner for MockGitRunner {
    fn execute(&self, args: &[&str], _workdir: &Path) -> GitResult<String> {
        let command = args.join(" ");
        self.calls.borrow_mut().push(command.clone());

        if let Some(error) = self.failures.borrow().get(&command) {
            return Err(error.clone());
        }

        match args {
            ["show-ref", "--verify", "--quiet", reference] => {
                let name = reference.trim_start_matches("refs/heads/");
                if self.branches.borrow().contains(name) {
                    Ok(String::new())
                } else {
                    Err(GitError::ExecutionFailed("unknown error".into()))
                }
            }
            ["checkout", "-b", name, _base] => {
                if !self.branches.borrow_mut().insert((*name).to_string()) {
                    return Err(GitError::CreateBranchFailed(
                        "A branch with this name already exists.".into(),
                    ));
                }
                Ok(String::new())
            }
            ["checkout", branch] => {
                if self.branches.borrow().contains(*branch) {
                    Ok(String::new())
                } else {
                    Err(GitError::BranchNotFound((*branch).to_string()))
                }
            }
            _ => Ok(String::new()),
        }
    }
}

/// Mock implementation of `Launcher` that records what it was asked to open.
#[derive(Default)]
pub struct MockLauncher {
    pub opened: RefCell<Vec<OpenRequest>>,
    pub failing: RefCell<Vec<OpenTarget>>,
}

impl MockLauncher {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn failing_on(self, target: OpenTarget) -> Self {
        self.failing.borrow_mut().push(target);
        self
    }

    pub fn opened_targets(&self) -> Vec<OpenTarget> {
        self.opened.borrow().iter().map(|r| r.target).collect()
    }
}

impl Launcher for MockLauncher {
    fn open(&self, request: &OpenRequest) -> io::Result<()> {
        if self.failing.borrow().contains(&request.target) {
            return Err(io::Error::new(io::ErrorKind::NotFound, "application not found"));
        }
        self.opened.borrow_mut().push(request.clone());
        Ok(())
    }
}
