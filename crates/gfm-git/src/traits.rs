//! Trait abstraction for running git.
//!
//! This module defines the `GitRunner` trait which abstracts git invocation,
//! enabling dependency injection and testability. Only [`GitRunner::execute`]
//! is required; the branch helpers are built on top of it so every
//! implementation sequences them the same way.

use std::path::Path;

use crate::Result;

/// Trait for running git subcommands against a working directory.
///
/// Calls block until git exits. Implementations hold no per-repository
/// state; the working directory is passed on every call.
#[allow(clippy::missing_errors_doc)]
pub trait GitRunner {
    /// Run one git subcommand in `workdir` and return its trimmed stdout.
    ///
    /// `args` is the subcommand and its arguments as discrete tokens,
    /// never a shell string.
    fn execute(&self, args: &[&str], workdir: &Path) -> Result<String>;

    /// Check if a local branch exists.
    ///
    /// Any failure, including git itself failing to run, reads as `false`.
    fn branch_exists(&self, name: &str, workdir: &Path) -> bool {
        let reference = format!("refs/heads/{name}");
        self.execute(&["show-ref", "--verify", "--quiet", &reference], workdir)
            .is_ok()
    }

    /// Checkout a branch, then pull it.
    ///
    /// If the checkout fails the pull is never attempted.
    fn checkout_and_pull(&self, branch: &str, workdir: &Path) -> Result<(String, String)> {
        let checkout = self.execute(&["checkout", branch], workdir)?;
        let pull = self.execute(&["pull"], workdir)?;
        Ok((checkout, pull))
    }

    /// Create `name` from `base` and switch to it.
    fn create_branch(&self, name: &str, base: &str, workdir: &Path) -> Result<String> {
        self.execute(&["checkout", "-b", name, base], workdir)
    }
}
