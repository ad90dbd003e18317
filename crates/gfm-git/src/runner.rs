//! Subprocess-backed git runner.

use std::path::{Path, PathBuf};
use std::process::{Command, Stdio};

use crate::classify::classify_failure;
use crate::error::{Error, Result};
use crate::traits::GitRunner;

/// Raw result of one git invocation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandOutcome {
    /// Everything git wrote to stdout.
    pub stdout: String,
    /// Everything git wrote to stderr.
    pub stderr: String,
    /// Exit code, or `None` if git was killed by a signal.
    pub status: Option<i32>,
}

impl CommandOutcome {
    /// Whether git exited with status 0.
    #[must_use]
    pub fn success(&self) -> bool {
        self.status == Some(0)
    }
}

/// Runs the system git executable as a child process.
///
/// Stdin is closed and terminal credential prompts are disabled, so a
/// command that would need user input fails instead of hanging.
#[derive(Debug, Clone)]
pub struct GitCommand {
    program: PathBuf,
}

impl GitCommand {
    /// Use `git` from `PATH`.
    #[must_use]
    pub fn new() -> Self {
        Self::with_program("git")
    }

    /// Use a specific git executable.
    #[must_use]
    pub fn with_program(program: impl Into<PathBuf>) -> Self {
        Self {
            program: program.into(),
        }
    }

    /// The git executable this runner spawns.
    #[must_use]
    pub fn program(&self) -> &Path {
        &self.program
    }

    /// Run git and capture its output without interpreting the exit status.
    ///
    /// # Errors
    /// Returns error if the process cannot be spawned.
    pub fn run(&self, args: &[&str], workdir: &Path) -> std::io::Result<CommandOutcome> {
        tracing::debug!(program = %self.program.display(), ?args, workdir = %workdir.display(), "running git");

        let output = Command::new(&self.program)
            .args(args)
            .current_dir(workdir)
            .env("GIT_TERMINAL_PROMPT", "0")
            .stdin(Stdio::null())
            .output()?;

        Ok(CommandOutcome {
            stdout: String::from_utf8_lossy(&output.stdout).into_owned(),
            stderr: String::from_utf8_lossy(&output.stderr).into_owned(),
            status: output.status.code(),
        })
    }
}

impl Default for GitCommand {
    fn default() -> Self {
        Self::new()
    }
}

impl GitRunner for GitCommand {
    fn execute(&self, args: &[&str], workdir: &Path) -> Result<String> {
        if args.is_empty() {
            return Err(Error::ExecutionFailed("no git subcommand given".into()));
        }

        let outcome = self.run(args, workdir).map_err(|e| {
            Error::ExecutionFailed(format!("could not run {}: {e}", self.program.display()))
        })?;

        if outcome.success() {
            return Ok(outcome.stdout.trim().to_string());
        }

        tracing::debug!(
            ?args,
            status = ?outcome.status,
            stderr = outcome.stderr.trim(),
            "git exited unsuccessfully"
        );
        Err(classify_failure(args, &outcome.stderr))
    }
}
