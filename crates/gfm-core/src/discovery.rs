//! Repository discovery.
//!
//! Scans the immediate children of a projects directory for git working
//! trees and resolves each one's trunk branch.

use std::fs;
use std::io::ErrorKind;
use std::path::Path;

use gfm_git::GitRunner;

use crate::error::{Error, Result};
use crate::repository::{Repository, Trunk};

/// Marker entry that makes a directory a repository. May be a file
/// (worktrees, submodules) or a directory.
const GIT_MARKER: &str = ".git";

/// Finds repositories in a directory using an injected git runner.
pub struct RepositoryDiscovery<'a, G: GitRunner> {
    git: &'a G,
}

impl<'a, G: GitRunner> RepositoryDiscovery<'a, G> {
    /// Create a new discovery over the given runner.
    #[must_use]
    pub const fn new(git: &'a G) -> Self {
        Self { git }
    }

    /// List the repositories directly inside `directory`, sorted by name.
    ///
    /// Children without a `.git` entry are skipped. Every repository gets a
    /// fresh identifier and a trunk resolved by [`Self::resolve_trunk`].
    ///
    /// # Errors
    /// Returns `DirectoryNotFound` or `DirectoryNotReadable` when the
    /// directory is missing or cannot be listed, and `DiscoveryFailed` for
    /// any other I/O failure while listing.
    pub fn discover(&self, directory: impl AsRef<Path>) -> Result<Vec<Repository>> {
        let directory = directory.as_ref();

        match directory.try_exists() {
            Ok(true) => {}
            Ok(false) => return Err(Error::DirectoryNotFound(directory.to_path_buf())),
            Err(e) if e.kind() == ErrorKind::PermissionDenied => {
                return Err(Error::DirectoryNotReadable(directory.to_path_buf()));
            }
            Err(e) => return Err(Error::DiscoveryFailed(e)),
        }

        let entries = match fs::read_dir(directory) {
            Ok(entries) => entries,
            Err(e) if e.kind() == ErrorKind::PermissionDenied => {
                return Err(Error::DirectoryNotReadable(directory.to_path_buf()));
            }
            Err(e) => return Err(Error::DiscoveryFailed(e)),
        };

        let root = std::path::absolute(directory).map_err(Error::DiscoveryFailed)?;
        let mut repositories = Vec::new();

        for entry in entries {
            let entry = entry.map_err(Error::DiscoveryFailed)?;
            let path = root.join(entry.file_name());

            if !path.join(GIT_MARKER).exists() {
                tracing::debug!(path = %path.display(), "skipping non-git entry");
                continue;
            }

            let name = entry.file_name().to_string_lossy().into_owned();
            let trunk = self.resolve_trunk(&path);
            tracing::debug!(%name, %trunk, "found repository");
            repositories.push(Repository::new(name, path).with_trunk(trunk));
        }

        repositories.sort_by(|a, b| a.name().cmp(b.name()));
        Ok(repositories)
    }

    /// Discover and pick the repository called `name`.
    ///
    /// # Errors
    /// Returns any discovery error, or `RepositoryNotFound` if no repository
    /// has that name.
    pub fn find(&self, directory: impl AsRef<Path>, name: &str) -> Result<Repository> {
        let directory = directory.as_ref();
        self.discover(directory)?
            .into_iter()
            .find(|repo| repo.name() == name)
            .ok_or_else(|| Error::RepositoryNotFound {
                name: name.to_string(),
                directory: directory.to_path_buf(),
            })
    }

    /// Query which trunk the working tree at `path` uses.
    ///
    /// `main` if that branch exists, otherwise `master` (assumed).
    #[must_use]
    pub fn resolve_trunk(&self, path: &Path) -> Trunk {
        Trunk::from_main_exists(self.git.branch_exists(Trunk::Main.branch(), path))
    }

    /// Re-query the trunk of `repository` and store the result on it.
    pub fn refresh_trunk(&self, repository: &mut Repository) -> Trunk {
        let trunk = self.resolve_trunk(repository.path());
        repository.set_trunk(trunk);
        trunk
    }
}
