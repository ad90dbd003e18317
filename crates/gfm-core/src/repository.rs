//! Discovered repository model.

use std::fmt;
use std::hash::{Hash, Hasher};
use std::path::{Path, PathBuf};

use serde::Serialize;
use uuid::Uuid;

/// Name of the trunk branch of a repository.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Trunk {
    /// Trunk is `main`.
    Main,
    /// Trunk is `master`.
    #[default]
    Master,
}

impl Trunk {
    /// The trunk branch name.
    #[must_use]
    pub const fn branch(self) -> &'static str {
        match self {
            Self::Main => "main",
            Self::Master => "master",
        }
    }

    /// `Main` if a `main` branch exists, `Master` otherwise.
    ///
    /// `master` is assumed, not verified.
    #[must_use]
    pub const fn from_main_exists(main_exists: bool) -> Self {
        if main_exists { Self::Main } else { Self::Master }
    }
}

impl fmt::Display for Trunk {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.branch())
    }
}

/// A git working tree found by discovery.
///
/// The identifier is minted per instance; a rescan of the same directory
/// produces new identifiers, so it must not be used as a persistent key.
/// Equality and hashing go by identifier only.
#[derive(Debug, Clone)]
pub struct Repository {
    id: Uuid,
    name: String,
    path: PathBuf,
    trunk: Option<Trunk>,
}

impl Repository {
    /// Create a repository with a fresh identifier and unresolved trunk.
    #[must_use]
    pub fn new(name: impl Into<String>, path: impl Into<PathBuf>) -> Self {
        Self {
            id: Uuid::new_v4(),
            name: name.into(),
            path: path.into(),
            trunk: None,
        }
    }

    /// Builder-style trunk assignment.
    #[must_use]
    pub fn with_trunk(mut self, trunk: Trunk) -> Self {
        self.trunk = Some(trunk);
        self
    }

    /// Opaque identifier, unique within one discovery run.
    #[must_use]
    pub const fn id(&self) -> Uuid {
        self.id
    }

    /// Directory basename.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Absolute path of the working tree.
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Resolved trunk, or `Master` if it was never resolved.
    #[must_use]
    pub fn trunk(&self) -> Trunk {
        self.trunk.unwrap_or_default()
    }

    /// Whether the trunk has been resolved at least once.
    #[must_use]
    pub const fn trunk_resolved(&self) -> bool {
        self.trunk.is_some()
    }

    /// Refine the trunk after a live re-query.
    pub fn set_trunk(&mut self, trunk: Trunk) {
        self.trunk = Some(trunk);
    }
}

impl PartialEq for Repository {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for Repository {}

impl Hash for Repository {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.id.hash(state);
    }
}
