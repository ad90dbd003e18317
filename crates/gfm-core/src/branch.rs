//! Git Flow branch kinds, naming, and creation requests.

use std::fmt;
use std::str::FromStr;

use crate::error::Error;
use crate::repository::{Repository, Trunk};

/// Integration branch that feature branches start from.
pub const DEVELOP: &str = "develop";

/// The kind of Git Flow branch to create.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BranchKind {
    /// `feature/…`, based on `develop`.
    Feature,
    /// `hotfix/…`, based on the trunk.
    Hotfix,
}

impl BranchKind {
    /// All kinds, in display order.
    pub const ALL: [Self; 2] = [Self::Feature, Self::Hotfix];

    /// Name prefix, without the trailing slash.
    #[must_use]
    pub const fn prefix(self) -> &'static str {
        match self {
            Self::Feature => "feature",
            Self::Hotfix => "hotfix",
        }
    }

    /// Base branch for this kind given a repository's trunk.
    #[must_use]
    pub const fn base(self, trunk: Trunk) -> &'static str {
        match self {
            Self::Feature => DEVELOP,
            Self::Hotfix => trunk.branch(),
        }
    }
}

impl fmt::Display for BranchKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.prefix())
    }
}

impl FromStr for BranchKind {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "feature" | "f" => Ok(Self::Feature),
            "hotfix" | "h" => Ok(Self::Hotfix),
            _ => Err(Error::InvalidBranchKind(s.to_string())),
        }
    }
}

/// Format a Git Flow branch name from an issue token and a description.
///
/// Each part is trimmed and lowercased, empty parts are dropped, and the
/// rest are joined with `-`. Spaces become `_` and anything outside
/// `[a-z0-9_-]` is removed. If both parts are empty the result is just the
/// prefix, e.g. `"feature/"`; callers should check [`BranchRequest::has_content`]
/// first.
///
/// ```
/// use gfm_core::{BranchKind, format_branch_name};
///
/// assert_eq!(format_branch_name(BranchKind::Feature, "123", "Add Login"), "feature/123-add_login");
/// assert_eq!(format_branch_name(BranchKind::Hotfix, "", "Fix Crash!!"), "hotfix/fix_crash");
/// ```
#[must_use]
pub fn format_branch_name(kind: BranchKind, issue: &str, name: &str) -> String {
    let suffix: String = [issue, name]
        .iter()
        .map(|part| part.trim().to_lowercase())
        .filter(|part| !part.is_empty())
        .collect::<Vec<_>>()
        .join("-")
        .replace(' ', "_")
        .chars()
        .filter(|c| matches!(c, 'a'..='z' | '0'..='9' | '_' | '-'))
        .collect();

    format!("{}/{suffix}", kind.prefix())
}

/// A single branch creation, not persisted anywhere.
#[derive(Debug, Clone)]
pub struct BranchRequest<'a> {
    /// Repository to create the branch in.
    pub repository: &'a Repository,
    /// Kind of branch.
    pub kind: BranchKind,
    /// Issue or ticket token, may be empty.
    pub issue: String,
    /// Free-text description, may be empty.
    pub name: String,
}

impl<'a> BranchRequest<'a> {
    /// Create a new request.
    #[must_use]
    pub fn new(
        repository: &'a Repository,
        kind: BranchKind,
        issue: impl Into<String>,
        name: impl Into<String>,
    ) -> Self {
        Self {
            repository,
            kind,
            issue: issue.into(),
            name: name.into(),
        }
    }

    /// Whether at least one of issue or name has non-whitespace content.
    #[must_use]
    pub fn has_content(&self) -> bool {
        !self.issue.trim().is_empty() || !self.name.trim().is_empty()
    }

    /// The branch name this request will create.
    #[must_use]
    pub fn branch_name(&self) -> String {
        format_branch_name(self.kind, &self.issue, &self.name)
    }

    /// Preview of what creation will do, using the repository's cached trunk.
    #[must_use]
    pub fn summary(&self) -> BranchSummary {
        BranchSummary {
            repository: self.repository.name().to_string(),
            base: self.kind.base(self.repository.trunk()).to_string(),
            branch: self.branch_name(),
        }
    }
}

/// Human-facing preview of a pending branch creation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BranchSummary {
    /// Repository name.
    pub repository: String,
    /// Branch the new branch starts from.
    pub base: String,
    /// Formatted new branch name.
    pub branch: String,
}

impl fmt::Display for BranchSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Repository: {}", self.repository)?;
        writeln!(f, "Base Branch: {}", self.base)?;
        write!(f, "New Branch: {}", self.branch)
    }
}
