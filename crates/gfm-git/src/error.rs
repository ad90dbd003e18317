//! Error types for gfm-git.

/// Result type alias using [`Error`].
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while running git commands.
///
/// Every variant carries a human-readable message. Callers higher up the
/// stack may replace the message with one naming the branch and step
/// involved, so the variant is the classification and the message is for
/// display.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    /// A branch or pathspec was not known to git.
    #[error("branch not found: {0}")]
    BranchNotFound(String),

    /// `git checkout` failed.
    #[error("failed to checkout: {0}")]
    CheckoutFailed(String),

    /// `git pull` failed.
    #[error("failed to pull: {0}")]
    PullFailed(String),

    /// `git checkout -b` failed.
    #[error("failed to create branch: {0}")]
    CreateBranchFailed(String),

    /// The working directory is not a git repository.
    #[error("invalid git repository: {0}")]
    InvalidRepository(String),

    /// Any other failure, including failing to spawn git at all.
    #[error("git command failed: {0}")]
    ExecutionFailed(String),
}

impl Error {
    /// The message carried by this error, without the category prefix.
    #[must_use]
    pub fn message(&self) -> &str {
        match self {
            Self::BranchNotFound(m)
            | Self::CheckoutFailed(m)
            | Self::PullFailed(m)
            | Self::CreateBranchFailed(m)
            | Self::InvalidRepository(m)
            | Self::ExecutionFailed(m) => m,
        }
    }
}
