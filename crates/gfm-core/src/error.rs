//! Error types for gfm-core.

use std::path::PathBuf;

/// Result type alias using [`Error`].
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur in gfm-core operations.
///
/// Orchestrator operations return [`gfm_git::Error`] directly; this type
/// covers discovery, settings, and anything that wraps a git failure.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The directory to scan does not exist.
    #[error("directory does not exist at {}", .0.display())]
    DirectoryNotFound(PathBuf),

    /// The directory to scan exists but cannot be listed.
    #[error("cannot read directory at {} - check permissions", .0.display())]
    DirectoryNotReadable(PathBuf),

    /// Listing the directory failed for another reason.
    #[error("failed to discover repositories: {0}")]
    DiscoveryFailed(#[source] std::io::Error),

    /// No discovered repository has the requested name.
    #[error("no git repository named '{name}' in {}", .directory.display())]
    RepositoryNotFound {
        /// The requested name.
        name: String,
        /// The directory that was scanned.
        directory: PathBuf,
    },

    /// Unrecognised branch kind.
    #[error("invalid branch kind '{0}' - expected 'feature' or 'hotfix'")]
    InvalidBranchKind(String),

    /// A setting could not be updated.
    #[error("invalid setting '{key}': {reason}")]
    InvalidSetting {
        /// The setting key.
        key: String,
        /// Why the update was rejected.
        reason: String,
    },

    /// No platform config directory and no `GFM_CONFIG` override.
    #[error("could not determine a config directory - set GFM_CONFIG")]
    ConfigDirUnavailable,

    /// IO error.
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    /// TOML parsing error.
    #[error("toml error: {0}")]
    Toml(#[from] toml::de::Error),

    /// TOML serialization error.
    #[error("toml error: {0}")]
    TomlSerialize(#[from] toml::ser::Error),

    /// Git operation error.
    #[error(transparent)]
    Git(#[from] gfm_git::Error),
}
