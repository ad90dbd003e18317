//! Requests to open a repository in an external application.
//!
//! The core decides *what* should be opened after a branch is created; the
//! front end decides *how*, by implementing [`Launcher`].

use std::fmt;
use std::path::PathBuf;

/// Which kind of application a request targets.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OpenTarget {
    /// A terminal emulator.
    Terminal,
    /// A text editor or IDE.
    Editor,
}

impl fmt::Display for OpenTarget {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Terminal => f.write_str("terminal"),
            Self::Editor => f.write_str("editor"),
        }
    }
}

/// Open `path` with the application at `app`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OpenRequest {
    /// What kind of application this is.
    pub target: OpenTarget,
    /// Application to launch.
    pub app: PathBuf,
    /// Directory to open in it.
    pub path: PathBuf,
}

/// Trait for launching external applications.
#[allow(clippy::missing_errors_doc)]
pub trait Launcher {
    /// Open the request's path in its application. Does not wait for the
    /// application to exit.
    fn open(&self, request: &OpenRequest) -> std::io::Result<()>;
}
