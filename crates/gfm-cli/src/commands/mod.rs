//! Command-line definitions and command implementations.

use std::path::PathBuf;

use clap::{ArgAction, Parser, Subcommand, ValueEnum};
use gfm_core::BranchKind;

pub mod completions;
pub mod config;
pub mod create;
pub mod list;
pub mod prepare;
pub mod preview;
pub mod utils;

/// gfm - Git Flow feature and hotfix branches across all your repositories.
#[derive(Debug, Parser)]
#[command(name = "gfm", version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Suppress informational output.
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Log more detail to stderr (-v info, -vv debug, -vvv trace).
    #[arg(short, long, global = true, action = ArgAction::Count)]
    pub verbose: u8,

    /// Scan this directory instead of the configured projects directory.
    #[arg(long, global = true, value_name = "DIR")]
    pub dir: Option<PathBuf>,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// List git repositories in the projects directory.
    List {
        /// Output as JSON.
        #[arg(long)]
        json: bool,
    },

    /// Check out and pull `develop` and the trunk branch.
    Prepare {
        /// Repository name (directory name under the projects directory).
        repo: String,
    },

    /// Create a feature or hotfix branch.
    ///
    /// Anything not given on the command line is asked for interactively.
    Create {
        /// Repository name (directory name under the projects directory).
        repo: Option<String>,

        /// Kind of branch to create.
        #[arg(short, long, value_enum)]
        kind: Option<KindArg>,

        /// Issue or ticket number.
        #[arg(short, long)]
        issue: Option<String>,

        /// Short description of the branch.
        #[arg(short, long)]
        name: Option<String>,

        /// Skip syncing `develop` and the trunk first.
        #[arg(long)]
        no_prepare: bool,

        /// Show what would be created without touching the repository.
        #[arg(long)]
        dry_run: bool,

        /// Don't open the terminal or editor afterwards.
        #[arg(long)]
        no_open: bool,
    },

    /// Print the branch name `create` would use.
    Preview {
        /// Kind of branch.
        #[arg(short, long, value_enum)]
        kind: KindArg,

        /// Issue or ticket number.
        #[arg(short, long, default_value = "")]
        issue: String,

        /// Short description of the branch.
        #[arg(short, long, default_value = "")]
        name: String,
    },

    /// View or change settings.
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },

    /// Generate shell completions.
    Completions {
        /// Shell to generate completions for.
        shell: clap_complete::Shell,
    },
}

#[derive(Debug, Subcommand)]
pub enum ConfigAction {
    /// Print the current settings.
    Show,

    /// Print the settings file location.
    Path,

    /// Change one setting.
    Set {
        /// Setting key, e.g. `projects_directory` or `terminal.open_after_create`.
        key: String,

        /// New value. An empty string clears an application path.
        value: String,
    },
}

/// Branch kind as accepted on the command line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum KindArg {
    /// `feature/…` from `develop`.
    #[value(alias = "f")]
    Feature,
    /// `hotfix/…` from the trunk.
    #[value(alias = "h")]
    Hotfix,
}

impl From<KindArg> for BranchKind {
    fn from(kind: KindArg) -> Self {
        match kind {
            KindArg::Feature => Self::Feature,
            KindArg::Hotfix => Self::Hotfix,
        }
    }
}
