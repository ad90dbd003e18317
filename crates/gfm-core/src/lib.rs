//! # gfm-core
//!
//! Core library for gfm: finds git repositories in a projects directory and
//! runs the Git Flow prepare/create sequences against them.
//!
//! All git access goes through an injected [`gfm_git::GitRunner`], so every
//! component can be driven by a mock in tests.

pub mod branch;
pub mod config;
pub mod discovery;
pub mod error;
pub mod launch;
pub mod orchestrator;
pub mod repository;

#[cfg(test)]
mod test_mocks;

pub use branch::{BranchKind, BranchRequest, BranchSummary, DEVELOP, format_branch_name};
pub use config::Settings;
pub use discovery::RepositoryDiscovery;
pub use error::{Error, Result};
pub use launch::{Launcher, OpenRequest, OpenTarget};
pub use orchestrator::BranchOrchestrator;
pub use repository::{Repository, Trunk};
