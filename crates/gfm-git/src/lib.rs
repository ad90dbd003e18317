//! # gfm-git
//!
//! Git command runner for gfm. Spawns the system git executable with an
//! explicit argument vector, captures its output, and classifies failures
//! into typed errors.

mod classify;
mod error;
mod runner;
mod traits;

pub use classify::classify_failure;
pub use error::{Error, Result};
pub use runner::{CommandOutcome, GitCommand};
pub use traits::GitRunner;
