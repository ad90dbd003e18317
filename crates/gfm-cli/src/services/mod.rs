//! Service layer for business logic with dependency injection.
//!
//! Services accept trait-based git and launcher dependencies so their
//! sequencing can be tested with mock implementations.

pub mod create;

#[cfg(test)]
pub mod test_mocks;

pub use create::{CreateOptions, CreateService};
