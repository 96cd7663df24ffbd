//! Test utilities
//!
//! Manual in-memory implementations of the repository ports and test
//! fixtures for unit testing services without a database.

pub mod fixtures;
pub mod mocks;

pub use fixtures::*;
pub use mocks::*;
