//! Adapters layer
//!
//! Implementations of port traits for external systems.

pub mod sql;

pub use sql::{SeedOutcome, SqlCategoryRepository, SqlProductRepository, SqlStore};
