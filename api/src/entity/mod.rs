//! SeaORM entities
//!
//! Table definitions for the catalog schema. Domain code should use
//! `crate::domain::entities` instead; adapters convert between the two.

pub mod categories;
pub mod products;
pub mod seed_markers;
