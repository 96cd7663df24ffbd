//! Domain layer
//!
//! Contains pure catalog logic with no external dependencies.
//! - `entities`: Domain models representing products and categories
//! - `ports`: Trait definitions for persistence
//! - `seed`: The fixed rows every new store starts with

pub mod entities;
pub mod ports;
pub mod seed;
