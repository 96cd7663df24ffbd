//! HTTP handlers
//!
//! Axum request handlers for the API endpoints and pages.

pub mod catalog;
pub mod pages;

pub use catalog::{get_product, list_categories, list_products};
pub use pages::{about, error, index, privacy};
