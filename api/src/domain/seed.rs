//! Seed data
//!
//! The fixed catalog inserted exactly once when a store is first initialized.

use rust_decimal::Decimal;

use super::entities::{CategoryId, NewCategory, NewProduct, ProductId};

/// Name of the marker row recording that this seed set was applied
pub const SEED_MARKER: &str = "catalog-v1";

/// Seed categories with their fixed ids
pub fn seed_categories() -> Vec<(CategoryId, NewCategory)> {
    vec![
        (
            CategoryId(1),
            NewCategory::new("Electronics", Some("Electronic devices and gadgets")),
        ),
        (
            CategoryId(2),
            NewCategory::new("Books", Some("Books and literature")),
        ),
        (
            CategoryId(3),
            NewCategory::new("Clothing", Some("Apparel and accessories")),
        ),
    ]
}

/// Seed products with their fixed ids
pub fn seed_products() -> Vec<(ProductId, NewProduct)> {
    vec![
        (
            ProductId(1),
            NewProduct::new(
                "Laptop",
                Some("High-performance laptop"),
                Decimal::new(99999, 2),
                CategoryId(1),
            ),
        ),
        (
            ProductId(2),
            NewProduct::new(
                "Smartphone",
                Some("Latest smartphone model"),
                Decimal::new(69999, 2),
                CategoryId(1),
            ),
        ),
        (
            ProductId(3),
            NewProduct::new(
                "Programming Book",
                Some("Learn programming fundamentals"),
                Decimal::new(2999, 2),
                CategoryId(2),
            ),
        ),
        (
            ProductId(4),
            NewProduct::new(
                "T-Shirt",
                Some("Comfortable cotton t-shirt"),
                Decimal::new(1999, 2),
                CategoryId(3),
            ),
        ),
    ]
}
