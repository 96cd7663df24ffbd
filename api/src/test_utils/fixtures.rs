//! Test fixtures
//!
//! Factory functions for creating test data with sensible defaults.

use rust_decimal::Decimal;

use super::mocks::InMemoryCatalog;
use crate::domain::entities::{Category, CategoryId, Product, ProductId};
use crate::domain::seed::{seed_categories, seed_products};

/// Create a test category
pub fn test_category(id: i32, name: &str) -> Category {
    Category {
        id: CategoryId(id),
        name: name.to_string(),
        description: Some(format!("{} category", name)),
    }
}

/// Create a test product in the given category
pub fn test_product(id: i32, category_id: CategoryId) -> Product {
    Product {
        id: ProductId(id),
        name: format!("Product {}", id),
        description: Some("A test product".to_string()),
        price: Decimal::new(1000 + i64::from(id), 2),
        category_id,
    }
}

/// An in-memory catalog holding the standard seed set
pub fn test_catalog() -> InMemoryCatalog {
    let mut catalog = InMemoryCatalog::new();
    for (id, category) in seed_categories() {
        catalog = catalog.with_category(Category {
            id,
            name: category.name,
            description: category.description,
        });
    }
    for (id, product) in seed_products() {
        catalog = catalog.with_product(Product {
            id,
            name: product.name,
            description: product.description,
            price: product.price,
            category_id: product.category_id,
        });
    }
    catalog
}
