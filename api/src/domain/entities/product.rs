//! Product domain entity
//!
//! A priced item that belongs to exactly one category through `category_id`.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::category::{validate_optional, validate_required, Category, CategoryId};
use crate::error::DomainError;

pub const PRODUCT_NAME_MAX_LEN: usize = 100;
pub const PRODUCT_DESCRIPTION_MAX_LEN: usize = 500;
pub const MIN_PRICE: Decimal = Decimal::from_parts(1, 0, 0, false, 2);
pub const MAX_PRICE: Decimal = Decimal::from_parts(1_000_000, 0, 0, false, 2);

/// Unique identifier for a product
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ProductId(pub i32);

impl From<i32> for ProductId {
    fn from(id: i32) -> Self {
        Self(id)
    }
}

impl std::fmt::Display for ProductId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A catalog product
#[derive(Debug, Clone, PartialEq)]
pub struct Product {
    pub id: ProductId,
    pub name: String,
    pub description: Option<String>,
    pub price: Decimal,
    pub category_id: CategoryId,
}

/// A product with its category expanded
#[derive(Debug, Clone, PartialEq)]
pub struct ProductWithCategory {
    pub product: Product,
    pub category: Category,
}

impl ProductWithCategory {
    /// Pair a product with the category it references
    ///
    /// Fails when `category` is not the row `product.category_id` points at.
    pub fn new(product: Product, category: Category) -> Result<Self, DomainError> {
        if product.category_id != category.id {
            return Err(DomainError::Database(format!(
                "product {} references category {} but was paired with category {}",
                product.id, product.category_id, category.id
            )));
        }
        Ok(Self { product, category })
    }
}

/// Data needed to create a new product
#[derive(Debug, Clone)]
pub struct NewProduct {
    pub name: String,
    pub description: Option<String>,
    pub price: Decimal,
    pub category_id: CategoryId,
}

impl NewProduct {
    pub fn new(
        name: impl Into<String>,
        description: Option<&str>,
        price: Decimal,
        category_id: CategoryId,
    ) -> Self {
        Self {
            name: name.into(),
            description: description.map(str::to_string),
            price,
            category_id,
        }
    }

    /// Check field constraints before the product is persisted
    ///
    /// Referential integrity of `category_id` is checked by the store.
    pub fn validate(&self) -> Result<(), DomainError> {
        validate_required("name", &self.name, PRODUCT_NAME_MAX_LEN)?;
        validate_optional(
            "description",
            self.description.as_deref(),
            PRODUCT_DESCRIPTION_MAX_LEN,
        )?;
        if self.price < MIN_PRICE || self.price > MAX_PRICE {
            return Err(DomainError::validation(
                "price",
                format!("must be between {} and {}", MIN_PRICE, MAX_PRICE),
            ));
        }
        Ok(())
    }
}
