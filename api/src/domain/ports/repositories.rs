//! Repository port traits
//!
//! These traits define the interface for catalog persistence.
//! Implementations are provided by adapters (e.g., the SeaORM store).

use async_trait::async_trait;

use crate::domain::entities::{
    Category, CategoryWithProducts, NewCategory, NewProduct, ProductId, ProductWithCategory,
};
use crate::error::DomainError;

/// Repository for Product entities
#[async_trait]
pub trait ProductRepository: Send + Sync {
    /// Find a product by ID with its category expanded
    async fn find_by_id(&self, id: &ProductId) -> Result<Option<ProductWithCategory>, DomainError>;

    /// List products in insertion order with their categories expanded,
    /// truncated to `limit` entries when given
    async fn find_all(&self, limit: Option<u64>) -> Result<Vec<ProductWithCategory>, DomainError>;

    /// Validate and create a new product; the store assigns the id
    async fn create(&self, product: &NewProduct) -> Result<ProductWithCategory, DomainError>;
}

/// Repository for Category entities
#[async_trait]
pub trait CategoryRepository: Send + Sync {
    /// List every category with all products that reference it
    async fn find_all_with_products(&self) -> Result<Vec<CategoryWithProducts>, DomainError>;

    /// Validate and create a new category; the store assigns the id
    async fn create(&self, category: &NewCategory) -> Result<Category, DomainError>;
}
