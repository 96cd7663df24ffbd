//! Mock implementations of port traits
//!
//! These are in-memory implementations that can be configured for testing.

use async_trait::async_trait;
use std::sync::{Arc, RwLock};

use crate::domain::entities::{
    Category, CategoryId, CategoryWithProducts, NewCategory, NewProduct, Product, ProductId,
    ProductWithCategory,
};
use crate::domain::ports::{CategoryRepository, ProductRepository};
use crate::error::DomainError;

// ============================================================================
// In-Memory Catalog
// ============================================================================

/// Both catalog repositories over shared vectors, kept in insertion order
#[derive(Default, Clone)]
pub struct InMemoryCatalog {
    categories: Arc<RwLock<Vec<Category>>>,
    products: Arc<RwLock<Vec<Product>>>,
}

impl InMemoryCatalog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Pre-populate with a category for testing
    pub fn with_category(self, category: Category) -> Self {
        self.categories.write().unwrap().push(category);
        self
    }

    /// Pre-populate with a product for testing
    pub fn with_product(self, product: Product) -> Self {
        self.products.write().unwrap().push(product);
        self
    }

    fn category(&self, id: CategoryId) -> Option<Category> {
        self.categories
            .read()
            .unwrap()
            .iter()
            .find(|c| c.id == id)
            .cloned()
    }

    fn expand(&self, product: Product) -> Result<ProductWithCategory, DomainError> {
        let category = self.category(product.category_id).ok_or_else(|| {
            DomainError::Database(format!("missing category {}", product.category_id))
        })?;
        ProductWithCategory::new(product, category)
    }
}

#[async_trait]
impl ProductRepository for InMemoryCatalog {
    async fn find_by_id(&self, id: &ProductId) -> Result<Option<ProductWithCategory>, DomainError> {
        let product = self
            .products
            .read()
            .unwrap()
            .iter()
            .find(|p| p.id == *id)
            .cloned();
        product.map(|p| self.expand(p)).transpose()
    }

    async fn find_all(&self, limit: Option<u64>) -> Result<Vec<ProductWithCategory>, DomainError> {
        let products = self.products.read().unwrap().clone();
        let limit = limit.map_or(usize::MAX, |l| l as usize);
        products
            .into_iter()
            .take(limit)
            .map(|p| self.expand(p))
            .collect()
    }

    async fn create(&self, new_product: &NewProduct) -> Result<ProductWithCategory, DomainError> {
        new_product.validate()?;
        let category = self.category(new_product.category_id).ok_or_else(|| {
            DomainError::validation("category_id", "must reference an existing category")
        })?;

        let mut products = self.products.write().unwrap();
        let next_id = products.iter().map(|p| p.id.0).max().unwrap_or(0) + 1;
        let product = Product {
            id: ProductId(next_id),
            name: new_product.name.clone(),
            description: new_product.description.clone(),
            price: new_product.price,
            category_id: new_product.category_id,
        };
        products.push(product.clone());

        ProductWithCategory::new(product, category)
    }
}

#[async_trait]
impl CategoryRepository for InMemoryCatalog {
    async fn find_all_with_products(&self) -> Result<Vec<CategoryWithProducts>, DomainError> {
        let categories = self.categories.read().unwrap();
        let products = self.products.read().unwrap();

        Ok(categories
            .iter()
            .map(|category| CategoryWithProducts {
                category: category.clone(),
                products: products
                    .iter()
                    .filter(|p| p.category_id == category.id)
                    .cloned()
                    .collect(),
            })
            .collect())
    }

    async fn create(&self, new_category: &NewCategory) -> Result<Category, DomainError> {
        new_category.validate()?;

        let mut categories = self.categories.write().unwrap();
        let next_id = categories.iter().map(|c| c.id.0).max().unwrap_or(0) + 1;
        let category = Category {
            id: CategoryId(next_id),
            name: new_category.name.clone(),
            description: new_category.description.clone(),
        };
        categories.push(category.clone());

        Ok(category)
    }
}

// ============================================================================
// Failing Catalog
// ============================================================================

/// Repositories whose every call fails as if the database were unreachable
pub struct FailingCatalog;

fn unreachable_store() -> DomainError {
    DomainError::StorageUnavailable("connection refused".to_string())
}

#[async_trait]
impl ProductRepository for FailingCatalog {
    async fn find_by_id(&self, _id: &ProductId) -> Result<Option<ProductWithCategory>, DomainError> {
        Err(unreachable_store())
    }

    async fn find_all(&self, _limit: Option<u64>) -> Result<Vec<ProductWithCategory>, DomainError> {
        Err(unreachable_store())
    }

    async fn create(&self, _product: &NewProduct) -> Result<ProductWithCategory, DomainError> {
        Err(unreachable_store())
    }
}

#[async_trait]
impl CategoryRepository for FailingCatalog {
    async fn find_all_with_products(&self) -> Result<Vec<CategoryWithProducts>, DomainError> {
        Err(unreachable_store())
    }

    async fn create(&self, _category: &NewCategory) -> Result<Category, DomainError> {
        Err(unreachable_store())
    }
}
