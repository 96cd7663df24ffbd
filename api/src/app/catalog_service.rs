//! Catalog service
//!
//! The read operations presentation adapters rely on. Each call maps onto a
//! single repository read and holds no state between calls.

use std::sync::Arc;

use crate::domain::entities::{CategoryWithProducts, ProductId, ProductWithCategory};
use crate::domain::ports::{CategoryRepository, ProductRepository};
use crate::error::DomainError;

/// Number of products shown on the home page
pub const HOME_PAGE_PRODUCT_LIMIT: u64 = 6;

/// Service for reading the catalog
#[derive(Debug)]
pub struct CatalogService<PR, CR>
where
    PR: ProductRepository,
    CR: CategoryRepository,
{
    products: Arc<PR>,
    categories: Arc<CR>,
}

impl<PR, CR> CatalogService<PR, CR>
where
    PR: ProductRepository,
    CR: CategoryRepository,
{
    pub fn new(products: Arc<PR>, categories: Arc<CR>) -> Self {
        Self {
            products,
            categories,
        }
    }

    /// Every product with its category
    pub async fn get_all_products(&self) -> Result<Vec<ProductWithCategory>, DomainError> {
        self.products.find_all(None).await
    }

    /// A single product with its category, `None` if the id is unknown
    pub async fn get_product(
        &self,
        id: &ProductId,
    ) -> Result<Option<ProductWithCategory>, DomainError> {
        self.products.find_by_id(id).await
    }

    /// Every category with its products
    pub async fn get_all_categories(&self) -> Result<Vec<CategoryWithProducts>, DomainError> {
        self.categories.find_all_with_products().await
    }

    /// The first products in catalog order, for the home page
    pub async fn get_home_page_products(&self) -> Result<Vec<ProductWithCategory>, DomainError> {
        self.products.find_all(Some(HOME_PAGE_PRODUCT_LIMIT)).await
    }
}
