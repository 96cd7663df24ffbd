//! SQL adapter for ProductRepository

use async_trait::async_trait;
use sea_orm::{
    ActiveModelTrait, DatabaseConnection, EntityTrait, QueryOrder, QuerySelect, Set,
};

use super::storage_error;
use crate::domain::entities::{
    CategoryId, NewProduct, Product, ProductId, ProductWithCategory,
};
use crate::domain::ports::ProductRepository;
use crate::entity::{categories, products};
use crate::error::DomainError;

/// SeaORM implementation of ProductRepository
#[derive(Debug)]
pub struct SqlProductRepository {
    db: DatabaseConnection,
}

impl SqlProductRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

#[async_trait]
impl ProductRepository for SqlProductRepository {
    async fn find_by_id(&self, id: &ProductId) -> Result<Option<ProductWithCategory>, DomainError> {
        let result = products::Entity::find_by_id(id.0)
            .find_also_related(categories::Entity)
            .one(&self.db)
            .await
            .map_err(storage_error)?;

        result.map(expand).transpose()
    }

    async fn find_all(&self, limit: Option<u64>) -> Result<Vec<ProductWithCategory>, DomainError> {
        let mut query = products::Entity::find()
            .find_also_related(categories::Entity)
            .order_by_asc(products::Column::Id);
        if let Some(limit) = limit {
            query = query.limit(limit);
        }

        let results = query.all(&self.db).await.map_err(storage_error)?;

        results.into_iter().map(expand).collect()
    }

    async fn create(&self, product: &NewProduct) -> Result<ProductWithCategory, DomainError> {
        product.validate()?;

        let category = categories::Entity::find_by_id(product.category_id.0)
            .one(&self.db)
            .await
            .map_err(storage_error)?
            .ok_or_else(|| {
                DomainError::validation(
                    "category_id",
                    format!(
                        "must reference an existing category ({} not found)",
                        product.category_id
                    ),
                )
            })?;

        let model = products::ActiveModel {
            name: Set(product.name.clone()),
            description: Set(product.description.clone()),
            price: Set(product.price),
            category_id: Set(product.category_id.0),
            ..Default::default()
        };

        let result = model.insert(&self.db).await.map_err(storage_error)?;

        ProductWithCategory::new(result.into(), category.into())
    }
}

/// Pair a joined row into a domain product
///
/// The foreign key guarantees the category exists; a missing one means the
/// row was written outside the store.
fn expand(
    (product, category): (products::Model, Option<categories::Model>),
) -> Result<ProductWithCategory, DomainError> {
    let category = category.ok_or_else(|| {
        DomainError::Database(format!(
            "product {} references missing category {}",
            product.id, product.category_id
        ))
    })?;

    ProductWithCategory::new(product.into(), category.into())
}

/// Convert SeaORM model to domain entity
impl From<products::Model> for Product {
    fn from(model: products::Model) -> Self {
        Product {
            id: ProductId(model.id),
            name: model.name,
            description: model.description,
            price: model.price,
            category_id: CategoryId(model.category_id),
        }
    }
}
