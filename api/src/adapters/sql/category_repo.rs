//! SQL adapter for CategoryRepository

use async_trait::async_trait;
use sea_orm::{ActiveModelTrait, DatabaseConnection, EntityTrait, QueryOrder, Set};

use super::storage_error;
use crate::domain::entities::{
    Category, CategoryId, CategoryWithProducts, NewCategory, Product,
};
use crate::domain::ports::CategoryRepository;
use crate::entity::{categories, products};
use crate::error::DomainError;

/// SeaORM implementation of CategoryRepository
#[derive(Debug)]
pub struct SqlCategoryRepository {
    db: DatabaseConnection,
}

impl SqlCategoryRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

#[async_trait]
impl CategoryRepository for SqlCategoryRepository {
    async fn find_all_with_products(&self) -> Result<Vec<CategoryWithProducts>, DomainError> {
        let results = categories::Entity::find()
            .order_by_asc(categories::Column::Id)
            .find_with_related(products::Entity)
            .all(&self.db)
            .await
            .map_err(storage_error)?;

        Ok(results
            .into_iter()
            .map(|(category, products)| {
                let mut products: Vec<Product> = products.into_iter().map(Into::into).collect();
                products.sort_by_key(|p| p.id);
                CategoryWithProducts {
                    category: category.into(),
                    products,
                }
            })
            .collect())
    }

    async fn create(&self, category: &NewCategory) -> Result<Category, DomainError> {
        category.validate()?;

        let model = categories::ActiveModel {
            name: Set(category.name.clone()),
            description: Set(category.description.clone()),
            ..Default::default()
        };

        let result = model.insert(&self.db).await.map_err(storage_error)?;

        Ok(result.into())
    }
}

/// Convert SeaORM model to domain entity
impl From<categories::Model> for Category {
    fn from(model: categories::Model) -> Self {
        Category {
            id: CategoryId(model.id),
            name: model.name,
            description: model.description,
        }
    }
}
