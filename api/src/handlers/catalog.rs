//! Catalog handlers
//!
//! Read-only JSON endpoints for products and categories.

use axum::{
    extract::{Path, State},
    Json,
};
use rust_decimal::Decimal;
use serde::Serialize;

use crate::domain::entities::{
    Category, CategoryWithProducts, Product, ProductId, ProductWithCategory,
};
use crate::error::{AppError, DomainError};
use crate::AppState;

/// Category as embedded in a product response
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CategorySummary {
    pub id: i32,
    pub name: String,
    pub description: Option<String>,
}

/// Product as embedded in a category response
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductSummary {
    pub id: i32,
    pub name: String,
    pub description: Option<String>,
    #[serde(with = "rust_decimal::serde::float")]
    pub price: Decimal,
    pub category_id: i32,
}

/// Response for a product with its category expanded
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductResponse {
    pub id: i32,
    pub name: String,
    pub description: Option<String>,
    #[serde(with = "rust_decimal::serde::float")]
    pub price: Decimal,
    pub category_id: i32,
    pub category: CategorySummary,
}

/// Response for a category with its products expanded
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CategoryResponse {
    pub id: i32,
    pub name: String,
    pub description: Option<String>,
    pub products: Vec<ProductSummary>,
}

impl From<Category> for CategorySummary {
    fn from(c: Category) -> Self {
        CategorySummary {
            id: c.id.0,
            name: c.name,
            description: c.description,
        }
    }
}

impl From<Product> for ProductSummary {
    fn from(p: Product) -> Self {
        ProductSummary {
            id: p.id.0,
            name: p.name,
            description: p.description,
            price: p.price,
            category_id: p.category_id.0,
        }
    }
}

impl From<ProductWithCategory> for ProductResponse {
    fn from(p: ProductWithCategory) -> Self {
        ProductResponse {
            id: p.product.id.0,
            name: p.product.name,
            description: p.product.description,
            price: p.product.price,
            category_id: p.product.category_id.0,
            category: p.category.into(),
        }
    }
}

impl From<CategoryWithProducts> for CategoryResponse {
    fn from(c: CategoryWithProducts) -> Self {
        CategoryResponse {
            id: c.category.id.0,
            name: c.category.name,
            description: c.category.description,
            products: c.products.into_iter().map(Into::into).collect(),
        }
    }
}

/// GET /api/products
///
/// List every product with its category.
pub async fn list_products(
    State(state): State<AppState>,
) -> Result<Json<Vec<ProductResponse>>, AppError> {
    let products = state.catalog()?.get_all_products().await?;

    Ok(Json(products.into_iter().map(Into::into).collect()))
}

/// GET /api/products/:id
///
/// Get a single product with its category.
pub async fn get_product(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<Json<ProductResponse>, AppError> {
    let product = state
        .catalog()?
        .get_product(&ProductId(id))
        .await?
        .ok_or_else(|| DomainError::NotFound(format!("Product {} not found", id)))?;

    Ok(Json(product.into()))
}

/// GET /api/categories
///
/// List every category with its products.
pub async fn list_categories(
    State(state): State<AppState>,
) -> Result<Json<Vec<CategoryResponse>>, AppError> {
    let categories = state.catalog()?.get_all_categories().await?;

    Ok(Json(categories.into_iter().map(Into::into).collect()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::entities::CategoryId;

    #[test]
    fn serialize_product_response_uses_camel_case() {
        let response = ProductResponse::from(ProductWithCategory {
            product: Product {
                id: ProductId(2),
                name: "Smartphone".to_string(),
                description: Some("Latest smartphone model".to_string()),
                price: Decimal::new(69999, 2),
                category_id: CategoryId(1),
            },
            category: Category {
                id: CategoryId(1),
                name: "Electronics".to_string(),
                description: None,
            },
        });

        let json = serde_json::to_value(&response).unwrap();
        assert_eq!(json["id"], 2);
        assert_eq!(json["categoryId"], 1);
        assert_eq!(json["price"], serde_json::json!(699.99));
        assert_eq!(json["category"]["id"], 1);
        assert_eq!(json["category"]["name"], "Electronics");
        assert!(json["category"]["description"].is_null());
    }

    #[test]
    fn serialize_category_response_embeds_products() {
        let response = CategoryResponse::from(CategoryWithProducts {
            category: Category {
                id: CategoryId(3),
                name: "Clothing".to_string(),
                description: Some("Apparel and accessories".to_string()),
            },
            products: vec![Product {
                id: ProductId(4),
                name: "T-Shirt".to_string(),
                description: None,
                price: Decimal::new(1999, 2),
                category_id: CategoryId(3),
            }],
        });

        let json = serde_json::to_value(&response).unwrap();
        assert_eq!(json["products"].as_array().unwrap().len(), 1);
        assert_eq!(json["products"][0]["categoryId"], 3);
        assert!(json["products"][0].get("category").is_none());
    }
}
