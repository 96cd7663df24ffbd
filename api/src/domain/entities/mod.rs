//! Domain entities
//!
//! Pure domain models representing the catalog.
//! These are separate from the SeaORM entities in the `entity` module.

pub mod category;
pub mod product;

pub use category::{Category, CategoryId, CategoryWithProducts, NewCategory};
pub use product::{NewProduct, Product, ProductId, ProductWithCategory};
