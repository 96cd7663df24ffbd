//! Category domain entity
//!
//! A named grouping of products. Categories never hold their products;
//! the reverse lookup is computed when the store reads them.

use serde::{Deserialize, Serialize};

use super::product::Product;
use crate::error::DomainError;

pub const CATEGORY_NAME_MAX_LEN: usize = 50;
pub const CATEGORY_DESCRIPTION_MAX_LEN: usize = 200;

/// Unique identifier for a category
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CategoryId(pub i32);

impl From<i32> for CategoryId {
    fn from(id: i32) -> Self {
        Self(id)
    }
}

impl std::fmt::Display for CategoryId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A product category
#[derive(Debug, Clone, PartialEq)]
pub struct Category {
    pub id: CategoryId,
    pub name: String,
    pub description: Option<String>,
}

/// A category together with every product that references it
#[derive(Debug, Clone, PartialEq)]
pub struct CategoryWithProducts {
    pub category: Category,
    pub products: Vec<Product>,
}

/// Data needed to create a new category
#[derive(Debug, Clone)]
pub struct NewCategory {
    pub name: String,
    pub description: Option<String>,
}

impl NewCategory {
    pub fn new(name: impl Into<String>, description: Option<&str>) -> Self {
        Self {
            name: name.into(),
            description: description.map(str::to_string),
        }
    }

    /// Check field constraints before the category is persisted
    pub fn validate(&self) -> Result<(), DomainError> {
        validate_required("name", &self.name, CATEGORY_NAME_MAX_LEN)?;
        validate_optional(
            "description",
            self.description.as_deref(),
            CATEGORY_DESCRIPTION_MAX_LEN,
        )
    }
}

pub(crate) fn validate_required(
    field: &str,
    value: &str,
    max_len: usize,
) -> Result<(), DomainError> {
    if value.trim().is_empty() {
        return Err(DomainError::validation(field, "is required"));
    }
    validate_optional(field, Some(value), max_len)
}

pub(crate) fn validate_optional(
    field: &str,
    value: Option<&str>,
    max_len: usize,
) -> Result<(), DomainError> {
    match value {
        Some(v) if v.chars().count() > max_len => Err(DomainError::validation(
            field,
            format!("must be at most {} characters", max_len),
        )),
        _ => Ok(()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn valid_category() {
        let category = NewCategory::new("Electronics", Some("Electronic devices and gadgets"));
        assert!(category.validate().is_ok());
    }

    #[test]
    fn description_is_optional() {
        assert!(NewCategory::new("Garden", None).validate().is_ok());
    }

    #[test]
    fn blank_name_is_rejected() {
        let err = NewCategory::new("   ", None).validate().unwrap_err();
        match err {
            DomainError::Validation { field, constraint } => {
                assert_eq!(field, "name");
                assert_eq!(constraint, "is required");
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn name_length_boundary() {
        assert!(NewCategory::new("a".repeat(50), None).validate().is_ok());
        let err = NewCategory::new("a".repeat(51), None).validate().unwrap_err();
        assert!(err.to_string().contains("name must be at most 50 characters"));
    }

    #[test]
    fn length_counts_characters_not_bytes() {
        // 50 two-byte characters
        assert!(NewCategory::new("é".repeat(50), None).validate().is_ok());
    }

    #[test]
    fn description_length_boundary() {
        let ok = "d".repeat(200);
        assert!(NewCategory::new("Books", Some(&ok)).validate().is_ok());
        let too_long = "d".repeat(201);
        let err = NewCategory::new("Books", Some(&too_long))
            .validate()
            .unwrap_err();
        assert!(err.to_string().contains("description"));
    }

    #[test]
    fn category_id_display() {
        assert_eq!(CategoryId(3).to_string(), "3");
    }
}
