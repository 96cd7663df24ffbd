//! Unified error types for the Catalog API
//!
//! This module defines error types for each layer:
//! - `DomainError`: Core catalog errors raised by entities, the store and services
//! - `AppError`: Application layer errors (wraps domain errors for HTTP responses)

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use thiserror::Error;

/// Domain layer errors - pure business logic errors
#[derive(Debug, Error)]
pub enum DomainError {
    #[error("Entity not found: {0}")]
    NotFound(String),

    #[error("Validation error: {field} {constraint}")]
    Validation { field: String, constraint: String },

    #[error("Storage unavailable: {0}")]
    StorageUnavailable(String),

    #[error("Database error: {0}")]
    Database(String),
}

impl DomainError {
    pub fn validation(field: impl Into<String>, constraint: impl Into<String>) -> Self {
        DomainError::Validation {
            field: field.into(),
            constraint: constraint.into(),
        }
    }
}

/// Application layer errors - used by HTTP handlers
#[derive(Debug, Error)]
pub enum AppError {
    #[error("{0}")]
    Domain(#[from] DomainError),
}

impl AppError {
    /// HTTP status this error maps to
    pub fn status_code(&self) -> StatusCode {
        match self {
            AppError::Domain(DomainError::NotFound(_)) => StatusCode::NOT_FOUND,
            AppError::Domain(DomainError::Validation { .. }) => StatusCode::BAD_REQUEST,
            AppError::Domain(DomainError::StorageUnavailable(_)) => {
                StatusCode::SERVICE_UNAVAILABLE
            }
            AppError::Domain(DomainError::Database(_)) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

/// Error response body for JSON responses
#[derive(Serialize)]
struct ErrorResponse {
    error: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    details: Option<String>,
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (error, details) = match &self {
            AppError::Domain(DomainError::NotFound(msg)) => ("Not found", Some(msg.clone())),
            AppError::Domain(e @ DomainError::Validation { .. }) => {
                ("Validation error", Some(e.to_string()))
            }
            AppError::Domain(DomainError::StorageUnavailable(msg)) => {
                tracing::error!("Storage unavailable: {}", msg);
                ("Service unavailable", None)
            }
            AppError::Domain(DomainError::Database(msg)) => {
                tracing::error!("Database error: {}", msg);
                ("Internal server error", None)
            }
        };

        let body = Json(ErrorResponse {
            error: error.to_string(),
            details,
        });

        (self.status_code(), body).into_response()
    }
}
