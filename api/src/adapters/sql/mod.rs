//! SQL adapters
//!
//! Implementations of repository traits using SeaORM. The same code runs
//! against PostgreSQL (persistent backend) and SQLite (ephemeral backend).

pub mod category_repo;
pub mod product_repo;
pub mod store;


pub use category_repo::SqlCategoryRepository;
pub use product_repo::SqlProductRepository;
pub use store::{SeedOutcome, SqlStore};

use sea_orm::DbErr;

use crate::error::DomainError;

/// Convert a SeaORM error into a domain error
///
/// Connection and pool failures mean the store is unreachable; everything
/// else is reported as a generic database error.
pub(crate) fn storage_error(err: DbErr) -> DomainError {
    match err {
        DbErr::ConnectionAcquire(e) => DomainError::StorageUnavailable(e.to_string()),
        DbErr::Conn(e) => DomainError::StorageUnavailable(e.to_string()),
        other => DomainError::Database(other.to_string()),
    }
}
