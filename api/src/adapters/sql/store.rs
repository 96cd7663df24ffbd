//! Catalog store lifecycle
//!
//! Opens the configured backend, creates the schema and applies the seed
//! set exactly once. Repositories handed out by the store share its pool.

use std::time::Duration;

use chrono::Utc;
use sea_orm::{
    ConnectOptions, ConnectionTrait, Database, DatabaseBackend, DatabaseConnection, EntityTrait,
    PaginatorTrait, Schema, Set, Statement, TransactionTrait,
};

use super::{storage_error, SqlCategoryRepository, SqlProductRepository};
use crate::config::{StorageBackend, StorageConfig};
use crate::domain::seed::{seed_categories, seed_products, SEED_MARKER};
use crate::entity::{categories, products, seed_markers};
use crate::error::DomainError;

const EPHEMERAL_URL: &str = "sqlite::memory:";

/// How long the single ephemeral connection may live. Closing it drops the
/// memory database, so this is effectively "forever".
const EPHEMERAL_CONNECTION_LIFETIME: Duration = Duration::from_secs(60 * 60 * 24 * 365);

/// Result of `SqlStore::initialize`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SeedOutcome {
    /// The seed set was inserted by this call
    Seeded { categories: usize, products: usize },
    /// The seed marker was already present
    AlreadySeeded,
    /// No marker but rows were present; the marker was recorded over them
    MarkedExisting,
}

/// Relational catalog store backed by SeaORM
pub struct SqlStore {
    db: DatabaseConnection,
}

impl SqlStore {
    /// Open the backend selected by `config`
    pub async fn connect(config: &StorageConfig) -> Result<Self, DomainError> {
        tracing::info!(backend = %config.backend, "Connecting to catalog store...");

        let url = match config.backend {
            StorageBackend::Ephemeral => return Self::ephemeral().await,
            StorageBackend::Persistent => config.database_url.as_deref().ok_or_else(|| {
                DomainError::StorageUnavailable(
                    "persistent storage selected but DATABASE_URL is not set".to_string(),
                )
            })?,
        };

        let timeout = Duration::from_secs(config.connect_timeout_secs);
        let mut options = ConnectOptions::new(url);
        options
            .max_connections(config.max_connections)
            .connect_timeout(timeout)
            .acquire_timeout(timeout);

        let db = Database::connect(options).await.map_err(storage_error)?;

        Ok(Self { db })
    }

    /// Open a fresh, empty in-memory store
    pub async fn ephemeral() -> Result<Self, DomainError> {
        let db = Database::connect(ephemeral_options())
            .await
            .map_err(storage_error)?;

        Ok(Self { db })
    }

    pub fn backend(&self) -> DatabaseBackend {
        self.db.get_database_backend()
    }

    #[cfg(test)]
    pub(crate) fn connection(&self) -> &DatabaseConnection {
        &self.db
    }

    pub fn products(&self) -> SqlProductRepository {
        SqlProductRepository::new(self.db.clone())
    }

    pub fn categories(&self) -> SqlCategoryRepository {
        SqlCategoryRepository::new(self.db.clone())
    }

    /// Ensure the schema exists and the seed set has been applied
    ///
    /// Safe to call repeatedly and from concurrent processes.
    pub async fn initialize(&self) -> Result<SeedOutcome, DomainError> {
        self.ensure_schema().await?;

        match self.seed().await {
            Ok(outcome) => Ok(outcome),
            Err(err) => {
                tracing::warn!("Seeding failed, checking for a concurrent seed: {}", err);
                // Another initializer may have committed the seed first
                if self.seed_marker_exists().await? {
                    tracing::debug!("Seed was applied concurrently");
                    Ok(SeedOutcome::AlreadySeeded)
                } else {
                    Err(err)
                }
            }
        }
    }

    /// Create every catalog table that does not exist yet
    pub async fn ensure_schema(&self) -> Result<(), DomainError> {
        let backend = self.backend();
        let schema = Schema::new(backend);
        let mut statements = [
            schema.create_table_from_entity(categories::Entity),
            schema.create_table_from_entity(products::Entity),
            schema.create_table_from_entity(seed_markers::Entity),
        ];

        for stmt in statements.iter_mut() {
            stmt.if_not_exists();
            self.db
                .execute(backend.build(&*stmt))
                .await
                .map_err(storage_error)?;
        }

        Ok(())
    }

    async fn seed(&self) -> Result<SeedOutcome, DomainError> {
        let category_rows = seed_categories();
        let product_rows = seed_products();
        for (_, category) in &category_rows {
            category.validate()?;
        }
        for (_, product) in &product_rows {
            product.validate()?;
        }

        let txn = self.db.begin().await.map_err(storage_error)?;

        let marker = seed_markers::Entity::find_by_id(SEED_MARKER)
            .one(&txn)
            .await
            .map_err(storage_error)?;
        if marker.is_some() {
            txn.commit().await.map_err(storage_error)?;
            return Ok(SeedOutcome::AlreadySeeded);
        }

        let existing = categories::Entity::find()
            .count(&txn)
            .await
            .map_err(storage_error)?
            + products::Entity::find()
                .count(&txn)
                .await
                .map_err(storage_error)?;

        let outcome = if existing > 0 {
            SeedOutcome::MarkedExisting
        } else {
            categories::Entity::insert_many(category_rows.iter().map(|(id, category)| {
                categories::ActiveModel {
                    id: Set(id.0),
                    name: Set(category.name.clone()),
                    description: Set(category.description.clone()),
                }
            }))
            .exec_without_returning(&txn)
            .await
            .map_err(storage_error)?;

            products::Entity::insert_many(product_rows.iter().map(|(id, product)| {
                products::ActiveModel {
                    id: Set(id.0),
                    name: Set(product.name.clone()),
                    description: Set(product.description.clone()),
                    price: Set(product.price),
                    category_id: Set(product.category_id.0),
                }
            }))
            .exec_without_returning(&txn)
            .await
            .map_err(storage_error)?;

            // Explicit ids do not advance Postgres sequences
            if self.backend() == DatabaseBackend::Postgres {
                for table in ["categories", "products"] {
                    txn.execute(Statement::from_string(
                        DatabaseBackend::Postgres,
                        format!(
                            "SELECT setval(pg_get_serial_sequence('{table}', 'id'), (SELECT MAX(id) FROM {table}))"
                        ),
                    ))
                    .await
                    .map_err(storage_error)?;
                }
            }

            SeedOutcome::Seeded {
                categories: category_rows.len(),
                products: product_rows.len(),
            }
        };

        seed_markers::Entity::insert(seed_markers::ActiveModel {
            name: Set(SEED_MARKER.to_string()),
            applied_at: Set(Utc::now()),
        })
        .exec_without_returning(&txn)
        .await
        .map_err(storage_error)?;

        txn.commit().await.map_err(storage_error)?;

        Ok(outcome)
    }

    async fn seed_marker_exists(&self) -> Result<bool, DomainError> {
        let marker = seed_markers::Entity::find_by_id(SEED_MARKER)
            .one(&self.db)
            .await
            .map_err(storage_error)?;

        Ok(marker.is_some())
    }
}

/// Every connection to `sqlite::memory:` opens its own empty database, so
/// the pool holds exactly one connection and never recycles it.
fn ephemeral_options() -> ConnectOptions {
    let mut options = ConnectOptions::new(EPHEMERAL_URL);
    options
        .max_connections(1)
        .min_connections(1)
        .idle_timeout(EPHEMERAL_CONNECTION_LIFETIME)
        .max_lifetime(EPHEMERAL_CONNECTION_LIFETIME);
    options
}
