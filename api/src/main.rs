//! Catalog API Server
//!
//! Serves a product catalog as a read-only JSON API and server-rendered pages.
//! Uses hexagonal (ports & adapters) architecture for clean separation of concerns.

use std::net::SocketAddr;
use std::sync::{Arc, OnceLock};

use anyhow::Context;
use axum::{body::Body, extract::State, http::Request, routing::get, Json, Router};
use chrono::{DateTime, Utc};
use serde::Serialize;
use tokio::net::TcpListener;
use tower_http::cors::{Any, CorsLayer};
use tower_http::request_id::{MakeRequestUuid, PropagateRequestIdLayer, SetRequestIdLayer};
use tower_http::trace::TraceLayer;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod adapters;
mod app;
mod config;
mod domain;
mod entity;
mod error;
mod handlers;
mod pages;

#[cfg(test)]
mod test_utils;


use adapters::{SeedOutcome, SqlCategoryRepository, SqlProductRepository, SqlStore};
use app::CatalogService;
use config::Config;
use error::DomainError;

pub type SqlCatalogService = CatalogService<SqlProductRepository, SqlCategoryRepository>;

/// Application state shared across all handlers
#[derive(Clone, Debug)]
pub struct AppState {
    /// Set once the store has initialized. Stays empty while starting up
    /// and for the whole process if initialization failed.
    pub catalog: Arc<OnceLock<SqlCatalogService>>,
    pub config: Config,
}

impl AppState {
    pub fn new(config: Config) -> Self {
        Self {
            catalog: Arc::new(OnceLock::new()),
            config,
        }
    }

    /// The catalog service, or `StorageUnavailable` until the store is ready
    pub fn catalog(&self) -> Result<&SqlCatalogService, DomainError> {
        self.catalog.get().ok_or_else(|| {
            DomainError::StorageUnavailable("catalog store is not initialized".to_string())
        })
    }

    pub fn storage_ready(&self) -> bool {
        self.catalog.get().is_some()
    }
}

#[derive(Serialize)]
struct HealthResponse {
    status: &'static str,
    timestamp: DateTime<Utc>,
    environment: String,
    storage: &'static str,
}

/// GET /api/health
///
/// Always answers, whether or not the store is available.
async fn health(State(state): State<AppState>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy",
        timestamp: Utc::now(),
        environment: state.config.environment.clone(),
        storage: if state.storage_ready() {
            "ready"
        } else {
            "unavailable"
        },
    })
}

/// Build the application router
fn router(state: AppState) -> Router {
    Router::new()
        // Health check
        .route("/api/health", get(health))
        // Catalog API (read-only)
        .route("/api/products", get(handlers::list_products))
        .route("/api/products/:id", get(handlers::get_product))
        .route("/api/categories", get(handlers::list_categories))
        // Pages
        .route("/", get(handlers::index))
        .route("/privacy", get(handlers::privacy))
        .route("/about", get(handlers::about))
        .route("/error", get(handlers::error))
        // Middleware
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
        .layer(PropagateRequestIdLayer::x_request_id())
        .layer(
            TraceLayer::new_for_http().make_span_with(|request: &Request<Body>| {
                let request_id = request
                    .headers()
                    .get("x-request-id")
                    .and_then(|value| value.to_str().ok())
                    .unwrap_or("-");
                tracing::info_span!(
                    "http_request",
                    method = %request.method(),
                    uri = %request.uri(),
                    request_id = %request_id,
                )
            }),
        )
        .layer(SetRequestIdLayer::x_request_id(MakeRequestUuid))
        .with_state(state)
}

/// Connect to the configured backend, create the schema and seed it
async fn open_catalog(config: &Config) -> Result<SqlCatalogService, DomainError> {
    let store = SqlStore::connect(&config.storage).await?;

    match store.initialize().await? {
        SeedOutcome::Seeded {
            categories,
            products,
        } => tracing::info!(
            "Database initialized and seeded with {} categories and {} products",
            categories,
            products
        ),
        SeedOutcome::AlreadySeeded => tracing::info!("Database initialized successfully"),
        SeedOutcome::MarkedExisting => {
            tracing::warn!("Existing catalog rows found without a seed marker; seed skipped")
        }
    }

    Ok(CatalogService::new(
        Arc::new(store.products()),
        Arc::new(store.categories()),
    ))
}

/// Initialize the store and publish the catalog service
///
/// Failure is logged and leaves the server running without a store.
async fn initialize_store(config: Config, catalog: Arc<OnceLock<SqlCatalogService>>) {
    match open_catalog(&config).await {
        Ok(service) => {
            if catalog.set(service).is_err() {
                tracing::warn!("Catalog store was already initialized");
            }
        }
        Err(e) => {
            tracing::error!("An error occurred while initializing the database: {}", e);
        }
    }
}

/// Bind the listener, then begin store initialization in the background
///
/// Catalog routes answer 503 until initialization completes. A failed bind
/// returns before any store connection is attempted.
async fn start(config: Config) -> anyhow::Result<(TcpListener, AppState)> {
    let addr = SocketAddr::from(([0, 0, 0, 0], config.port));
    let listener = TcpListener::bind(addr)
        .await
        .with_context(|| format!("failed to bind {}", addr))?;

    let state = AppState::new(config.clone());
    tokio::spawn(initialize_store(config, state.catalog.clone()));

    Ok((listener, state))
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!("Failed to listen for Ctrl-C: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => {
                tracing::error!("Failed to listen for SIGTERM: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    tracing::info!("Shutdown signal received");
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,catalog_api=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("Starting Catalog API...");

    // Load configuration
    let config = Config::from_env()?;
    tracing::info!(
        storage = %config.storage.backend,
        environment = %config.environment,
        "Configuration loaded"
    );

    let (listener, state) = start(config).await?;
    tracing::info!("Listening on {}", listener.local_addr()?);

    let app = router(state);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("server error")?;

    Ok(())
}
