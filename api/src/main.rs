//! Product API Server
//!
//! A small CRUD REST service for products, backed by PostgreSQL.
//! Uses hexagonal (ports & adapters) architecture for clean separation of concerns.

use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::Context;
use axum::{routing::get, Json, Router};
use sea_orm::Database;
use serde::Serialize;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod adapters;
mod app;
mod config;
mod domain;
mod entity;
mod error;
mod handlers;

#[cfg(test)]
mod test_utils;


use adapters::{ensure_schema, PostgresProductRepository};
use app::{ProductMapper, ProductService};
use config::Config;
use domain::ports::ProductRepository;

/// Application state shared across all handlers
pub struct AppState<PR: ProductRepository> {
    pub product_service: Arc<ProductService<PR>>,
}

impl<PR: ProductRepository> Clone for AppState<PR> {
    fn clone(&self) -> Self {
        Self {
            product_service: self.product_service.clone(),
        }
    }
}

#[derive(Serialize)]
struct HealthResponse {
    status: &'static str,
    version: &'static str,
}

async fn health() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok",
        version: env!("CARGO_PKG_VERSION"),
    })
}

/// Build the router for any product store
fn router<PR: ProductRepository + 'static>(state: AppState<PR>) -> Router {
    Router::new()
        .route("/health", get(health))
        .route(
            "/products",
            get(handlers::list_products::<PR>).post(handlers::create_product::<PR>),
        )
        .route(
            "/products/:id",
            get(handlers::get_product::<PR>)
                .put(handlers::update_product::<PR>)
                .delete(handlers::delete_product::<PR>),
        )
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,product_api=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("Starting Product API...");

    let config = Config::from_env()?;

    // Connect to PostgreSQL
    tracing::info!("Connecting to database...");
    let db = Database::connect(&config.database_url)
        .await
        .context("Failed to connect to database")?;
    tracing::info!("Database connected");

    ensure_schema(&db)
        .await
        .context("Failed to create database schema")?;

    let product_repo = Arc::new(PostgresProductRepository::new(db));
    let product_service = Arc::new(ProductService::new(product_repo, ProductMapper::new()));

    let app = router(AppState { product_service });

    let addr = SocketAddr::from(([0, 0, 0, 0], config.port));
    tracing::info!("Listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("Failed to bind {}", addr))?;
    axum::serve(listener, app).await.context("Server error")?;

    Ok(())
}
