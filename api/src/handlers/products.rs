//! Product handlers
//!
//! CRUD endpoints for products.

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};

use crate::app::{ProductRequest, ProductResponse, UpdateProductRequest};
use crate::domain::entities::ProductId;
use crate::domain::ports::ProductRepository;
use crate::error::AppError;
use crate::AppState;

/// Matches the default varchar length of the `products.name` column
const MAX_NAME_LEN: usize = 255;

fn validate_name(name: &str) -> Result<(), AppError> {
    if name.trim().is_empty() {
        return Err(AppError::BadRequest("Name must not be blank".to_string()));
    }
    if name.chars().count() > MAX_NAME_LEN {
        return Err(AppError::BadRequest(format!(
            "Name must be at most {} characters",
            MAX_NAME_LEN
        )));
    }
    Ok(())
}

/// POST /products
///
/// Create a product.
pub async fn create_product<PR: ProductRepository + 'static>(
    State(state): State<AppState<PR>>,
    Json(request): Json<ProductRequest>,
) -> Result<(StatusCode, Json<ProductResponse>), AppError> {
    validate_name(&request.name)?;

    let product = state.product_service.create(&request).await?;

    Ok((StatusCode::CREATED, Json(product)))
}

/// GET /products
///
/// List all products.
pub async fn list_products<PR: ProductRepository + 'static>(
    State(state): State<AppState<PR>>,
) -> Result<Json<Vec<ProductResponse>>, AppError> {
    let products = state.product_service.find_all().await?;
    Ok(Json(products))
}

/// GET /products/:id
pub async fn get_product<PR: ProductRepository + 'static>(
    State(state): State<AppState<PR>>,
    Path(id): Path<i64>,
) -> Result<Json<ProductResponse>, AppError> {
    let product = state.product_service.find(ProductId(id)).await?;
    Ok(Json(product))
}

/// PUT /products/:id
///
/// Rename a product.
pub async fn update_product<PR: ProductRepository + 'static>(
    State(state): State<AppState<PR>>,
    Path(id): Path<i64>,
    Json(request): Json<UpdateProductRequest>,
) -> Result<Json<ProductResponse>, AppError> {
    validate_name(&request.name)?;

    let product = state
        .product_service
        .update(ProductId(id), &request)
        .await?;

    Ok(Json(product))
}

/// DELETE /products/:id
pub async fn delete_product<PR: ProductRepository + 'static>(
    State(state): State<AppState<PR>>,
    Path(id): Path<i64>,
) -> Result<StatusCode, AppError> {
    state.product_service.delete(ProductId(id)).await?;
    Ok(StatusCode::NO_CONTENT)
}
