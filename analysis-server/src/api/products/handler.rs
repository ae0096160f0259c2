//! Product API handlers

use axum::{
    Json,
    extract::{Path, Query, State},
};
use serde::Deserialize;
use validator::Validate;

use crate::core::ServerState;
use crate::utils::{AppError, AppResult, ErrorCode};
use shared::models::{Product, ProductCreate, ProductStatus, ProductUpdate};

/// Product list filter
///
/// `status=active|draft` narrows the listing; omitting it returns all.
#[derive(Debug, Deserialize)]
pub struct ListQuery {
    status: Option<String>,
}

/// GET /api/products?status=active - list products
pub async fn list(
    State(state): State<ServerState>,
    Query(query): Query<ListQuery>,
) -> AppResult<Json<Vec<Product>>> {
    let status = match query.status.as_deref() {
        None | Some("all") => None,
        Some("active") => Some(ProductStatus::Active),
        Some("draft") => Some(ProductStatus::Draft),
        Some(other) => {
            return Err(AppError::invalid_request(format!(
                "Unknown status filter: {other}"
            )));
        }
    };
    Ok(Json(state.catalog.list_products(status)))
}

/// GET /api/products/:id
pub async fn get_by_id(
    State(state): State<ServerState>,
    Path(id): Path<String>,
) -> AppResult<Json<Product>> {
    let product = state
        .catalog
        .get_product(&id)
        .ok_or_else(|| AppError::new(ErrorCode::ProductNotFound).with_detail("id", id))?;
    Ok(Json(product))
}

/// POST /api/products - create a product
pub async fn create(
    State(state): State<ServerState>,
    Json(payload): Json<ProductCreate>,
) -> AppResult<Json<Product>> {
    payload
        .validate()
        .map_err(|e| AppError::validation(e.to_string()))?;
    let product = state.catalog.create_product(payload)?;
    tracing::info!(product_id = %product.id, sku = %product.sku, "Product created");
    Ok(Json(product))
}

/// PUT /api/products/:id - partial update (only present fields change)
pub async fn update(
    State(state): State<ServerState>,
    Path(id): Path<String>,
    Json(payload): Json<ProductUpdate>,
) -> AppResult<Json<Product>> {
    let product = state.catalog.update_product(&id, payload)?;
    Ok(Json(product))
}

/// DELETE /api/products/:id - delete the product and its analysis inputs
pub async fn delete(
    State(state): State<ServerState>,
    Path(id): Path<String>,
) -> AppResult<Json<bool>> {
    state.delete_product(&id)?;
    Ok(Json(true))
}
