//! REST handlers for categories and products
//!
//! Each handler acquires the store guard, runs one repository operation to
//! completion, and releases it before responding. Malformed JSON bodies
//! are mapped to 400 here (axum's default rejection would answer 422,
//! which the API contract does not allow).

use axum::extract::rejection::JsonRejection;
use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use stockroom_core::ops::{category_ops, product_ops};
use stockroom_core::{Category, Product};
use tracing::debug;

use crate::dto::{CategoryBody, ProductBody, ProductListQuery, ProductListResponse, PAGE_SIZE};
use crate::error::ApiError;
use crate::state::AppState;

/// GET /categories
pub async fn list_categories(State(state): State<AppState>) -> Json<Vec<Category>> {
    debug!(route = "GET /categories", "request");
    let store = state.store().read().await;
    Json(category_ops::list_categories(&store))
}

/// POST /categories
pub async fn create_category(
    State(state): State<AppState>,
    body: Result<Json<CategoryBody>, JsonRejection>,
) -> Result<impl IntoResponse, ApiError> {
    let Json(body) = body.map_err(|_| ApiError::bad_request("Invalid category data"))?;
    debug!(route = "POST /categories", "request");

    let mut store = state.store().write().await;
    let category = category_ops::create_category(&mut store, body.into())?;
    Ok((StatusCode::CREATED, Json(category)))
}

/// PATCH /categories/:id
pub async fn update_category(
    State(state): State<AppState>,
    Path(id): Path<u64>,
    body: Result<Json<CategoryBody>, JsonRejection>,
) -> Result<Json<Category>, ApiError> {
    let Json(body) = body.map_err(|_| ApiError::bad_request("Invalid category data"))?;
    debug!(route = "PATCH /categories/:id", category_id = id, "request");

    let mut store = state.store().write().await;
    let category = category_ops::update_category(&mut store, id, body.into())?;
    Ok(Json(category))
}

/// DELETE /categories/:id
pub async fn delete_category(
    State(state): State<AppState>,
    Path(id): Path<u64>,
) -> Result<StatusCode, ApiError> {
    debug!(route = "DELETE /categories/:id", category_id = id, "request");

    let mut store = state.store().write().await;
    category_ops::delete_category(&mut store, id)?;
    Ok(StatusCode::NO_CONTENT)
}

/// GET /products
pub async fn list_products(
    State(state): State<AppState>,
    Query(query): Query<ProductListQuery>,
) -> Result<Json<ProductListResponse>, ApiError> {
    let page = query.resolved_page();
    debug!(route = "GET /products", page, "request");

    let store = state.store().read().await;
    let product_page = product_ops::list_products(&store, page, PAGE_SIZE)?;
    Ok(Json(ProductListResponse {
        products: product_page.products,
        total: product_page.total,
        page,
        page_size: PAGE_SIZE,
    }))
}

/// POST /products
pub async fn create_product(
    State(state): State<AppState>,
    body: Result<Json<ProductBody>, JsonRejection>,
) -> Result<impl IntoResponse, ApiError> {
    let Json(body) = body.map_err(|_| ApiError::bad_request("Invalid product data"))?;
    debug!(route = "POST /products", "request");

    let mut store = state.store().write().await;
    let product = product_ops::create_product(&mut store, body.into())?;
    Ok((StatusCode::CREATED, Json(product)))
}

/// PATCH /products/:id
pub async fn update_product(
    State(state): State<AppState>,
    Path(id): Path<u64>,
    body: Result<Json<ProductBody>, JsonRejection>,
) -> Result<Json<Product>, ApiError> {
    let Json(body) = body.map_err(|_| ApiError::bad_request("Invalid product data"))?;
    debug!(route = "PATCH /products/:id", product_id = id, "request");

    let mut store = state.store().write().await;
    let product = product_ops::update_product(&mut store, id, body.into())?;
    Ok(Json(product))
}

/// DELETE /products/:id
pub async fn delete_product(
    State(state): State<AppState>,
    Path(id): Path<u64>,
) -> Result<StatusCode, ApiError> {
    debug!(route = "DELETE /products/:id", product_id = id, "request");

    let mut store = state.store().write().await;
    product_ops::delete_product(&mut store, id)?;
    Ok(StatusCode::NO_CONTENT)
}
