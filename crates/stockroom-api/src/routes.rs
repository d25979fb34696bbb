//! Router assembly

use axum::routing::{get, patch};
use axum::Router;

use crate::handlers;
use crate::state::AppState;

/// Build the application router over the given state
pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route(
            "/categories",
            get(handlers::list_categories).post(handlers::create_category),
        )
        .route(
            "/categories/:id",
            patch(handlers::update_category).delete(handlers::delete_category),
        )
        .route(
            "/products",
            get(handlers::list_products).post(handlers::create_product),
        )
        .route(
            "/products/:id",
            patch(handlers::update_product).delete(handlers::delete_product),
        )
        .with_state(state)
}
