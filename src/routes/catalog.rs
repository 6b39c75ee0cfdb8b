//! Catalog API routes, mounted under `/api`.

use crate::handlers::{category, product, variant};
use crate::state::AppState;
use axum::{routing::get, Router};

pub fn catalog_routes(state: AppState) -> Router {
    Router::new()
        .route("/categories", get(category::list))
        .route("/categories/:id", get(category::read))
        .route("/products", get(product::list).post(product::create))
        .route(
            "/products/:id",
            get(product::read).put(product::update).delete(product::delete),
        )
        .route(
            "/variants/:id",
            get(variant::read).put(variant::update).delete(variant::delete),
        )
        .with_state(state)
}
