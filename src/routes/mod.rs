//! Router assembly: probes at the root, catalog API under `/api`.

mod catalog;
mod common;

pub use catalog::catalog_routes;
pub use common::common_routes;

use crate::error::AppError;
use crate::state::AppState;
use axum::{
    extract::DefaultBodyLimit,
    http::{header, StatusCode},
    middleware,
    response::{IntoResponse, Response},
    Router,
};
use tower_http::{cors::CorsLayer, trace::TraceLayer};

async fn route_not_found() -> AppError {
    AppError::NotFound("route not found".into())
}

/// Route-level 405s come back from axum without a body; give them the JSON error shape and keep `Allow`.
async fn json_method_not_allowed(res: Response) -> Response {
    if res.status() != StatusCode::METHOD_NOT_ALLOWED || res.headers().contains_key(header::CONTENT_TYPE) {
        return res;
    }
    let allow = res.headers().get(header::ALLOW).cloned();
    let mut json = AppError::MethodNotAllowed("method not allowed".into()).into_response();
    if let Some(allow) = allow {
        json.headers_mut().insert(header::ALLOW, allow);
    }
    json
}

/// Full application router with body limit, request tracing, and permissive CORS for the browser client.
pub fn app_router(state: AppState, max_body_bytes: usize) -> Router {
    Router::new()
        .merge(common_routes(state.clone()))
        .nest("/api", catalog_routes(state))
        .fallback(route_not_found)
        .layer(middleware::map_response(json_method_not_allowed))
        .layer(DefaultBodyLimit::max(max_body_bytes))
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
}
