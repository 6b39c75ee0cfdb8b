//! Product handlers: list with filters, detail, create, partial update, soft delete.

use crate::error::AppError;
use crate::extractors::{IdPath, JsonBody};
use crate::models::ProductFilter;
use crate::response::{created, deleted, ok};
use crate::service::RequestValidator;
use crate::state::AppState;
use axum::{
    extract::{Query, State},
    response::IntoResponse,
};
use std::collections::HashMap;

fn non_blank<'a>(params: &'a HashMap<String, String>, key: &str) -> Option<&'a str> {
    params
        .get(key)
        .map(|v| v.trim())
        .filter(|v| !v.is_empty())
}

/// Blank query values count as absent, as browsers send `?search=&category_id=`.
fn list_filter(params: &HashMap<String, String>) -> Result<ProductFilter, AppError> {
    let search = non_blank(params, "search").map(str::to_string);
    let category_id = match non_blank(params, "category_id") {
        None => None,
        Some(raw) => Some(raw.parse::<i64>().map_err(|_| {
            AppError::BadRequest(format!("invalid category_id '{}'", raw))
        })?),
    };
    Ok(ProductFilter { search, category_id })
}

pub async fn list(
    State(state): State<AppState>,
    Query(params): Query<HashMap<String, String>>,
) -> Result<impl IntoResponse, AppError> {
    let filter = list_filter(&params)?;
    let products = state.products.list(&filter).await?;
    Ok(ok(products))
}

pub async fn read(
    State(state): State<AppState>,
    IdPath(id): IdPath,
) -> Result<impl IntoResponse, AppError> {
    let product = state.products.get(id).await?;
    Ok(ok(product))
}

pub async fn create(
    State(state): State<AppState>,
    JsonBody(body): JsonBody,
) -> Result<impl IntoResponse, AppError> {
    let cmd = RequestValidator::product_create(&body)?;
    let product = state.products.create(cmd).await?;
    Ok(created(product))
}

pub async fn update(
    State(state): State<AppState>,
    IdPath(id): IdPath,
    JsonBody(body): JsonBody,
) -> Result<impl IntoResponse, AppError> {
    let patch = RequestValidator::product_update(&body)?;
    let product = state.products.update(id, patch).await?;
    Ok(ok(product))
}

pub async fn delete(
    State(state): State<AppState>,
    IdPath(id): IdPath,
) -> Result<impl IntoResponse, AppError> {
    state.products.soft_delete(id).await?;
    Ok(deleted())
}
