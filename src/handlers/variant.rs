use crate::error::AppError;
use crate::extractors::{IdPath, JsonBody};
use crate::response::{deleted, ok};
use crate::service::RequestValidator;
use crate::state::AppState;
use axum::{extract::State, response::IntoResponse};

pub async fn read(
    State(state): State<AppState>,
    IdPath(id): IdPath,
) -> Result<impl IntoResponse, AppError> {
    let variant = state.variants.get(id).await?;
    Ok(ok(variant))
}

/// Validation runs before the existence check, so an invalid body on a missing id is a 400.
pub async fn update(
    State(state): State<AppState>,
    IdPath(id): IdPath,
    JsonBody(body): JsonBody,
) -> Result<impl IntoResponse, AppError> {
    let patch = RequestValidator::variant_update(&body)?;
    let variant = state.variants.update(id, patch).await?;
    Ok(ok(variant))
}

pub async fn delete(
    State(state): State<AppState>,
    IdPath(id): IdPath,
) -> Result<impl IntoResponse, AppError> {
    state.variants.delete(id).await?;
    Ok(deleted())
}
