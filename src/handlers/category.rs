use crate::error::AppError;
use crate::extractors::IdPath;
use crate::response::ok;
use crate::state::AppState;
use axum::{extract::State, response::IntoResponse};

pub async fn list(State(state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    let categories = state.categories.list().await?;
    Ok(ok(categories))
}

pub async fn read(
    State(state): State<AppState>,
    IdPath(id): IdPath,
) -> Result<impl IntoResponse, AppError> {
    let category = state.categories.get(id).await?;
    Ok(ok(category))
}
