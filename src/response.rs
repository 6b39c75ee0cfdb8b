//! Response helpers. Bodies are bare JSON documents, no envelope.

use axum::{http::StatusCode, Json};
use serde::Serialize;

/// Body of successful deletes.
#[derive(Clone, Copy, Debug, Serialize)]
pub struct Deleted {
    pub success: bool,
}

pub fn ok<T: Serialize>(data: T) -> (StatusCode, Json<T>) {
    (StatusCode::OK, Json(data))
}

pub fn created<T: Serialize>(data: T) -> (StatusCode, Json<T>) {
    (StatusCode::CREATED, Json(data))
}

pub fn deleted() -> (StatusCode, Json<Deleted>) {
    (StatusCode::OK, Json(Deleted { success: true }))
}
