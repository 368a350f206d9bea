use axum::response::Json;

use crate::core::voices::{available_voices, Voice};

/// Handler for GET /voices - returns the static voice catalog
pub async fn list_voices() -> Json<Vec<Voice>> {
    Json(available_voices())
}
