use axum::{extract::State, response::Json};
use serde::Deserialize;
use serde_json::{json, Value};
use std::sync::Arc;
use tracing::info;

use crate::errors::{AppError, AppResult};
use crate::state::AppState;

/// Request body for the speak endpoint
#[derive(Debug, Deserialize)]
pub struct SpeakRequest {
    /// The text to synthesize
    #[serde(default)]
    pub text: String,
    /// Voice id; the configured default is used if absent or empty
    #[serde(default)]
    pub voice: Option<String>,
}

/// Handler for POST /speak
///
/// Synthesizes a short snippet directly from the request body, with no input
/// staging step, and answers with a download URL for the snippet artifact.
pub async fn speak_handler(
    State(state): State<Arc<AppState>>,
    Json(request): Json<SpeakRequest>,
) -> AppResult<Json<Value>> {
    if request.text.trim().is_empty() {
        return Err(AppError::BadRequest("No text provided".to_string()));
    }

    let voice = request
        .voice
        .as_deref()
        .filter(|v| !v.trim().is_empty())
        .unwrap_or(&state.config.default_voice)
        .to_string();

    info!(
        "Speak request received - voice: {}, text length: {}",
        voice,
        request.text.len()
    );

    let mp3_path = state.staging.allocate_snippet_slot("mp3");

    state
        .synthesizer
        .synthesize(&request.text, &voice, &mp3_path)
        .await?;

    let output_name = mp3_path
        .file_name()
        .and_then(|s| s.to_str())
        .ok_or_else(|| AppError::InternalServerError("Invalid output path".to_string()))?
        .to_string();

    Ok(Json(json!({
        "download_url": format!("/api/download/{output_name}")
    })))
}
