use axum::{
    extract::{Multipart, State},
    response::Json,
};
use serde_json::{json, Value};
use std::path::Path;
use std::sync::Arc;
use tracing::info;

use crate::errors::{AppError, AppResult};
use crate::state::AppState;

/// Handler for POST /convert
///
/// Runs the full document pipeline: stage the uploaded PDF, extract its text,
/// synthesize audio with the default voice, and answer with a download URL.
/// The staged input is removed on every exit path so a failed request never
/// leaves an orphaned upload behind.
pub async fn convert_handler(
    State(state): State<Arc<AppState>>,
    mut multipart: Multipart,
) -> AppResult<Json<Value>> {
    let mut upload = None;
    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| AppError::BadRequest(e.to_string()))?
    {
        if field.name() == Some("file") {
            let file_name = field.file_name().unwrap_or_default().to_string();
            let data = field
                .bytes()
                .await
                .map_err(|e| AppError::BadRequest(e.to_string()))?;
            upload = Some((file_name, data));
            break;
        }
    }

    let (file_name, data) =
        upload.ok_or_else(|| AppError::BadRequest("No file part".to_string()))?;
    if file_name.is_empty() {
        return Err(AppError::BadRequest("No selected file".to_string()));
    }

    info!(
        "Convert request received - file: {}, {} bytes",
        file_name,
        data.len()
    );

    // Stage the upload under a fresh token, never the client-supplied name
    let pdf_path = state.staging.allocate_input_slot("pdf");
    tokio::fs::write(&pdf_path, &data).await?;

    let result = run_pipeline(&state, &pdf_path).await;

    // Cleanup the staged input whether the pipeline succeeded or not
    state.staging.remove_input_slot(&pdf_path).await;

    let output_name = result?;

    Ok(Json(json!({
        "message": "Conversion successful",
        "download_url": format!("/api/download/{output_name}")
    })))
}

/// Extract and synthesize, returning the output artifact's file name
async fn run_pipeline(state: &AppState, pdf_path: &Path) -> AppResult<String> {
    let text = state.extractor.extract(pdf_path).await?;
    if text.trim().is_empty() {
        return Err(AppError::BadRequest("No text found in PDF".to_string()));
    }

    // Stem-matched output slot keeps the artifact traceable to its source
    let stem = pdf_path
        .file_stem()
        .and_then(|s| s.to_str())
        .ok_or_else(|| AppError::InternalServerError("Invalid staged path".to_string()))?;
    let mp3_path = state.staging.allocate_output_slot(stem, "mp3");

    state
        .synthesizer
        .synthesize(&text, &state.config.default_voice, &mp3_path)
        .await?;

    let output_name = mp3_path
        .file_name()
        .and_then(|s| s.to_str())
        .ok_or_else(|| AppError::InternalServerError("Invalid output path".to_string()))?
        .to_string();

    Ok(output_name)
}
