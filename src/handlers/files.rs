use axum::{
    extract::{Path, State},
    http::{header, HeaderMap, HeaderValue, StatusCode},
    response::{IntoResponse, Response},
};
use std::sync::Arc;
use tracing::info;

use crate::errors::{AppError, AppResult};
use crate::state::AppState;

/// Content type for a served file, guessed from its extension
fn content_type_for(file_name: &str) -> &'static str {
    match file_name.rsplit('.').next() {
        Some("mp3") => "audio/mpeg",
        Some("wav") => "audio/wav",
        Some("ogg") => "audio/ogg",
        Some("pdf") => "application/pdf",
        _ => "application/octet-stream",
    }
}

/// Handler for GET /files/{filename}
///
/// Serves a staged *input* file verbatim. There is deliberately no existence
/// check here: a missing file surfaces as the read error, matching how this
/// endpoint has always behaved. Unsafe names are still rejected before the
/// path join.
pub async fn serve_upload(
    State(state): State<Arc<AppState>>,
    Path(filename): Path<String>,
) -> AppResult<Response> {
    let path = state
        .staging
        .input_path(&filename)
        .ok_or_else(|| AppError::BadRequest("Invalid file name".to_string()))?;

    let data = tokio::fs::read(&path).await?;

    let mut headers = HeaderMap::new();
    headers.insert(
        header::CONTENT_TYPE,
        HeaderValue::from_static(content_type_for(&filename)),
    );

    Ok((StatusCode::OK, headers, data).into_response())
}

/// Handler for GET /download/{filename}
///
/// Resolves the name against the output directory and returns the artifact as
/// a binary attachment, or 404 if it is absent.
pub async fn download_file(
    State(state): State<Arc<AppState>>,
    Path(filename): Path<String>,
) -> AppResult<Response> {
    let path = state
        .staging
        .resolve_output_slot(&filename)
        .await
        .ok_or_else(|| AppError::NotFound("File not found".to_string()))?;

    let data = tokio::fs::read(&path).await?;

    info!(
        "Download successful - file: {}, size: {} bytes",
        filename,
        data.len()
    );

    let mut headers = HeaderMap::new();
    headers.insert(
        header::CONTENT_TYPE,
        HeaderValue::from_static(content_type_for(&filename)),
    );
    if let Ok(len) = HeaderValue::from_str(&data.len().to_string()) {
        headers.insert(header::CONTENT_LENGTH, len);
    }
    if let Ok(disposition) =
        HeaderValue::from_str(&format!("attachment; filename=\"{filename}\""))
    {
        headers.insert(header::CONTENT_DISPOSITION, disposition);
    }

    Ok((StatusCode::OK, headers, data).into_response())
}
