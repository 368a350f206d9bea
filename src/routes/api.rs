use axum::{
    extract::DefaultBodyLimit,
    routing::{get, post},
    Router,
};
use tower_http::trace::TraceLayer;

use crate::handlers::{convert, files, speak, voices};
use crate::state::AppState;
use std::sync::Arc;

/// Upload cap for /convert; axum's default 2 MB limit is far too small for
/// ordinary PDFs.
const MAX_UPLOAD_BYTES: usize = 100 * 1024 * 1024;

pub fn create_api_router() -> Router<Arc<AppState>> {
    Router::new()
        .route(
            "/convert",
            post(convert::convert_handler).layer(DefaultBodyLimit::max(MAX_UPLOAD_BYTES)),
        )
        .route("/speak", post(speak::speak_handler))
        .route("/voices", get(voices::list_voices))
        .route("/files/{filename}", get(files::serve_upload))
        .route("/download/{filename}", get(files::download_file))
        .layer(TraceLayer::new_for_http())
}
