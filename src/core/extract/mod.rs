//! PDF text extraction collaborator
//!
//! The orchestrator only depends on the [`TextExtractor`] trait: given a path
//! to a staged document, produce plain text or fail. The production
//! implementation parses the document with `lopdf` on a blocking task.

use async_trait::async_trait;
use std::path::{Path, PathBuf};

/// Extraction-specific error types
#[derive(Debug, Clone, thiserror::Error)]
pub enum ExtractError {
    #[error("Failed to read document: {0}")]
    DocumentUnreadable(String),

    #[error("Internal error: {0}")]
    InternalError(String),
}

/// Result type for extraction operations
pub type ExtractResult<T> = Result<T, ExtractError>;

/// Text extraction collaborator contract
#[async_trait]
pub trait TextExtractor: Send + Sync {
    /// Extract plain text from the document at `path`
    async fn extract(&self, path: &Path) -> ExtractResult<String>;
}

/// PDF extractor backed by `lopdf`
#[derive(Debug, Default, Clone)]
pub struct PdfExtractor;

impl PdfExtractor {
    pub fn new() -> Self {
        Self
    }
}

fn extract_text_blocking(path: &Path) -> ExtractResult<String> {
    let doc = lopdf::Document::load(path)
        .map_err(|e| ExtractError::DocumentUnreadable(e.to_string()))?;

    let mut text = String::new();
    let pages = doc.get_pages();
    for page_num in 1..=pages.len() {
        // Pages without extractable text (e.g. scanned images) are skipped
        if let Ok(page_text) = doc.extract_text(&[page_num as u32]) {
            text.push_str(&page_text);
            text.push('\n');
        }
    }
    Ok(text)
}

#[async_trait]
impl TextExtractor for PdfExtractor {
    async fn extract(&self, path: &Path) -> ExtractResult<String> {
        // lopdf parsing is synchronous, so run it off the async runtime
        let path: PathBuf = path.to_path_buf();
        tokio::task::spawn_blocking(move || extract_text_blocking(&path))
            .await
            .map_err(|e| ExtractError::InternalError(e.to_string()))?
    }
}
