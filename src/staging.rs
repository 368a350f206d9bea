//! Filesystem staging store
//!
//! Two flat directories back the whole request lifecycle: an inbound
//! directory for uploaded PDFs and an outbound directory for synthesized
//! audio. Every staged file name starts from a freshly generated uuid token,
//! never from client input, so concurrent requests cannot collide and crafted
//! file names cannot escape the staging area.

use std::io;
use std::path::{Path, PathBuf};
use tracing::warn;
use uuid::Uuid;

/// Rejects file names that could escape the staging directories.
///
/// Client-controlled names reach filesystem lookups directly on the serving
/// endpoints, so the guard is applied before any path join.
fn is_safe_file_name(name: &str) -> bool {
    !name.is_empty() && !name.contains("..") && !name.contains('/') && !name.contains('\\')
}

/// Manages the inbound (upload) and outbound (output) staging directories
#[derive(Debug, Clone)]
pub struct StagingStore {
    upload_dir: PathBuf,
    output_dir: PathBuf,
}

impl StagingStore {
    /// Creates the store, creating both directories if absent
    pub fn new(upload_dir: PathBuf, output_dir: PathBuf) -> io::Result<Self> {
        std::fs::create_dir_all(&upload_dir)?;
        std::fs::create_dir_all(&output_dir)?;
        Ok(Self {
            upload_dir,
            output_dir,
        })
    }

    pub fn upload_dir(&self) -> &Path {
        &self.upload_dir
    }

    pub fn output_dir(&self) -> &Path {
        &self.output_dir
    }

    /// Allocates a fresh inbound path with a uuid stem and the given extension
    pub fn allocate_input_slot(&self, extension: &str) -> PathBuf {
        self.upload_dir
            .join(format!("{}.{extension}", Uuid::new_v4()))
    }

    /// Derives an outbound path with the given stem
    ///
    /// Document jobs pass the stem of their input slot so artifacts stay
    /// traceable to their source by name alone.
    pub fn allocate_output_slot(&self, stem: &str, extension: &str) -> PathBuf {
        self.output_dir.join(format!("{stem}.{extension}"))
    }

    /// Allocates a fresh outbound path for a snippet, with a `snippet_` prefix
    pub fn allocate_snippet_slot(&self, extension: &str) -> PathBuf {
        self.output_dir
            .join(format!("snippet_{}.{extension}", Uuid::new_v4()))
    }

    /// Best-effort delete of a staged input file
    ///
    /// Absence is not an error; a failure to delete an existing file is
    /// logged and swallowed so cleanup never fails the owning request.
    pub async fn remove_input_slot(&self, path: &Path) {
        match tokio::fs::remove_file(path).await {
            Ok(()) => {}
            Err(e) if e.kind() == io::ErrorKind::NotFound => {}
            Err(e) => {
                warn!("Failed to remove staged input {}: {}", path.display(), e);
            }
        }
    }

    /// Traversal-guarded join against the upload directory
    ///
    /// No existence check: the `/files` endpoint serves whatever the read
    /// finds, matching the historical behavior of that endpoint.
    pub fn input_path(&self, file_name: &str) -> Option<PathBuf> {
        if !is_safe_file_name(file_name) {
            return None;
        }
        Some(self.upload_dir.join(file_name))
    }

    /// Resolves a download name against the output directory
    ///
    /// Returns the path only if the name is safe and the file exists.
    pub async fn resolve_output_slot(&self, file_name: &str) -> Option<PathBuf> {
        if !is_safe_file_name(file_name) {
            return None;
        }
        let path = self.output_dir.join(file_name);
        match tokio::fs::try_exists(&path).await {
            Ok(true) => Some(path),
            _ => None,
        }
    }
}
