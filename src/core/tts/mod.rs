//! Speech synthesis collaborator
//!
//! The orchestrator depends on the [`SpeechSynthesizer`] trait: given text, a
//! voice id and an output path, write an audio file or fail. The production
//! implementation talks to the Azure Text-to-Speech REST API.

pub mod azure;

pub use azure::{AzureSynthesizer, AZURE_OUTPUT_FORMAT};

use async_trait::async_trait;
use std::path::Path;

/// Synthesis-specific error types
#[derive(Debug, Clone, thiserror::Error)]
pub enum SynthesisError {
    #[error("Invalid configuration: {0}")]
    InvalidConfiguration(String),

    #[error("Network error: {0}")]
    NetworkError(String),

    #[error("Audio generation failed: {0}")]
    AudioGenerationFailed(String),

    #[error("Internal error: {0}")]
    InternalError(String),
}

/// Result type for synthesis operations
pub type SynthesisResult<T> = Result<T, SynthesisError>;

/// Speech synthesis collaborator contract
///
/// Each call is attempted exactly once; there are no retries and no timeout
/// imposed by this layer.
#[async_trait]
pub trait SpeechSynthesizer: Send + Sync {
    /// Synthesize `text` with the given voice and write the audio to `output`
    async fn synthesize(&self, text: &str, voice_id: &str, output: &Path) -> SynthesisResult<()>;
}
