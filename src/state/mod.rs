use std::io;
use std::sync::Arc;

use crate::config::ServerConfig;
use crate::core::extract::{PdfExtractor, TextExtractor};
use crate::core::tts::{AzureSynthesizer, SpeechSynthesizer};
use crate::staging::StagingStore;

/// Application state that can be shared across handlers
#[derive(Clone)]
pub struct AppState {
    pub config: ServerConfig,
    /// Staging store for uploaded PDFs and synthesized audio
    pub staging: StagingStore,
    /// Text extraction collaborator
    pub extractor: Arc<dyn TextExtractor>,
    /// Speech synthesis collaborator
    pub synthesizer: Arc<dyn SpeechSynthesizer>,
}

impl AppState {
    /// Builds the state with the production collaborators
    pub fn new(config: ServerConfig) -> io::Result<Arc<Self>> {
        let extractor = Arc::new(PdfExtractor::new());
        let synthesizer = Arc::new(AzureSynthesizer::new(
            config.azure_speech_key.clone(),
            config.azure_speech_region.clone(),
        ));
        Self::with_collaborators(config, extractor, synthesizer)
    }

    /// Builds the state with explicit collaborators (used by tests)
    pub fn with_collaborators(
        config: ServerConfig,
        extractor: Arc<dyn TextExtractor>,
        synthesizer: Arc<dyn SpeechSynthesizer>,
    ) -> io::Result<Arc<Self>> {
        let staging = StagingStore::new(config.upload_dir.clone(), config.output_dir.clone())?;
        Ok(Arc::new(Self {
            config,
            staging,
            extractor,
            synthesizer,
        }))
    }
}
