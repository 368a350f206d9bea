pub mod extract;
pub mod tts;
pub mod voices;

pub use extract::{ExtractError, PdfExtractor, TextExtractor};
pub use tts::{AzureSynthesizer, SpeechSynthesizer, SynthesisError};
pub use voices::{available_voices, Voice, DEFAULT_VOICE};
