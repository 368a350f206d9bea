//! Azure Text-to-Speech REST synthesizer
//!
//! Synthesis is a single HTTP POST per request:
//!
//! - **URL**: `https://{region}.tts.speech.microsoft.com/cognitiveservices/v1`
//! - **Headers**:
//!   - `Ocp-Apim-Subscription-Key`: Azure subscription key
//!   - `Content-Type`: `application/ssml+xml`
//!   - `X-Microsoft-OutputFormat`: MP3 output format
//! - **Body**: SSML document selecting the requested voice
//!
//! The response body is the complete audio file, written verbatim to the
//! output path.

use async_trait::async_trait;
use std::path::Path;
use tracing::info;

use super::{SpeechSynthesizer, SynthesisError, SynthesisResult};

/// Header carrying the Azure subscription key.
const AZURE_SUBSCRIPTION_KEY_HEADER: &str = "Ocp-Apim-Subscription-Key";

/// Header selecting the synthesis output format.
const AZURE_OUTPUT_FORMAT_HEADER: &str = "X-Microsoft-OutputFormat";

/// MP3 format matching the `.mp3` artifacts the staging store hands out.
pub const AZURE_OUTPUT_FORMAT: &str = "audio-24khz-48kbitrate-mono-mp3";

/// User-Agent header value for Azure TTS requests.
const USER_AGENT: &str = "lectora-server";

/// Escapes XML special characters for SSML text content
fn escape_xml(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&apos;")
}

/// Derives the `xml:lang` attribute from a voice name like `es-ES-AlvaroNeural`
fn language_of(voice_name: &str) -> String {
    voice_name
        .splitn(3, '-')
        .take(2)
        .collect::<Vec<_>>()
        .join("-")
}

/// Builds the SSML body for a synthesis request
pub fn build_ssml(text: &str, voice_name: &str) -> String {
    let escaped_text = escape_xml(text);
    let language = language_of(voice_name);

    format!(
        r#"<speak version='1.0' xmlns='http://www.w3.org/2001/10/synthesis' xml:lang='{language}'>
    <voice name='{voice_name}'>
        {escaped_text}
    </voice>
</speak>"#,
    )
}

/// Synthesizer backed by the Azure Text-to-Speech REST API
#[derive(Debug, Clone)]
pub struct AzureSynthesizer {
    client: reqwest::Client,
    api_key: Option<String>,
    region: String,
}

impl AzureSynthesizer {
    pub fn new(api_key: Option<String>, region: String) -> Self {
        Self {
            client: reqwest::Client::new(),
            api_key,
            region,
        }
    }

    /// Builds the regional TTS endpoint URL
    fn tts_url(&self) -> String {
        format!(
            "https://{}.tts.speech.microsoft.com/cognitiveservices/v1",
            self.region
        )
    }
}

#[async_trait]
impl SpeechSynthesizer for AzureSynthesizer {
    async fn synthesize(&self, text: &str, voice_id: &str, output: &Path) -> SynthesisResult<()> {
        let api_key = self.api_key.as_deref().filter(|k| !k.is_empty()).ok_or_else(|| {
            SynthesisError::InvalidConfiguration(
                "Azure Speech key not configured (set AZURE_SPEECH_KEY)".to_string(),
            )
        })?;

        let ssml_body = build_ssml(text, voice_id);

        let response = self
            .client
            .post(self.tts_url())
            .header(AZURE_SUBSCRIPTION_KEY_HEADER, api_key)
            .header("Content-Type", "application/ssml+xml")
            .header(AZURE_OUTPUT_FORMAT_HEADER, AZURE_OUTPUT_FORMAT)
            .header("User-Agent", USER_AGENT)
            .body(ssml_body)
            .send()
            .await
            .map_err(|e| SynthesisError::NetworkError(e.to_string()))?;

        if !response.status().is_success() {
            let status = response.status();
            let detail = response.text().await.unwrap_or_default();
            return Err(SynthesisError::AudioGenerationFailed(format!(
                "Azure TTS returned {status}: {detail}"
            )));
        }

        let audio = response
            .bytes()
            .await
            .map_err(|e| SynthesisError::NetworkError(e.to_string()))?;

        tokio::fs::write(output, &audio)
            .await
            .map_err(|e| SynthesisError::InternalError(e.to_string()))?;

        info!(
            "TTS synthesis successful - {} bytes, voice: {}, output: {}",
            audio.len(),
            voice_id,
            output.display()
        );

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_build_ssml_contains_voice_and_text() {
        let ssml = build_ssml("Hola mundo", "es-ES-AlvaroNeural");
        assert!(ssml.contains("es-ES-AlvaroNeural"));
        assert!(ssml.contains("Hola mundo"));
        assert!(ssml.contains("xml:lang='es-ES'"));
    }

    #[test]
    fn test_build_ssml_escapes_xml() {
        let ssml = build_ssml("Tom & Jerry <3", "es-MX-DaliaNeural");
        assert!(ssml.contains("Tom &amp; Jerry &lt;3"));
        assert!(!ssml.contains("& Jerry <3"));
    }

    #[test]
    fn test_language_of_voice_name() {
        assert_eq!(language_of("es-AR-TomasNeural"), "es-AR");
        assert_eq!(language_of("en-US-JennyNeural"), "en-US");
    }

    #[test]
    fn test_tts_url_uses_region() {
        let synth = AzureSynthesizer::new(Some("key".to_string()), "westeurope".to_string());
        assert_eq!(
            synth.tts_url(),
            "https://westeurope.tts.speech.microsoft.com/cognitiveservices/v1"
        );
    }

    #[tokio::test]
    async fn test_synthesize_without_key_fails() {
        let dir = tempfile::tempdir().unwrap();
        let synth = AzureSynthesizer::new(None, "eastus".to_string());
        let result = synth
            .synthesize("Hola", "es-ES-AlvaroNeural", &dir.path().join("out.mp3"))
            .await;
        assert!(matches!(
            result,
            Err(SynthesisError::InvalidConfiguration(_))
        ));
    }
}
