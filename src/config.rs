//! Configuration module for the lectora server
//!
//! Configuration is loaded from environment variables, with sensible defaults
//! for local development. A `.env` file is honored if present.

use std::env;
use std::path::PathBuf;

/// Server configuration
///
/// Contains everything needed to run the server:
/// - Server settings (host, port)
/// - Staging directories for uploaded PDFs and synthesized audio
/// - Azure Speech credentials for the synthesis collaborator
/// - The default voice used when a request does not pick one
#[derive(Debug, Clone)]
pub struct ServerConfig {
    // Server settings
    pub host: String,
    pub port: u16,

    // Staging directories
    pub upload_dir: PathBuf,
    pub output_dir: PathBuf,

    // Azure Speech settings
    pub azure_speech_key: Option<String>,
    pub azure_speech_region: String,

    // Voice used when a request does not specify one
    pub default_voice: String,
}

impl ServerConfig {
    /// Load configuration from environment variables
    ///
    /// Reads configuration from environment variables, with sensible defaults.
    /// Also loads from .env file if present using dotenvy.
    ///
    /// # Errors
    /// Returns an error if a variable is present but malformed (e.g. a
    /// non-numeric `PORT`).
    pub fn from_env() -> Result<Self, Box<dyn std::error::Error>> {
        // Load .env file if it exists
        let _ = dotenvy::dotenv();

        // Server configuration
        let host = env::var("HOST").unwrap_or_else(|_| "0.0.0.0".to_string());
        let port = env::var("PORT")
            .unwrap_or_else(|_| "5001".to_string())
            .parse::<u16>()
            .map_err(|e| format!("Invalid port number: {e}"))?;

        // Staging directories
        let upload_dir = env::var("UPLOAD_DIR")
            .map(PathBuf::from)
            .unwrap_or_else(|_| PathBuf::from("uploads"));
        let output_dir = env::var("OUTPUT_DIR")
            .map(PathBuf::from)
            .unwrap_or_else(|_| PathBuf::from("outputs"));

        // Azure Speech configuration
        let azure_speech_key = env::var("AZURE_SPEECH_KEY").ok();
        let azure_speech_region =
            env::var("AZURE_SPEECH_REGION").unwrap_or_else(|_| "eastus".to_string());

        let default_voice = env::var("DEFAULT_VOICE")
            .ok()
            .filter(|v| !v.trim().is_empty())
            .unwrap_or_else(|| crate::core::voices::DEFAULT_VOICE.to_string());

        Ok(ServerConfig {
            host,
            port,
            upload_dir,
            output_dir,
            azure_speech_key,
            azure_speech_region,
            default_voice,
        })
    }

    /// Returns the socket address string the server should bind to
    pub fn address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_config() -> ServerConfig {
        ServerConfig {
            host: "127.0.0.1".to_string(),
            port: 5001,
            upload_dir: PathBuf::from("uploads"),
            output_dir: PathBuf::from("outputs"),
            azure_speech_key: None,
            azure_speech_region: "eastus".to_string(),
            default_voice: crate::core::voices::DEFAULT_VOICE.to_string(),
        }
    }

    #[test]
    fn test_address_formatting() {
        let config = test_config();
        assert_eq!(config.address(), "127.0.0.1:5001");
    }

    #[test]
    fn test_default_voice_matches_catalog() {
        let config = test_config();
        assert!(crate::core::voices::available_voices()
            .iter()
            .any(|v| v.id == config.default_voice));
    }
}
