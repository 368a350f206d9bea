//! Static voice catalog
//!
//! The catalog is a fixed set of Spanish neural voices understood by the
//! synthesis collaborator. It never changes at runtime and is safe to share
//! across requests.

use serde::{Deserialize, Serialize};

/// Voice used when a request does not specify one
pub const DEFAULT_VOICE: &str = "es-ES-AlvaroNeural";

/// A voice understood by the synthesis collaborator
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Voice {
    /// Voice ID passed to the synthesis collaborator
    pub id: String,
    /// Display name of the voice
    pub name: String,
}

impl Voice {
    fn new(id: &str, name: &str) -> Self {
        Self {
            id: id.to_string(),
            name: name.to_string(),
        }
    }
}

/// Returns the catalog of available voices
pub fn available_voices() -> Vec<Voice> {
    vec![
        Voice::new("es-ES-AlvaroNeural", "Álvaro (España) - Hombre"),
        Voice::new("es-ES-ElviraNeural", "Elvira (España) - Mujer"),
        Voice::new("es-MX-DaliaNeural", "Dalia (México) - Mujer"),
        Voice::new("es-MX-JorgeNeural", "Jorge (México) - Hombre"),
        Voice::new("es-AR-ElenaNeural", "Elena (Argentina) - Mujer"),
        Voice::new("es-AR-TomasNeural", "Tomás (Argentina) - Hombre"),
        Voice::new("es-CO-GonzaloNeural", "Gonzalo (Colombia) - Hombre"),
        Voice::new("es-CO-SalomeNeural", "Salomé (Colombia) - Mujer"),
    ]
}
