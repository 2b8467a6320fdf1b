use serde::{Deserialize, Serialize};
use std::path::PathBuf;

pub const DEFAULT_MODEL_ID: &str = "eleven_multilingual_v2";
pub const DEFAULT_STABILITY: f64 = 0.6;
pub const DEFAULT_SIMILARITY_BOOST: f64 = 0.8;

/// Voice-shaping knobs sent with every synthesis request. Both live in [0, 1].
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct VoiceSettings {
    pub stability: f64,
    pub similarity_boost: f64,
}

impl Default for VoiceSettings {
    fn default() -> Self {
        Self {
            stability: DEFAULT_STABILITY,
            similarity_boost: DEFAULT_SIMILARITY_BOOST,
        }
    }
}

/// Everything a run needs to know about where audio comes from and where it goes.
#[derive(Debug, Clone, PartialEq)]
pub struct VoiceConfig {
    pub voice_id: String,
    pub model_id: String,
    pub output_dir: PathBuf,
    pub settings: VoiceSettings,
}

impl VoiceConfig {
    pub fn new(voice_id: impl Into<String>, output_dir: impl Into<PathBuf>) -> Self {
        Self {
            voice_id: voice_id.into(),
            model_id: DEFAULT_MODEL_ID.to_string(),
            output_dir: output_dir.into(),
            settings: VoiceSettings::default(),
        }
    }

    pub fn with_model(mut self, model_id: impl Into<String>) -> Self {
        self.model_id = model_id.into();
        self
    }

    pub fn with_settings(mut self, settings: VoiceSettings) -> Self {
        self.settings = settings;
        self
    }
}
