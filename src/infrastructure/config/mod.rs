use crate::domain::voice::model::{DEFAULT_MODEL_ID, DEFAULT_SIMILARITY_BOOST, DEFAULT_STABILITY};
use crate::domain::voice::{VoiceConfig, VoicePreset, VoiceSettings, DEFAULT_PRESET_KEY};
use crate::infrastructure::repositories::ELEVENLABS_BASE_URL;
use std::env;
use std::path::PathBuf;

const DEFAULT_OUTPUT_ROOT: &str = "../src/assets/audio";

#[derive(Debug, Clone)]
pub struct Config {
    pub api_key: String,
    pub base_url: String,
    pub preset: VoicePreset,
    pub model_id: String,
    pub output_dir: PathBuf,
    pub voice_settings: VoiceSettings,
    pub log_format: LogFormat,
}

#[derive(Debug, Clone, PartialEq)]
pub enum LogFormat {
    Pretty,
    Json,
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("missing required environment variable {0}")]
    Missing(&'static str),
    #[error("unknown voice preset {0:?}")]
    UnknownPreset(String),
    #[error("{name} is not a number: {value:?}")]
    InvalidNumber { name: &'static str, value: String },
    #[error("{name} must be between 0 and 1, got {value}")]
    OutOfRange { name: &'static str, value: f64 },
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();
        Self::from_lookup(|name| env::var(name).ok())
    }

    /// Build the configuration from any variable source
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let api_key = lookup("ELEVENLABS_API_KEY")
            .filter(|key| !key.trim().is_empty())
            .ok_or(ConfigError::Missing("ELEVENLABS_API_KEY"))?;

        let preset_key = lookup("VOICE_PRESET").unwrap_or_else(|| DEFAULT_PRESET_KEY.to_string());
        let preset = VoicePreset::from_key(&preset_key)
            .ok_or(ConfigError::UnknownPreset(preset_key))?;

        let output_dir = match lookup("AUDIO_OUTPUT_DIR") {
            Some(dir) => PathBuf::from(dir),
            None => PathBuf::from(
                lookup("AUDIO_OUTPUT_ROOT").unwrap_or_else(|| DEFAULT_OUTPUT_ROOT.to_string()),
            )
            .join(preset.output_subdir()),
        };

        let voice_settings = VoiceSettings {
            stability: unit_interval(&lookup, "VOICE_STABILITY", DEFAULT_STABILITY)?,
            similarity_boost: unit_interval(
                &lookup,
                "VOICE_SIMILARITY_BOOST",
                DEFAULT_SIMILARITY_BOOST,
            )?,
        };

        let config = Config {
            api_key,
            base_url: lookup("ELEVENLABS_BASE_URL")
                .unwrap_or_else(|| ELEVENLABS_BASE_URL.to_string()),
            preset,
            model_id: lookup("ELEVENLABS_MODEL_ID")
                .unwrap_or_else(|| DEFAULT_MODEL_ID.to_string()),
            output_dir,
            voice_settings,
            log_format: lookup("LOG_FORMAT")
                .map(|s| match s.to_lowercase().as_str() {
                    "json" => LogFormat::Json,
                    _ => LogFormat::Pretty,
                })
                .unwrap_or(LogFormat::Pretty),
        };

        Ok(config)
    }

    /// Voice configuration handed to the generation pipeline
    pub fn voice_config(&self) -> VoiceConfig {
        VoiceConfig::new(self.preset.voice_id, self.output_dir.clone())
            .with_model(self.model_id.clone())
            .with_settings(self.voice_settings)
    }
}

fn unit_interval<F>(lookup: &F, name: &'static str, default: f64) -> Result<f64, ConfigError>
where
    F: Fn(&str) -> Option<String>,
{
    let Some(raw) = lookup(name) else {
        return Ok(default);
    };

    let value: f64 = raw.trim().parse().map_err(|_| ConfigError::InvalidNumber {
        name,
        value: raw.clone(),
    })?;

    if !(0.0..=1.0).contains(&value) {
        return Err(ConfigError::OutOfRange { name, value });
    }

    Ok(value)
}
