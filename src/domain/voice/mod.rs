pub mod model;
pub mod preset;

pub use model::{VoiceConfig, VoiceSettings};
pub use preset::{Gender, Language, VoicePreset, DEFAULT_PRESET_KEY, VOICE_PRESETS};
