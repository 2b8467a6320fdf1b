use crate::domain::voice::VoiceConfig;
use async_trait::async_trait;

#[derive(Debug, thiserror::Error)]
pub enum TtsRepositoryError {
    /// The provider answered with something other than success
    #[error("TTS provider returned status {status}: {body}")]
    Status { status: u16, body: String },
    /// The request never got a response
    #[error("TTS request failed: {0}")]
    Transport(String),
}

/// Repository for TTS synthesis operations.
/// Abstracts the underlying TTS provider so the generation pipeline can run
/// against ElevenLabs in production and a stub in tests.
///
/// Implementations make exactly one attempt per call: no retries, no
/// batching, no caching.
#[async_trait]
pub trait TtsRepository: Send + Sync {
    /// Synthesize text with the given voice
    ///
    /// Returns the raw audio bytes exactly as the provider sent them
    ///
    /// # Arguments
    /// * `text` - Text to speak, plain or wrapped in phonetic markup
    /// * `voice` - Voice, model and voice-shaping settings to use
    ///
    /// # Errors
    /// Returns error if the provider answers with a non-success status or is unreachable
    async fn synthesize(&self, text: &str, voice: &VoiceConfig)
        -> Result<Vec<u8>, TtsRepositoryError>;
}
