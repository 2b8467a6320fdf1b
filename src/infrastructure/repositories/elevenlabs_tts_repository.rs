use super::tts_repository::{TtsRepository, TtsRepositoryError};
use crate::domain::voice::{VoiceConfig, VoiceSettings};
use async_trait::async_trait;
use reqwest::StatusCode;
use serde::Serialize;

pub const ELEVENLABS_BASE_URL: &str = "https://api.elevenlabs.io";

#[derive(Debug, Serialize)]
struct SpeechRequest<'a> {
    text: &'a str,
    model_id: &'a str,
    voice_settings: &'a VoiceSettings,
}

/// ElevenLabs implementation of TTS repository
pub struct ElevenLabsTtsRepository {
    api_key: String,
    base_url: String,
    http_client: reqwest::Client,
}

impl ElevenLabsTtsRepository {
    pub fn new(api_key: String, base_url: String) -> Self {
        Self {
            api_key,
            base_url,
            http_client: reqwest::Client::new(),
        }
    }

    fn endpoint(&self, voice_id: &str) -> String {
        format!(
            "{}/v1/text-to-speech/{}",
            self.base_url.trim_end_matches('/'),
            voice_id
        )
    }
}

#[async_trait]
impl TtsRepository for ElevenLabsTtsRepository {
    async fn synthesize(
        &self,
        text: &str,
        voice: &VoiceConfig,
    ) -> Result<Vec<u8>, TtsRepositoryError> {
        let start_time = std::time::Instant::now();

        tracing::debug!(
            voice_id = %voice.voice_id,
            model = %voice.model_id,
            stability = voice.settings.stability,
            similarity_boost = voice.settings.similarity_boost,
            text_length = text.len(),
            "Calling ElevenLabs text-to-speech"
        );

        let request = SpeechRequest {
            text,
            model_id: &voice.model_id,
            voice_settings: &voice.settings,
        };

        let response = self
            .http_client
            .post(self.endpoint(&voice.voice_id))
            .header("xi-api-key", self.api_key.as_str())
            .header("Accept", "audio/mpeg")
            .json(&request)
            .send()
            .await
            .map_err(|e| {
                tracing::error!(error = %e, voice_id = %voice.voice_id, "ElevenLabs request failed");
                TtsRepositoryError::Transport(e.to_string())
            })?;

        let status = response.status();
        if status != StatusCode::OK {
            let body = response
                .text()
                .await
                .unwrap_or_else(|_| "Unknown error".to_string());
            tracing::error!(
                status = status.as_u16(),
                body = %body,
                voice_id = %voice.voice_id,
                "ElevenLabs rejected synthesis request"
            );
            return Err(TtsRepositoryError::Status {
                status: status.as_u16(),
                body,
            });
        }

        let audio_bytes = response
            .bytes()
            .await
            .map_err(|e| TtsRepositoryError::Transport(format!("Failed to read audio: {}", e)))?
            .to_vec();

        tracing::debug!(
            provider = "elevenlabs",
            latency_ms = start_time.elapsed().as_millis() as u64,
            audio_size_bytes = audio_bytes.len(),
            "ElevenLabs audio received"
        );

        Ok(audio_bytes)
    }
}
