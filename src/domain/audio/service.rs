use super::error::AudioGenerationError;
use super::model::{Entry, GeneratedAudio, GenerationReport};
use super::sanitizer::sanitize_label;
use crate::domain::voice::VoiceConfig;
use crate::infrastructure::repositories::TtsRepository;
use async_trait::async_trait;
use std::sync::Arc;

const AUDIO_EXTENSION: &str = "mp3";

pub struct AudioGenerationService {
    tts_repo: Arc<dyn TtsRepository>,
    voice: VoiceConfig,
}

impl AudioGenerationService {
    pub fn new(tts_repo: Arc<dyn TtsRepository>, voice: VoiceConfig) -> Self {
        Self { tts_repo, voice }
    }
}

#[async_trait]
pub trait AudioGenerationServiceApi: Send + Sync {
    /// Synthesize every entry, in order, into `<output_dir>/<stem>.mp3`
    ///
    /// This operation:
    /// - Creates the output directory if it is missing
    /// - Names each file after the sanitized display label, overwriting what is there
    /// - Stops at the first failure; nothing is written for that entry or any later one
    async fn generate(&self, entries: &[Entry]) -> Result<GenerationReport, AudioGenerationError>;
}

#[async_trait]
impl AudioGenerationServiceApi for AudioGenerationService {
    async fn generate(&self, entries: &[Entry]) -> Result<GenerationReport, AudioGenerationError> {
        let output_dir = &self.voice.output_dir;
        tokio::fs::create_dir_all(output_dir).await?;

        tracing::info!(
            output_dir = %output_dir.display(),
            voice_id = %self.voice.voice_id,
            model = %self.voice.model_id,
            entry_count = entries.len(),
            "Starting audio generation"
        );

        let mut report = GenerationReport::default();

        for (index, entry) in entries.iter().enumerate() {
            let file = self.generate_one(index, entry).await?;
            report.files.push(file);
        }

        tracing::info!(
            file_count = report.files.len(),
            total_bytes = report.total_bytes(),
            "Audio generation completed"
        );

        Ok(report)
    }
}

impl AudioGenerationService {
    async fn generate_one(
        &self,
        index: usize,
        entry: &Entry,
    ) -> Result<GeneratedAudio, AudioGenerationError> {
        let label = entry.display_label().map_err(|e| {
            tracing::error!(index, error = %e, "Could not derive display label");
            e
        })?;
        let stem = sanitize_label(label);
        let path = self
            .voice
            .output_dir
            .join(format!("{}.{}", stem, AUDIO_EXTENSION));

        tracing::info!(
            index,
            label,
            spoken_text = entry.spoken_text(),
            "Generating audio"
        );

        let audio_data = self
            .tts_repo
            .synthesize(entry.spoken_text(), &self.voice)
            .await
            .map_err(|e| {
                tracing::error!(index, label, error = %e, "Synthesis failed, aborting run");
                AudioGenerationError::from(e)
            })?;

        tokio::fs::write(&path, &audio_data).await?;

        tracing::info!(
            path = %path.display(),
            size_bytes = audio_data.len(),
            "Audio saved"
        );

        Ok(GeneratedAudio {
            label: label.to_string(),
            stem,
            path,
            size_bytes: audio_data.len(),
        })
    }
}
