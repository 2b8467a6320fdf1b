use crate::infrastructure::repositories::TtsRepositoryError;

#[derive(Debug, thiserror::Error)]
pub enum AudioGenerationError {
    #[error("extraction error: {0}")]
    Extraction(String),
    #[error("ElevenLabs API error ({status}): {body}")]
    Synthesis { status: u16, body: String },
    #[error("transport error: {0}")]
    Transport(String),
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

impl From<TtsRepositoryError> for AudioGenerationError {
    fn from(err: TtsRepositoryError) -> Self {
        match err {
            TtsRepositoryError::Status { status, body } => {
                AudioGenerationError::Synthesis { status, body }
            }
            TtsRepositoryError::Transport(msg) => AudioGenerationError::Transport(msg),
        }
    }
}
