pub mod elevenlabs_tts_repository;
pub mod tts_repository;

pub use elevenlabs_tts_repository::{ElevenLabsTtsRepository, ELEVENLABS_BASE_URL};
pub use tts_repository::{TtsRepository, TtsRepositoryError};
