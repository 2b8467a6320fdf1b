pub mod error;
pub mod markup;
pub mod model;
pub mod sanitizer;
pub mod service;

pub use error::AudioGenerationError;
pub use markup::extract_display_text;
pub use model::{Entry, GeneratedAudio, GenerationReport};
pub use sanitizer::{sanitize_label, sanitize_label_with_max, MAX_STEM_LENGTH};
pub use service::{AudioGenerationService, AudioGenerationServiceApi};
