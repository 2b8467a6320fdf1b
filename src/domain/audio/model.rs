use super::error::AudioGenerationError;
use super::markup::extract_display_text;
use std::path::PathBuf;

/// One phrase to synthesize.
///
/// Plain entries carry their display label next to the text sent to the API.
/// Markup entries send the markup as-is and take their label from its inner text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Entry {
    Plain { label: String, spoken_text: String },
    Markup { markup: String },
}

impl Entry {
    pub fn plain(label: impl Into<String>, spoken_text: impl Into<String>) -> Self {
        Entry::Plain {
            label: label.into(),
            spoken_text: spoken_text.into(),
        }
    }

    /// Entry whose label is also what gets spoken
    pub fn verbatim(text: impl Into<String>) -> Self {
        let text = text.into();
        Entry::Plain {
            label: text.clone(),
            spoken_text: text,
        }
    }

    pub fn markup(markup: impl Into<String>) -> Self {
        Entry::Markup {
            markup: markup.into(),
        }
    }

    /// Text handed to the synthesizer
    pub fn spoken_text(&self) -> &str {
        match self {
            Entry::Plain { spoken_text, .. } => spoken_text,
            Entry::Markup { markup } => markup,
        }
    }

    /// Label the output file is named after
    pub fn display_label(&self) -> Result<&str, AudioGenerationError> {
        match self {
            Entry::Plain { label, .. } => Ok(label),
            Entry::Markup { markup } => extract_display_text(markup),
        }
    }
}

/// A file written by a generation run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratedAudio {
    pub label: String,
    pub stem: String,
    pub path: PathBuf,
    pub size_bytes: usize,
}

#[derive(Debug, Clone, Default)]
pub struct GenerationReport {
    pub files: Vec<GeneratedAudio>,
}

impl GenerationReport {
    pub fn total_bytes(&self) -> usize {
        self.files.iter().map(|f| f.size_bytes).sum()
    }
}
