use super::error::AudioGenerationError;
use once_cell::sync::Lazy;
use regex::Regex;

static INNER_TEXT: Lazy<Regex> =
    Lazy::new(|| Regex::new(r">([^<]+)<").expect("inner text pattern is valid"));

/// Pull the human-readable label out of inline pronunciation markup.
///
/// Returns the first run of text between a `>` and the following `<`,
/// trimmed. Whitespace-only runs between tags are skipped.
///
/// # Errors
/// Returns [`AudioGenerationError::Extraction`] when the markup wraps no text.
pub fn extract_display_text(markup: &str) -> Result<&str, AudioGenerationError> {
    INNER_TEXT
        .captures_iter(markup)
        .filter_map(|caps| caps.get(1))
        .map(|m| m.as_str().trim())
        .find(|text| !text.is_empty())
        .ok_or_else(|| {
            AudioGenerationError::Extraction(format!("no text found in markup {markup:?}"))
        })
}
