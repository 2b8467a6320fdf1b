/// Default cap on the length of a generated file stem
pub const MAX_STEM_LENGTH: usize = 80;

/// Turn a display label into a lowercase filename stem (no extension).
///
/// Lowercases, folds accented vowels, drops anything outside `[a-z0-9_ -]`,
/// trims, turns spaces into underscores and caps the length at
/// [`MAX_STEM_LENGTH`]. Never fails, and applying it twice changes nothing.
pub fn sanitize_label(label: &str) -> String {
    sanitize_label_with_max(label, MAX_STEM_LENGTH)
}

/// Same as [`sanitize_label`] with an explicit length cap
pub fn sanitize_label_with_max(label: &str, max_length: usize) -> String {
    let folded: String = label
        .to_lowercase()
        .chars()
        .map(fold_accent)
        .filter(|c| is_allowed(*c))
        .collect();

    folded
        .trim_matches(' ')
        .replace(' ', "_")
        .chars()
        .take(max_length)
        .collect()
}

fn fold_accent(c: char) -> char {
    match c {
        'à' | 'á' | 'â' | 'ã' | 'ä' | 'å' => 'a',
        'è' | 'é' | 'ê' | 'ë' => 'e',
        'ì' | 'í' | 'î' | 'ï' => 'i',
        'ò' | 'ó' | 'ô' | 'õ' | 'ö' => 'o',
        'ù' | 'ú' | 'û' | 'ü' => 'u',
        other => other,
    }
}

fn is_allowed(c: char) -> bool {
    matches!(c, 'a'..='z' | '0'..='9' | '_' | ' ' | '-')
}
