//! Heuristic source-language detection.
//!
//! A best-effort guess, not a classifier: the service receives the tag but
//! may override it. Rules are checked in priority order on the trimmed,
//! lower-cased input.

/// Punctuation allowed by the plain-Latin rule alongside letters, digits
/// and whitespace.
const LATIN_PUNCTUATION: &[char] = &['.', ',', '!', '?', '\'', '"', '(', ')', '-'];

pub fn detect(text: &str) -> &'static str {
    let text = text.trim().to_lowercase();

    if text.is_empty() {
        return "auto";
    }

    if text.chars().all(is_plain_latin) {
        return "en";
    }

    if text.chars().any(is_cyrillic) {
        return "ru";
    }

    if text.chars().any(is_turkish_diacritic) {
        return "tr";
    }

    "auto"
}

fn is_plain_latin(c: char) -> bool {
    c.is_ascii_alphanumeric() || c.is_whitespace() || LATIN_PUNCTUATION.contains(&c)
}

/// Russian lower-case range plus the Kazakh/Kyrgyz extended letters.
/// Input is lower-cased before matching.
fn is_cyrillic(c: char) -> bool {
    matches!(c, 'а'..='я' | 'ё' | 'ә' | 'ғ' | 'і' | 'қ' | 'ң' | 'ө' | 'ұ' | 'ү' | 'һ')
}

fn is_turkish_diacritic(c: char) -> bool {
    matches!(c, 'ç' | 'ğ' | 'ı' | 'ö' | 'ş' | 'ü')
}
