use unicode_normalization::UnicodeNormalization;

pub trait Preprocessor {
    // Trim and NFKC-fold before detection so composed/compatibility forms
    // match the detector's character classes
    fn process(&self, text: &str) -> String {
        let text = text.trim();

        if text.is_empty() {
            return String::new();
        }

        text.nfkc().collect()
    }
}

/// Default preprocessor for pasted menu text. Keeps line breaks: menu
/// entries are usually one dish per line.
pub struct MenuPreprocessor;
impl Preprocessor for MenuPreprocessor {}
