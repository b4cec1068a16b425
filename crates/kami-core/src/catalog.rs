//! The fixed language catalog offered by the target picker.

pub struct Language {
    pub code: &'static str,
    pub name: &'static str,
}

pub const LANGUAGES: &[Language] = &[
    Language { code: "ru", name: "Russian" },
    Language { code: "kk", name: "Kazakh" },
    Language { code: "ky", name: "Kyrgyz" },
    Language { code: "az", name: "Azerbaijani" },
    Language { code: "uz", name: "Uzbek" },
    Language { code: "uk", name: "Ukrainian" },
    Language { code: "hi", name: "Hindi" },
    Language { code: "en", name: "English" },
    Language { code: "tr", name: "Turkish" },
    Language { code: "fr", name: "French" },
    Language { code: "de", name: "German" },
    Language { code: "es", name: "Spanish" },
    Language { code: "zh", name: "Chinese" },
    Language { code: "ja", name: "Japanese" },
];

/// Human-readable name for a tag, falling back to the tag itself for codes
/// outside the catalog (the core passes any tag through).
pub fn name_for(code: &str) -> &str {
    LANGUAGES
        .iter()
        .find(|l| l.code == code)
        .map(|l| l.name)
        .unwrap_or(code)
}

pub fn is_known(code: &str) -> bool {
    LANGUAGES.iter().any(|l| l.code == code)
}

#[cfg(test)]
mod tests {
    use super::{LANGUAGES, is_known, name_for};

    #[test]
    fn catalog_has_the_full_picker_list() {
        assert_eq!(LANGUAGES.len(), 14);
        assert!(is_known("kk"));
        assert!(is_known("tr"));
    }

    #[test]
    fn unknown_codes_fall_back_to_the_tag() {
        assert_eq!(name_for("tr"), "Turkish");
        assert_eq!(name_for("xx"), "xx");
    }
}
