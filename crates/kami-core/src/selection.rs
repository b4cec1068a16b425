use kami_types::LanguageTag;

/// Ordered set of target languages, toggle-mutated from the UI.
///
/// Insertion order is the display order of results, so it is preserved
/// across removals. Never holds duplicates.
#[derive(Debug, Clone, Default)]
pub struct TargetSelection {
    tags: Vec<LanguageTag>,
}

impl TargetSelection {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_tags<I, S>(tags: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<LanguageTag>,
    {
        let mut selection = Self::new();
        for tag in tags {
            let tag = tag.into();
            if !selection.contains(&tag) {
                selection.tags.push(tag);
            }
        }
        selection
    }

    /// Remove the tag if present, append it otherwise.
    pub fn toggle(&mut self, tag: &str) {
        if let Some(index) = self.tags.iter().position(|t| t == tag) {
            self.tags.remove(index);
        } else {
            self.tags.push(tag.to_string());
        }
    }

    pub fn contains(&self, tag: &str) -> bool {
        self.tags.iter().any(|t| t == tag)
    }

    pub fn is_empty(&self) -> bool {
        self.tags.is_empty()
    }

    pub fn len(&self) -> usize {
        self.tags.len()
    }

    /// Owned copy of the tags in selection order, captured at submission
    /// time so later toggles cannot affect an in-flight result set.
    pub fn snapshot(&self) -> Vec<LanguageTag> {
        self.tags.clone()
    }

    /// Only the explicit reset action clears the selection wholesale.
    pub fn clear(&mut self) {
        self.tags.clear();
    }
}
