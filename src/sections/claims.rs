//! The claimed-span set shared by the section builders.

/// Phrases already used by earlier sections, stored lowercased.
#[derive(Debug, Clone, Default)]
pub struct ClaimedSpans {
    spans: Vec<String>,
}

impl ClaimedSpans {
    /// Record text used by a section.
    pub fn claim(&mut self, text: &str) {
        let text = text.trim().to_lowercase();
        if !text.is_empty() {
            self.spans.push(text);
        }
    }

    /// Whether `phrase` already appears inside a claimed span (case-insensitive).
    pub fn is_claimed(&self, phrase: &str) -> bool {
        let phrase = phrase.trim().to_lowercase();
        !phrase.is_empty() && self.spans.iter().any(|span| span.contains(&phrase))
    }
}
