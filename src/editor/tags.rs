use super::commands::Key;

pub const TAGS_HINT: &str = "Add at least one tag to categorize your blog";

/// Ordered, duplicate-free list of labels plus the text being typed.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TagInput {
    tags: Vec<String>,
    current_tag: String,
}

impl TagInput {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_tags(tags: Vec<String>) -> Self {
        let mut input = Self::new();
        for tag in tags {
            input.add_tag_candidate(&tag);
        }
        input
    }

    pub fn tags(&self) -> &[String] {
        &self.tags
    }

    pub fn is_empty(&self) -> bool {
        self.tags.is_empty()
    }

    pub fn current_tag(&self) -> &str {
        &self.current_tag
    }

    pub fn set_current_tag(&mut self, text: &str) {
        self.current_tag = text.to_string();
    }

    /// Commits the pending input. Returns whether a tag was added.
    pub fn add_tag(&mut self) -> bool {
        let candidate = self.current_tag.to_string();
        self.add_tag_candidate(&candidate)
    }

    pub fn add_tag_candidate(&mut self, candidate: &str) -> bool {
        let tag = candidate.trim();
        if tag.is_empty() || self.tags.iter().any(|t| t == tag) {
            return false;
        }

        self.tags.push(tag.to_string());
        self.current_tag.clear();
        true
    }

    pub fn on_key(&mut self, key: Key) -> bool {
        match key {
            Key::Enter => self.add_tag(),
            _ => false,
        }
    }

    pub fn remove_tag(&mut self, tag: &str) {
        if let Some(index) = self.tags.iter().position(|t| t == tag) {
            self.tags.remove(index);
        }
    }

    pub fn hint(&self, has_error: bool) -> Option<&'static str> {
        match self.tags.is_empty() && !has_error {
            true => Some(TAGS_HINT),
            false => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn trims_and_clears_pending_input() {
        let mut input = TagInput::new();
        input.set_current_tag("  coastal  ");

        assert!(input.add_tag());
        assert_eq!(input.tags(), ["coastal"]);
        assert_eq!(input.current_tag(), "");
    }

    #[test]
    fn blank_and_duplicate_are_no_ops() {
        let mut input = TagInput::new();
        input.set_current_tag("   ");
        assert!(!input.add_tag());
        assert_eq!(input.current_tag(), "   ");

        input.set_current_tag("rent");
        assert!(input.add_tag());
        input.set_current_tag(" rent");
        assert!(!input.add_tag());
        assert_eq!(input.current_tag(), " rent");

        assert_eq!(input.tags(), ["rent"]);
    }

    #[test]
    fn deduplication_is_case_sensitive() {
        let mut input = TagInput::new();
        assert!(input.add_tag_candidate("Rent"));
        assert!(input.add_tag_candidate("rent"));

        assert_eq!(input.tags(), ["Rent", "rent"]);
    }

    #[test]
    fn never_holds_blank_or_duplicate_entries() {
        let candidates = ["a", " a", "", "b ", "\t", "A", "b", "  ", "c", "a "];
        let mut input = TagInput::new();
        for candidate in candidates {
            input.set_current_tag(candidate);
            input.on_key(Key::Enter);
        }

        let tags = input.tags();
        assert!(tags.iter().all(|t| !t.trim().is_empty()));
        for (i, tag) in tags.iter().enumerate() {
            assert!(!tags[i + 1..].contains(tag));
        }
        assert_eq!(tags, ["a", "b", "A", "c"]);
    }

    #[test]
    fn remove_tag_drops_matching_entry() {
        let mut input = TagInput::with_tags(vec!["a".into(), "b".into(), "c".into()]);
        input.remove_tag("b");
        input.remove_tag("missing");

        assert_eq!(input.tags(), ["a", "c"]);
    }

    #[test]
    fn hint_only_when_empty_without_error() {
        let mut input = TagInput::new();
        assert_eq!(input.hint(false), Some(TAGS_HINT));
        assert_eq!(input.hint(true), None);

        input.add_tag_candidate("a");
        assert_eq!(input.hint(false), None);
    }
}
