// Known-word storage for compound segmentation

use hashbrown::HashSet;

/// Membership oracle consulted by the compound segmenter.
///
/// Implementations decide which letter sequences count as free-standing
/// words. The segmenter only ever asks exact membership questions, so
/// backends can range from an in-memory set to something fancier without
/// touching the segmentation logic.
pub trait KnownWords {
    /// Exact membership test for one word form.
    fn contains(&self, word: &str) -> bool;
}

/// In-memory word list backed by a hash set.
///
/// Lookups are exact: no case folding, no normalization. Callers that want
/// case-insensitive behavior lower-case their entries and queries up front.
#[derive(Debug, Clone, Default)]
pub struct WordSet {
    words: HashSet<String>,
}

impl WordSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a set from newline-separated entries.
    ///
    /// Trailing whitespace is stripped from each line and blank lines are
    /// skipped, so the empty string never becomes a member.
    pub fn from_lines(text: &str) -> Self {
        let mut words = HashSet::new();
        for line in text.lines() {
            let entry = line.trim_end();
            if !entry.is_empty() {
                words.insert(entry.to_string());
            }
        }
        Self { words }
    }

    pub fn insert(&mut self, word: &str) {
        self.words.insert(word.to_string());
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}

impl KnownWords for WordSet {
    fn contains(&self, word: &str) -> bool {
        self.words.contains(word)
    }
}

impl<'a> FromIterator<&'a str> for WordSet {
    fn from_iter<I: IntoIterator<Item = &'a str>>(iter: I) -> Self {
        let words = iter.into_iter().map(str::to_string).collect();
        Self { words }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_lines_skips_blank_lines() {
        let set = WordSet::from_lines("hund\n\nhaus\n");
        assert_eq!(set.len(), 2);
        assert!(set.contains("hund"));
        assert!(set.contains("haus"));
        assert!(!set.contains(""));
    }

    #[test]
    fn from_lines_strips_trailing_whitespace() {
        let set = WordSet::from_lines("hund \nhaus\t\r\n");
        assert!(set.contains("hund"));
        assert!(set.contains("haus"));
    }

    #[test]
    fn lookup_is_case_sensitive() {
        let set = WordSet::from_lines("hund");
        assert!(set.contains("hund"));
        assert!(!set.contains("Hund"));
    }

    #[test]
    fn collect_from_slice() {
        let set: WordSet = ["tür", "schlüssel"].into_iter().collect();
        assert_eq!(set.len(), 2);
        assert!(set.contains("tür"));
    }
}
