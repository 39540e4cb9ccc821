//! Bad word filtering for generated codes.
//!
//! Generation consults a [`BadWordFilter`] after drawing each part and throws
//! the part away if the code so far contains a disallowed substring.

use std::collections::BTreeSet;

/// Predicate deciding whether generated text contains a disallowed substring.
pub trait BadWordFilter: Send + Sync {
    /// Returns `true` if `text` contains a bad word anywhere.
    ///
    /// `text` is the concatenation of the parts generated so far, without separators.
    fn contains_bad_word(&self, text: &str) -> bool;
}

impl<F> BadWordFilter for F
where
    F: Fn(&str) -> bool + Send + Sync,
{
    fn contains_bad_word(&self, text: &str) -> bool {
        self(text)
    }
}

/// A filter that accepts everything.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoFilter;

impl BadWordFilter for NoFilter {
    fn contains_bad_word(&self, _text: &str) -> bool {
        false
    }
}

/// Built-in word list, ROT13-encoded so the source stays readable.
const BUILTIN_ROT13: &[&str] = &[
    "SHPX", "PHAG", "JNAX", "JNAT", "CVFF", "PBPX", "FUVG", "GJNG", "GVGF", "SNEG", "URYY",
    "ZHSS", "QVPX", "XABO", "NEFR", "FUNT", "GBFF", "FYHG", "GHEQ", "FYNT", "PENC", "CBBC",
    "OHGG", "SRPX", "OBBO", "WVFZ", "WVMM", "CUNG",
];

/// A set of disallowed substrings.
///
/// Words are stored uppercase. Text is checked both as given and with the
/// digits `0`, `1`, `2` and `5` read as the letters they stand in for, so a
/// code spelling a word with look-alike digits is rejected too.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BadWords {
    words: BTreeSet<String>,
}

impl BadWords {
    /// Create a filter from a list of words. Empty words are ignored.
    pub fn new<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut filter = Self::default();
        filter.extend(words);
        filter
    }

    /// The default English word list.
    #[must_use]
    pub fn builtin() -> Self {
        Self::new(BUILTIN_ROT13.iter().map(|w| rot13(w)))
    }

    /// Add more words. Empty words are ignored.
    pub fn extend<I, S>(&mut self, words: I)
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.words.extend(
            words
                .into_iter()
                .map(|w| w.as_ref().trim().to_uppercase())
                .filter(|w| !w.is_empty()),
        );
    }

    /// Number of words in the filter.
    #[must_use]
    pub fn len(&self) -> usize {
        self.words.len()
    }

    /// Whether the filter contains no words.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// Iterate over the words, in sorted order.
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.words.iter().map(String::as_str)
    }

    fn matches(&self, text: &str) -> bool {
        self.words.iter().any(|w| text.contains(w.as_str()))
    }
}

impl BadWordFilter for BadWords {
    fn contains_bad_word(&self, text: &str) -> bool {
        let text = text.to_uppercase();
        self.matches(&text) || self.matches(&lookalike_letters(&text))
    }
}

fn lookalike_letters(text: &str) -> String {
    text.chars()
        .map(|c| match c {
            '0' => 'O',
            '1' => 'I',
            '2' => 'Z',
            '5' => 'S',
            c => c,
        })
        .collect()
}

fn rot13(word: &str) -> String {
    word.chars()
        .map(|c| match c {
            'A'..='Z' => char::from((c as u8 - b'A' + 13) % 26 + b'A'),
            c => c,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rot13() {
        assert_eq!(rot13("URYY"), "HELL");
        assert_eq!(rot13(&rot13("COUPON")), "COUPON");
    }

    #[test]
    fn test_builtin_list() {
        let filter = BadWords::builtin();
        assert_eq!(filter.len(), BUILTIN_ROT13.len());
        assert!(filter.iter().any(|w| w == "HELL"));
        assert!(filter.iter().all(|w| w.len() == 4));
    }

    #[test]
    fn test_contains_bad_word() {
        let filter = BadWords::new(["hell"]);
        assert!(filter.contains_bad_word("AHELLB"));
        assert!(filter.contains_bad_word("ahellb"));
        assert!(!filter.contains_bad_word("HEL1"));
    }

    #[test]
    fn test_lookalike_digits() {
        let filter = BadWords::new(["BOOB"]);
        assert!(filter.contains_bad_word("XB00BX"));
        assert!(!filter.contains_bad_word("XB08BX"));
    }

    #[test]
    fn test_straddles_part_boundary() {
        let filter = BadWords::new(["CRAP"]);
        assert!(filter.contains_bad_word("12CRAP34"));
    }

    #[test]
    fn test_empty_words_ignored() {
        let filter = BadWords::new(["", "  "]);
        assert!(filter.is_empty());
        assert!(!filter.contains_bad_word("ANYTHING"));
    }

    #[test]
    fn test_no_filter_and_closure() {
        assert!(!NoFilter.contains_bad_word("HELL"));

        let only_sevens = |text: &str| text.contains('7');
        assert!(only_sevens.contains_bad_word("A7B"));
        assert!(!only_sevens.contains_bad_word("AB"));
    }
}
