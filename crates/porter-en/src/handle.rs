// PorterHandle: top-level integration point for English stemming.
//
// Owns the stopword filter and the word-length bound, and performs all
// boundary validation before the engine runs: the rule cascade itself is
// total and has no error paths, so every error a caller can see is
// produced here.

use porter_core::enums::{MAX_WORD_CHARS, StemMode};
use porter_core::error::StemError;

use crate::stemmer;
use crate::stopwords::StopwordFilter;

/// Top-level handle owning the stemming configuration.
///
/// Construction is cheap and the handle is `Sync`: each stemming call
/// works on its own buffer, so one handle may serve many threads.
#[derive(Debug)]
pub struct PorterHandle {
    stopwords: StopwordFilter,
    max_word_chars: usize,
}

impl PorterHandle {
    /// Create a handle with the default word-length bound and no
    /// stopwords.
    pub fn new() -> Self {
        Self::with_max_word_chars(MAX_WORD_CHARS)
    }

    /// Create a handle with a custom word-length bound. Words of
    /// `max_word_chars` characters or more are rejected before stemming.
    pub fn with_max_word_chars(max_word_chars: usize) -> Self {
        Self {
            stopwords: StopwordFilter::new(),
            max_word_chars,
        }
    }

    /// Stem a word with the full rule cascade.
    pub fn stem(&self, word: &str) -> Result<String, StemError> {
        self.stem_with(word, StemMode::Full)
    }

    /// Stem a word in the given mode.
    ///
    /// Length is checked first, then the stopword filter: a stopword is
    /// returned verbatim without invoking the engine at all.
    pub fn stem_with(&self, word: &str, mode: StemMode) -> Result<String, StemError> {
        let length = word.chars().count();
        if length >= self.max_word_chars {
            return Err(StemError::InputTooLong {
                length,
                max: self.max_word_chars,
            });
        }
        if self.stopwords.contains(word) {
            return Ok(word.to_owned());
        }
        Ok(stemmer::stem(word, mode))
    }

    /// Stem a word supplied as raw bytes, validating the encoding at the
    /// boundary.
    pub fn stem_bytes(&self, word: &[u8], mode: StemMode) -> Result<String, StemError> {
        let word = std::str::from_utf8(word)?;
        self.stem_with(word, mode)
    }

    /// Replace the stopword set wholesale. Takes effect atomically with
    /// respect to concurrent stemming calls.
    pub fn set_stopwords<I, S>(&self, words: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.stopwords.replace(words);
    }

    /// The current stopwords in sorted order.
    pub fn stopwords(&self) -> Vec<String> {
        self.stopwords.snapshot()
    }
}

impl Default for PorterHandle {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stems_with_the_full_cascade_by_default() {
        let handle = PorterHandle::new();
        assert_eq!(handle.stem("running").unwrap(), "run");
        assert_eq!(handle.stem("caresses").unwrap(), "caress");
    }

    #[test]
    fn plurals_only_mode_is_selectable() {
        let handle = PorterHandle::new();
        assert_eq!(
            handle.stem_with("running", StemMode::PluralsOnly).unwrap(),
            "running"
        );
        assert_eq!(
            handle.stem_with("caresses", StemMode::PluralsOnly).unwrap(),
            "caress"
        );
    }

    #[test]
    fn rejects_words_at_or_over_the_length_bound() {
        let handle = PorterHandle::new();
        let long = "a".repeat(MAX_WORD_CHARS);
        let err = handle.stem(&long).unwrap_err();
        assert!(matches!(
            err,
            StemError::InputTooLong { length: 255, max: 255 }
        ));

        let just_under = "a".repeat(MAX_WORD_CHARS - 1);
        assert!(handle.stem(&just_under).is_ok());
    }

    #[test]
    fn custom_length_bound_is_honored() {
        let handle = PorterHandle::with_max_word_chars(5);
        assert!(handle.stem("cats").is_ok());
        assert!(handle.stem("ponies").is_err());
    }

    #[test]
    fn stopwords_bypass_the_engine() {
        let handle = PorterHandle::new();
        assert_eq!(handle.stem("whipped").unwrap(), "whip");

        handle.set_stopwords(["whipped"]);
        assert_eq!(handle.stem("whipped").unwrap(), "whipped");
        // Only exact matches are bypassed.
        assert_eq!(handle.stem("whipping").unwrap(), "whip");

        handle.set_stopwords(["whipped", "whipping"]);
        assert_eq!(handle.stem("whipping").unwrap(), "whipping");
    }

    #[test]
    fn set_stopwords_replaces_rather_than_extends() {
        let handle = PorterHandle::new();
        handle.set_stopwords(["whipped"]);
        handle.set_stopwords(["halves"]);
        assert_eq!(handle.stem("whipped").unwrap(), "whip");
        assert_eq!(handle.stem("halves").unwrap(), "halves");
        assert_eq!(handle.stopwords(), ["halves"]);
    }

    #[test]
    fn length_check_applies_before_stopword_bypass() {
        let handle = PorterHandle::with_max_word_chars(4);
        handle.set_stopwords(["halves"]);
        assert!(handle.stem("halves").is_err());
    }

    #[test]
    fn stem_bytes_validates_utf8() {
        let handle = PorterHandle::new();
        assert_eq!(
            handle.stem_bytes(b"running", StemMode::Full).unwrap(),
            "run"
        );
        let err = handle
            .stem_bytes(&[0x72, 0xff, 0x6e], StemMode::Full)
            .unwrap_err();
        assert!(matches!(err, StemError::InvalidEncoding(_)));
    }

    #[test]
    fn short_words_pass_through() {
        let handle = PorterHandle::new();
        assert_eq!(handle.stem("is").unwrap(), "is");
        assert_eq!(handle.stem("a").unwrap(), "a");
    }

    #[test]
    fn handle_is_sync() {
        fn assert_sync<T: Sync>() {}
        assert_sync::<PorterHandle>();
    }
}
