// Stopword exclusion set.
//
// Words in the set bypass the engine entirely; the caller gets the input
// back verbatim. The set is replaced wholesale rather than edited, and
// the replacement happens under a write lock so concurrent lookups never
// observe a partially updated set.

use std::sync::{PoisonError, RwLock};

use hashbrown::HashSet;

/// Exact-match exclusion set consulted before stemming.
#[derive(Debug, Default)]
pub struct StopwordFilter {
    words: RwLock<HashSet<String>>,
}

impl StopwordFilter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a filter from an initial word list.
    pub fn from_words<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let filter = Self::new();
        filter.replace(words);
        filter
    }

    /// Check whether `word` is excluded from stemming.
    pub fn contains(&self, word: &str) -> bool {
        self.read().contains(word)
    }

    /// Replace the whole set. Takes effect atomically with respect to
    /// concurrent [`StopwordFilter::contains`] calls.
    pub fn replace<I, S>(&self, words: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let next: HashSet<String> = words.into_iter().map(Into::into).collect();
        *self
            .words
            .write()
            .unwrap_or_else(PoisonError::into_inner) = next;
    }

    /// Drop every stopword.
    pub fn clear(&self) {
        self.replace(std::iter::empty::<String>());
    }

    pub fn len(&self) -> usize {
        self.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.read().is_empty()
    }

    /// The current stopwords in sorted order.
    pub fn snapshot(&self) -> Vec<String> {
        let mut words: Vec<String> = self.read().iter().cloned().collect();
        words.sort();
        words
    }

    fn read(&self) -> std::sync::RwLockReadGuard<'_, HashSet<String>> {
        self.words.read().unwrap_or_else(PoisonError::into_inner)
    }
}
