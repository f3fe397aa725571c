//! Accepted words of a single generation run

use rustc_hash::FxHashSet;

/// Accepted words in acceptance order, with constant-time membership checks
#[derive(Debug, Clone, Default)]
pub struct OutputCollection {
    words: Vec<String>,
    index: FxHashSet<String>,
}

impl OutputCollection {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a word; returns `false` and leaves the collection unchanged if
    /// the exact word is already present
    pub fn push(&mut self, word: String) -> bool {
        if self.index.contains(&word) {
            return false;
        }
        self.index.insert(word.clone());
        self.words.push(word);
        true
    }

    #[inline]
    #[must_use]
    pub fn contains(&self, word: &str) -> bool {
        self.index.contains(word)
    }

    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.words.len()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    #[must_use]
    pub fn as_slice(&self) -> &[String] {
        &self.words
    }

    #[must_use]
    pub fn into_vec(self) -> Vec<String> {
        self.words
    }

    /// Join the words with a separator, as handed to the output surface
    #[must_use]
    pub fn join(&self, separator: &str) -> String {
        self.words.join(separator)
    }
}
