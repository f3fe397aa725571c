//! Permitted character sets

use rustc_hash::FxHashSet;

/// Characters a word may be built from
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum CharacterSet {
    /// Any character is allowed
    #[default]
    Unrestricted,
    /// Only the listed characters are allowed
    Restricted(FxHashSet<char>),
}

impl CharacterSet {
    /// Build a restricted set from any character source
    pub fn restricted<I: IntoIterator<Item = char>>(chars: I) -> Self {
        Self::Restricted(chars.into_iter().collect())
    }

    /// Check whether a single character is permitted
    #[inline]
    #[must_use]
    pub fn permits(&self, c: char) -> bool {
        match self {
            Self::Unrestricted => true,
            Self::Restricted(set) => set.contains(&c),
        }
    }

    /// Check whether every character of a word is permitted
    #[must_use]
    pub fn permits_word(&self, word: &str) -> bool {
        match self {
            Self::Unrestricted => true,
            Self::Restricted(set) => word.chars().all(|c| set.contains(&c)),
        }
    }

    #[inline]
    #[must_use]
    pub const fn is_restricted(&self) -> bool {
        matches!(self, Self::Restricted(_))
    }
}
