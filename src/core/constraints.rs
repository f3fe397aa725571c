//! Constraint values consulted by the word checker
//!
//! A `ConstraintSet` is a passive bundle of requirements. It does not validate
//! itself; see `input::validate` for the checks run before generation.

use super::CharacterSet;
use regex::Regex;
use rustc_hash::FxHashSet;

/// Number of independent required-letter groups
pub const MAX_GROUPS: usize = 3;

/// Whether letter requirements or a regular expression govern matching
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum MatchMode {
    /// Required letters and groups apply
    #[default]
    Text,
    /// The compiled pattern applies; letters and groups are ignored
    Pattern,
}

impl MatchMode {
    /// Create a mode from its name ("text", "pattern" or "grep")
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        match name.to_lowercase().as_str() {
            "text" => Some(Self::Text),
            "pattern" | "grep" | "regex" => Some(Self::Pattern),
            _ => None,
        }
    }
}

/// Inclusive word length range, counted in characters
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct LengthBounds {
    pub min: usize,
    pub max: usize,
}

impl LengthBounds {
    #[must_use]
    pub const fn new(min: usize, max: usize) -> Self {
        Self { min, max }
    }

    #[inline]
    #[must_use]
    pub const fn contains(&self, length: usize) -> bool {
        self.min <= length && length <= self.max
    }
}

impl Default for LengthBounds {
    fn default() -> Self {
        Self::new(3, 15)
    }
}

/// Up to three groups, each needing at least one member in the word
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct RequiredGroups([Vec<char>; MAX_GROUPS]);

impl RequiredGroups {
    /// Build from up to three groups; extra groups are ignored
    #[must_use]
    pub fn new(groups: impl IntoIterator<Item = Vec<char>>) -> Self {
        let mut slots: [Vec<char>; MAX_GROUPS] = Default::default();
        for (slot, group) in slots.iter_mut().zip(groups) {
            *slot = group;
        }
        Self(slots)
    }

    /// Groups that actually constrain the word
    pub fn active(&self) -> impl Iterator<Item = &[char]> {
        self.0.iter().filter(|g| !g.is_empty()).map(Vec::as_slice)
    }

    #[must_use]
    pub fn get(&self, index: usize) -> Option<&[char]> {
        self.0.get(index).map(Vec::as_slice)
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.iter().all(Vec::is_empty)
    }
}

/// Everything a candidate word is checked against
#[derive(Debug, Clone, Default)]
pub struct ConstraintSet {
    pub charset: CharacterSet,
    pub required_letters: FxHashSet<char>,
    pub required_groups: RequiredGroups,
    pub pattern: Option<Regex>,
    pub ban_repetitions: bool,
    pub length: LengthBounds,
    pub match_mode: MatchMode,
}

impl ConstraintSet {
    /// Constraints that only bound word length
    #[must_use]
    pub fn with_length(min: usize, max: usize) -> Self {
        Self {
            length: LengthBounds::new(min, max),
            ..Self::default()
        }
    }
}
