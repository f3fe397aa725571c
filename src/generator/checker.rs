//! Candidate word checking
//!
//! Evaluates a case-transformed word against a `ConstraintSet` and against the
//! words already accepted in the current run.

use super::OutputCollection;
use crate::core::{ConstraintSet, MatchMode};
use rustc_hash::FxHashSet;

/// Checks candidate words against a fixed set of constraints
pub struct WordChecker<'a> {
    constraints: &'a ConstraintSet,
}

impl<'a> WordChecker<'a> {
    #[must_use]
    pub const fn new(constraints: &'a ConstraintSet) -> Self {
        Self { constraints }
    }

    /// Decide whether `candidate` qualifies
    ///
    /// Checks run in a fixed order and the first failure short-circuits:
    /// 1. Length within bounds
    /// 2. Not already accepted (exact, case-sensitive)
    /// 3. Every character in the permitted set
    /// 4. Text mode: required letters and groups; pattern mode: regex search
    /// 5. No repeated characters, when banned
    ///
    /// # Examples
    /// ```
    /// use wordomat::core::ConstraintSet;
    /// use wordomat::generator::{OutputCollection, WordChecker};
    ///
    /// let mut constraints = ConstraintSet::with_length(1, 10);
    /// constraints.ban_repetitions = true;
    /// let checker = WordChecker::new(&constraints);
    ///
    /// let accepted = OutputCollection::new();
    /// assert!(checker.check_word("abcd", &accepted));
    /// assert!(!checker.check_word("aabb", &accepted));
    /// ```
    #[must_use]
    pub fn check_word(&self, candidate: &str, accepted: &OutputCollection) -> bool {
        let c = self.constraints;

        if !c.length.contains(candidate.chars().count()) {
            return false;
        }

        if accepted.contains(candidate) {
            return false;
        }

        if !c.charset.permits_word(candidate) {
            return false;
        }

        let requirements_met = match c.match_mode {
            MatchMode::Text => self.meets_letter_requirements(candidate),
            MatchMode::Pattern => c
                .pattern
                .as_ref()
                .is_some_and(|pattern| pattern.is_match(candidate)),
        };
        if !requirements_met {
            return false;
        }

        !c.ban_repetitions || !has_repeated_char(candidate)
    }

    fn meets_letter_requirements(&self, candidate: &str) -> bool {
        let c = self.constraints;
        if c.required_letters.is_empty() && c.required_groups.is_empty() {
            return true;
        }

        let present: FxHashSet<char> = candidate.chars().collect();

        c.required_letters.iter().all(|ch| present.contains(ch))
            && c
                .required_groups
                .active()
                .all(|group| group.iter().any(|ch| present.contains(ch)))
    }
}

/// Check whether any character value occurs more than once
fn has_repeated_char(word: &str) -> bool {
    let mut seen = FxHashSet::default();
    word.chars().any(|c| !seen.insert(c))
}
