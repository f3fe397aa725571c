//! Bounded random sampling from a dictionary
//!
//! Words are drawn uniformly with replacement, case-transformed, checked, and
//! accumulated until the quota is met or the attempt ceiling is reached. The
//! ceiling keeps unsatisfiable constraints from looping forever; falling short
//! of the quota is a normal outcome, not an error.

use super::{OutputCollection, WordChecker};
use crate::core::{CasePolicy, ConstraintSet};
use log::debug;
use rand::Rng;
use rand::seq::IndexedRandom;
use std::fmt;

/// How many draws a run may make before giving up
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AttemptBudget {
    /// One draw per dictionary entry
    #[default]
    DictionarySize,
    /// `max(dictionary size, quota * factor)` draws
    Scaled { factor: usize },
}

impl AttemptBudget {
    /// Number of draws allowed for a dictionary size and quota
    #[must_use]
    pub fn ceiling(self, dictionary_len: usize, quota: usize) -> usize {
        match self {
            Self::DictionarySize => dictionary_len,
            Self::Scaled { factor } => dictionary_len.max(quota.saturating_mul(factor)),
        }
    }
}

impl fmt::Display for AttemptBudget {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::DictionarySize => f.write_str("one draw per dictionary word"),
            Self::Scaled { factor } => write!(f, "up to {factor} draws per requested word"),
        }
    }
}

/// Summary of a sampling run
#[derive(Debug, Clone)]
pub struct SampleResult {
    pub words: OutputCollection,
    pub attempts: usize,
}

impl SampleResult {
    /// Whether fewer words were found than requested
    #[must_use]
    pub fn is_short_of(&self, quota: usize) -> bool {
        self.words.len() < quota
    }
}

/// Draws qualifying words from a dictionary
#[derive(Debug, Clone, Copy, Default)]
pub struct WordSampler {
    budget: AttemptBudget,
}

impl WordSampler {
    #[must_use]
    pub const fn new(budget: AttemptBudget) -> Self {
        Self { budget }
    }

    /// How many draws each run may make
    #[must_use]
    pub const fn budget(&self) -> AttemptBudget {
        self.budget
    }

    /// Generate up to `quota` words satisfying `constraints`
    ///
    /// # Examples
    /// ```
    /// use rand::SeedableRng;
    /// use rand::rngs::StdRng;
    /// use wordomat::core::{CasePolicy, ConstraintSet};
    /// use wordomat::generator::WordSampler;
    ///
    /// let dictionary: Vec<String> = ["cat", "dog", "cats", "dodo"]
    ///     .iter()
    ///     .map(ToString::to_string)
    ///     .collect();
    /// let constraints = ConstraintSet::with_length(3, 3);
    /// let mut rng = StdRng::seed_from_u64(1);
    ///
    /// let words = WordSampler::default().generate(&dictionary, 2, &constraints, CasePolicy::KeepCase, &mut rng);
    /// assert!(words.len() <= 2);
    /// assert!(words.as_slice().iter().all(|w| w == "cat" || w == "dog"));
    /// ```
    pub fn generate<S: AsRef<str>, R: Rng + ?Sized>(
        &self,
        dictionary: &[S],
        quota: usize,
        constraints: &ConstraintSet,
        case: CasePolicy,
        rng: &mut R,
    ) -> OutputCollection {
        self.sample(dictionary, quota, constraints, case, rng).words
    }

    /// Like `generate`, but also reports how many draws were made
    pub fn sample<S: AsRef<str>, R: Rng + ?Sized>(
        &self,
        dictionary: &[S],
        quota: usize,
        constraints: &ConstraintSet,
        case: CasePolicy,
        rng: &mut R,
    ) -> SampleResult {
        let checker = WordChecker::new(constraints);
        let ceiling = self.budget.ceiling(dictionary.len(), quota);
        let mut words = OutputCollection::new();
        let mut attempts = 0;

        while words.len() < quota && attempts < ceiling {
            let Some(drawn) = dictionary.choose(rng) else {
                break;
            };
            attempts += 1;

            let candidate = case.apply(drawn.as_ref(), rng);
            if checker.check_word(&candidate, &words) {
                words.push(candidate);
            }
        }

        debug!(
            "sampled {attempts}/{ceiling} draws from {} words, accepted {}/{quota}",
            dictionary.len(),
            words.len()
        );

        SampleResult { words, attempts }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::CharacterSet;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn dictionary(words: &[&str]) -> Vec<String> {
        words.iter().map(ToString::to_string).collect()
    }

    fn small_dictionary() -> Vec<String> {
        dictionary(&["cat", "dog", "cats", "dodo"])
    }

    #[test]
    fn quota_zero_is_empty() {
        let dict = small_dictionary();
        let mut rng = StdRng::seed_from_u64(0);
        let result = WordSampler::default().sample(
            &dict,
            0,
            &ConstraintSet::with_length(1, 10),
            CasePolicy::KeepCase,
            &mut rng,
        );

        assert!(result.words.is_empty());
        assert_eq!(result.attempts, 0);
    }

    #[test]
    fn empty_dictionary_is_empty() {
        let dict: Vec<String> = Vec::new();
        let mut rng = StdRng::seed_from_u64(0);
        let words = WordSampler::new(AttemptBudget::Scaled { factor: 50 }).generate(
            &dict,
            5,
            &ConstraintSet::with_length(1, 10),
            CasePolicy::KeepCase,
            &mut rng,
        );

        assert!(words.is_empty());
    }

    #[test]
    fn small_dictionary_three_letter_words() {
        let dict = small_dictionary();
        let constraints = ConstraintSet::with_length(3, 3);
        let sampler = WordSampler::default();
        let mut found_both = false;

        for seed in 0..200 {
            let mut rng = StdRng::seed_from_u64(seed);
            let words = sampler.generate(&dict, 2, &constraints, CasePolicy::KeepCase, &mut rng);

            assert!(words.len() <= 2);
            assert!(words.as_slice().iter().all(|w| w == "cat" || w == "dog"));
            if words.len() == 2 {
                assert_ne!(words.as_slice()[0], words.as_slice()[1]);
                found_both = true;
            }
        }

        assert!(found_both, "no seed produced both three-letter words");
    }

    #[test]
    fn same_seed_same_output() {
        let dict = small_dictionary();
        let constraints = ConstraintSet::with_length(3, 4);
        let sampler = WordSampler::new(AttemptBudget::Scaled { factor: 10 });

        let a = sampler.generate(&dict, 3, &constraints, CasePolicy::RansomNote, &mut StdRng::seed_from_u64(42));
        let b = sampler.generate(&dict, 3, &constraints, CasePolicy::RansomNote, &mut StdRng::seed_from_u64(42));

        assert_eq!(a.as_slice(), b.as_slice());
    }

    #[test]
    fn scaled_budget_fills_quota() {
        let dict = small_dictionary();
        let constraints = ConstraintSet::with_length(3, 3);
        let sampler = WordSampler::new(AttemptBudget::Scaled { factor: 100 });

        for seed in 0..20 {
            let mut rng = StdRng::seed_from_u64(seed);
            let words = sampler.generate(&dict, 2, &constraints, CasePolicy::KeepCase, &mut rng);
            let mut sorted = words.into_vec();
            sorted.sort();
            assert_eq!(sorted, ["cat", "dog"]);
        }
    }

    #[test]
    fn unsatisfiable_constraints_stop_at_ceiling() {
        let dict = small_dictionary();
        let mut constraints = ConstraintSet::with_length(1, 10);
        constraints.charset = CharacterSet::restricted("xyz".chars());
        let mut rng = StdRng::seed_from_u64(9);

        let result = WordSampler::default().sample(&dict, 10, &constraints, CasePolicy::KeepCase, &mut rng);
        assert!(result.words.is_empty());
        assert_eq!(result.attempts, dict.len());
        assert!(result.is_short_of(10));

        let scaled = WordSampler::new(AttemptBudget::Scaled { factor: 7 });
        let result = scaled.sample(&dict, 10, &constraints, CasePolicy::KeepCase, &mut rng);
        assert_eq!(result.attempts, 70);
    }

    #[test]
    fn never_exceeds_quota() {
        let dict = dictionary(&["alpha", "beta", "gamma", "delta", "epsilon", "zeta", "eta", "theta"]);
        let mut rng = StdRng::seed_from_u64(5);
        let words = WordSampler::new(AttemptBudget::Scaled { factor: 100 }).generate(
            &dict,
            3,
            &ConstraintSet::with_length(1, 10),
            CasePolicy::KeepCase,
            &mut rng,
        );

        assert_eq!(words.len(), 3);
    }

    #[test]
    fn output_is_case_transformed() {
        let dict = dictionary(&["straße", "ijsvogel"]);
        let mut rng = StdRng::seed_from_u64(11);
        let words = WordSampler::new(AttemptBudget::Scaled { factor: 100 }).generate(
            &dict,
            2,
            &ConstraintSet::with_length(1, 10),
            CasePolicy::AllCaps,
            &mut rng,
        );

        let mut sorted = words.into_vec();
        sorted.sort();
        assert_eq!(sorted, ["IJSVOGEL", "STRASSE"]);
    }

    #[test]
    fn checks_run_after_case_transform() {
        // "STRASSE" has 7 characters even though "straße" has 6
        let dict = dictionary(&["straße"]);
        let mut rng = StdRng::seed_from_u64(1);
        let words = WordSampler::new(AttemptBudget::Scaled { factor: 10 }).generate(
            &dict,
            1,
            &ConstraintSet::with_length(6, 6),
            CasePolicy::AllCaps,
            &mut rng,
        );

        assert!(words.is_empty());
    }

    #[test]
    fn pinned_seed_default_budget() {
        // Only "cat" qualifies, so any seed that draws it yields exactly ["cat"]
        let dict = dictionary(&["cat", "cats", "dodo", "horse", "mouse", "zebra"]);
        let constraints = ConstraintSet::with_length(3, 3);
        let sampler = WordSampler::default();
        assert_eq!(sampler.budget(), AttemptBudget::DictionarySize);

        let first = sampler.sample(&dict, 2, &constraints, CasePolicy::KeepCase, &mut StdRng::seed_from_u64(7));
        let again = sampler.sample(&dict, 2, &constraints, CasePolicy::KeepCase, &mut StdRng::seed_from_u64(7));

        // Quota 2 is never met, so every run spends the whole ceiling
        assert_eq!(first.attempts, dict.len());
        assert_eq!(again.attempts, dict.len());
        assert_eq!(first.words.as_slice(), again.words.as_slice());
        assert!(first.words.len() <= 1);
        assert!(first.words.as_slice().iter().all(|w| w == "cat"));
    }

    #[test]
    fn pinned_seed_single_candidate_dictionary() {
        let dict = dictionary(&["cat"]);
        let mut rng = StdRng::seed_from_u64(2024);
        let result = WordSampler::default().sample(
            &dict,
            20,
            &ConstraintSet::with_length(3, 15),
            CasePolicy::KeepCase,
            &mut rng,
        );

        assert_eq!(result.words.as_slice(), ["cat"]);
        assert_eq!(result.attempts, 1);
    }

    #[test]
    fn budget_labels() {
        assert_eq!(AttemptBudget::DictionarySize.to_string(), "one draw per dictionary word");
        assert_eq!(
            AttemptBudget::Scaled { factor: 50 }.to_string(),
            "up to 50 draws per requested word"
        );
    }

    #[test]
    fn budget_ceiling() {
        assert_eq!(AttemptBudget::DictionarySize.ceiling(100, 5), 100);
        assert_eq!(AttemptBudget::Scaled { factor: 50 }.ceiling(100, 5), 250);
        assert_eq!(AttemptBudget::Scaled { factor: 50 }.ceiling(1000, 5), 1000);
    }
}
