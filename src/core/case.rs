//! Case transformation policies
//!
//! Words are case-transformed after being drawn from the dictionary and before
//! being checked, so the transformed copy is what gets tested and output.

use rand::Rng;
use std::fmt;

/// How a drawn word is re-cased before checking
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum CasePolicy {
    /// Leave the word as it appears in the dictionary
    #[default]
    KeepCase,
    /// Lowercase every character
    Lowercase,
    /// Uppercase the first character, lowercase the rest
    Capitalize,
    /// Uppercase everything
    AllCaps,
    /// Flip each character to upper or lower case at random
    RansomNote,
}

impl CasePolicy {
    /// All policies in the order the host lists them
    pub const ALL: [Self; 5] = [
        Self::KeepCase,
        Self::Lowercase,
        Self::Capitalize,
        Self::AllCaps,
        Self::RansomNote,
    ];

    /// Policy for a persisted popup index (0-4)
    #[must_use]
    pub fn from_index(index: usize) -> Option<Self> {
        Self::ALL.get(index).copied()
    }

    /// Create a policy from its name
    ///
    /// Supported names: "keep", "lower", "capitalize", "caps", "ransom"
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        match name.to_lowercase().as_str() {
            "keep" | "keep-case" => Some(Self::KeepCase),
            "lower" | "lowercase" => Some(Self::Lowercase),
            "capitalize" | "title" => Some(Self::Capitalize),
            "caps" | "all-caps" | "upper" => Some(Self::AllCaps),
            "ransom" | "ransom-note" => Some(Self::RansomNote),
            _ => None,
        }
    }

    /// Apply this policy to a word
    ///
    /// Only `RansomNote` draws from `rng`.
    ///
    /// # Examples
    /// ```
    /// use wordomat::core::CasePolicy;
    ///
    /// let mut rng = rand::rng();
    /// assert_eq!(CasePolicy::Capitalize.apply("ijsvogel", &mut rng), "IJsvogel");
    /// assert_eq!(CasePolicy::AllCaps.apply("straße", &mut rng), "STRASSE");
    /// assert_eq!(CasePolicy::Lowercase.apply("Abc", &mut rng), "abc");
    /// ```
    pub fn apply<R: Rng + ?Sized>(self, word: &str, rng: &mut R) -> String {
        match self {
            Self::KeepCase => word.to_string(),
            Self::Lowercase => word.to_lowercase(),
            Self::Capitalize => capitalize(word),
            Self::AllCaps => word.replace('ß', "ss").to_uppercase(),
            Self::RansomNote => ransom_note(word, rng),
        }
    }
}

impl fmt::Display for CasePolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Self::KeepCase => "Keep case",
            Self::Lowercase => "make lowercase",
            Self::Capitalize => "Capitalize",
            Self::AllCaps => "ALL CAPS",
            Self::RansomNote => "rAnSoM nOtE",
        };
        f.write_str(label)
    }
}

/// Title-case a word, treating a leading "ij" digraph as one letter
fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    let Some(first) = chars.next() else {
        return String::new();
    };

    let digraph: String = word.chars().take(2).collect();
    if digraph.to_lowercase() == "ij" {
        // Remainder is kept as drawn
        let rest: String = word.chars().skip(2).collect();
        return format!("IJ{rest}");
    }

    first.to_uppercase().chain(chars.flat_map(char::to_lowercase)).collect()
}

fn ransom_note<R: Rng + ?Sized>(word: &str, rng: &mut R) -> String {
    word.chars()
        .flat_map(|c| {
            let flipped: Vec<char> = if rng.random_bool(0.5) {
                c.to_lowercase().collect()
            } else {
                c.to_uppercase().collect()
            };
            flipped
        })
        .collect()
}
