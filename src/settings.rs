//! User-facing generation settings
//!
//! Plain typed values as the host (or the command line) hands them over.
//! Letter fields stay raw text here; `input::prepare` parses and validates them
//! into a `ConstraintSet`.

use crate::core::{CasePolicy, MAX_GROUPS, MatchMode};
use std::fmt;

/// Where the permitted character set comes from
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum CharsetMode {
    /// Any character
    Any,
    /// Characters encoded by the current font
    #[default]
    Font,
    /// Characters of the selected glyphs
    Selection,
    /// Characters of the glyphs tagged with a mark color
    MarkColor(String),
}

impl CharsetMode {
    /// Create a mode from its name
    ///
    /// Supported names: "any", "font", "selection", "mark:<color>"
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        if let Some(color) = name.strip_prefix("mark:") {
            return (!color.is_empty()).then(|| Self::MarkColor(color.to_string()));
        }
        match name {
            "any" => Some(Self::Any),
            "font" => Some(Self::Font),
            "selection" | "selected" => Some(Self::Selection),
            _ => None,
        }
    }
}

impl fmt::Display for CharsetMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Any => f.write_str("Use any characters"),
            Self::Font => f.write_str("Use characters in current font"),
            Self::Selection => f.write_str("Use only selected glyphs"),
            Self::MarkColor(color) => write!(f, "Use glyphs marked {color}"),
        }
    }
}

/// Everything needed for one generation request
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    pub word_count: usize,
    pub min_length: usize,
    pub max_length: usize,
    pub case: CasePolicy,
    pub charset: CharsetMode,
    pub match_mode: MatchMode,
    /// Comma or space separated characters / glyph names
    pub required_letters: String,
    /// Same syntax, with an optional "label:" prefix
    pub required_groups: [String; MAX_GROUPS],
    pub pattern: String,
    pub ban_repetitions: bool,
    /// Output one word per line, sorted by width
    pub list_output: bool,
}

impl Settings {
    pub const DEFAULT_WORD_COUNT: usize = 20;
    pub const DEFAULT_MIN_LENGTH: usize = 3;
    pub const DEFAULT_MAX_LENGTH: usize = 15;
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            word_count: Self::DEFAULT_WORD_COUNT,
            min_length: Self::DEFAULT_MIN_LENGTH,
            max_length: Self::DEFAULT_MAX_LENGTH,
            case: CasePolicy::KeepCase,
            charset: CharsetMode::Font,
            match_mode: MatchMode::Text,
            required_letters: String::new(),
            required_groups: Default::default(),
            pattern: String::new(),
            ban_repetitions: false,
            list_output: false,
        }
    }
}
