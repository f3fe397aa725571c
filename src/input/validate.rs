//! Turning settings into a checked generation request
//!
//! All configuration errors are detected here, before any sampling happens.
//! A rejected request leaves nothing behind: the caller's previous constraints
//! are untouched because a fresh `ConstraintSet` is only returned on success.

use super::parse::{expand_group_shorthand, parse_letters};
use crate::core::{CasePolicy, CharacterSet, ConstraintSet, LengthBounds, MatchMode, RequiredGroups};
use crate::host::{CharacterSource, Notifier};
use crate::settings::{CharsetMode, Settings};
use log::{debug, info};
use regex::Regex;
use std::fmt;
use thiserror::Error;

/// Where a character restriction came from, for error messages
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CharsetOrigin {
    Font,
    Selection,
    MarkColor(String),
}

impl fmt::Display for CharsetOrigin {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Font => f.write_str("font"),
            Self::Selection => f.write_str("selection of glyphs you would like me to use"),
            Self::MarkColor(color) => write!(f, "glyphs marked {color}"),
        }
    }
}

/// Settings that cannot produce a sensible request
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Word count must be a positive number.")]
    InvalidWordCount,
    #[error("Confusing input for minimal/maximal word length ({min} > {max}). Please fix.")]
    InvalidLengthRange { min: usize, max: usize },
    #[error(
        "Conflict: Required characters ({required}) exceed maximum word length ({max}). Please revise."
    )]
    RequiredExceedsLength { required: usize, max: usize },
    #[error(
        "Conflict: Character \"{character}\" was specified as required, but not found in the {origin}."
    )]
    RequiredNotInCharset {
        character: char,
        origin: CharsetOrigin,
    },
    #[error(
        "Conflict: You have specified all-lowercase words, but required uppercase character \"{0}\". Please revise."
    )]
    RequiredNotLowercase(char),
    #[error(
        "Conflict: You have specified words in ALL CAPS, but required lowercase character \"{0}\". Please revise."
    )]
    RequiredNotUppercase(char),
    #[error("Could not compile regular expression: {0}")]
    InvalidPattern(#[from] regex::Error),
    #[error("Unknown letter group preset \"{0}\".")]
    UnknownPreset(String),
    #[error("Selected dictionary {writing_system}/{language} not found.")]
    UnknownDictionary {
        writing_system: String,
        language: String,
    },
}

/// A validated generation request
#[derive(Debug, Clone)]
pub struct GenerationRequest {
    pub constraints: ConstraintSet,
    pub quota: usize,
    pub case: CasePolicy,
    pub list_output: bool,
}

/// Parse and validate settings into a generation request
///
/// `source` is the open font, if any. Recoverable problems (unresolvable
/// glyph names, empty selections) are reported through `notifier` and
/// generation continues.
///
/// # Errors
///
/// Returns the first `ConfigError` found, checking in this order: word count,
/// group presets, required letters vs. length, required letters vs. character
/// set, required letters vs. case, min vs. max length, pattern compilation.
pub fn prepare<C, N>(
    settings: &Settings,
    source: Option<&C>,
    notifier: &mut N,
) -> Result<GenerationRequest, ConfigError>
where
    C: CharacterSource + ?Sized,
    N: Notifier + ?Sized,
{
    if settings.word_count == 0 {
        return Err(ConfigError::InvalidWordCount);
    }

    let (charset, origin) = resolve_charset(&settings.charset, source, notifier);

    let letters = parse_letters(&settings.required_letters, false, source);
    let mut groups = Vec::with_capacity(settings.required_groups.len());
    let mut skipped = letters.skipped;
    for field in &settings.required_groups {
        let text = expand_group_shorthand(field)
            .ok_or_else(|| ConfigError::UnknownPreset(field.trim().to_string()))?;
        let parsed = parse_letters(&text, true, source);
        skipped.extend(parsed.skipped);
        groups.push(parsed.chars);
    }
    for token in &skipped {
        notifier.notify(&token.to_string());
    }

    let required = letters.chars;
    let text_mode = settings.match_mode == MatchMode::Text;

    if text_mode && required.len() > settings.max_length {
        return Err(ConfigError::RequiredExceedsLength {
            required: required.len(),
            max: settings.max_length,
        });
    }

    if let (CharacterSet::Restricted(set), Some(origin)) = (&charset, &origin)
        && let Some(&missing) = required.iter().find(|&&c| !set.contains(&c))
    {
        return Err(ConfigError::RequiredNotInCharset {
            character: missing,
            origin: origin.clone(),
        });
    }

    if text_mode {
        check_case(&required, settings.case)?;
    }

    if settings.min_length > settings.max_length {
        return Err(ConfigError::InvalidLengthRange {
            min: settings.min_length,
            max: settings.max_length,
        });
    }

    let pattern = match settings.match_mode {
        MatchMode::Pattern => Some(Regex::new(&settings.pattern)?),
        MatchMode::Text => None,
    };

    debug!(
        "prepared request: {} words, length {}..={}, {} required, {} groups",
        settings.word_count,
        settings.min_length,
        settings.max_length,
        required.len(),
        groups.iter().filter(|g| !g.is_empty()).count()
    );

    Ok(GenerationRequest {
        constraints: ConstraintSet {
            charset,
            required_letters: required.into_iter().collect(),
            required_groups: RequiredGroups::new(groups),
            pattern,
            ban_repetitions: settings.ban_repetitions,
            length: LengthBounds::new(settings.min_length, settings.max_length),
            match_mode: settings.match_mode,
        },
        quota: settings.word_count,
        case: settings.case,
        list_output: settings.list_output,
    })
}

/// Resolve the character restriction, falling back to the font's characters
/// when a selection or mark color yields nothing
fn resolve_charset<C, N>(
    mode: &CharsetMode,
    source: Option<&C>,
    notifier: &mut N,
) -> (CharacterSet, Option<CharsetOrigin>)
where
    C: CharacterSource + ?Sized,
    N: Notifier + ?Sized,
{
    let Some(source) = source else {
        if *mode != CharsetMode::Any {
            info!("no font open, using any characters");
        }
        return (CharacterSet::Unrestricted, None);
    };

    let font = |source: &C| {
        (
            CharacterSet::restricted(source.characters()),
            Some(CharsetOrigin::Font),
        )
    };

    match mode {
        CharsetMode::Any => (CharacterSet::Unrestricted, None),
        CharsetMode::Font => font(source),
        CharsetMode::Selection => {
            let selected = source.selected_characters();
            if selected.is_empty() {
                notifier.notify(
                    "No glyphs were selected in the font window. \
                     Will use any characters available in the current font.",
                );
                font(source)
            } else {
                (
                    CharacterSet::restricted(selected),
                    Some(CharsetOrigin::Selection),
                )
            }
        }
        CharsetMode::MarkColor(color) => {
            let marked = source.marked_characters(color);
            if marked.is_empty() {
                notifier.notify(
                    "Found no glyphs that match the specified mark color. \
                     Will use any characters available in the current font.",
                );
                font(source)
            } else {
                (
                    CharacterSet::restricted(marked),
                    Some(CharsetOrigin::MarkColor(color.clone())),
                )
            }
        }
    }
}

fn check_case(required: &[char], case: CasePolicy) -> Result<(), ConfigError> {
    match case {
        CasePolicy::Lowercase => match required.iter().find(|c| !c.is_lowercase()) {
            Some(&c) => Err(ConfigError::RequiredNotLowercase(c)),
            None => Ok(()),
        },
        CasePolicy::AllCaps => match required.iter().find(|c| !c.is_uppercase()) {
            Some(&c) => Err(ConfigError::RequiredNotUppercase(c)),
            None => Ok(()),
        },
        _ => Ok(()),
    }
}
