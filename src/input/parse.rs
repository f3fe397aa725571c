//! Parsing raw settings text
//!
//! Letter fields are comma and/or space separated. Single characters are taken
//! literally; longer tokens are glyph names resolved through the host's
//! `CharacterSource`. Tokens that cannot be resolved are skipped and reported,
//! never fatal.

use super::presets::find_preset;
use crate::host::{CharacterSource, GlyphLookup};
use log::debug;
use std::borrow::Cow;
use std::fmt;

/// Why a token in a letter field was dropped
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SkipReason {
    /// The glyph exists but carries no Unicode value
    Unencoded,
    /// No glyph by that name
    NotFound,
    /// Glyph names need an open font
    NoFont,
}

/// A token dropped while parsing a letter field
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SkippedToken {
    pub token: String,
    pub reason: SkipReason,
}

impl fmt::Display for SkippedToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let token = &self.token;
        match self.reason {
            SkipReason::Unencoded => write!(
                f,
                "Glyph \"{token}\" was found, but does not appear to have a Unicode value set. \
                 It can therefore not be processed, and will be skipped."
            ),
            SkipReason::NotFound => write!(
                f,
                "Conflict: Character \"{token}\" was specified as required, but not found. \
                 It will be skipped."
            ),
            SkipReason::NoFont => write!(
                f,
                "Sorry, matching by glyph name is only supported when a font is open. \
                 Character \"{token}\" will be skipped."
            ),
        }
    }
}

/// Characters parsed from a letter field
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ParsedLetters {
    /// Distinct characters in input order
    pub chars: Vec<char>,
    pub skipped: Vec<SkippedToken>,
}

/// Parse a letter field
///
/// With `strip_label`, anything up to and including the first ':' is dropped,
/// so preset text like "[lc] Arches: n, m, h, u" parses to its letters.
///
/// # Examples
/// ```
/// use wordomat::host::NoFont;
/// use wordomat::input::parse_letters;
///
/// let parsed = parse_letters("a, b c,d", false, None::<&NoFont>);
/// assert_eq!(parsed.chars, vec!['a', 'b', 'c', 'd']);
///
/// let parsed = parse_letters("Recent: x, y", true, None::<&NoFont>);
/// assert_eq!(parsed.chars, vec!['x', 'y']);
/// ```
pub fn parse_letters<C: CharacterSource + ?Sized>(
    input: &str,
    strip_label: bool,
    source: Option<&C>,
) -> ParsedLetters {
    let mut text = input;
    if strip_label && let Some(i) = text.find(':') {
        text = &text[i + 1..];
    }

    let mut parsed = ParsedLetters::default();
    let tokens = text
        .split(|c: char| c == ',' || c == ' ')
        .filter(|token| !token.is_empty());

    for token in tokens {
        let mut chars = token.chars();
        let resolved = match (chars.next(), chars.next()) {
            (Some(c), None) => Ok(c),
            _ => resolve_glyph_name(token, source),
        };

        match resolved {
            Ok(c) => {
                if !parsed.chars.contains(&c) {
                    parsed.chars.push(c);
                }
            }
            Err(reason) => {
                debug!("skipping letter token {token:?}: {reason:?}");
                parsed.skipped.push(SkippedToken {
                    token: token.to_string(),
                    reason,
                });
            }
        }
    }

    parsed
}

fn resolve_glyph_name<C: CharacterSource + ?Sized>(
    name: &str,
    source: Option<&C>,
) -> Result<char, SkipReason> {
    let Some(source) = source else {
        return Err(SkipReason::NoFont);
    };
    match source.glyph_character(name) {
        GlyphLookup::Found(c) => Ok(c),
        GlyphLookup::Unencoded => Err(SkipReason::Unencoded),
        GlyphLookup::Missing => Err(SkipReason::NotFound),
    }
}

/// Expand an `@preset` shorthand into its field text
///
/// Returns `None` for an unknown preset; any other text passes through.
#[must_use]
pub fn expand_group_shorthand(input: &str) -> Option<Cow<'_, str>> {
    match input.trim().strip_prefix('@') {
        Some(key) => find_preset(key).map(|preset| Cow::Owned(preset.field_text())),
        None => Some(Cow::Borrowed(input)),
    }
}

/// Parse a positive count, falling back to `default` when the text is not a
/// number
#[must_use]
pub fn parse_count_or(text: &str, default: usize) -> usize {
    text.trim().parse().unwrap_or_else(|_| {
        debug!("could not parse {text:?} as a number, using {default}");
        default
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::host::{FontProfile, NoFont};

    fn profile() -> FontProfile {
        FontProfile::parse("glyph a a\nglyph eacute U+00E9\nglyph .notdef -\n").unwrap()
    }

    #[test]
    fn splits_on_commas_and_spaces() {
        let parsed = parse_letters("a,b , c  d", false, None::<&NoFont>);
        assert_eq!(parsed.chars, vec!['a', 'b', 'c', 'd']);
        assert!(parsed.skipped.is_empty());
    }

    #[test]
    fn empty_input() {
        let parsed = parse_letters("", false, None::<&NoFont>);
        assert!(parsed.chars.is_empty());
        assert!(parsed.skipped.is_empty());
    }

    #[test]
    fn duplicates_collapsed() {
        let parsed = parse_letters("a a, b a", false, None::<&NoFont>);
        assert_eq!(parsed.chars, vec!['a', 'b']);
    }

    #[test]
    fn strips_label_only_when_asked() {
        let parsed = parse_letters("[lc] Arches: n, m", true, None::<&NoFont>);
        assert_eq!(parsed.chars, vec!['n', 'm']);

        let parsed = parse_letters("x: y", false, None::<&NoFont>);
        assert_eq!(parsed.chars, vec!['y']);
        assert_eq!(parsed.skipped.len(), 1);
        assert_eq!(parsed.skipped[0].token, "x:");
    }

    #[test]
    fn non_ascii_single_characters() {
        let parsed = parse_letters("é, ß, ж", false, None::<&NoFont>);
        assert_eq!(parsed.chars, vec!['é', 'ß', 'ж']);
    }

    #[test]
    fn glyph_names_resolved_through_font() {
        let font = profile();
        let parsed = parse_letters("eacute, a", false, Some(&font));
        assert_eq!(parsed.chars, vec!['é', 'a']);
    }

    #[test]
    fn unresolvable_glyph_names_skipped() {
        let font = profile();
        let parsed = parse_letters(".notdef zcaron b", false, Some(&font));

        assert_eq!(parsed.chars, vec!['b']);
        assert_eq!(
            parsed.skipped,
            vec![
                SkippedToken {
                    token: ".notdef".to_string(),
                    reason: SkipReason::Unencoded
                },
                SkippedToken {
                    token: "zcaron".to_string(),
                    reason: SkipReason::NotFound
                },
            ]
        );
    }

    #[test]
    fn glyph_names_need_a_font() {
        let parsed = parse_letters("eacute", false, None::<&NoFont>);
        assert!(parsed.chars.is_empty());
        assert_eq!(parsed.skipped[0].reason, SkipReason::NoFont);
        assert!(parsed.skipped[0].to_string().contains("font is open"));
    }

    #[test]
    fn preset_shorthand() {
        assert_eq!(
            expand_group_shorthand("@ascenders").as_deref(),
            Some("[lc] Ascenders: b, f, h, k, l")
        );
        assert_eq!(expand_group_shorthand("a, b").as_deref(), Some("a, b"));
        assert_eq!(expand_group_shorthand("@nothing"), None);
    }

    #[test]
    fn count_fallback() {
        assert_eq!(parse_count_or("12", 20), 12);
        assert_eq!(parse_count_or(" 7 ", 20), 7);
        assert_eq!(parse_count_or("twelve", 20), 20);
        assert_eq!(parse_count_or("", 3), 3);
        assert_eq!(parse_count_or("-4", 3), 3);
    }
}
