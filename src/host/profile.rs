//! Plain-text font profile
//!
//! Stands in for the font editor when running from the command line. A profile
//! lists glyphs, their characters and widths, kerning pairs, the current
//! selection and mark-color tags:
//!
//! ```text
//! # name      char     width
//! glyph a     a        500
//! glyph eacute U+00E9  500
//! glyph .notdef -      600
//! kern  a v  -40
//! select a b c
//! mark  red  a e
//! ```
//!
//! `kern`, `select` and `mark` accept single characters, `U+XXXX` code points
//! or glyph names.

use super::{CharacterSource, GlyphLookup, GlyphMetrics};
use rustc_hash::FxHashMap;
use std::fs;
use std::path::Path;
use thiserror::Error;

/// Error loading a font profile
#[derive(Debug, Error)]
pub enum ProfileError {
    #[error("failed to read profile {path}: {source}")]
    Read {
        path: String,
        source: std::io::Error,
    },
    #[error("line {line}: {message}")]
    Syntax { line: usize, message: String },
}

#[derive(Debug, Clone)]
struct Glyph {
    character: Option<char>,
    width: Option<f64>,
}

/// Glyph table, kerning and selection parsed from a profile file
#[derive(Debug, Clone, Default)]
pub struct FontProfile {
    glyphs: FxHashMap<String, Glyph>,
    encoded: Vec<char>,
    widths: FxHashMap<char, f64>,
    kerning: FxHashMap<(char, char), f64>,
    selection: Vec<char>,
    marks: FxHashMap<String, Vec<char>>,
}

impl FontProfile {
    /// Load a profile from a file
    ///
    /// # Errors
    ///
    /// Returns `ProfileError` if the file cannot be read or a line is malformed.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, ProfileError> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|source| ProfileError::Read {
            path: path.display().to_string(),
            source,
        })?;
        Self::parse(&content)
    }

    /// Parse profile text
    ///
    /// # Errors
    ///
    /// Returns `ProfileError::Syntax` for unknown directives, bad numbers or
    /// unresolvable characters.
    pub fn parse(content: &str) -> Result<Self, ProfileError> {
        let mut profile = Self::default();

        for (index, raw) in content.lines().enumerate() {
            let line = index + 1;
            let text = raw.trim();
            if text.is_empty() || text.starts_with('#') {
                continue;
            }

            let fields: Vec<&str> = text.split_whitespace().collect();
            let syntax = |message: String| ProfileError::Syntax { line, message };

            match fields.as_slice() {
                ["glyph", name, value, rest @ ..] => {
                    let character = parse_encoding(value).map_err(syntax)?;
                    let width = match rest {
                        [] => None,
                        [w] => Some(parse_number(w).map_err(syntax)?),
                        _ => return Err(syntax("too many fields for glyph".to_string())),
                    };
                    profile.add_glyph(name, character, width);
                }
                ["kern", left, right, value] => {
                    let left = profile.resolve(left).map_err(syntax)?;
                    let right = profile.resolve(right).map_err(syntax)?;
                    let value = parse_number(value).map_err(syntax)?;
                    profile.kerning.insert((left, right), value);
                }
                ["select", chars @ ..] => {
                    for token in chars {
                        let c = profile.resolve(token).map_err(syntax)?;
                        profile.selection.push(c);
                    }
                }
                ["mark", color, chars @ ..] => {
                    let mut marked = Vec::with_capacity(chars.len());
                    for token in chars {
                        marked.push(profile.resolve(token).map_err(syntax)?);
                    }
                    profile
                        .marks
                        .entry((*color).to_string())
                        .or_default()
                        .extend(marked);
                }
                [directive, ..] => {
                    return Err(syntax(format!("unknown or malformed '{directive}' line")));
                }
                [] => {}
            }
        }

        Ok(profile)
    }

    fn add_glyph(&mut self, name: &str, character: Option<char>, width: Option<f64>) {
        if let Some(c) = character {
            if !self.encoded.contains(&c) {
                self.encoded.push(c);
            }
            if let Some(w) = width {
                self.widths.insert(c, w);
            }
        }
        self.glyphs
            .insert(name.to_string(), Glyph { character, width });
    }

    /// Resolve a character token: single char, `U+XXXX`, or glyph name
    fn resolve(&self, token: &str) -> Result<char, String> {
        if let Some(c) = single_char(token) {
            return Ok(c);
        }
        if let Some(c) = parse_codepoint(token) {
            return Ok(c);
        }
        match self.glyph_character(token) {
            GlyphLookup::Found(c) => Ok(c),
            GlyphLookup::Unencoded => Err(format!("glyph '{token}' has no Unicode value")),
            GlyphLookup::Missing => Err(format!("unknown glyph or character '{token}'")),
        }
    }

    /// Advance width recorded for a glyph name
    #[must_use]
    pub fn glyph_width(&self, name: &str) -> Option<f64> {
        self.glyphs.get(name).and_then(|g| g.width)
    }

    #[must_use]
    pub fn glyph_count(&self) -> usize {
        self.glyphs.len()
    }
}

impl CharacterSource for FontProfile {
    fn characters(&self) -> Vec<char> {
        self.encoded.clone()
    }

    fn glyph_character(&self, name: &str) -> GlyphLookup {
        match self.glyphs.get(name) {
            Some(Glyph {
                character: Some(c), ..
            }) => GlyphLookup::Found(*c),
            Some(_) => GlyphLookup::Unencoded,
            None => GlyphLookup::Missing,
        }
    }

    fn selected_characters(&self) -> Vec<char> {
        self.selection.clone()
    }

    fn marked_characters(&self, color: &str) -> Vec<char> {
        self.marks.get(color).cloned().unwrap_or_default()
    }
}

impl GlyphMetrics for FontProfile {
    fn advance_width(&self, c: char) -> Option<f64> {
        self.widths.get(&c).copied()
    }

    fn kerning(&self, left: char, right: char) -> Option<f64> {
        self.kerning.get(&(left, right)).copied()
    }
}

fn single_char(token: &str) -> Option<char> {
    let mut chars = token.chars();
    match (chars.next(), chars.next()) {
        (Some(c), None) => Some(c),
        _ => None,
    }
}

fn parse_codepoint(token: &str) -> Option<char> {
    let hex = token
        .strip_prefix("U+")
        .or_else(|| token.strip_prefix("u+"))?;
    u32::from_str_radix(hex, 16).ok().and_then(char::from_u32)
}

/// Glyph encoding field: a character, `U+XXXX`, or `-` for unencoded
fn parse_encoding(value: &str) -> Result<Option<char>, String> {
    if value == "-" {
        return Ok(None);
    }
    single_char(value)
        .or_else(|| parse_codepoint(value))
        .map(Some)
        .ok_or_else(|| format!("invalid character '{value}'"))
}

fn parse_number(value: &str) -> Result<f64, String> {
    value
        .parse()
        .map_err(|_| format!("invalid number '{value}'"))
}
