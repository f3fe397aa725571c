//! Host application capabilities
//!
//! The generator never touches a font editor directly. It sees the host
//! through these narrow traits: which characters are available, how glyph
//! names map to characters, glyph metrics for width sorting, where output
//! goes, and how to tell the user something.

mod profile;

pub use profile::{FontProfile, ProfileError};

use thiserror::Error;

/// Result of resolving a glyph name to a character
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GlyphLookup {
    /// The glyph exists and encodes this character
    Found(char),
    /// The glyph exists but has no Unicode value
    Unencoded,
    /// No glyph with that name
    Missing,
}

/// Characters available in the current design context
pub trait CharacterSource {
    /// Every character encoded by the current font
    fn characters(&self) -> Vec<char>;

    /// Resolve a glyph name to the character it encodes
    fn glyph_character(&self, name: &str) -> GlyphLookup;

    /// Characters of the glyphs currently selected by the user
    fn selected_characters(&self) -> Vec<char> {
        Vec::new()
    }

    /// Characters of the glyphs tagged with a mark color
    fn marked_characters(&self, _color: &str) -> Vec<char> {
        Vec::new()
    }
}

/// Glyph advance widths and pair kerning, keyed by character
pub trait GlyphMetrics {
    fn advance_width(&self, c: char) -> Option<f64>;

    /// Kerning between two characters
    ///
    /// Implementations may return a value at or above
    /// `generator::NO_KERNING_SENTINEL` to mean "no kerning".
    fn kerning(&self, left: char, right: char) -> Option<f64>;
}

/// Error raised when an output surface cannot display text
#[derive(Debug, Error)]
pub enum SurfaceError {
    #[error("no output surface is available")]
    Unavailable,
    #[error("failed to write output: {0}")]
    Io(#[from] std::io::Error),
}

/// Where generated words are displayed
pub trait OutputSurface {
    /// Replace the surface contents with `text`
    ///
    /// # Errors
    ///
    /// Returns `SurfaceError` if the surface cannot show the text.
    fn show(&mut self, text: &str) -> Result<(), SurfaceError>;
}

/// Blocking notices to the user
pub trait Notifier {
    fn notify(&mut self, message: &str);
}

/// A host with no font open
pub struct NoFont;

impl CharacterSource for NoFont {
    fn characters(&self) -> Vec<char> {
        Vec::new()
    }

    fn glyph_character(&self, _name: &str) -> GlyphLookup {
        GlyphLookup::Missing
    }
}
