//! Ordering output by rendered width
//!
//! Width of a word = sum of advance widths + kerning of each adjacent pair.
//! Unknown widths and kerning count as zero.

use crate::host::GlyphMetrics;
use rayon::prelude::*;

/// Kerning values at or above this are the host's "no kerning" marker
pub const NO_KERNING_SENTINEL: f64 = 100_000.0;

/// Compute the rendered width of a word
#[must_use]
pub fn word_width<M: GlyphMetrics + ?Sized>(word: &str, metrics: &M) -> f64 {
    let chars: Vec<char> = word.chars().collect();

    let advance: f64 = chars
        .iter()
        .map(|&c| metrics.advance_width(c).unwrap_or(0.0))
        .sum();

    let kerning: f64 = chars
        .windows(2)
        .map(|pair| match metrics.kerning(pair[0], pair[1]) {
            Some(value) if value < NO_KERNING_SENTINEL => value,
            _ => 0.0,
        })
        .sum();

    advance + kerning
}

/// Sort words by ascending width, keeping the original order for ties
///
/// # Examples
/// ```
/// use wordomat::generator::sort_by_width;
/// use wordomat::host::FontProfile;
///
/// let profile = FontProfile::parse("glyph i i 200\nglyph m m 800\nglyph o o 500\n").unwrap();
/// let words = vec!["mom".to_string(), "io".to_string(), "moi".to_string()];
/// assert_eq!(sort_by_width(&words, &profile), ["io", "moi", "mom"]);
/// ```
#[must_use]
pub fn sort_by_width<M: GlyphMetrics + Sync + ?Sized>(words: &[String], metrics: &M) -> Vec<String> {
    let widths: Vec<f64> = words
        .par_iter()
        .map(|word| word_width(word, metrics))
        .collect();

    let mut order: Vec<usize> = (0..words.len()).collect();
    // Vec::sort_by is stable
    order.sort_by(|&a, &b| widths[a].total_cmp(&widths[b]));

    order.into_iter().map(|i| words[i].clone()).collect()
}
