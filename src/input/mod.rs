//! Settings input handling
//!
//! Parses letter fields, expands group presets and validates settings into a
//! `GenerationRequest`.

mod parse;
pub mod presets;
mod validate;

pub use parse::{
    ParsedLetters, SkipReason, SkippedToken, expand_group_shorthand, parse_count_or, parse_letters,
};
pub use presets::{GroupPreset, PRESETS, find_preset};
pub use validate::{CharsetOrigin, ConfigError, GenerationRequest, prepare};
