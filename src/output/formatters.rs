//! Formatting utilities for terminal output

use crate::core::CasePolicy;
use crate::generator::AttemptBudget;
use crate::input::GroupPreset;
use crate::settings::CharsetMode;

/// Format a preset as "key  name: letters"
#[must_use]
pub fn preset_line(preset: &GroupPreset, key_width: usize) -> String {
    format!("@{:<key_width$}  {}", preset.key(), preset.field_text())
}

/// Format a writing system and its languages
#[must_use]
pub fn dictionary_line(writing_system: &str, languages: &[&str]) -> String {
    format!("{writing_system}: {}", languages.join(", "))
}

/// Summarize a run, e.g. "12/20 words (20 draws)"
#[must_use]
pub fn run_summary(found: usize, requested: usize, attempts: usize) -> String {
    let draws = if attempts == 1 { "draw" } else { "draws" };
    format!("{found}/{requested} words ({attempts} {draws})")
}

/// Describe how a run will draw and transform words
#[must_use]
pub fn settings_summary(case: CasePolicy, charset: &CharsetMode, budget: AttemptBudget) -> String {
    format!("{case} | {charset} | {budget}")
}
