//! Display functions for command results

use super::formatters::{dictionary_line, preset_line, run_summary};
use crate::commands::GenerateOutcome;
use crate::input::PRESETS;
use crate::wordlists::{Catalog, LoadError};
use colored::Colorize;

/// Print words the output surface could not take
pub fn print_console_words(text: &str) {
    println!("{} {}", "word-o-mat:".bright_cyan().bold(), text);
}

/// Print a one-line summary of a run to stderr
pub fn print_run_summary(outcome: &GenerateOutcome, requested: usize) {
    let summary = run_summary(outcome.words.len(), requested, outcome.attempts);
    if outcome.words.len() < requested {
        eprintln!("{}", summary.yellow());
    } else {
        eprintln!("{}", summary.green());
    }
}

/// Print the built-in letter group presets
pub fn print_presets() {
    println!("\n{}", "Letter group presets".bright_cyan().bold());
    println!("{}", "─".repeat(50).cyan());

    let width = PRESETS.iter().map(|p| p.key().len()).max().unwrap_or(0);
    for preset in PRESETS {
        println!("  {}", preset_line(preset, width));
    }
    println!("\nUse as e.g. {}", "--group1 @ascenders".bright_yellow());
}

/// Print available dictionaries and files that failed to load
pub fn print_catalog(catalog: &Catalog, failures: &[LoadError]) {
    println!("\n{}", "Dictionaries".bright_cyan().bold());
    println!("{}", "─".repeat(50).cyan());

    for ws in catalog.writing_systems() {
        println!("  {}", dictionary_line(ws, &catalog.languages(ws)));
    }

    if let Some((ws, lang)) = catalog.default_selection() {
        println!("\nDefault: {}", format!("{ws}/{lang}").bright_yellow());
    }

    for failure in failures {
        println!("  {} {failure}", "✗".red());
    }
}
