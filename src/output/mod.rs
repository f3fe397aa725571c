//! Terminal output
//!
//! Console implementations of the host output traits, plus printing of
//! command results.

mod console;
pub mod display;
pub mod formatters;

pub use console::{ConsoleNotifier, ConsoleSurface, FileSurface};
pub use display::{print_catalog, print_console_words, print_presets, print_run_summary};
