//! Console and file implementations of the host output traits

use crate::host::{Notifier, OutputSurface, SurfaceError};
use colored::Colorize;
use log::info;
use std::fs;
use std::path::PathBuf;

/// Prints notices to stderr
#[derive(Debug, Default)]
pub struct ConsoleNotifier {
    shown: usize,
}

impl ConsoleNotifier {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of notices printed so far
    #[must_use]
    pub const fn shown(&self) -> usize {
        self.shown
    }
}

impl Notifier for ConsoleNotifier {
    fn notify(&mut self, message: &str) {
        info!("notice: {message}");
        eprintln!("{} {}", "word-o-mat:".bright_yellow().bold(), message);
        self.shown += 1;
    }
}

/// Prints words to stdout
#[derive(Debug, Default)]
pub struct ConsoleSurface;

impl OutputSurface for ConsoleSurface {
    fn show(&mut self, text: &str) -> Result<(), SurfaceError> {
        println!("{text}");
        Ok(())
    }
}

/// Writes words to a file, replacing its contents
#[derive(Debug, Clone)]
pub struct FileSurface {
    path: PathBuf,
}

impl FileSurface {
    #[must_use]
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl OutputSurface for FileSurface {
    fn show(&mut self, text: &str) -> Result<(), SurfaceError> {
        if self.path.is_dir() {
            return Err(SurfaceError::Unavailable);
        }
        fs::write(&self.path, format!("{text}\n"))?;
        info!("wrote words to {}", self.path.display());
        Ok(())
    }
}
