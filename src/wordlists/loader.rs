//! Word list loading utilities
//!
//! Word lists are UTF-8 text with one word per line. Lines are trimmed and
//! blank lines dropped. Dictionary files may also carry a header: if a file
//! contains a line of five asterisks, everything up to and including it is
//! skipped. Custom word lists have no header.

use log::debug;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Line separating a dictionary header from its words
pub const CONTENT_DELIMITER: &str = "*****";

/// Error loading dictionaries
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("Could not load dictionary file {}: {source}", path.display())]
    Read { path: PathBuf, source: io::Error },
    #[error("Dictionaries folder not found at {}", .0.display())]
    MissingDirectory(PathBuf),
}

/// A dictionary file found in a dictionaries folder
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DictionaryFile {
    pub writing_system: String,
    pub language: String,
    pub path: PathBuf,
}

/// Extract words from word list text, one per line
///
/// # Examples
/// ```
/// use wordomat::wordlists::loader::words_from_lines;
///
/// let words = words_from_lines(" kerning \n\n*****\nspacing\n");
/// assert_eq!(words, ["kerning", "*****", "spacing"]);
/// ```
#[must_use]
pub fn words_from_lines(content: &str) -> Vec<String> {
    content
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(ToString::to_string)
        .collect()
}

/// Extract words from dictionary text, skipping the header if present
///
/// # Examples
/// ```
/// use wordomat::wordlists::loader::words_from_text;
///
/// let words = words_from_text("Source: somewhere\n*****\n apple \n\nbanana\n");
/// assert_eq!(words, ["apple", "banana"]);
/// ```
#[must_use]
pub fn words_from_text(content: &str) -> Vec<String> {
    let lines: Vec<&str> = content.lines().collect();
    let start = lines
        .iter()
        .position(|line| line.trim() == CONTENT_DELIMITER)
        .map_or(0, |i| i + 1);

    lines[start..]
        .iter()
        .map(|line| line.trim())
        .filter(|line| !line.is_empty())
        .map(ToString::to_string)
        .collect()
}

fn read_text(path: &Path) -> Result<String, LoadError> {
    fs::read_to_string(path).map_err(|source| LoadError::Read {
        path: path.to_path_buf(),
        source,
    })
}

/// Load a custom word list
///
/// Every non-blank line is a word; no header is stripped.
///
/// # Errors
///
/// Returns `LoadError::Read` if the file cannot be read as UTF-8 text.
///
/// # Examples
/// ```no_run
/// use wordomat::wordlists::loader::load_from_file;
///
/// let words = load_from_file("my_words.txt").unwrap();
/// println!("Loaded {} words", words.len());
/// ```
pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Vec<String>, LoadError> {
    let path = path.as_ref();
    let words = words_from_lines(&read_text(path)?);
    debug!("loaded {} words from {}", words.len(), path.display());
    Ok(words)
}

/// Load a dictionary file, skipping its header
///
/// # Errors
///
/// Returns `LoadError::Read` if the file cannot be read as UTF-8 text.
pub fn load_dictionary_file<P: AsRef<Path>>(path: P) -> Result<Vec<String>, LoadError> {
    let path = path.as_ref();
    let words = words_from_text(&read_text(path)?);
    debug!("loaded {} dictionary words from {}", words.len(), path.display());
    Ok(words)
}

/// Convert embedded string slice to a word vector
#[must_use]
pub fn words_from_slice(slice: &[&str]) -> Vec<String> {
    slice.iter().map(|&s| s.to_string()).collect()
}

/// Find `<writing system>/<language>.txt` files in a dictionaries folder
///
/// Results are sorted by writing system, then language.
///
/// # Errors
///
/// Returns `LoadError::MissingDirectory` if `dir` is not a directory, or
/// `LoadError::Read` if it cannot be listed.
pub fn discover<P: AsRef<Path>>(dir: P) -> Result<Vec<DictionaryFile>, LoadError> {
    let dir = dir.as_ref();
    if !dir.is_dir() {
        return Err(LoadError::MissingDirectory(dir.to_path_buf()));
    }

    let read_dir = |path: &Path| {
        fs::read_dir(path).map_err(|source| LoadError::Read {
            path: path.to_path_buf(),
            source,
        })
    };

    let mut found = Vec::new();
    for ws_entry in read_dir(dir)?.flatten() {
        let ws_path = ws_entry.path();
        if !ws_path.is_dir() {
            continue;
        }
        let writing_system = ws_entry.file_name().to_string_lossy().into_owned();

        for entry in read_dir(&ws_path)?.flatten() {
            let path = entry.path();
            let is_txt = path
                .extension()
                .is_some_and(|ext| ext.eq_ignore_ascii_case("txt"));
            if !is_txt {
                continue;
            }
            if let Some(stem) = path.file_stem() {
                found.push(DictionaryFile {
                    writing_system: writing_system.clone(),
                    language: stem.to_string_lossy().into_owned(),
                    path,
                });
            }
        }
    }

    found.sort_by(|a, b| {
        (&a.writing_system, &a.language).cmp(&(&b.writing_system, &b.language))
    });
    Ok(found)
}
