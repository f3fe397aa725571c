//! Dictionary loading and selection for the command line

use crate::input::ConfigError;
use crate::wordlists::loader::discover;
use crate::wordlists::{Catalog, LoadError, LoadReport};
use indicatif::{ProgressBar, ProgressStyle};
use log::warn;
use std::path::Path;

/// Load the dictionaries to choose from
///
/// Without a folder, the embedded English list is used. A folder with no
/// dictionary files also falls back to it. `system_words`, if given, is added
/// as `User/user`. Unreadable files are skipped and listed in the report.
///
/// # Errors
///
/// Returns `LoadError::MissingDirectory` if `dir` does not exist.
pub fn load_catalog(
    dir: Option<&Path>,
    system_words: Option<&Path>,
    show_progress: bool,
) -> Result<LoadReport, LoadError> {
    let mut report = load_folder(dir, show_progress)?;
    if let Some(path) = system_words {
        report.add_system_word_list(path);
    }
    Ok(report)
}

fn load_folder(dir: Option<&Path>, show_progress: bool) -> Result<LoadReport, LoadError> {
    let Some(dir) = dir else {
        return Ok(LoadReport {
            catalog: Catalog::builtin(),
            failures: Vec::new(),
        });
    };

    let files = discover(dir)?;
    if files.is_empty() {
        warn!(
            "no dictionaries found in {}, using the built-in list",
            dir.display()
        );
        return Ok(LoadReport {
            catalog: Catalog::builtin(),
            failures: Vec::new(),
        });
    }

    let pb = if show_progress {
        ProgressBar::new(files.len() as u64)
    } else {
        ProgressBar::hidden()
    };
    pb.set_style(
        ProgressStyle::with_template("{spinner:.green} [{bar:40.cyan/blue}] {pos}/{len} | {msg}")
            .unwrap_or_else(|_| ProgressStyle::default_bar())
            .progress_chars("█▓▒░"),
    );

    let report = Catalog::load_files(&files, |file| {
        pb.set_message(format!("{}/{}", file.writing_system, file.language));
        pb.inc(1);
    });
    pb.finish_and_clear();

    Ok(report)
}

/// Pick a dictionary by writing system and language
///
/// Missing choices default to the first writing system and its first
/// language, in sorted order.
///
/// # Errors
///
/// Returns `ConfigError::UnknownDictionary` if the choice matches nothing.
pub fn select_dictionary<'a>(
    catalog: &'a Catalog,
    writing_system: Option<&'a str>,
    language: Option<&'a str>,
) -> Result<(&'a str, &'a str, &'a [String]), ConfigError> {
    let unknown = || ConfigError::UnknownDictionary {
        writing_system: writing_system.unwrap_or_default().to_string(),
        language: language.unwrap_or_default().to_string(),
    };

    let ws = match writing_system {
        Some(ws) => ws,
        None => catalog.default_selection().map(|(ws, _)| ws).ok_or_else(unknown)?,
    };
    let lang = match language {
        Some(lang) => lang,
        None => catalog.languages(ws).first().copied().ok_or_else(unknown)?,
    };

    let words = catalog.words(ws, lang)?;
    Ok((ws, lang, words))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    fn catalog() -> Catalog {
        let mut catalog = Catalog::new();
        catalog.insert("Latin", "german", vec!["haus".to_string()]);
        catalog.insert("Latin", "dutch", vec!["huis".to_string()]);
        catalog.insert("Cyrillic", "russian", vec!["дом".to_string()]);
        catalog
    }

    #[test]
    fn builtin_without_folder() {
        let report = load_catalog(None, None, false).unwrap();
        assert!(report.catalog.words("Latin", "english").is_ok());
    }

    #[test]
    fn empty_folder_falls_back_to_builtin() {
        let dir = TempDir::new().unwrap();
        let report = load_catalog(Some(dir.path()), None, false).unwrap();
        assert_eq!(report.catalog.default_selection(), Some(("Latin", "english")));
    }

    #[test]
    fn folder_is_loaded() {
        let dir = TempDir::new().unwrap();
        fs::create_dir(dir.path().join("Latin")).unwrap();
        fs::write(dir.path().join("Latin/dutch.txt"), "ijs\n").unwrap();

        let report = load_catalog(Some(dir.path()), None, false).unwrap();
        assert_eq!(report.catalog.len(), 1);
        assert_eq!(report.catalog.words("Latin", "dutch").unwrap(), ["ijs"]);
    }

    #[test]
    fn missing_folder() {
        let result = load_catalog(Some(Path::new("/nonexistent/dictionaries")), None, false);
        assert!(matches!(result, Err(LoadError::MissingDirectory(_))));
    }

    #[test]
    fn system_words_added_as_user_dictionary() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("words");
        fs::write(&path, "aardvark\nzygote\n").unwrap();

        let report = load_catalog(None, Some(&path), false).unwrap();

        assert!(report.failures.is_empty());
        assert_eq!(report.catalog.languages("User"), ["user"]);
        assert_eq!(report.catalog.words("User", "user").unwrap(), ["aardvark", "zygote"]);
        assert_eq!(report.catalog.default_selection(), Some(("Latin", "english")));
    }

    #[test]
    fn missing_system_words_keep_loading() {
        let report = load_catalog(None, Some(Path::new("/nonexistent/dict/words")), false).unwrap();

        assert_eq!(report.failures.len(), 1);
        assert!(report.catalog.words("Latin", "english").is_ok());
    }

    #[test]
    fn default_selection_is_first_sorted() {
        let catalog = catalog();
        let (ws, lang, words) = select_dictionary(&catalog, None, None).unwrap();
        assert_eq!((ws, lang), ("Cyrillic", "russian"));
        assert_eq!(words, ["дом"]);
    }

    #[test]
    fn writing_system_picks_first_language() {
        let catalog = catalog();
        let (_, lang, _) = select_dictionary(&catalog, Some("Latin"), None).unwrap();
        assert_eq!(lang, "dutch");
    }

    #[test]
    fn explicit_selection() {
        let catalog = catalog();
        let (_, _, words) = select_dictionary(&catalog, Some("Latin"), Some("german")).unwrap();
        assert_eq!(words, ["haus"]);
    }

    #[test]
    fn unknown_selection() {
        let catalog = catalog();
        let err = select_dictionary(&catalog, Some("Greek"), None).unwrap_err();
        assert!(matches!(
            err,
            ConfigError::UnknownDictionary { ref writing_system, .. } if writing_system == "Greek"
        ));
        assert!(select_dictionary(&catalog, Some("Latin"), Some("french")).is_err());
    }
}
