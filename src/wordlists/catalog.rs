//! Dictionaries grouped by writing system and language

use super::loader::{self, DictionaryFile, LoadError};
use super::{ENGLISH, words_from_slice};
use crate::input::ConfigError;
use log::{info, warn};
use std::collections::BTreeMap;
use std::path::Path;

/// Writing system of the embedded dictionary
pub const BUILTIN_WRITING_SYSTEM: &str = "Latin";
/// Language of the embedded dictionary
pub const BUILTIN_LANGUAGE: &str = "english";

/// Word list shipped with most Unix systems
pub const SYSTEM_WORD_LIST: &str = "/usr/share/dict/words";
/// Writing system the system word list is filed under
pub const USER_WRITING_SYSTEM: &str = "User";
/// Language the system word list is filed under
pub const USER_LANGUAGE: &str = "user";

/// Loaded dictionaries, ordered by writing system, then language
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    dictionaries: BTreeMap<String, BTreeMap<String, Vec<String>>>,
}

/// A catalog plus the files that could not be read
#[derive(Debug, Default)]
pub struct LoadReport {
    pub catalog: Catalog,
    pub failures: Vec<LoadError>,
}

impl LoadReport {
    /// Add a plain word list, such as `SYSTEM_WORD_LIST`, as `User/user`
    ///
    /// A list that cannot be read is logged and recorded in `failures`.
    pub fn add_system_word_list<P: AsRef<Path>>(&mut self, path: P) {
        match loader::load_from_file(path) {
            Ok(words) => self.catalog.insert(USER_WRITING_SYSTEM, USER_LANGUAGE, words),
            Err(err) => {
                warn!("{err}");
                self.failures.push(err);
            }
        }
    }
}

impl Catalog {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Catalog holding only the embedded English list
    #[must_use]
    pub fn builtin() -> Self {
        let mut catalog = Self::new();
        catalog.insert(BUILTIN_WRITING_SYSTEM, BUILTIN_LANGUAGE, words_from_slice(ENGLISH));
        catalog
    }

    /// Load every dictionary under `dir`
    ///
    /// # Errors
    ///
    /// Returns `LoadError::MissingDirectory` if `dir` does not exist.
    pub fn load_directory<P: AsRef<Path>>(dir: P) -> Result<LoadReport, LoadError> {
        let files = loader::discover(dir)?;
        Ok(Self::load_files(&files, |_| {}))
    }

    /// Load the given dictionary files
    ///
    /// Unreadable files are logged, recorded in the report and skipped.
    /// `on_file` is called once per file, before it is read.
    pub fn load_files<F: FnMut(&DictionaryFile)>(files: &[DictionaryFile], mut on_file: F) -> LoadReport {
        let mut report = LoadReport::default();

        for file in files {
            on_file(file);
            match loader::load_dictionary_file(&file.path) {
                Ok(words) => report
                    .catalog
                    .insert(&file.writing_system, &file.language, words),
                Err(err) => {
                    warn!("{err}");
                    report.failures.push(err);
                }
            }
        }

        info!(
            "loaded {} dictionaries ({} failed)",
            report.catalog.len(),
            report.failures.len()
        );
        report
    }

    /// Add or replace a dictionary
    pub fn insert(&mut self, writing_system: &str, language: &str, words: Vec<String>) {
        self.dictionaries
            .entry(writing_system.to_string())
            .or_default()
            .insert(language.to_string(), words);
    }

    /// Writing systems in sorted order
    pub fn writing_systems(&self) -> impl Iterator<Item = &str> {
        self.dictionaries.keys().map(String::as_str)
    }

    /// Languages available for a writing system, in sorted order
    #[must_use]
    pub fn languages(&self, writing_system: &str) -> Vec<&str> {
        self.dictionaries
            .get(writing_system)
            .map(|langs| langs.keys().map(String::as_str).collect())
            .unwrap_or_default()
    }

    /// Words of one dictionary
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::UnknownDictionary` if no such dictionary was loaded.
    pub fn words(&self, writing_system: &str, language: &str) -> Result<&[String], ConfigError> {
        self.dictionaries
            .get(writing_system)
            .and_then(|langs| langs.get(language))
            .map(Vec::as_slice)
            .ok_or_else(|| ConfigError::UnknownDictionary {
                writing_system: writing_system.to_string(),
                language: language.to_string(),
            })
    }

    /// The first writing system and its first language
    #[must_use]
    pub fn default_selection(&self) -> Option<(&str, &str)> {
        let (ws, langs) = self.dictionaries.iter().next()?;
        let lang = langs.keys().next()?;
        Some((ws.as_str(), lang.as_str()))
    }

    /// Number of dictionaries
    #[must_use]
    pub fn len(&self) -> usize {
        self.dictionaries.values().map(BTreeMap::len).sum()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn builtin_has_english() {
        let catalog = Catalog::builtin();
        let words = catalog.words("Latin", "english").unwrap();

        assert_eq!(words.len(), ENGLISH.len());
        assert_eq!(catalog.default_selection(), Some(("Latin", "english")));
    }

    #[test]
    fn unknown_dictionary() {
        let catalog = Catalog::builtin();
        let err = catalog.words("Latin", "klingon").unwrap_err();
        assert!(matches!(err, ConfigError::UnknownDictionary { .. }));
    }

    #[test]
    fn languages_sorted() {
        let mut catalog = Catalog::new();
        catalog.insert("Latin", "german", vec!["haus".to_string()]);
        catalog.insert("Latin", "dutch", vec!["huis".to_string()]);
        catalog.insert("Cyrillic", "russian", vec!["дом".to_string()]);

        assert_eq!(catalog.writing_systems().collect::<Vec<_>>(), ["Cyrillic", "Latin"]);
        assert_eq!(catalog.languages("Latin"), ["dutch", "german"]);
        assert!(catalog.languages("Greek").is_empty());
        assert_eq!(catalog.len(), 3);
        assert_eq!(catalog.default_selection(), Some(("Cyrillic", "russian")));
    }

    #[test]
    fn empty_catalog() {
        let catalog = Catalog::new();
        assert!(catalog.is_empty());
        assert_eq!(catalog.default_selection(), None);
    }

    #[test]
    fn load_directory_skips_unreadable_files() {
        let dir = TempDir::new().unwrap();
        fs::create_dir(dir.path().join("Latin")).unwrap();
        fs::write(dir.path().join("Latin/dutch.txt"), "Bron: test\n*****\nijs\nvogel\n").unwrap();
        fs::write(dir.path().join("Latin/broken.txt"), [0xff, 0xfe, 0x00, 0xc3]).unwrap();

        let files = loader::discover(dir.path()).unwrap();
        let mut seen = Vec::new();
        let report = Catalog::load_files(&files, |file| seen.push(file.language.clone()));

        assert_eq!(seen, ["broken", "dutch"]);
        assert_eq!(report.failures.len(), 1);
        assert_eq!(report.catalog.words("Latin", "dutch").unwrap(), ["ijs", "vogel"]);
        assert!(report.catalog.words("Latin", "broken").is_err());
    }

    #[test]
    fn load_directory_reads_all() {
        let dir = TempDir::new().unwrap();
        fs::create_dir(dir.path().join("Greek")).unwrap();
        fs::write(dir.path().join("Greek/greek.txt"), "σπίτι\n").unwrap();

        let report = Catalog::load_directory(dir.path()).unwrap();
        assert!(report.failures.is_empty());
        assert_eq!(report.catalog.default_selection(), Some(("Greek", "greek")));
    }

    #[test]
    fn system_word_list_filed_as_user() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("words");
        fs::write(&path, "kerning\n*****\nspacing\n").unwrap();

        let mut report = LoadReport {
            catalog: Catalog::builtin(),
            failures: Vec::new(),
        };
        report.add_system_word_list(&path);

        assert!(report.failures.is_empty());
        assert_eq!(
            report.catalog.words("User", "user").unwrap(),
            ["kerning", "*****", "spacing"]
        );
        assert_eq!(report.catalog.default_selection(), Some(("Latin", "english")));
    }

    #[test]
    fn missing_system_word_list_is_recorded() {
        let mut report = LoadReport {
            catalog: Catalog::builtin(),
            failures: Vec::new(),
        };
        report.add_system_word_list("/nonexistent/dict/words");

        assert_eq!(report.failures.len(), 1);
        assert!(matches!(report.failures[0], LoadError::Read { .. }));
        assert!(report.catalog.words("User", "user").is_err());
        assert_eq!(report.catalog.len(), 1);
    }

    #[test]
    fn load_missing_directory() {
        let result = Catalog::load_directory("/nonexistent/dictionaries");
        assert!(matches!(result, Err(LoadError::MissingDirectory(_))));
    }
}
