//! Word lists
//!
//! The embedded English list is compiled into the binary. Further dictionaries
//! are loaded from a folder of `<writing system>/<language>.txt` files, or from
//! a single custom list.

pub mod catalog;
mod embedded;
pub mod loader;

pub use catalog::{Catalog, LoadReport, SYSTEM_WORD_LIST};
pub use embedded::{ENGLISH, ENGLISH_COUNT};
pub use loader::{
    DictionaryFile, LoadError, load_dictionary_file, load_from_file, words_from_slice,
};
