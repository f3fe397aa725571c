//! Command implementations

pub mod dictionaries;
pub mod generate;

pub use dictionaries::{load_catalog, select_dictionary};
pub use generate::{Delivery, GenerateOutcome, NO_WORDS_NOTICE, Session};
