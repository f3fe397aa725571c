//! word-o-mat
//!
//! Generates test words for type design: random words from a dictionary that
//! satisfy length, character set, required letter and pattern constraints.
//!
//! # Quick Start
//!
//! ```rust
//! use rand::SeedableRng;
//! use rand::rngs::StdRng;
//! use wordomat::core::{CasePolicy, CharacterSet, ConstraintSet};
//! use wordomat::generator::WordSampler;
//!
//! let dictionary = ["hamburgefonstiv", "nonsense", "minimum"];
//! let constraints = ConstraintSet {
//!     charset: CharacterSet::restricted("minum".chars()),
//!     ..ConstraintSet::default()
//! };
//! let mut rng = StdRng::seed_from_u64(7);
//!
//! let words = WordSampler::default().generate(&dictionary, 3, &constraints, CasePolicy::KeepCase, &mut rng);
//! assert!(words.as_slice().iter().all(|w| w == "minimum"));
//! ```

// Core domain types
pub mod core;

// Checking, sampling and width sorting
pub mod generator;

// Host application capabilities
pub mod host;

// Settings parsing and validation
pub mod input;

// User-facing settings
pub mod settings;

// Word lists
pub mod wordlists;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;
