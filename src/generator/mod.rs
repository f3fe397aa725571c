//! Word generation engine
//!
//! This module contains the checking, sampling and width-sorting logic.

mod checker;
mod collection;
mod sampler;
mod width;

pub use checker::WordChecker;
pub use collection::OutputCollection;
pub use sampler::{AttemptBudget, SampleResult, WordSampler};
pub use width::{NO_KERNING_SENTINEL, sort_by_width, word_width};
