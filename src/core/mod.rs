//! Core domain types for word generation
//!
//! Case policies, character sets and constraint values. These types carry no
//! behavior beyond simple queries; the checking and sampling logic lives in
//! `generator`.

mod case;
mod charset;
mod constraints;

pub use case::CasePolicy;
pub use charset::CharacterSet;
pub use constraints::{ConstraintSet, LengthBounds, MAX_GROUPS, MatchMode, RequiredGroups};
