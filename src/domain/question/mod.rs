//! Question domain module.
//!
//! A quiz question and the answer choices it owns, with the rules for
//! adding, removing, marking and selecting choices.

mod aggregate;
mod choice;
mod errors;
mod factory;

pub use aggregate::{Question, DEFAULT_MAX_SELECTIONS, MAX_TITLE_LENGTH};
pub use choice::{Choice, MAX_CHOICE_TEXT_LENGTH};
pub use errors::QuestionError;
pub use factory::{QuestionDefaults, QuestionFactory};
