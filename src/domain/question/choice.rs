//! Answer choice entity owned by a question.

use serde::Serialize;

use crate::domain::foundation::{require_length, ChoiceId, ValidationError};

/// Maximum length for choice text, in characters.
pub const MAX_CHOICE_TEXT_LENGTH: usize = 100;

/// A single answer option of a [`Question`](super::Question).
///
/// Choices only exist inside their question. The id and text are fixed
/// once created; the correctness flag may be flipped by anyone holding a
/// mutable reference, including callers going through
/// [`Question::choices_mut`](super::Question::choices_mut).
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Choice {
    id: ChoiceId,
    text: String,
    is_correct: bool,
}

impl Choice {
    /// Creates a choice after checking the text length.
    pub(crate) fn new(id: ChoiceId, text: String, is_correct: bool) -> Result<Self, ValidationError> {
        require_length("text", &text, MAX_CHOICE_TEXT_LENGTH)?;
        Ok(Self {
            id,
            text,
            is_correct,
        })
    }

    /// Returns the choice ID, unique within its question.
    pub fn id(&self) -> ChoiceId {
        self.id
    }

    /// Returns the choice text.
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Returns whether this choice is marked correct.
    pub fn is_correct(&self) -> bool {
        self.is_correct
    }

    /// Marks this choice as correct or incorrect.
    pub fn set_correct(&mut self, is_correct: bool) {
        self.is_correct = is_correct;
    }
}
