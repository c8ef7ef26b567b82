//! Question aggregate.
//!
//! A question owns its answer choices outright. Choices are added and
//! removed only through the question, which hands out their ids.

use std::collections::HashSet;

use serde::Serialize;

use super::choice::Choice;
use super::errors::QuestionError;
use crate::domain::foundation::{require_length, ChoiceId, Points, QuestionId, QuestionIdGenerator};

/// Maximum length for question title, in characters.
pub const MAX_TITLE_LENGTH: usize = 200;

/// Selection limit used when none is given.
pub const DEFAULT_MAX_SELECTIONS: u32 = 1;

/// Question aggregate - a titled prompt with an ordered list of choices.
///
/// # Invariants
///
/// - `id` is unique for the lifetime of the process
/// - `title` is 1-200 characters and `points` is 1-100, both fixed after construction
/// - choice ids are issued as 1, 2, 3, ... and never reissued, even after removal
/// - `choices` keeps insertion order
///
/// A question can be serialized for display or export, but it can be neither
/// cloned nor deserialized, since either would yield a second question
/// carrying an id already in use.
///
/// ```compile_fail
/// fn requires_clone<T: Clone>() {}
/// requires_clone::<quiz_question::domain::question::Question>();
/// ```
///
/// ```compile_fail
/// fn requires_deserialize<T: serde::de::DeserializeOwned>() {}
/// requires_deserialize::<quiz_question::domain::question::Question>();
/// ```
#[derive(Debug, PartialEq, Eq, Serialize)]
pub struct Question {
    /// Unique identifier for this question.
    id: QuestionId,

    /// Question title.
    title: String,

    /// Points awarded for the question.
    points: Points,

    /// How many choices a caller may submit at once.
    max_selections: u32,

    /// Answer choices in insertion order.
    choices: Vec<Choice>,

    /// Id handed to the next added choice.
    #[serde(skip)]
    next_choice_id: ChoiceId,
}

impl Question {
    /// Create a question with default points and selection limit.
    ///
    /// # Errors
    ///
    /// - `Validation` if title is empty or longer than 200 characters
    pub fn new(title: impl Into<String>) -> Result<Self, QuestionError> {
        Self::with_settings(title, Points::MIN, DEFAULT_MAX_SELECTIONS)
    }

    /// Create a question with explicit points and selection limit.
    ///
    /// `max_selections` is stored as given.
    ///
    /// # Errors
    ///
    /// - `Validation` if title is empty or longer than 200 characters
    /// - `Validation` if points is outside 1-100
    pub fn with_settings(
        title: impl Into<String>,
        points: u32,
        max_selections: u32,
    ) -> Result<Self, QuestionError> {
        Self::create(QuestionIdGenerator::global(), title.into(), points, max_selections)
    }

    /// Validates inputs, then draws an id from `ids`.
    pub(crate) fn create(
        ids: &QuestionIdGenerator,
        title: String,
        points: u32,
        max_selections: u32,
    ) -> Result<Self, QuestionError> {
        require_length("title", &title, MAX_TITLE_LENGTH)?;
        let points = Points::try_new(points)?;

        let question = Self {
            id: ids.next_id(),
            title,
            points,
            max_selections,
            choices: Vec::new(),
            next_choice_id: ChoiceId::FIRST,
        };
        tracing::debug!(question_id = %question.id, points = %question.points, "question created");
        Ok(question)
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Accessors
    // ─────────────────────────────────────────────────────────────────────────

    /// Returns the question ID.
    pub fn id(&self) -> QuestionId {
        self.id
    }

    /// Returns the question title.
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Returns the points awarded.
    pub fn points(&self) -> Points {
        self.points
    }

    /// Returns the selection limit.
    pub fn max_selections(&self) -> u32 {
        self.max_selections
    }

    /// Returns the choices in insertion order.
    pub fn choices(&self) -> &[Choice] {
        &self.choices
    }

    /// Returns the number of choices.
    pub fn choice_count(&self) -> usize {
        self.choices.len()
    }

    /// Looks up a choice by id.
    pub fn choice(&self, choice_id: ChoiceId) -> Option<&Choice> {
        self.choices.iter().find(|c| c.id() == choice_id)
    }

    /// Mutable view of the choices.
    ///
    /// Callers can change correctness flags but cannot add, remove or
    /// reorder choices through the slice.
    pub fn choices_mut(&mut self) -> &mut [Choice] {
        &mut self.choices
    }

    /// Mutable lookup of a choice by id.
    pub fn choice_mut(&mut self, choice_id: ChoiceId) -> Option<&mut Choice> {
        self.choices.iter_mut().find(|c| c.id() == choice_id)
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Mutations
    // ─────────────────────────────────────────────────────────────────────────

    /// Append a new choice and return it.
    ///
    /// # Errors
    ///
    /// - `Validation` if text is empty or longer than 100 characters
    /// - `ChoiceIdsExhausted` if every choice id has been issued
    pub fn add_choice(
        &mut self,
        text: impl Into<String>,
        is_correct: bool,
    ) -> Result<&Choice, QuestionError> {
        let following = self
            .next_choice_id
            .next()
            .ok_or(QuestionError::ChoiceIdsExhausted)?;
        let choice = Choice::new(self.next_choice_id, text.into(), is_correct)?;
        self.next_choice_id = following;

        tracing::debug!(
            question_id = %self.id,
            choice_id = %choice.id(),
            is_correct,
            "choice added"
        );
        self.choices.push(choice);
        Ok(&self.choices[self.choices.len() - 1])
    }

    /// Remove the choice with the given id, keeping the order of the rest.
    ///
    /// # Errors
    ///
    /// - `ChoiceNotFound` if no such choice exists
    pub fn remove_choice_by_id(&mut self, choice_id: ChoiceId) -> Result<Choice, QuestionError> {
        let index = self
            .choices
            .iter()
            .position(|c| c.id() == choice_id)
            .ok_or(QuestionError::ChoiceNotFound(choice_id))?;

        let removed = self.choices.remove(index);
        tracing::debug!(question_id = %self.id, choice_id = %choice_id, "choice removed");
        Ok(removed)
    }

    /// Remove every choice. Ids already issued stay retired.
    pub fn remove_all_choices(&mut self) {
        let removed = self.choices.len();
        self.choices.clear();
        tracing::debug!(question_id = %self.id, removed, "choices cleared");
    }

    /// Replace the correct set: listed choices become correct, all others incorrect.
    ///
    /// Ids that match no choice are ignored.
    pub fn set_correct_choices(&mut self, choice_ids: impl IntoIterator<Item = ChoiceId>) {
        let wanted: HashSet<ChoiceId> = choice_ids.into_iter().collect();
        for choice in &mut self.choices {
            choice.set_correct(wanted.contains(&choice.id()));
        }
        tracing::debug!(question_id = %self.id, requested = wanted.len(), "correct choices set");
    }

    /// Returns the submitted ids that name a correct choice, in submission order.
    ///
    /// Ids that are unknown or name an incorrect choice are left out.
    ///
    /// # Errors
    ///
    /// - `SelectionLimitExceeded` if more than `max_selections` ids are submitted
    pub fn select_choices(&self, choice_ids: &[ChoiceId]) -> Result<Vec<ChoiceId>, QuestionError> {
        if choice_ids.len() > self.max_selections as usize {
            return Err(QuestionError::SelectionLimitExceeded {
                max: self.max_selections,
            });
        }

        let correct: HashSet<ChoiceId> = self.correct_choice_ids().into_iter().collect();
        Ok(choice_ids
            .iter()
            .copied()
            .filter(|id| correct.contains(id))
            .collect())
    }

    /// Returns the ids of all correct choices, in choice order.
    pub fn correct_choice_ids(&self) -> Vec<ChoiceId> {
        self.choices
            .iter()
            .filter(|c| c.is_correct())
            .map(Choice::id)
            .collect()
    }
}
