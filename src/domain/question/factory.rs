//! Question creation with an explicit id source and configured defaults.

use serde::Deserialize;

use super::aggregate::{Question, DEFAULT_MAX_SELECTIONS};
use super::errors::QuestionError;
use crate::domain::foundation::{Points, QuestionIdGenerator, ValidationError};

/// Values applied when a question is created without explicit settings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
pub struct QuestionDefaults {
    #[serde(default = "default_points")]
    pub points: u32,

    #[serde(default = "default_max_selections")]
    pub max_selections: u32,
}

impl QuestionDefaults {
    /// Checks that the defaults would produce valid questions.
    pub fn validate(&self) -> Result<(), ValidationError> {
        Points::try_new(self.points)?;
        if self.max_selections == 0 {
            return Err(ValidationError::out_of_range(
                "max_selections",
                1,
                u32::MAX,
                self.max_selections,
            ));
        }
        Ok(())
    }
}

impl Default for QuestionDefaults {
    fn default() -> Self {
        Self {
            points: default_points(),
            max_selections: default_max_selections(),
        }
    }
}

fn default_points() -> u32 {
    Points::MIN
}

fn default_max_selections() -> u32 {
    DEFAULT_MAX_SELECTIONS
}

/// Creates questions from a single id generator.
#[derive(Debug, Clone, Copy)]
pub struct QuestionFactory<'a> {
    ids: &'a QuestionIdGenerator,
    defaults: QuestionDefaults,
}

impl QuestionFactory<'static> {
    /// Factory backed by the process-wide generator.
    pub fn new(defaults: QuestionDefaults) -> Self {
        Self::with_generator(QuestionIdGenerator::global(), defaults)
    }
}

impl<'a> QuestionFactory<'a> {
    /// Factory backed by a caller-owned generator.
    pub fn with_generator(ids: &'a QuestionIdGenerator, defaults: QuestionDefaults) -> Self {
        Self { ids, defaults }
    }

    pub fn defaults(&self) -> &QuestionDefaults {
        &self.defaults
    }

    /// Create a question using the configured defaults.
    pub fn create(&self, title: impl Into<String>) -> Result<Question, QuestionError> {
        self.create_with(title, self.defaults.points, self.defaults.max_selections)
    }

    /// Create a question with explicit points and selection limit.
    pub fn create_with(
        &self,
        title: impl Into<String>,
        points: u32,
        max_selections: u32,
    ) -> Result<Question, QuestionError> {
        Question::create(self.ids, title.into(), points, max_selections)
    }
}

impl Default for QuestionFactory<'static> {
    fn default() -> Self {
        Self::new(QuestionDefaults::default())
    }
}
