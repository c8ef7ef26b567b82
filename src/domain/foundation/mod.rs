//! Foundation module - Shared domain primitives.
//!
//! Contains value objects, identifiers, and error types
//! that form the vocabulary of the quiz domain.

mod errors;
mod ids;
mod points;

pub(crate) use errors::require_length;
pub use errors::{DomainError, ErrorCode, ValidationError};
pub use ids::{ChoiceId, QuestionId, QuestionIdGenerator};
pub use points::Points;
