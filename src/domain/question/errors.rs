//! Question-specific error types.

use thiserror::Error;

use crate::domain::foundation::{ChoiceId, DomainError, ErrorCode, ValidationError};

/// Errors raised by question construction and mutation.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum QuestionError {
    /// A field was outside its allowed bounds.
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// No choice with this id exists on the question.
    #[error("Invalid choice id {0}")]
    ChoiceNotFound(ChoiceId),

    /// More ids were submitted than the question allows.
    #[error("Cannot select more than {max} choices")]
    SelectionLimitExceeded { max: u32 },

    /// Every choice id for the question has been issued.
    #[error("No choice ids left to issue")]
    ChoiceIdsExhausted,
}

impl QuestionError {
    pub fn code(&self) -> ErrorCode {
        match self {
            QuestionError::Validation(err) => err.code(),
            QuestionError::ChoiceNotFound(_) => ErrorCode::ChoiceNotFound,
            QuestionError::SelectionLimitExceeded { .. } => ErrorCode::SelectionLimitExceeded,
            QuestionError::ChoiceIdsExhausted => ErrorCode::ChoiceIdsExhausted,
        }
    }
}

impl From<QuestionError> for DomainError {
    fn from(err: QuestionError) -> Self {
        let code = err.code();
        let message = err.to_string();
        match err {
            QuestionError::Validation(inner) => inner.into(),
            QuestionError::ChoiceNotFound(id) => {
                DomainError::new(code, message).with_detail("choice_id", id.to_string())
            }
            QuestionError::SelectionLimitExceeded { max } => {
                DomainError::new(code, message).with_detail("max_selections", max.to_string())
            }
            QuestionError::ChoiceIdsExhausted => DomainError::new(code, message),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn choice_not_found_embeds_id() {
        let err = QuestionError::ChoiceNotFound(ChoiceId::new(999));
        assert_eq!(err.to_string(), "Invalid choice id 999");
        assert_eq!(err.code(), ErrorCode::ChoiceNotFound);
    }

    #[test]
    fn selection_limit_message_is_exact() {
        let err = QuestionError::SelectionLimitExceeded { max: 2 };
        assert_eq!(err.to_string(), "Cannot select more than 2 choices");
    }

    #[test]
    fn validation_error_passes_through_message() {
        let err: QuestionError = ValidationError::empty_field("title").into();
        assert_eq!(err.to_string(), "Field 'title' cannot be empty");
        assert_eq!(err.code(), ErrorCode::EmptyField);
    }

    #[test]
    fn converts_to_domain_error_with_details() {
        let err: DomainError = QuestionError::ChoiceNotFound(ChoiceId::new(5)).into();
        assert_eq!(err.code, ErrorCode::ChoiceNotFound);
        assert_eq!(err.details.get("choice_id"), Some(&"5".to_string()));

        let err: DomainError = QuestionError::SelectionLimitExceeded { max: 3 }.into();
        assert_eq!(err.to_string(), "[SELECTION_LIMIT_EXCEEDED] Cannot select more than 3 choices");
        assert_eq!(err.details.get("max_selections"), Some(&"3".to_string()));

        let err: DomainError = QuestionError::ChoiceIdsExhausted.into();
        assert_eq!(err.to_string(), "[CHOICE_IDS_EXHAUSTED] No choice ids left to issue");
    }
}
