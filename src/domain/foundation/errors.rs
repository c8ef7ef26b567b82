//! Error types for the domain layer.

use std::collections::HashMap;
use std::error::Error;
use std::fmt;
use thiserror::Error;

/// Errors that occur during value object and entity construction.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("Field '{field}' cannot be empty")]
    EmptyField { field: String },

    #[error("Field '{field}' must be at most {max} characters, got {actual}")]
    TooLong {
        field: String,
        max: usize,
        actual: usize,
    },

    #[error("Field '{field}' must be between {min} and {max}, got {actual}")]
    OutOfRange {
        field: String,
        min: u32,
        max: u32,
        actual: u32,
    },
}

impl ValidationError {
    /// Creates an empty field validation error.
    pub fn empty_field(field: impl Into<String>) -> Self {
        ValidationError::EmptyField { field: field.into() }
    }

    /// Creates a too long validation error.
    pub fn too_long(field: impl Into<String>, max: usize, actual: usize) -> Self {
        ValidationError::TooLong {
            field: field.into(),
            max,
            actual,
        }
    }

    /// Creates an out of range validation error.
    pub fn out_of_range(field: impl Into<String>, min: u32, max: u32, actual: u32) -> Self {
        ValidationError::OutOfRange {
            field: field.into(),
            min,
            max,
            actual,
        }
    }

    /// Returns the name of the offending field.
    pub fn field(&self) -> &str {
        match self {
            ValidationError::EmptyField { field }
            | ValidationError::TooLong { field, .. }
            | ValidationError::OutOfRange { field, .. } => field,
        }
    }

    /// Returns the error code for this validation failure.
    pub fn code(&self) -> ErrorCode {
        match self {
            ValidationError::EmptyField { .. } => ErrorCode::EmptyField,
            ValidationError::TooLong { .. } => ErrorCode::TooLong,
            ValidationError::OutOfRange { .. } => ErrorCode::OutOfRange,
        }
    }
}

/// Checks that `value` holds between 1 and `max` characters inclusive.
pub(crate) fn require_length(field: &str, value: &str, max: usize) -> Result<(), ValidationError> {
    let length = value.chars().count();
    if length == 0 {
        return Err(ValidationError::empty_field(field));
    }
    if length > max {
        return Err(ValidationError::too_long(field, max, length));
    }
    Ok(())
}

/// Error codes organized by category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorCode {
    // Validation errors
    EmptyField,
    TooLong,
    OutOfRange,

    // Not found errors
    ChoiceNotFound,

    // Constraint errors
    SelectionLimitExceeded,
    ChoiceIdsExhausted,
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            ErrorCode::EmptyField => "EMPTY_FIELD",
            ErrorCode::TooLong => "TOO_LONG",
            ErrorCode::OutOfRange => "OUT_OF_RANGE",
            ErrorCode::ChoiceNotFound => "CHOICE_NOT_FOUND",
            ErrorCode::SelectionLimitExceeded => "SELECTION_LIMIT_EXCEEDED",
            ErrorCode::ChoiceIdsExhausted => "CHOICE_IDS_EXHAUSTED",
        };
        write!(f, "{}", s)
    }
}

/// Standard domain error with code, message, and optional details.
#[derive(Debug, Clone)]
pub struct DomainError {
    pub code: ErrorCode,
    pub message: String,
    pub details: HashMap<String, String>,
}

impl DomainError {
    /// Creates a new domain error.
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
            details: HashMap::new(),
        }
    }

    /// Adds a detail to the error.
    pub fn with_detail(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.details.insert(key.into(), value.into());
        self
    }
}

impl fmt::Display for DomainError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}] {}", self.code, self.message)
    }
}

impl Error for DomainError {}

impl From<ValidationError> for DomainError {
    fn from(err: ValidationError) -> Self {
        let field = err.field().to_string();
        DomainError::new(err.code(), err.to_string()).with_detail("field", field)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn validation_error_empty_field_displays_correctly() {
        let err = ValidationError::empty_field("title");
        assert_eq!(format!("{}", err), "Field 'title' cannot be empty");
    }

    #[test]
    fn validation_error_too_long_displays_correctly() {
        let err = ValidationError::too_long("text", 100, 101);
        assert_eq!(
            format!("{}", err),
            "Field 'text' must be at most 100 characters, got 101"
        );
    }

    #[test]
    fn validation_error_out_of_range_displays_correctly() {
        let err = ValidationError::out_of_range("points", 1, 100, 150);
        assert_eq!(
            format!("{}", err),
            "Field 'points' must be between 1 and 100, got 150"
        );
    }

    #[test]
    fn require_length_counts_characters_not_bytes() {
        // 'é' is two bytes in UTF-8
        let title = "é".repeat(200);
        assert!(require_length("title", &title, 200).is_ok());
        assert_eq!(
            require_length("title", &format!("{}é", title), 200),
            Err(ValidationError::too_long("title", 200, 201))
        );
    }

    #[test]
    fn require_length_rejects_empty() {
        assert_eq!(
            require_length("text", "", 100),
            Err(ValidationError::empty_field("text"))
        );
    }

    #[test]
    fn domain_error_displays_code_and_message() {
        let err = DomainError::new(ErrorCode::ChoiceNotFound, "Invalid choice id 7");
        assert_eq!(format!("{}", err), "[CHOICE_NOT_FOUND] Invalid choice id 7");
    }

    #[test]
    fn domain_error_with_detail_adds_detail() {
        let err = DomainError::new(ErrorCode::ChoiceNotFound, "Invalid choice id 3")
            .with_detail("choice_id", "3")
            .with_detail("reason", "removed");

        assert_eq!(err.details.get("choice_id"), Some(&"3".to_string()));
        assert_eq!(err.details.get("reason"), Some(&"removed".to_string()));
    }

    #[test]
    fn domain_error_from_validation_error_keeps_field() {
        let err: DomainError = ValidationError::out_of_range("points", 1, 100, 0).into();
        assert_eq!(err.code, ErrorCode::OutOfRange);
        assert_eq!(err.details.get("field"), Some(&"points".to_string()));
    }

    #[test]
    fn error_code_display_formats_correctly() {
        assert_eq!(format!("{}", ErrorCode::ChoiceNotFound), "CHOICE_NOT_FOUND");
        assert_eq!(
            format!("{}", ErrorCode::SelectionLimitExceeded),
            "SELECTION_LIMIT_EXCEEDED"
        );
    }
}
