use crate::field::FieldId;

/// Category of a validation failure.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// Nothing entered (after trimming).
    Empty,
    /// Wrong shape: name tokens, email pattern, password length or composition.
    FormatInvalid,
    /// Not a number, or outside the accepted range.
    RangeInvalid,
    /// Does not equal the field it must repeat.
    MismatchInvalid,
}

/// Information about a single field validation error.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{field}: {message}")]
pub struct FieldError {
    /// Field that failed.
    pub field: FieldId,
    /// Failure category.
    pub kind: ErrorKind,
    /// Message displayed under the field.
    pub message: String,
}

/// Result of an aggregate validation pass.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum FormResult {
    /// All fields passed validation.
    #[default]
    Valid,
    /// One or more fields failed validation, in form order.
    Invalid(Vec<FieldError>),
}

impl FormResult {
    /// Build a result from the errors of one pass.
    pub fn from_errors(errors: Vec<FieldError>) -> Self {
        if errors.is_empty() {
            Self::Valid
        } else {
            Self::Invalid(errors)
        }
    }

    /// Check if all fields passed validation.
    pub fn all_valid(&self) -> bool {
        matches!(self, Self::Valid)
    }

    /// Get all validation errors.
    pub fn errors(&self) -> &[FieldError] {
        match self {
            Self::Valid => &[],
            Self::Invalid(errors) => errors,
        }
    }

    /// Fields that failed, in form order.
    pub fn invalid_fields(&self) -> impl Iterator<Item = FieldId> + '_ {
        self.errors().iter().map(|e| e.field)
    }

    /// The error for a given field, if it failed.
    pub fn error_for(&self, field: FieldId) -> Option<&FieldError> {
        self.errors().iter().find(|e| e.field == field)
    }
}
