//! Field identifiers and per-field state.

use std::fmt;

/// One of the five fields of the registration form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FieldId {
    FullName,
    Age,
    Email,
    Password,
    ConfirmPassword,
}

impl FieldId {
    /// All fields, in form order. Aggregate validation runs in this order.
    pub const ALL: [FieldId; 5] = [
        FieldId::FullName,
        FieldId::Age,
        FieldId::Email,
        FieldId::Password,
        FieldId::ConfirmPassword,
    ];

    /// Position of this field in [`FieldId::ALL`].
    pub fn index(self) -> usize {
        match self {
            FieldId::FullName => 0,
            FieldId::Age => 1,
            FieldId::Email => 2,
            FieldId::Password => 3,
            FieldId::ConfirmPassword => 4,
        }
    }

    /// Human-readable label shown next to the input.
    pub fn label(self) -> &'static str {
        match self {
            FieldId::FullName => "Full Name",
            FieldId::Age => "Age",
            FieldId::Email => "Email",
            FieldId::Password => "Password",
            FieldId::ConfirmPassword => "Confirm Password",
        }
    }
}

impl fmt::Display for FieldId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Outcome of the most recent validation of a field.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Validity {
    /// Not validated since creation or the last reset.
    #[default]
    Unset,
    /// Last validation passed ("success" class).
    Valid,
    /// Last validation failed ("error" class).
    Invalid,
}

impl Validity {
    /// CSS-style class name of the field group, if any.
    pub fn class(self) -> Option<&'static str> {
        match self {
            Validity::Unset => None,
            Validity::Valid => Some("success"),
            Validity::Invalid => Some("error"),
        }
    }
}

/// Value and displayed feedback of a single field.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FieldState {
    /// Raw text as entered, untrimmed.
    pub value: String,
    pub validity: Validity,
    /// Inline message; empty unless `validity` is `Invalid`.
    pub message: String,
}

impl FieldState {
    pub fn is_invalid(&self) -> bool {
        self.validity == Validity::Invalid
    }
}
