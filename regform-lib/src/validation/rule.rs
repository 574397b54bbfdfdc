//! Rule builder for fluent per-field validation.

use std::fmt;

use regex::Regex;

use super::age::{AgeParsing, parse_age};
use super::result::{ErrorKind, FieldError};
use crate::context::FormContext;
use crate::field::FieldId;

/// Type alias for rule predicates. Receives the trimmed value and the whole
/// form, so cross-field rules can read other fields.
type Check = Box<dyn Fn(&str, &FormContext) -> bool + Send + Sync>;

struct Rule {
    kind: ErrorKind,
    message: String,
    check: Check,
}

/// Ordered validation rules for one field. The first failing rule wins.
///
/// # Example
///
/// ```
/// use regform_lib::FieldId;
/// use regform_lib::validation::FieldRules;
///
/// let rules = FieldRules::new(FieldId::Password)
///     .required("Password is required")
///     .min_chars(8, "Password must be at least 8 characters")
///     .contains_matching(|c| c.is_ascii_digit(), "Password must contain at least one number");
/// assert_eq!(rules.len(), 3);
/// ```
pub struct FieldRules {
    field: FieldId,
    rules: Vec<Rule>,
}

impl FieldRules {
    /// Start an empty rule chain for `field`.
    pub fn new(field: FieldId) -> Self {
        Self {
            field,
            rules: Vec::new(),
        }
    }

    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    /// Add a custom rule.
    pub fn rule<F>(mut self, kind: ErrorKind, f: F, msg: impl Into<String>) -> Self
    where
        F: Fn(&str, &FormContext) -> bool + Send + Sync + 'static,
    {
        self.rules.push(Rule {
            kind,
            message: msg.into(),
            check: Box::new(f),
        });
        self
    }

    /// Require the field to be non-empty.
    pub fn required(self, msg: impl Into<String>) -> Self {
        self.rule(ErrorKind::Empty, |v, _| !v.is_empty(), msg)
    }

    /// Require minimum length (in characters).
    pub fn min_chars(self, min: usize, msg: impl Into<String>) -> Self {
        self.rule(
            ErrorKind::FormatInvalid,
            move |v, _| v.chars().count() >= min,
            msg,
        )
    }

    /// Require at least `min` whitespace-separated words.
    pub fn min_words(self, min: usize, msg: impl Into<String>) -> Self {
        self.rule(
            ErrorKind::FormatInvalid,
            move |v, _| v.split_whitespace().count() >= min,
            msg,
        )
    }

    /// Require the value to match a regex.
    pub fn pattern(self, re: Regex, msg: impl Into<String>) -> Self {
        self.rule(ErrorKind::FormatInvalid, move |v, _| re.is_match(v), msg)
    }

    /// Require at least one character satisfying `pred`.
    pub fn contains_matching<F>(self, pred: F, msg: impl Into<String>) -> Self
    where
        F: Fn(char) -> bool + Send + Sync + 'static,
    {
        self.rule(
            ErrorKind::FormatInvalid,
            move |v, _| v.chars().any(&pred),
            msg,
        )
    }

    /// Require at least one character from `set`.
    pub fn contains_any(self, set: impl Into<String>, msg: impl Into<String>) -> Self {
        let set = set.into();
        self.contains_matching(move |c| set.contains(c), msg)
    }

    /// Require an integer no smaller than `min`.
    pub fn integer_at_least(self, min: i64, mode: AgeParsing, msg: impl Into<String>) -> Self {
        self.rule(
            ErrorKind::RangeInvalid,
            move |v, _| parse_age(v, mode).is_some_and(|n| n >= min),
            msg,
        )
    }

    /// Require the value to equal another field's trimmed value.
    pub fn equals_field(self, other: FieldId, msg: impl Into<String>) -> Self {
        self.rule(
            ErrorKind::MismatchInvalid,
            move |v, cx| v == cx.trimmed(other),
            msg,
        )
    }

    /// Check the field's current trimmed value against every rule in order.
    pub fn check(&self, cx: &FormContext) -> Result<(), FieldError> {
        let value = cx.trimmed(self.field);
        match self.rules.iter().find(|rule| !(rule.check)(value, cx)) {
            Some(rule) => Err(FieldError {
                field: self.field,
                kind: rule.kind,
                message: rule.message.clone(),
            }),
            None => Ok(()),
        }
    }
}

impl fmt::Debug for FieldRules {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let messages: Vec<_> = self.rules.iter().map(|r| &r.message).collect();
        f.debug_struct("FieldRules")
            .field("field", &self.field)
            .field("rules", &messages)
            .finish()
    }
}
