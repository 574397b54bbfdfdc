//! The registration rule set and the field validators that apply it.

use log::trace;
use regex::Regex;

use super::result::{FieldError, FormResult};
use super::rule::FieldRules;
use crate::config::FormConfig;
use crate::context::FormContext;
use crate::error::ConfigError;
use crate::field::FieldId;
use crate::presenter::{FieldPresenter, mark_invalid, mark_valid};

/// Email shape: `local@domain.tld`, no whitespace or extra `@` in any part.
pub const EMAIL_PATTERN: &str = r"^[^\s@]+@[^\s@]+\.[^\s@]+$";

/// Rule chains for all five registration fields.
#[derive(Debug)]
pub struct RuleSet {
    rules: [FieldRules; 5],
}

impl RuleSet {
    /// Build the registration rules described by `config`.
    pub fn registration(config: &FormConfig) -> Result<Self, ConfigError> {
        config.validate()?;

        let full_name = FieldRules::new(FieldId::FullName)
            .required("Full Name is required")
            .min_words(
                config.min_name_words,
                "Please enter at least first and last name",
            );

        let age = FieldRules::new(FieldId::Age)
            .required("Age is required")
            .integer_at_least(
                config.min_age,
                config.age_parsing,
                format!("You must be at least {} years old", config.min_age),
            );

        let email = FieldRules::new(FieldId::Email)
            .required("Email is required")
            .pattern(
                Regex::new(EMAIL_PATTERN)?,
                "Please enter a valid email address",
            );

        let password = FieldRules::new(FieldId::Password)
            .required("Password is required")
            .min_chars(
                config.min_password_chars,
                format!(
                    "Password must be at least {} characters",
                    config.min_password_chars
                ),
            )
            .contains_matching(
                |c| c.is_ascii_uppercase(),
                "Password must contain at least one uppercase letter",
            )
            .contains_matching(
                |c| c.is_ascii_digit(),
                "Password must contain at least one number",
            )
            .contains_any(
                config.password_specials.clone(),
                "Password must contain at least one special character",
            );

        let confirm_password = FieldRules::new(FieldId::ConfirmPassword)
            .required("Please confirm your password")
            .equals_field(FieldId::Password, "Passwords do not match");

        Ok(Self {
            rules: [full_name, age, email, password, confirm_password],
        })
    }

    /// Rules of a single field.
    pub fn rules_for(&self, field: FieldId) -> &FieldRules {
        &self.rules[field.index()]
    }

    /// Check a field without touching its displayed state.
    pub fn check(&self, cx: &FormContext, field: FieldId) -> Result<(), FieldError> {
        self.rules_for(field).check(cx)
    }

    /// Validate one field and display the verdict.
    ///
    /// Calls exactly one of [`mark_valid`] or [`mark_invalid`].
    pub fn validate_field<P: FieldPresenter + ?Sized>(
        &self,
        cx: &mut FormContext,
        presenter: &mut P,
        field: FieldId,
    ) -> Result<(), FieldError> {
        match self.check(cx, field) {
            Ok(()) => {
                trace!("{} valid", field);
                mark_valid(cx, presenter, field);
                Ok(())
            }
            Err(err) => {
                trace!("{} invalid: {}", field, err.message);
                mark_invalid(cx, presenter, field, &err.message);
                Err(err)
            }
        }
    }

    /// Validate every field in form order, without stopping at the first
    /// failure, displaying each verdict.
    pub fn validate_all<P: FieldPresenter + ?Sized>(
        &self,
        cx: &mut FormContext,
        presenter: &mut P,
    ) -> FormResult {
        let errors = FieldId::ALL
            .into_iter()
            .filter_map(|field| self.validate_field(cx, presenter, field).err())
            .collect();
        FormResult::from_errors(errors)
    }
}

/// Validate one field; `true` if it passed.
pub fn validate_field<P: FieldPresenter + ?Sized>(
    rules: &RuleSet,
    cx: &mut FormContext,
    presenter: &mut P,
    field: FieldId,
) -> bool {
    rules.validate_field(cx, presenter, field).is_ok()
}
