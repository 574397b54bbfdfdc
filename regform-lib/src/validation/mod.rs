//! Field validation for the registration form.
//!
//! Each field owns an ordered chain of rules ([`FieldRules`]); the first
//! failing rule decides the message shown under the field. A [`RuleSet`] holds
//! the chains for all five fields and applies them through a
//! [`FieldPresenter`](crate::FieldPresenter).
//!
//! # Example
//!
//! ```
//! use regform_lib::{FieldId, FormConfig, FormContext, NoopPresenter};
//! use regform_lib::validation::RuleSet;
//!
//! let rules = RuleSet::registration(&FormConfig::default()).unwrap();
//! let mut cx = FormContext::new();
//! cx.set_value(FieldId::Email, "a@b");
//!
//! let err = rules.validate_field(&mut cx, &mut NoopPresenter, FieldId::Email).unwrap_err();
//! assert_eq!(err.message, "Please enter a valid email address");
//! assert!(cx.field(FieldId::Email).is_invalid());
//! ```

mod age;
mod result;
mod rule;
mod validator;

pub use age::{AgeParsing, parse_age};
pub use result::{ErrorKind, FieldError, FormResult};
pub use rule::FieldRules;
pub use validator::{EMAIL_PATTERN, RuleSet, validate_field};
