//! Registration form validation library
//!
//! Validates the five fields of a registration form (full name, age, email,
//! password, confirm password), renders per-field and whole-form feedback
//! through a [`FieldPresenter`], and resets the form a fixed delay after a
//! successful submission.
//!
//! # Example
//!
//! ```
//! use std::time::{Duration, Instant};
//!
//! use regform_lib::{FieldId, FormConfig, FormOrchestrator, RecordingPresenter};
//!
//! let mut form = FormOrchestrator::new(&FormConfig::default(), RecordingPresenter::new()).unwrap();
//! form.input(FieldId::FullName, "Ada Lovelace");
//! form.input(FieldId::Age, "36");
//! form.input(FieldId::Email, "ada@example.com");
//! form.input(FieldId::Password, "Engine#1843");
//! form.input(FieldId::ConfirmPassword, "Engine#1843");
//!
//! let start = Instant::now();
//! assert!(form.submit(start).all_valid());
//! assert!(form.tick(start + Duration::from_secs(3)));
//! assert_eq!(form.context().value(FieldId::FullName), "");
//! ```

pub mod config;
pub mod context;
pub mod driver;
pub mod error;
pub mod field;
pub mod orchestrator;
pub mod presenter;
pub mod schedule;
pub mod validation;

pub use config::FormConfig;
pub use context::{Feedback, FeedbackClass, FormContext};
pub use error::{ConfigError, DriverError};
pub use field::{FieldId, FieldState, Validity};
pub use orchestrator::{EventOutcome, FormEvent, FormOrchestrator, FormState, SubmitOutcome};
pub use presenter::{
    FieldPresenter, NoopPresenter, PresenterCall, RecordingPresenter, mark_invalid, mark_valid,
};
pub use validation::{ErrorKind, FieldError, FormResult};
