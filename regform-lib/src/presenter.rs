//! Rendering capability and the presentation helpers built on it.

use crate::context::{FeedbackClass, FormContext};
use crate::field::FieldId;

/// A surface that displays field and form feedback.
///
/// Validation logic only ever talks to this trait, so it runs the same against
/// a terminal, a browser binding, or a recording used in tests.
pub trait FieldPresenter {
    /// Show `message` under the field and apply the error styling.
    fn show_error(&mut self, field: FieldId, message: &str);

    /// Clear the field's message and apply the success styling.
    fn show_success(&mut self, field: FieldId);

    /// Remove both stylings and the message.
    fn clear_field(&mut self, field: FieldId);

    /// Empty every input, as a native form reset does.
    fn reset_values(&mut self) {}

    /// Show the whole-form success banner.
    fn show_banner(&mut self, message: &str);

    /// Empty the banner text and class.
    fn clear_banner(&mut self);

    /// Enable or disable input on the whole form.
    fn set_enabled(&mut self, _enabled: bool) {}
}

impl<P: FieldPresenter + ?Sized> FieldPresenter for Box<P> {
    fn show_error(&mut self, field: FieldId, message: &str) {
        (**self).show_error(field, message)
    }

    fn show_success(&mut self, field: FieldId) {
        (**self).show_success(field)
    }

    fn clear_field(&mut self, field: FieldId) {
        (**self).clear_field(field)
    }

    fn reset_values(&mut self) {
        (**self).reset_values()
    }

    fn show_banner(&mut self, message: &str) {
        (**self).show_banner(message)
    }

    fn clear_banner(&mut self) {
        (**self).clear_banner()
    }

    fn set_enabled(&mut self, enabled: bool) {
        (**self).set_enabled(enabled)
    }
}

/// Mark a field as failing validation.
pub fn mark_invalid<P: FieldPresenter + ?Sized>(
    cx: &mut FormContext,
    presenter: &mut P,
    field: FieldId,
    message: &str,
) {
    cx.set_invalid(field, message);
    presenter.show_error(field, message);
}

/// Mark a field as passing validation.
pub fn mark_valid<P: FieldPresenter + ?Sized>(
    cx: &mut FormContext,
    presenter: &mut P,
    field: FieldId,
) {
    cx.set_valid(field);
    presenter.show_success(field);
}

/// Display the success banner.
pub(crate) fn show_banner<P: FieldPresenter + ?Sized>(
    cx: &mut FormContext,
    presenter: &mut P,
    message: &str,
) {
    cx.set_feedback(message, FeedbackClass::Success);
    presenter.show_banner(message);
}

/// Empty the banner.
pub(crate) fn clear_banner<P: FieldPresenter + ?Sized>(cx: &mut FormContext, presenter: &mut P) {
    cx.clear_feedback();
    presenter.clear_banner();
}

/// Presenter that renders nothing.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopPresenter;

impl FieldPresenter for NoopPresenter {
    fn show_error(&mut self, _field: FieldId, _message: &str) {}
    fn show_success(&mut self, _field: FieldId) {}
    fn clear_field(&mut self, _field: FieldId) {}
    fn show_banner(&mut self, _message: &str) {}
    fn clear_banner(&mut self) {}
}

/// A single call made on a [`RecordingPresenter`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PresenterCall {
    Error(FieldId, String),
    Success(FieldId),
    ClearField(FieldId),
    ResetValues,
    Banner(String),
    ClearBanner,
    Enabled(bool),
}

/// Presenter that records every call, for tests.
#[derive(Debug, Clone, Default)]
pub struct RecordingPresenter {
    calls: Vec<PresenterCall>,
}

impl RecordingPresenter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Every call so far, oldest first.
    pub fn calls(&self) -> &[PresenterCall] {
        &self.calls
    }

    /// Calls concerning one field, oldest first.
    pub fn calls_for(&self, field: FieldId) -> Vec<&PresenterCall> {
        self.calls
            .iter()
            .filter(|call| match call {
                PresenterCall::Error(f, _)
                | PresenterCall::Success(f)
                | PresenterCall::ClearField(f) => *f == field,
                _ => false,
            })
            .collect()
    }

    /// Most recent call, if any.
    pub fn last(&self) -> Option<&PresenterCall> {
        self.calls.last()
    }
}

impl FieldPresenter for RecordingPresenter {
    fn show_error(&mut self, field: FieldId, message: &str) {
        self.calls
            .push(PresenterCall::Error(field, message.to_string()));
    }

    fn show_success(&mut self, field: FieldId) {
        self.calls.push(PresenterCall::Success(field));
    }

    fn clear_field(&mut self, field: FieldId) {
        self.calls.push(PresenterCall::ClearField(field));
    }

    fn reset_values(&mut self) {
        self.calls.push(PresenterCall::ResetValues);
    }

    fn show_banner(&mut self, message: &str) {
        self.calls.push(PresenterCall::Banner(message.to_string()));
    }

    fn clear_banner(&mut self) {
        self.calls.push(PresenterCall::ClearBanner);
    }

    fn set_enabled(&mut self, enabled: bool) {
        self.calls.push(PresenterCall::Enabled(enabled));
    }
}
