//! Field registry: typed handles to every field group and the feedback region.

use crate::field::{FieldId, FieldState, Validity};

/// Style class of the whole-form feedback region.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum FeedbackClass {
    #[default]
    None,
    Success,
}

impl FeedbackClass {
    /// Class attribute value: `"success-message"` or empty.
    pub fn as_str(self) -> &'static str {
        match self {
            FeedbackClass::None => "",
            FeedbackClass::Success => "success-message",
        }
    }
}

/// The whole-form feedback banner.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Feedback {
    pub message: String,
    pub class: FeedbackClass,
}

impl Feedback {
    pub fn is_empty(&self) -> bool {
        self.message.is_empty() && self.class == FeedbackClass::None
    }
}

/// State of the registration form: one [`FieldState`] per [`FieldId`] plus
/// the feedback banner.
///
/// Validators and the orchestrator receive the context explicitly; nothing
/// reads form state from ambient scope.
#[derive(Debug, Clone)]
pub struct FormContext {
    fields: [FieldState; 5],
    feedback: Feedback,
    enabled: bool,
}

impl FormContext {
    /// Create an empty, enabled form.
    pub fn new() -> Self {
        Self {
            fields: Default::default(),
            feedback: Feedback::default(),
            enabled: true,
        }
    }

    // -------------------------------------------------------------------------
    // Read methods
    // -------------------------------------------------------------------------

    /// Full state of a field.
    pub fn field(&self, id: FieldId) -> &FieldState {
        &self.fields[id.index()]
    }

    /// Raw (untrimmed) value of a field.
    pub fn value(&self, id: FieldId) -> &str {
        &self.field(id).value
    }

    /// Value of a field with leading and trailing whitespace removed.
    ///
    /// A byte order mark counts as whitespace here, as it does for form
    /// input in browsers.
    pub fn trimmed(&self, id: FieldId) -> &str {
        self.value(id).trim_matches(is_padding)
    }

    pub fn validity(&self, id: FieldId) -> Validity {
        self.field(id).validity
    }

    pub fn message(&self, id: FieldId) -> &str {
        &self.field(id).message
    }

    pub fn feedback(&self) -> &Feedback {
        &self.feedback
    }

    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    /// Iterate over every field in form order.
    pub fn iter(&self) -> impl Iterator<Item = (FieldId, &FieldState)> {
        FieldId::ALL.into_iter().map(|id| (id, self.field(id)))
    }

    // -------------------------------------------------------------------------
    // Write methods
    // -------------------------------------------------------------------------

    /// Replace a field's value.
    ///
    /// The displayed verdict is left alone: it keeps showing the result of the
    /// last validation until the field is validated again.
    pub fn set_value(&mut self, id: FieldId, value: impl Into<String>) {
        self.fields[id.index()].value = value.into();
    }

    pub(crate) fn set_invalid(&mut self, id: FieldId, message: impl Into<String>) {
        let field = &mut self.fields[id.index()];
        field.validity = Validity::Invalid;
        field.message = message.into();
    }

    pub(crate) fn set_valid(&mut self, id: FieldId) {
        let field = &mut self.fields[id.index()];
        field.validity = Validity::Valid;
        field.message.clear();
    }

    pub(crate) fn set_feedback(&mut self, message: impl Into<String>, class: FeedbackClass) {
        self.feedback.message = message.into();
        self.feedback.class = class;
    }

    pub(crate) fn clear_feedback(&mut self) {
        self.feedback = Feedback::default();
    }

    pub(crate) fn set_enabled(&mut self, enabled: bool) {
        self.enabled = enabled;
    }

    /// Empty every value and display, as a form reset does.
    pub(crate) fn reset(&mut self) {
        self.fields = Default::default();
        self.feedback = Feedback::default();
    }
}

impl Default for FormContext {
    fn default() -> Self {
        Self::new()
    }
}

fn is_padding(c: char) -> bool {
    c.is_whitespace() || c == '\u{FEFF}'
}
