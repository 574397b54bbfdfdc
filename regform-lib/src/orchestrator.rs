//! Form orchestrator: turns user interaction into validation runs.
//!
//! The orchestrator owns the form state, the rules, the presenter, and the
//! pending reset. It has two observable states:
//!
//! - [`FormState::Idle`]: accepting input.
//! - [`FormState::SubmissionFeedbackShown`]: a fully valid submission is on
//!   display; after the reset delay the form is emptied and returns to idle.
//!
//! Time is always supplied by the caller, so tests drive the reset with
//! [`FormOrchestrator::tick`] instead of sleeping.

use std::time::{Duration, Instant};

use log::{debug, info};

use crate::config::FormConfig;
use crate::context::FormContext;
use crate::error::ConfigError;
use crate::field::FieldId;
use crate::presenter::{FieldPresenter, clear_banner, show_banner};
use crate::schedule::ScheduledTask;
use crate::validation::{FieldError, FormResult, RuleSet};

/// Observable state of the form.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum FormState {
    #[default]
    Idle,
    SubmissionFeedbackShown,
}

/// Something the user (or the clock) did to the form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FormEvent {
    /// The text of a field changed.
    Input(FieldId, String),
    /// A field lost focus.
    Blur(FieldId),
    /// The form was submitted.
    Submit,
    /// Time passed; fire the reset if it is due.
    Tick,
}

/// Result of a submit attempt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// Every field was validated.
    Completed(FormResult),
    /// The form is disabled while a previous success is on display.
    Ignored,
}

impl SubmitOutcome {
    /// The validation result, unless the submit was ignored.
    pub fn result(&self) -> Option<&FormResult> {
        match self {
            Self::Completed(result) => Some(result),
            Self::Ignored => None,
        }
    }

    /// `true` only for a completed submission where every field passed.
    pub fn all_valid(&self) -> bool {
        self.result().is_some_and(FormResult::all_valid)
    }
}

/// What handling a [`FormEvent`] did.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EventOutcome {
    /// A value was stored.
    Updated,
    /// A single field was validated.
    Validated(Result<(), FieldError>),
    /// The form was submitted.
    Submitted(SubmitOutcome),
    /// The pending reset ran.
    Reset,
    /// Nothing happened: the form is disabled or no reset was due.
    Ignored,
}

/// Drives validation of the registration form.
pub struct FormOrchestrator<P: FieldPresenter> {
    cx: FormContext,
    rules: RuleSet,
    presenter: P,
    state: FormState,
    reset: ScheduledTask,
    reset_delay: Duration,
    success_message: String,
    disable_during_reset: bool,
}

impl<P: FieldPresenter> FormOrchestrator<P> {
    /// Create an orchestrator for an empty form.
    pub fn new(config: &FormConfig, presenter: P) -> Result<Self, ConfigError> {
        let rules = RuleSet::registration(config)?;
        Ok(Self {
            cx: FormContext::new(),
            rules,
            presenter,
            state: FormState::Idle,
            reset: ScheduledTask::new(),
            reset_delay: config.reset_delay(),
            success_message: config.success_message.clone(),
            disable_during_reset: config.disable_during_reset,
        })
    }

    // -------------------------------------------------------------------------
    // Accessors
    // -------------------------------------------------------------------------

    pub fn context(&self) -> &FormContext {
        &self.cx
    }

    pub fn presenter(&self) -> &P {
        &self.presenter
    }

    pub fn state(&self) -> FormState {
        self.state
    }

    /// How long the success banner stays up before the form resets.
    pub fn reset_delay(&self) -> Duration {
        self.reset_delay
    }

    /// When the pending reset is due, if one is scheduled.
    pub fn next_deadline(&self) -> Option<Instant> {
        self.reset.deadline()
    }

    /// Whether input, blur, and submit are currently accepted.
    pub fn is_accepting(&self) -> bool {
        self.cx.is_enabled()
    }

    // -------------------------------------------------------------------------
    // Events
    // -------------------------------------------------------------------------

    /// Handle a single event at time `now`.
    pub fn handle(&mut self, event: FormEvent, now: Instant) -> EventOutcome {
        match event {
            FormEvent::Input(field, value) => {
                if self.input(field, value) {
                    EventOutcome::Updated
                } else {
                    EventOutcome::Ignored
                }
            }
            FormEvent::Blur(field) => match self.blur(field) {
                Some(result) => EventOutcome::Validated(result),
                None => EventOutcome::Ignored,
            },
            FormEvent::Submit => EventOutcome::Submitted(self.submit(now)),
            FormEvent::Tick => {
                if self.tick(now) {
                    EventOutcome::Reset
                } else {
                    EventOutcome::Ignored
                }
            }
        }
    }

    /// Store a new value for `field`. Returns `false` if the form is disabled.
    pub fn input(&mut self, field: FieldId, value: impl Into<String>) -> bool {
        if !self.is_accepting() {
            debug!("Input to {} ignored: form disabled", field);
            return false;
        }
        self.cx.set_value(field, value);
        true
    }

    /// `field` lost focus: validate it alone.
    ///
    /// Returns `None` if the form is disabled.
    pub fn blur(&mut self, field: FieldId) -> Option<Result<(), FieldError>> {
        if !self.is_accepting() {
            debug!("Blur on {} ignored: form disabled", field);
            return None;
        }
        let result = self
            .rules
            .validate_field(&mut self.cx, &mut self.presenter, field);
        Some(result)
    }

    /// Submit the form: validate every field, then show the banner and
    /// schedule the reset, or clear the banner.
    pub fn submit(&mut self, now: Instant) -> SubmitOutcome {
        if !self.is_accepting() {
            debug!("Submit ignored: form disabled until reset");
            return SubmitOutcome::Ignored;
        }

        let result = self.rules.validate_all(&mut self.cx, &mut self.presenter);

        if result.all_valid() {
            show_banner(&mut self.cx, &mut self.presenter, &self.success_message);
            self.state = FormState::SubmissionFeedbackShown;
            self.reset.schedule(now, self.reset_delay);
            if self.disable_during_reset {
                self.set_enabled(false);
            }
            info!(
                "Registration accepted; form resets in {:?}",
                self.reset_delay
            );
        } else {
            clear_banner(&mut self.cx, &mut self.presenter);
            if self.reset.cancel() {
                debug!("Pending form reset dropped by failed submission");
            }
            self.state = FormState::Idle;
            debug!(
                "Registration rejected: {} invalid field(s)",
                result.errors().len()
            );
        }

        SubmitOutcome::Completed(result)
    }

    /// Run the pending reset if it is due at `now`. Returns `true` if it ran.
    pub fn tick(&mut self, now: Instant) -> bool {
        if !self.reset.take_due(now) {
            return false;
        }
        self.reset_form();
        true
    }

    /// Cancel the pending reset, leaving the display as it is and accepting
    /// input again. Returns `true` if a reset was pending.
    pub fn cancel_reset(&mut self) -> bool {
        if !self.reset.cancel() {
            return false;
        }
        debug!("Pending form reset cancelled");
        self.state = FormState::Idle;
        if !self.is_accepting() {
            self.set_enabled(true);
        }
        true
    }

    fn reset_form(&mut self) {
        self.cx.reset();
        self.presenter.reset_values();
        clear_banner(&mut self.cx, &mut self.presenter);
        for field in FieldId::ALL {
            self.presenter.clear_field(field);
        }
        if !self.is_accepting() {
            self.set_enabled(true);
        }
        self.state = FormState::Idle;
        info!("Form reset");
    }

    fn set_enabled(&mut self, enabled: bool) {
        self.cx.set_enabled(enabled);
        self.presenter.set_enabled(enabled);
    }
}

impl<P: FieldPresenter + std::fmt::Debug> std::fmt::Debug for FormOrchestrator<P> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FormOrchestrator")
            .field("state", &self.state)
            .field("context", &self.cx)
            .field("presenter", &self.presenter)
            .field("reset", &self.reset)
            .finish()
    }
}
