use std::time::{Duration, Instant};

use regform_lib::config::DEFAULT_SUCCESS_MESSAGE;
use regform_lib::{
    EventOutcome, FeedbackClass, FieldId, FieldState, FormConfig, FormEvent, FormOrchestrator,
    FormState, PresenterCall, RecordingPresenter, SubmitOutcome, Validity,
};

const DELAY: Duration = Duration::from_millis(3000);

fn form() -> FormOrchestrator<RecordingPresenter> {
    FormOrchestrator::new(&FormConfig::default(), RecordingPresenter::new()).unwrap()
}

fn fill_valid(form: &mut FormOrchestrator<RecordingPresenter>) {
    form.input(FieldId::FullName, "John Smith");
    form.input(FieldId::Age, "30");
    form.input(FieldId::Email, "john@example.com");
    form.input(FieldId::Password, "Passw0rd!");
    form.input(FieldId::ConfirmPassword, "Passw0rd!");
}

// ============================================================================
// Blur
// ============================================================================

#[test]
fn test_blur_validates_only_that_field() {
    let mut form = form();
    form.input(FieldId::Email, "a@b");

    let result = form.blur(FieldId::Email).unwrap();
    assert!(result.is_err());

    let cx = form.context();
    assert_eq!(cx.validity(FieldId::Email), Validity::Invalid);
    for field in FieldId::ALL.into_iter().filter(|&f| f != FieldId::Email) {
        assert_eq!(cx.validity(field), Validity::Unset);
    }
    assert_eq!(form.presenter().calls().len(), 1);
    assert_eq!(form.presenter().calls_for(FieldId::Email).len(), 1);
    assert!(form.presenter().calls_for(FieldId::Age).is_empty());
}

#[test]
fn test_input_alone_does_not_validate() {
    let mut form = form();
    form.input(FieldId::Age, "12");
    assert_eq!(form.context().validity(FieldId::Age), Validity::Unset);
    assert!(form.presenter().calls().is_empty());
}

// ============================================================================
// Submit
// ============================================================================

#[test]
fn test_submit_all_valid_shows_banner_then_resets() {
    let mut form = form();
    fill_valid(&mut form);
    let start = Instant::now();

    let outcome = form.submit(start);
    assert!(outcome.all_valid());
    assert_eq!(form.state(), FormState::SubmissionFeedbackShown);

    let cx = form.context();
    assert_eq!(cx.feedback().message, DEFAULT_SUCCESS_MESSAGE);
    assert_eq!(cx.feedback().class, FeedbackClass::Success);
    assert_eq!(cx.feedback().class.as_str(), "success-message");
    for (_, state) in cx.iter() {
        assert_eq!(state.validity, Validity::Valid);
    }
    assert_eq!(form.next_deadline(), Some(start + DELAY));

    // Not yet
    assert!(!form.tick(start + DELAY - Duration::from_millis(1)));
    assert_eq!(form.context().value(FieldId::FullName), "John Smith");

    assert!(form.tick(start + DELAY));
    assert_eq!(form.state(), FormState::Idle);
    assert_eq!(form.next_deadline(), None);

    let cx = form.context();
    assert!(cx.feedback().is_empty());
    for (_, state) in cx.iter() {
        assert_eq!(state, &FieldState::default());
    }

    let calls = form.presenter().calls();
    assert!(calls.contains(&PresenterCall::ResetValues));
    assert!(calls.contains(&PresenterCall::ClearBanner));
    for field in FieldId::ALL {
        assert!(calls.contains(&PresenterCall::ClearField(field)));
    }
}

#[test]
fn test_submit_with_one_invalid_field() {
    let mut form = form();
    fill_valid(&mut form);
    form.input(FieldId::Age, "16");

    let outcome = form.submit(Instant::now());
    let result = outcome.result().unwrap();
    assert!(!result.all_valid());
    assert_eq!(result.errors().len(), 1);
    let err = result.error_for(FieldId::Age).unwrap();
    assert_eq!(err.message, "You must be at least 18 years old");
    assert_eq!(result.error_for(FieldId::Email), None);

    let cx = form.context();
    assert!(cx.feedback().is_empty());
    assert_eq!(cx.message(FieldId::Age), err.message);
    for field in FieldId::ALL.into_iter().filter(|&f| f != FieldId::Age) {
        assert_eq!(cx.validity(field), Validity::Valid);
        assert_eq!(cx.message(field), "");
    }
    assert_eq!(cx.value(FieldId::FullName), "John Smith");
    assert_eq!(form.state(), FormState::Idle);
    assert_eq!(form.next_deadline(), None);
    assert_eq!(form.presenter().last(), Some(&PresenterCall::ClearBanner));
}

#[test]
fn test_submit_does_not_short_circuit() {
    let mut form = form();

    let outcome = form.submit(Instant::now());
    let result = outcome.result().unwrap();
    assert_eq!(result.errors().len(), 5);
    assert_eq!(
        result.invalid_fields().collect::<Vec<_>>(),
        FieldId::ALL.to_vec()
    );

    let validated: Vec<_> = form
        .presenter()
        .calls()
        .iter()
        .filter_map(|call| match call {
            PresenterCall::Error(field, _) => Some(*field),
            _ => None,
        })
        .collect();
    assert_eq!(validated, FieldId::ALL.to_vec());
}

#[test]
fn test_failed_submit_clears_previous_banner_state() {
    let mut form = FormOrchestrator::new(
        &FormConfig {
            disable_during_reset: false,
            ..FormConfig::default()
        },
        RecordingPresenter::new(),
    )
    .unwrap();
    fill_valid(&mut form);
    let start = Instant::now();
    assert!(form.submit(start).all_valid());

    form.input(FieldId::Email, "broken");
    assert!(!form.submit(start + Duration::from_millis(100)).all_valid());
    assert!(form.context().feedback().is_empty());
    assert_eq!(form.state(), FormState::Idle);
    assert_eq!(form.next_deadline(), None);
    assert_eq!(form.context().value(FieldId::FullName), "John Smith");
}

// ============================================================================
// Reset window
// ============================================================================

#[test]
fn test_form_disabled_during_reset_window() {
    let mut form = form();
    fill_valid(&mut form);
    let start = Instant::now();
    form.submit(start);

    assert!(!form.is_accepting());
    let locked = Some(&PresenterCall::Enabled(false));
    assert_eq!(form.presenter().last(), locked);
    let outcome = form.submit(start + Duration::from_millis(500));
    assert_eq!(outcome, SubmitOutcome::Ignored);
    assert!(!form.input(FieldId::FullName, "Someone Else"));
    assert_eq!(form.blur(FieldId::FullName), None);

    // The first deadline still holds
    assert_eq!(form.next_deadline(), Some(start + DELAY));
    assert_eq!(form.context().value(FieldId::FullName), "John Smith");

    form.tick(start + DELAY);
    assert!(form.is_accepting());
    assert_eq!(form.presenter().last(), Some(&PresenterCall::Enabled(true)));
}

#[test]
fn test_resubmit_without_disabling_replaces_deadline() {
    let mut form = FormOrchestrator::new(
        &FormConfig {
            disable_during_reset: false,
            ..FormConfig::default()
        },
        RecordingPresenter::new(),
    )
    .unwrap();
    fill_valid(&mut form);
    let start = Instant::now();
    form.submit(start);

    let later = start + Duration::from_millis(1000);
    assert!(form.submit(later).all_valid());
    assert_eq!(form.next_deadline(), Some(later + DELAY));
    assert!(!form.tick(start + DELAY));
    assert!(form.tick(later + DELAY));
    let calls = form.presenter().calls();
    assert!(!calls.contains(&PresenterCall::Enabled(false)));
}

#[test]
fn test_cancel_reset_keeps_display() {
    let mut form = form();
    fill_valid(&mut form);
    let start = Instant::now();
    form.submit(start);

    assert!(form.cancel_reset());
    assert!(!form.cancel_reset());
    assert_eq!(form.state(), FormState::Idle);
    assert!(form.is_accepting());
    assert!(!form.tick(start + DELAY * 2));
    assert_eq!(form.context().value(FieldId::Email), "john@example.com");
    assert_eq!(form.context().feedback().message, DEFAULT_SUCCESS_MESSAGE);
}

#[test]
fn test_tick_without_pending_reset() {
    let mut form = form();
    assert!(!form.tick(Instant::now()));
    assert!(form.presenter().calls().is_empty());
}

#[test]
fn test_custom_reset_delay_and_message() {
    let config = FormConfig {
        reset_delay_ms: 250,
        success_message: "Welcome!".to_string(),
        ..FormConfig::default()
    };
    let mut form = FormOrchestrator::new(&config, RecordingPresenter::new()).unwrap();
    fill_valid(&mut form);
    let start = Instant::now();

    assert_eq!(form.reset_delay(), Duration::from_millis(250));

    form.submit(start);
    let banner = PresenterCall::Banner("Welcome!".to_string());
    assert!(form.presenter().calls().contains(&banner));
    assert_eq!(form.next_deadline(), Some(start + form.reset_delay()));
    assert!(form.tick(start + Duration::from_millis(250)));
}

// ============================================================================
// Event dispatch
// ============================================================================

#[test]
fn test_handle_events() {
    let mut form = form();
    let start = Instant::now();

    assert_eq!(
        form.handle(FormEvent::Input(FieldId::FullName, "John".into()), start),
        EventOutcome::Updated
    );
    match form.handle(FormEvent::Blur(FieldId::FullName), start) {
        EventOutcome::Validated(Err(err)) => {
            assert_eq!(err.message, "Please enter at least first and last name")
        }
        other => panic!("unexpected outcome {other:?}"),
    }

    fill_valid(&mut form);
    match form.handle(FormEvent::Submit, start) {
        EventOutcome::Submitted(outcome) => assert!(outcome.all_valid()),
        other => panic!("unexpected outcome {other:?}"),
    }
    assert_eq!(form.handle(FormEvent::Tick, start), EventOutcome::Ignored);
    let outcome = form.handle(FormEvent::Tick, start + DELAY);
    assert_eq!(outcome, EventOutcome::Reset);
}

#[test]
fn test_form_is_reusable_after_reset() {
    let mut form = form();
    let start = Instant::now();
    fill_valid(&mut form);
    form.submit(start);
    form.tick(start + DELAY);

    fill_valid(&mut form);
    let again = start + DELAY + Duration::from_secs(1);
    assert!(form.submit(again).all_valid());
    assert_eq!(form.next_deadline(), Some(again + DELAY));
}
