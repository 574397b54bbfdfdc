use std::time::Duration;

use regform_lib::driver::spawn_form;
use regform_lib::{
    DriverError, FieldId, FormConfig, FormOrchestrator, FormState, PresenterCall,
    RecordingPresenter, SubmitOutcome, Validity,
};

fn config(reset_delay_ms: u64) -> FormConfig {
    FormConfig {
        reset_delay_ms,
        ..FormConfig::default()
    }
}

const VALID: [(FieldId, &str); 5] = [
    (FieldId::FullName, "Grace Hopper"),
    (FieldId::Age, "85"),
    (FieldId::Email, "grace@navy.mil"),
    (FieldId::Password, "C0bol&Co"),
    (FieldId::ConfirmPassword, "C0bol&Co"),
];

#[tokio::test]
async fn test_blur_through_handle() {
    let form = FormOrchestrator::new(&config(3000), RecordingPresenter::new()).unwrap();
    let (handle, task) = spawn_form(form);

    handle.input(FieldId::Email, "nope").await.unwrap();
    let verdict = handle.blur(FieldId::Email).await.unwrap();
    let err = verdict.unwrap().unwrap_err();
    assert_eq!(err.field, FieldId::Email);
    assert_eq!(err.message, "Please enter a valid email address");

    let snapshot = handle.snapshot().await.unwrap();
    assert_eq!(snapshot.validity(FieldId::Email), Validity::Invalid);

    drop(handle);
    let form = task.await.unwrap();
    assert_eq!(form.presenter().calls().len(), 1);
}

#[tokio::test]
async fn test_blur_replies_after_rendering() {
    let form = FormOrchestrator::new(&config(3000), RecordingPresenter::new()).unwrap();
    let (handle, task) = spawn_form(form);

    for (field, value) in VALID {
        handle.input(field, value).await.unwrap();
        assert_eq!(handle.blur(field).await.unwrap(), Some(Ok(())));
    }

    drop(handle);
    let form = task.await.unwrap();
    let shown: Vec<_> = form
        .presenter()
        .calls()
        .iter()
        .filter_map(|call| match call {
            PresenterCall::Success(field) => Some(*field),
            _ => None,
        })
        .collect();
    assert_eq!(shown, FieldId::ALL.to_vec());
}

#[tokio::test]
async fn test_reset_fires_after_delay() {
    let form = FormOrchestrator::new(&config(50), RecordingPresenter::new()).unwrap();
    let (handle, task) = spawn_form(form);

    for (field, value) in VALID {
        handle.input(field, value).await.unwrap();
    }
    let outcome = handle.submit().await.unwrap();
    assert!(outcome.all_valid());

    let snapshot = handle.snapshot().await.unwrap();
    assert!(!snapshot.is_enabled());
    assert_eq!(snapshot.value(FieldId::FullName), "Grace Hopper");

    // Ignored while the banner is up
    assert_eq!(handle.submit().await.unwrap(), SubmitOutcome::Ignored);
    assert_eq!(handle.blur(FieldId::Age).await.unwrap(), None);

    tokio::time::sleep(Duration::from_millis(200)).await;

    let snapshot = handle.snapshot().await.unwrap();
    assert!(snapshot.is_enabled());
    assert!(snapshot.feedback().is_empty());
    for (_, state) in snapshot.iter() {
        assert_eq!(state.value, "");
        assert_eq!(state.validity, Validity::Unset);
    }

    drop(handle);
    let form = task.await.unwrap();
    assert_eq!(form.state(), FormState::Idle);
    let calls = form.presenter().calls();
    assert!(calls.contains(&PresenterCall::ResetValues));
}

#[tokio::test]
async fn test_failed_submit_schedules_nothing() {
    let form = FormOrchestrator::new(&config(50), RecordingPresenter::new()).unwrap();
    let (handle, task) = spawn_form(form);

    handle.input(FieldId::FullName, "Cher").await.unwrap();
    let outcome = handle.submit().await.unwrap();
    assert!(!outcome.all_valid());

    tokio::time::sleep(Duration::from_millis(100)).await;
    let snapshot = handle.snapshot().await.unwrap();
    assert_eq!(snapshot.value(FieldId::FullName), "Cher");

    drop(handle);
    let form = task.await.unwrap();
    assert_eq!(form.next_deadline(), None);
    let calls = form.presenter().calls();
    assert!(!calls.contains(&PresenterCall::ResetValues));
}

#[tokio::test]
async fn test_handle_errors_after_task_ends() {
    let form = FormOrchestrator::new(&config(3000), RecordingPresenter::new()).unwrap();
    let (handle, task) = spawn_form(form);
    task.abort();
    let _ = task.await;

    assert_eq!(handle.blur(FieldId::Age).await, Err(DriverError::Closed));
    assert_eq!(handle.submit().await, Err(DriverError::Closed));
}
