//! Async driver: runs a [`FormOrchestrator`] on its own tokio task.
//!
//! The task blocks until either a command arrives through a [`FormHandle`] or
//! the orchestrator's reset deadline passes. It stops once every handle has
//! been dropped and hands the orchestrator back through its join handle.

use log::{debug, trace};
use tokio::sync::{mpsc, oneshot};
use tokio::task::JoinHandle;
use tokio::time::sleep_until;

use crate::context::FormContext;
use crate::error::DriverError;
use crate::field::FieldId;
use crate::orchestrator::{FormEvent, FormOrchestrator, SubmitOutcome};
use crate::presenter::FieldPresenter;
use crate::validation::FieldError;

/// Capacity of the command channel.
const COMMAND_BUFFER: usize = 32;

enum Command {
    Event(FormEvent),
    Blur(FieldId, oneshot::Sender<Option<Result<(), FieldError>>>),
    Submit(oneshot::Sender<SubmitOutcome>),
    Snapshot(oneshot::Sender<FormContext>),
}

/// Cloneable handle for sending interaction to a running form task.
#[derive(Clone, Debug)]
pub struct FormHandle {
    tx: mpsc::Sender<Command>,
}

impl FormHandle {
    /// The text of `field` changed.
    pub async fn input(&self, field: FieldId, value: impl Into<String>) -> Result<(), DriverError> {
        self.send(FormEvent::Input(field, value.into())).await
    }

    /// `field` lost focus. Waits for the field's verdict, which is `None` if
    /// the form ignored the event during its reset window.
    pub async fn blur(
        &self,
        field: FieldId,
    ) -> Result<Option<Result<(), FieldError>>, DriverError> {
        let (reply, rx) = oneshot::channel();
        self.tx.send(Command::Blur(field, reply)).await?;
        Ok(rx.await?)
    }

    /// Submit the form and wait for the outcome.
    pub async fn submit(&self) -> Result<SubmitOutcome, DriverError> {
        let (reply, rx) = oneshot::channel();
        self.tx.send(Command::Submit(reply)).await?;
        Ok(rx.await?)
    }

    /// Copy of the current form state.
    pub async fn snapshot(&self) -> Result<FormContext, DriverError> {
        let (reply, rx) = oneshot::channel();
        self.tx.send(Command::Snapshot(reply)).await?;
        Ok(rx.await?)
    }

    async fn send(&self, event: FormEvent) -> Result<(), DriverError> {
        self.tx.send(Command::Event(event)).await?;
        Ok(())
    }
}

/// Move `orchestrator` onto a new tokio task.
pub fn spawn_form<P>(
    orchestrator: FormOrchestrator<P>,
) -> (FormHandle, JoinHandle<FormOrchestrator<P>>)
where
    P: FieldPresenter + Send + 'static,
{
    let (tx, rx) = mpsc::channel(COMMAND_BUFFER);
    let task = tokio::spawn(run_form(orchestrator, rx));
    (FormHandle { tx }, task)
}

/// Sleep until a deadline, or wait forever if None.
async fn sleep_until_optional(deadline: Option<std::time::Instant>) {
    match deadline {
        Some(d) => sleep_until(tokio::time::Instant::from_std(d)).await,
        None => std::future::pending::<()>().await,
    }
}

fn now() -> std::time::Instant {
    tokio::time::Instant::now().into_std()
}

async fn run_form<P: FieldPresenter>(
    mut orchestrator: FormOrchestrator<P>,
    mut rx: mpsc::Receiver<Command>,
) -> FormOrchestrator<P> {
    debug!("Form task started");
    loop {
        tokio::select! {
            command = rx.recv() => {
                let Some(command) = command else { break };
                match command {
                    Command::Event(event) => {
                        trace!("Form event: {:?}", event);
                        orchestrator.handle(event, now());
                    }
                    Command::Blur(field, reply) => {
                        let verdict = orchestrator.blur(field);
                        let _ = reply.send(verdict);
                    }
                    Command::Submit(reply) => {
                        let outcome = orchestrator.submit(now());
                        // Receiver gone = caller stopped waiting
                        let _ = reply.send(outcome);
                    }
                    Command::Snapshot(reply) => {
                        let _ = reply.send(orchestrator.context().clone());
                    }
                }
            }
            _ = sleep_until_optional(orchestrator.next_deadline()) => {
                orchestrator.tick(now());
            }
        }
    }
    debug!("Form task stopped: all handles dropped");
    orchestrator
}
