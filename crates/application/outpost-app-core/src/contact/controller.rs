use std::sync::Arc;
use std::time::Duration;

use outpost_core::{DraftField, SubmissionStatus, ValidationError};
use tokio::sync::mpsc;
use tokio_util::sync::CancellationToken;
use tracing::{debug, info, warn};

use super::{reduce, ContactCommand, ContactEvent, ContactState, SubmissionRunId};
use crate::ports::MessagingTransport;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmitOutcome {
    Started(SubmissionRunId),
    /// Submit arrived while a send was in flight or its success was showing.
    Ignored,
}

/// Owns one contact draft and drives it through Idle -> Sending -> Success -> Idle.
///
/// Background work (the transport call and the success hold) reports back through
/// a channel; the host applies those events with [`tick`](Self::tick) or
/// [`next_transition`](Self::next_transition) on its own thread.
pub struct SubmissionController<T> {
    state: ContactState,
    transport: Arc<T>,
    success_hold: Duration,
    cancel: Option<CancellationToken>,

    tx: mpsc::Sender<ContactEvent>,
    rx: mpsc::Receiver<ContactEvent>,
}

impl<T> SubmissionController<T>
where
    T: MessagingTransport,
{
    pub fn new(transport: T, success_hold: Duration) -> Self {
        let (tx, rx) = mpsc::channel(16);
        Self {
            state: ContactState::default(),
            transport: Arc::new(transport),
            success_hold,
            cancel: None,
            tx,
            rx,
        }
    }

    pub fn state(&self) -> &ContactState {
        &self.state
    }

    pub fn status(&self) -> SubmissionStatus {
        self.state.status
    }

    pub fn dispatch(&mut self, cmd: ContactCommand) {
        match cmd {
            ContactCommand::UpdateField(field, value) => {
                self.update_field(field, value);
            }
            ContactCommand::Submit => {
                self.submit();
            }
            ContactCommand::Cancel => self.cancel(),
        }
    }

    /// Returns `false` when the edit was dropped because a send is underway.
    pub fn update_field(&mut self, field: DraftField, value: impl Into<String>) -> bool {
        if self.state.status != SubmissionStatus::Idle {
            debug!(%field, status = ?self.state.status, "ignoring draft edit");
            return false;
        }
        self.apply(ContactEvent::FieldUpdated {
            field,
            value: value.into(),
        });
        true
    }

    /// Checks the draft and records any field errors for display. Only the
    /// calling surface gates on this; [`submit`](Self::submit) sends whatever
    /// draft it holds.
    pub fn validate(&mut self) -> Result<(), Vec<ValidationError>> {
        match self.state.draft.validate() {
            Ok(()) => Ok(()),
            Err(errors) => {
                debug!(count = errors.len(), "draft has field errors");
                self.apply(ContactEvent::ValidationFailed(errors.clone()));
                Err(errors)
            }
        }
    }

    pub fn submit(&mut self) -> SubmitOutcome {
        if !self.state.status.accepts_submit() {
            debug!(status = ?self.state.status, "ignoring submit");
            return SubmitOutcome::Ignored;
        }

        let run_id: SubmissionRunId = uuid::Uuid::new_v4();
        self.apply(ContactEvent::SendStarted { run_id });
        info!(%run_id, "transmitting contact message");

        let token = CancellationToken::new();
        if let Some(previous) = self.cancel.replace(token.clone()) {
            previous.cancel();
        }

        let tx = self.tx.clone();
        let transport = self.transport.clone();
        let draft = self.state.draft.clone();
        let spawn_res = crate::async_runtime::spawn(async move {
            let ev = tokio::select! {
                _ = token.cancelled() => return,
                res = transport.send(&draft) => match res {
                    Ok(()) => ContactEvent::SendSucceeded { run_id },
                    Err(e) => ContactEvent::SendFailed {
                        run_id,
                        message: e.to_string(),
                    },
                },
            };
            let _ = tx.send(ev).await;
        });

        if let Err(e) = spawn_res {
            warn!("failed to start transmission task: {e}");
            self.apply(ContactEvent::SendFailed {
                run_id,
                message: format!("Failed to start transmission: {e}"),
            });
        }

        SubmitOutcome::Started(run_id)
    }

    /// Teardown hook. Stops pending background work; an in-flight send ends in
    /// `Idle` with the draft kept, a showing success resets to `Idle` at once.
    pub fn cancel(&mut self) {
        if let Some(token) = self.cancel.take() {
            token.cancel();
        }

        let Some(run_id) = self.state.run_id else {
            return;
        };
        let ev = match self.state.status {
            SubmissionStatus::Sending => ContactEvent::SendCancelled { run_id },
            SubmissionStatus::Success => ContactEvent::ResetElapsed { run_id },
            SubmissionStatus::Idle => return,
        };
        debug!(%run_id, "submission cancelled");
        self.apply(ev);
    }

    /// Apply every event that is ready without waiting. Returns whether the
    /// status changed.
    pub fn tick(&mut self) -> bool {
        let mut changed = false;
        while let Ok(ev) = self.rx.try_recv() {
            changed |= self.handle_incoming(ev);
        }
        changed
    }

    /// Wait for the next status change of the current run. Returns `None` when
    /// nothing is pending.
    pub async fn next_transition(&mut self) -> Option<SubmissionStatus> {
        while self.state.run_id.is_some() {
            let ev = self.rx.recv().await?;
            if self.handle_incoming(ev) {
                return Some(self.state.status);
            }
        }
        None
    }

    fn handle_incoming(&mut self, ev: ContactEvent) -> bool {
        let run_id = match ev.run_id() {
            Some(id) if Some(id) == self.state.run_id => id,
            _ => {
                debug!(?ev, "dropping stale submission event");
                return false;
            }
        };

        let before = self.state.status;
        self.apply(ev);
        let after = self.state.status;

        if before == SubmissionStatus::Sending && after == SubmissionStatus::Success {
            self.schedule_reset(run_id);
        }
        before != after
    }

    fn schedule_reset(&mut self, run_id: SubmissionRunId) {
        let token = self
            .cancel
            .get_or_insert_with(CancellationToken::new)
            .clone();
        let tx = self.tx.clone();
        let hold = self.success_hold;

        let spawn_res = crate::async_runtime::spawn(async move {
            tokio::select! {
                _ = token.cancelled() => {}
                _ = tokio::time::sleep(hold) => {
                    let _ = tx.send(ContactEvent::ResetElapsed { run_id }).await;
                }
            }
        });

        if let Err(e) = spawn_res {
            warn!("failed to schedule success reset: {e}");
            self.apply(ContactEvent::ResetElapsed { run_id });
        }
    }

    fn apply(&mut self, ev: ContactEvent) {
        let before = self.state.status;
        self.state = reduce(std::mem::take(&mut self.state), ev);
        if before != self.state.status {
            debug!(from = ?before, to = ?self.state.status, "submission status changed");
        }
    }
}

impl<T> Drop for SubmissionController<T> {
    fn drop(&mut self) {
        if let Some(token) = self.cancel.take() {
            token.cancel();
        }
    }
}
