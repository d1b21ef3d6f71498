use outpost_core::{MessageDraft, SubmissionStatus, ValidationError};

use super::events::ContactEvent;
use super::SubmissionRunId;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContactState {
    pub draft: MessageDraft,
    pub status: SubmissionStatus,
    /// Identifies the send in flight (or the success being held).
    pub run_id: Option<SubmissionRunId>,
    /// Last transmission failure; the draft is kept so the user can retry.
    pub failure: Option<String>,
    pub field_errors: Vec<ValidationError>,
}

/// Applies one event. Transitions that are not valid from the current status
/// leave the state untouched.
pub fn reduce(mut state: ContactState, ev: ContactEvent) -> ContactState {
    match ev {
        ContactEvent::FieldUpdated { field, value } => {
            if state.status == SubmissionStatus::Idle {
                state.draft.set(field, value);
                state.field_errors.retain(|e| e.field() != field);
            }
        }

        ContactEvent::ValidationFailed(errors) => {
            if state.status == SubmissionStatus::Idle {
                state.field_errors = errors;
            }
        }

        ContactEvent::SendStarted { run_id } => {
            if state.status.accepts_submit() {
                state.status = SubmissionStatus::Sending;
                state.run_id = Some(run_id);
                state.failure = None;
                state.field_errors.clear();
            }
        }

        ContactEvent::SendSucceeded { run_id } => {
            if state.status == SubmissionStatus::Sending && state.run_id == Some(run_id) {
                state.status = SubmissionStatus::Success;
                state.draft = MessageDraft::default();
            }
        }

        ContactEvent::SendFailed { run_id, message } => {
            if state.status == SubmissionStatus::Sending && state.run_id == Some(run_id) {
                state.status = SubmissionStatus::Idle;
                state.run_id = None;
                state.failure = Some(message);
            }
        }

        ContactEvent::SendCancelled { run_id } => {
            if state.status == SubmissionStatus::Sending && state.run_id == Some(run_id) {
                state.status = SubmissionStatus::Idle;
                state.run_id = None;
            }
        }

        ContactEvent::ResetElapsed { run_id } => {
            if state.status == SubmissionStatus::Success && state.run_id == Some(run_id) {
                state.status = SubmissionStatus::Idle;
                state.run_id = None;
            }
        }
    }
    state
}
