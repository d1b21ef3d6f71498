use outpost_core::{DraftField, ValidationError};

use super::SubmissionRunId;

#[derive(Debug, Clone)]
pub enum ContactEvent {
    // Draft editing
    FieldUpdated { field: DraftField, value: String },
    ValidationFailed(Vec<ValidationError>),

    // Transmission lifecycle
    SendStarted { run_id: SubmissionRunId },
    SendSucceeded { run_id: SubmissionRunId },
    SendFailed { run_id: SubmissionRunId, message: String },
    SendCancelled { run_id: SubmissionRunId },
    ResetElapsed { run_id: SubmissionRunId },
}

impl ContactEvent {
    pub fn run_id(&self) -> Option<SubmissionRunId> {
        match self {
            ContactEvent::FieldUpdated { .. } | ContactEvent::ValidationFailed(_) => None,
            ContactEvent::SendStarted { run_id }
            | ContactEvent::SendSucceeded { run_id }
            | ContactEvent::SendFailed { run_id, .. }
            | ContactEvent::SendCancelled { run_id }
            | ContactEvent::ResetElapsed { run_id } => Some(*run_id),
        }
    }
}
