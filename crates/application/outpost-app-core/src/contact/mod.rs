pub mod commands;
pub mod controller;
pub mod events;
pub mod reducer;

pub use commands::ContactCommand;
pub use controller::{SubmissionController, SubmitOutcome};
pub use events::ContactEvent;
pub use reducer::{reduce, ContactState};

pub type SubmissionRunId = uuid::Uuid;
