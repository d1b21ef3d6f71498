mod async_runtime;
pub mod auth;
pub mod contact;
pub mod disclosure;
pub mod domain;
pub mod navigation;
pub mod persistence;
pub mod ports;
pub mod transport;
pub mod viewmodel;

pub use auth::{SessionStoreAuth, StaticAuth};
pub use contact::{
    ContactCommand, ContactEvent, ContactState, SubmissionController, SubmissionRunId,
    SubmitOutcome,
};
pub use disclosure::{AccessDecision, DisclosureGate, PendingConfirmation, PromptResponse};
pub use domain::{Session, SiteSettings};
pub use navigation::RecordingNavigator;
pub use persistence::{FilePersistence, JsonContentRepo};
pub use ports::*;
pub use transport::SimulatedTransport;
pub use viewmodel::*;
