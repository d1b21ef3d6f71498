pub mod gate;

pub use gate::{AccessDecision, DisclosureGate, PendingConfirmation, PromptResponse};
