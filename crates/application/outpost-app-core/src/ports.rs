use async_trait::async_trait;
use outpost_core::{CompanyDirectory, MessageDraft, ProjectCatalog};

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum TransmissionError {
    #[error("message rejected: {0}")]
    Rejected(String),
    #[error("messaging service unavailable: {0}")]
    Unavailable(String),
}

/// Answers whether the current session is signed in. Polled on every access
/// request, never cached.
pub trait AuthSessionProvider: Send + Sync + 'static {
    fn is_authenticated(&self) -> bool;
}

pub trait Navigator: Send + Sync + 'static {
    fn go_to(&self, route: &str);
}

#[async_trait]
pub trait MessagingTransport: Send + Sync + 'static {
    async fn send(&self, draft: &MessageDraft) -> Result<(), TransmissionError>;
}

pub trait ContentRepo: Send + Sync + 'static {
    fn company(&self) -> anyhow::Result<CompanyDirectory>;
    fn projects(&self) -> anyhow::Result<ProjectCatalog>;
}
