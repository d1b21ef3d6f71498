use std::time::Duration;

use async_trait::async_trait;
use outpost_core::MessageDraft;
use tracing::info;

use crate::ports::{MessagingTransport, TransmissionError};

/// Stand-in for a real mail relay: waits a fixed latency, logs the payload and
/// always succeeds.
#[derive(Debug, Clone)]
pub struct SimulatedTransport {
    recipient: String,
    latency: Duration,
}

impl SimulatedTransport {
    pub fn new(recipient: impl Into<String>, latency: Duration) -> Self {
        Self {
            recipient: recipient.into(),
            latency,
        }
    }

    pub fn recipient(&self) -> &str {
        &self.recipient
    }
}

#[async_trait]
impl MessagingTransport for SimulatedTransport {
    async fn send(&self, draft: &MessageDraft) -> Result<(), TransmissionError> {
        tokio::time::sleep(self.latency).await;
        info!(recipient = %self.recipient, "transmission sent");
        info!(
            name = %draft.name,
            email = %draft.email,
            subject = %draft.subject,
            bytes = draft.message.len(),
            "transmission payload"
        );
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test(start_paused = true)]
    async fn waits_the_configured_latency() {
        let transport = SimulatedTransport::new("hq@example.com", Duration::from_millis(1_500));
        let started = tokio::time::Instant::now();

        transport.send(&MessageDraft::default()).await.unwrap();

        assert!(started.elapsed() >= Duration::from_millis(1_500));
        assert_eq!(transport.recipient(), "hq@example.com");
    }
}
