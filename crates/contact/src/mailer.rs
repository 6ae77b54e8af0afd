use async_trait::async_trait;
use serde::Serialize;

/// A fully formatted outbound email.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Envelope {
    pub from: String,
    pub to: String,
    pub reply_to: String,
    pub subject: String,
    pub html: String,
    pub text: String,
}

/// Capability to hand an [`Envelope`] to a delivery provider.
///
/// On success the provider's response is returned untouched so it can be
/// echoed back to the caller.
#[async_trait]
pub trait Mailer: Send + Sync {
    async fn send(&self, envelope: &Envelope) -> anyhow::Result<serde_json::Value>;
}
