#![allow(dead_code)]

use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use portfolio_contact::{Command, ContactConfig, Envelope, Mailer};

/// Mailer that records every envelope and answers like the provider would.
#[derive(Default)]
pub struct RecordingMailer {
    pub sent: Mutex<Vec<Envelope>>,
}

#[async_trait]
impl Mailer for RecordingMailer {
    async fn send(&self, envelope: &Envelope) -> anyhow::Result<serde_json::Value> {
        let mut sent = self.sent.lock().unwrap();
        sent.push(envelope.clone());

        Ok(serde_json::json!({ "id": format!("email-{}", sent.len()) }))
    }
}

/// Mailer whose provider always rejects the request.
pub struct FailingMailer;

#[async_trait]
impl Mailer for FailingMailer {
    async fn send(&self, _envelope: &Envelope) -> anyhow::Result<serde_json::Value> {
        anyhow::bail!("provider returned 401: API key is invalid (re_secret_key)")
    }
}

pub fn config() -> ContactConfig {
    ContactConfig {
        from: "Portfolio Contact <onboarding@resend.dev>".to_owned(),
        to: "owner@portfolio.localhost".to_owned(),
    }
}

pub fn command(mailer: Arc<dyn Mailer>) -> Command {
    Command::new(mailer, config())
}
