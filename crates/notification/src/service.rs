//! Email delivery service selected from configuration

use async_trait::async_trait;
use portfolio_contact::{Envelope, Mailer};
use serde::Deserialize;

use crate::{ResendMailer, SmtpMailer};

#[derive(Debug, Deserialize, Clone, Copy, Default, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Provider {
    #[default]
    Resend,
    Smtp,
}

#[derive(Debug, Deserialize, Clone)]
pub struct EmailConfig {
    #[serde(default)]
    pub provider: Provider,
    #[serde(default)]
    pub api_key: String,
    #[serde(default = "default_api_url")]
    pub api_url: String,
    #[serde(default = "default_smtp_host")]
    pub smtp_host: String,
    #[serde(default = "default_smtp_port")]
    pub smtp_port: u16,
    #[serde(default)]
    pub smtp_username: String,
    #[serde(default)]
    pub smtp_password: String,
}

impl Default for EmailConfig {
    fn default() -> Self {
        Self {
            provider: Provider::default(),
            api_key: String::new(),
            api_url: default_api_url(),
            smtp_host: default_smtp_host(),
            smtp_port: default_smtp_port(),
            smtp_username: String::new(),
            smtp_password: String::new(),
        }
    }
}

fn default_api_url() -> String {
    "https://api.resend.com".to_string()
}

fn default_smtp_host() -> String {
    "localhost".to_string()
}

fn default_smtp_port() -> u16 {
    1025
}

/// Email service for relaying contact messages
#[derive(Clone)]
pub enum EmailService {
    Resend(ResendMailer),
    Smtp(SmtpMailer),
}

impl EmailService {
    /// Create a new email service from configuration
    pub fn new(config: &EmailConfig) -> anyhow::Result<Self> {
        let service = match config.provider {
            Provider::Resend => Self::Resend(ResendMailer::new(&config.api_url, &config.api_key)?),
            Provider::Smtp => Self::Smtp(SmtpMailer::new(config)?),
        };

        Ok(service)
    }
}

#[async_trait]
impl Mailer for EmailService {
    async fn send(&self, envelope: &Envelope) -> anyhow::Result<serde_json::Value> {
        match self {
            Self::Resend(mailer) => mailer.send(envelope).await,
            Self::Smtp(mailer) => mailer.send(envelope).await,
        }
    }
}
