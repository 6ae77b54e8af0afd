use async_trait::async_trait;
use lettre::{
    AsyncSmtpTransport, AsyncTransport, Message, Tokio1Executor, message::MultiPart,
    transport::smtp::authentication::Credentials,
};
use portfolio_contact::{Envelope, Mailer};

use crate::EmailConfig;

/// SMTP relay, mostly for local mail catchers.
#[derive(Clone)]
pub struct SmtpMailer {
    mailer: AsyncSmtpTransport<Tokio1Executor>,
}

impl SmtpMailer {
    pub fn new(config: &EmailConfig) -> anyhow::Result<Self> {
        let mailer = if config.smtp_username.is_empty() || config.smtp_password.is_empty() {
            tracing::info!(
                smtp_host = %config.smtp_host,
                smtp_port = config.smtp_port,
                "SMTP credentials not configured, using unauthenticated connection (e.g., MailDev)"
            );

            AsyncSmtpTransport::<Tokio1Executor>::builder_dangerous(&config.smtp_host)
                .port(config.smtp_port)
                .build()
        } else {
            tracing::info!(
                smtp_host = %config.smtp_host,
                smtp_port = config.smtp_port,
                "SMTP relay initialized with authentication and TLS"
            );

            let creds =
                Credentials::new(config.smtp_username.clone(), config.smtp_password.clone());

            AsyncSmtpTransport::<Tokio1Executor>::relay(&config.smtp_host)?
                .port(config.smtp_port)
                .credentials(creds)
                .build()
        };

        Ok(Self { mailer })
    }
}

pub(crate) fn build_message(envelope: &Envelope) -> anyhow::Result<Message> {
    let message = Message::builder()
        .from(envelope.from.parse()?)
        .reply_to(envelope.reply_to.parse()?)
        .to(envelope.to.parse()?)
        .subject(envelope.subject.to_owned())
        .multipart(MultiPart::alternative_plain_html(
            envelope.text.to_owned(),
            envelope.html.to_owned(),
        ))?;

    Ok(message)
}

#[async_trait]
impl Mailer for SmtpMailer {
    #[tracing::instrument(skip_all, fields(to = %envelope.to, subject = %envelope.subject))]
    async fn send(&self, envelope: &Envelope) -> anyhow::Result<serde_json::Value> {
        tracing::info!("Sending email through SMTP");

        let message = build_message(envelope)?;
        let response = self.mailer.send(message).await?;

        Ok(serde_json::json!({
            "code": response.code().to_string(),
            "message": response.message().collect::<Vec<_>>(),
        }))
    }
}
