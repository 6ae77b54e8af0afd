use std::sync::LazyLock;

use anyhow::Context;
use async_trait::async_trait;
use portfolio_contact::{Envelope, Mailer};
use serde::Serialize;

static USER_AGENT: LazyLock<String> =
    LazyLock::new(|| format!("portfolio/{}", env!("CARGO_PKG_VERSION")));

/// Client for the Resend `POST /emails` API.
#[derive(Clone)]
pub struct ResendMailer {
    http: reqwest::Client,
    api_url: String,
    api_key: String,
}

#[derive(Debug, Serialize)]
struct SendEmailRequest<'a> {
    from: &'a str,
    to: [&'a str; 1],
    reply_to: &'a str,
    subject: &'a str,
    html: &'a str,
    text: &'a str,
}

impl<'a> From<&'a Envelope> for SendEmailRequest<'a> {
    fn from(envelope: &'a Envelope) -> Self {
        Self {
            from: &envelope.from,
            to: [&envelope.to],
            reply_to: &envelope.reply_to,
            subject: &envelope.subject,
            html: &envelope.html,
            text: &envelope.text,
        }
    }
}

impl ResendMailer {
    pub fn new(api_url: impl Into<String>, api_key: impl Into<String>) -> anyhow::Result<Self> {
        let http = reqwest::Client::builder()
            .user_agent(&*USER_AGENT)
            .build()
            .context("Failed to build Resend http client")?;

        Ok(Self {
            http,
            api_url: api_url.into().trim_end_matches('/').to_owned(),
            api_key: api_key.into(),
        })
    }
}

#[async_trait]
impl Mailer for ResendMailer {
    #[tracing::instrument(skip_all, fields(to = %envelope.to, subject = %envelope.subject))]
    async fn send(&self, envelope: &Envelope) -> anyhow::Result<serde_json::Value> {
        tracing::info!("Sending email through Resend");

        let response = self
            .http
            .post(format!("{}/emails", self.api_url))
            .bearer_auth(&self.api_key)
            .json(&SendEmailRequest::from(envelope))
            .send()
            .await
            .context("Failed to reach Resend")?;

        let status = response.status();
        let body = response
            .text()
            .await
            .context("Failed to read Resend response")?;
        let data = serde_json::from_str(&body).unwrap_or(serde_json::Value::String(body));

        if !status.is_success() {
            anyhow::bail!("Resend rejected email with {status}: {data}");
        }

        Ok(data)
    }
}
