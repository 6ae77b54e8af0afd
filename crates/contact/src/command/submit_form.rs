use std::sync::LazyLock;

use anyhow::Context;
use portfolio_shared::{Error, contact::ContactPayload};
use regex::Regex;
use validator::Validate;

use crate::{
    Envelope,
    template::{ContactHtmlTemplate, ContactPlainTemplate},
};

/// One `@`, no whitespace, and at least one `.` after the `@`.
pub static EMAIL_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("email pattern is valid")
});

#[derive(Debug, Clone, Validate)]
pub struct SubmitFormInput {
    #[validate(length(min = 1, code = "required"))]
    pub name: String,
    #[validate(
        length(min = 1, code = "required"),
        regex(path = *EMAIL_REGEX, code = "email")
    )]
    pub email: String,
    #[validate(length(min = 1, code = "required"))]
    pub message: String,
}

impl From<ContactPayload> for SubmitFormInput {
    fn from(payload: ContactPayload) -> Self {
        Self {
            name: payload.name,
            email: payload.email,
            message: payload.message,
        }
    }
}

impl super::Command {
    /// Validates a submission and relays it to the site owner.
    ///
    /// Returns the delivery provider's response.
    #[tracing::instrument(skip_all, fields(to = %self.config.to))]
    pub async fn submit_form(
        &self,
        input: SubmitFormInput,
    ) -> portfolio_shared::Result<serde_json::Value> {
        input.validate()?;

        let envelope = self.envelope(input)?;

        match self.mailer.send(&envelope).await {
            Ok(data) => {
                tracing::info!(subject = %envelope.subject, "Contact message delivered");

                Ok(data)
            }
            Err(err) => {
                tracing::error!(error = ?err, "Failed to deliver contact message");

                Err(Error::Delivery(err))
            }
        }
    }

    pub fn envelope(&self, input: SubmitFormInput) -> anyhow::Result<Envelope> {
        let year = time::OffsetDateTime::now_utc().year();
        let subject = format!("Portfolio Contact from {}", input.name);

        let html = askama::Template::render(&ContactHtmlTemplate {
            name: &input.name,
            email: &input.email,
            message: &input.message,
            year,
        })
        .context("Failed to render contact email html")?;

        let text = askama::Template::render(&ContactPlainTemplate {
            name: &input.name,
            email: &input.email,
            message: &input.message,
            year,
        })
        .context("Failed to render contact email text")?;

        Ok(Envelope {
            from: self.config.from.to_owned(),
            to: self.config.to.to_owned(),
            reply_to: input.email,
            subject,
            html,
            text,
        })
    }
}
