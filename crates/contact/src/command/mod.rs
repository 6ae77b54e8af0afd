use std::sync::Arc;

use serde::Deserialize;

use crate::Mailer;

mod submit_form;

pub use submit_form::{EMAIL_REGEX, SubmitFormInput};

/// Fixed addresses of the contact relay.
#[derive(Debug, Deserialize, Clone)]
pub struct ContactConfig {
    /// Sender mailbox, e.g. `Portfolio Contact <onboarding@resend.dev>`.
    pub from: String,
    /// Site owner receiving every message.
    pub to: String,
}

#[derive(Clone)]
pub struct Command {
    mailer: Arc<dyn Mailer>,
    config: ContactConfig,
}

impl Command {
    pub fn new(mailer: Arc<dyn Mailer>, config: ContactConfig) -> Self {
        Self { mailer, config }
    }
}
