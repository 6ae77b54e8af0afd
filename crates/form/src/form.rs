use portfolio_shared::contact::{ContactPayload, FormStatus};
use strum::{AsRefStr, Display, EnumString, VariantArray};

use crate::FALLBACK_ERROR;

pub const SUCCESS_MESSAGE: &str = "Message sent successfully! I'll get back to you soon.";

/// Input names of the contact form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, EnumString, Display, AsRefStr, VariantArray)]
#[strum(serialize_all = "lowercase")]
pub enum Field {
    Name,
    Email,
    Message,
}

/// Client-held state of the contact form.
///
/// Status only moves `idle -> in-progress -> succeeded | failed -> idle`.
/// Calls that do not fit the current status are ignored and return `false`.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct ContactForm {
    values: ContactPayload,
    status: FormStatus,
    cycle: u64,
}

impl ContactForm {
    pub fn new() -> Self {
        Self::default()
    }

    /// A form showing the outcome of a submission that already happened.
    pub fn with_outcome(values: ContactPayload, status: FormStatus) -> Self {
        let values = match status {
            FormStatus::Succeeded => ContactPayload::default(),
            _ => values,
        };

        Self {
            values,
            status,
            cycle: 0,
        }
    }

    pub fn set(&mut self, field: Field, value: impl Into<String>) {
        let value = value.into();

        match field {
            Field::Name => self.values.name = value,
            Field::Email => self.values.email = value,
            Field::Message => self.values.message = value,
        }
    }

    pub fn value(&self, field: Field) -> &str {
        match field {
            Field::Name => &self.values.name,
            Field::Email => &self.values.email,
            Field::Message => &self.values.message,
        }
    }

    pub fn values(&self) -> &ContactPayload {
        &self.values
    }

    pub fn status(&self) -> &FormStatus {
        &self.status
    }

    pub fn error(&self) -> Option<&str> {
        self.status.error()
    }

    /// Banner text for a finished submission.
    pub fn status_message(&self) -> Option<&str> {
        match &self.status {
            FormStatus::Succeeded => Some(SUCCESS_MESSAGE),
            FormStatus::Failed(message) => Some(message.as_deref().unwrap_or(FALLBACK_ERROR)),
            FormStatus::Idle | FormStatus::InProgress => None,
        }
    }

    /// Submission counter, bumped on every accepted submit.
    pub fn cycle(&self) -> u64 {
        self.cycle
    }

    pub fn is_submit_disabled(&self) -> bool {
        self.status == FormStatus::InProgress
    }

    /// Starts a submission and returns the request body to send.
    pub fn begin_submit(&mut self) -> Option<ContactPayload> {
        if self.status != FormStatus::Idle {
            return None;
        }

        self.status = FormStatus::InProgress;
        self.cycle += 1;

        Some(self.values.clone())
    }

    pub fn succeed(&mut self) -> bool {
        if self.status != FormStatus::InProgress {
            return false;
        }

        self.status = FormStatus::Succeeded;
        self.values = ContactPayload::default();

        true
    }

    pub fn fail(&mut self, message: Option<String>) -> bool {
        if self.status != FormStatus::InProgress {
            return false;
        }

        self.status = FormStatus::Failed(message);

        true
    }

    /// Returns to `idle` once the outcome of `cycle` has been shown.
    pub fn reset(&mut self, cycle: u64) -> bool {
        if cycle != self.cycle
            || !matches!(self.status, FormStatus::Succeeded | FormStatus::Failed(_))
        {
            return false;
        }

        self.status = FormStatus::Idle;

        true
    }
}

#[cfg(test)]
mod tests {
    use std::str::FromStr;

    use super::*;

    #[test]
    fn test_status_message() {
        let mut form = filled();
        assert_eq!(form.status_message(), None);

        form.begin_submit();
        assert_eq!(form.status_message(), None);

        form.fail(None);
        assert_eq!(form.status_message(), Some(FALLBACK_ERROR));

        let form = ContactForm::with_outcome(ContactPayload::default(), FormStatus::Succeeded);
        assert_eq!(form.status_message(), Some(SUCCESS_MESSAGE));
    }

    fn filled() -> ContactForm {
        let mut form = ContactForm::new();
        form.set(Field::Name, "Ada");
        form.set(Field::Email, "ada@example.com");
        form.set(Field::Message, "Hi");
        form
    }

    #[test]
    fn test_set_only_touches_one_field() {
        let mut form = filled();
        form.set(Field::Email, "ada@lovelace.dev");

        assert_eq!(form.value(Field::Name), "Ada");
        assert_eq!(form.value(Field::Email), "ada@lovelace.dev");
        assert_eq!(form.value(Field::Message), "Hi");
    }

    #[test]
    fn test_field_from_input_name() {
        assert_eq!(Field::from_str("email").unwrap(), Field::Email);
        assert!(Field::from_str("subject").is_err());
        assert_eq!(Field::VARIANTS.len(), 3);
    }

    #[test]
    fn test_success_cycle() {
        let mut form = filled();

        let payload = form.begin_submit().unwrap();
        assert_eq!(payload.name, "Ada");
        assert_eq!(form.status(), &FormStatus::InProgress);
        assert!(form.is_submit_disabled());
        assert!(form.begin_submit().is_none());

        assert!(form.succeed());
        assert_eq!(form.status(), &FormStatus::Succeeded);
        assert_eq!(form.values(), &ContactPayload::default());
        assert!(!form.is_submit_disabled());

        assert!(form.reset(form.cycle()));
        assert_eq!(form.status(), &FormStatus::Idle);
    }

    #[test]
    fn test_failure_cycle_keeps_values() {
        let mut form = filled();

        form.begin_submit().unwrap();
        assert!(form.fail(Some("Invalid email address".to_owned())));
        assert_eq!(form.error(), Some("Invalid email address"));
        assert_eq!(form.value(Field::Name), "Ada");

        assert!(form.reset(form.cycle()));
        assert_eq!(form.error(), None);
        assert_eq!(form.value(Field::Name), "Ada");
    }

    #[test]
    fn test_no_in_progress_without_idle() {
        let mut form = filled();
        form.begin_submit().unwrap();
        form.succeed();

        assert!(form.begin_submit().is_none());
        assert_eq!(form.status(), &FormStatus::Succeeded);
    }

    #[test]
    fn test_ignored_transitions() {
        let mut form = filled();

        assert!(!form.succeed());
        assert!(!form.fail(None));
        assert!(!form.reset(0));
        assert_eq!(form.status(), &FormStatus::Idle);

        form.begin_submit().unwrap();
        assert!(!form.reset(form.cycle()));
        form.fail(None);
        assert!(!form.reset(form.cycle() - 1));
        assert_eq!(form.status(), &FormStatus::Failed(None));
    }

    #[test]
    fn test_with_outcome() {
        let values = ContactPayload {
            name: "Ada".to_owned(),
            email: "not-an-email".to_owned(),
            message: "hi".to_owned(),
        };

        let failed = ContactForm::with_outcome(
            values.clone(),
            FormStatus::Failed(Some("Invalid email address".to_owned())),
        );
        assert_eq!(failed.values(), &values);

        let succeeded = ContactForm::with_outcome(values, FormStatus::Succeeded);
        assert_eq!(succeeded.values(), &ContactPayload::default());
    }
}
