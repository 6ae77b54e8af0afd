use std::{
    sync::{Arc, Mutex, MutexGuard},
    time::Duration,
};

use portfolio_shared::contact::FormStatus;

use crate::{ContactApi, ContactForm, Field};

/// How long a success or failure banner stays before the form goes idle.
pub const RESET_DELAY: Duration = Duration::from_secs(5);

/// Drives a [`ContactForm`] through one request per submit and the timed
/// return to `idle`.
pub struct FormController<A> {
    api: Arc<A>,
    form: Arc<Mutex<ContactForm>>,
    reset_delay: Duration,
}

impl<A> Clone for FormController<A> {
    fn clone(&self) -> Self {
        Self {
            api: self.api.clone(),
            form: self.form.clone(),
            reset_delay: self.reset_delay,
        }
    }
}

impl<A: ContactApi> FormController<A> {
    pub fn new(api: A) -> Self {
        Self {
            api: Arc::new(api),
            form: Arc::default(),
            reset_delay: RESET_DELAY,
        }
    }

    pub fn with_reset_delay(mut self, delay: Duration) -> Self {
        self.reset_delay = delay;
        self
    }

    fn lock(&self) -> MutexGuard<'_, ContactForm> {
        self.form
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    pub fn edit(&self, field: Field, value: impl Into<String>) {
        self.lock().set(field, value);
    }

    pub fn snapshot(&self) -> ContactForm {
        self.lock().clone()
    }

    pub fn status(&self) -> FormStatus {
        self.lock().status().clone()
    }

    /// Sends the current values and returns the resulting status.
    ///
    /// Ignored unless the form is idle; the current status is returned then.
    pub async fn submit(&self) -> FormStatus {
        let (payload, cycle) = {
            let mut form = self.lock();
            let Some(payload) = form.begin_submit() else {
                return form.status().clone();
            };

            (payload, form.cycle())
        };

        let outcome = self.api.submit(&payload).await;

        let status = {
            let mut form = self.lock();
            match outcome {
                Ok(_) => form.succeed(),
                Err(err) => form.fail(Some(err.0)),
            };

            form.status().clone()
        };

        tracing::debug!(%status, cycle, "Contact form submitted");

        let form = self.form.clone();
        let delay = self.reset_delay;
        tokio::spawn(async move {
            tokio::time::sleep(delay).await;

            let mut form = form.lock().unwrap_or_else(|poisoned| poisoned.into_inner());
            form.reset(cycle);
        });

        status
    }
}
