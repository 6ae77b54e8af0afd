use axum::response::IntoResponse;
use portfolio_form::{ContactForm, RESET_DELAY};

use crate::site::{SITE, Site};
use crate::template::{Template, filters};

#[derive(askama::Template)]
#[template(path = "index.html")]
pub struct IndexTemplate {
    pub site: &'static Site,
    pub form: ContactForm,
    pub year: i32,
    pub reset_after_ms: u128,
}

impl IndexTemplate {
    pub fn new(form: ContactForm, year: i32) -> Self {
        Self {
            site: &SITE,
            form,
            year,
            reset_after_ms: RESET_DELAY.as_millis(),
        }
    }
}

pub async fn page(template: Template) -> impl IntoResponse {
    let year = template.year();

    template.render(IndexTemplate::new(ContactForm::new(), year))
}
