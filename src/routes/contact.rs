use axum::{
    Json,
    extract::{
        Form, State,
        rejection::{FormRejection, JsonRejection},
    },
    http::StatusCode,
    response::{IntoResponse, Response},
};
use portfolio_form::ContactForm;
use portfolio_shared::{
    Error,
    contact::{ContactPayload, Delivered, FormStatus, Rejected},
};

use crate::{
    routes::{AppState, index::IndexTemplate},
    template::Template,
};

/// Only message a client ever sees for a server-side failure.
pub const SEND_FAILED: &str = "Failed to send email. Please try again later.";

fn failure(err: &Error) -> (StatusCode, String) {
    if err.is_client() {
        return (StatusCode::BAD_REQUEST, err.to_string());
    }

    (StatusCode::INTERNAL_SERVER_ERROR, SEND_FAILED.to_owned())
}

fn reject(err: &Error) -> Response {
    let (status, error) = failure(err);

    (status, Json(Rejected { error })).into_response()
}

/// POST /api/contact
pub async fn api(
    State(app_state): State<AppState>,
    payload: Result<Json<ContactPayload>, JsonRejection>,
) -> Response {
    let payload = match payload {
        Ok(Json(payload)) => payload,
        Err(rejection) => {
            tracing::debug!(reason = %rejection.body_text(), "Unreadable contact payload");

            return reject(&Error::FieldsRequired);
        }
    };

    match app_state.contact_command.submit_form(payload.into()).await {
        Ok(data) => Json(Delivered {
            success: true,
            data,
        })
        .into_response(),
        Err(err) => reject(&err),
    }
}

/// POST /contact, form-encoded submission of browsers without scripts.
pub async fn action(
    template: Template,
    State(app_state): State<AppState>,
    input: Result<Form<ContactPayload>, FormRejection>,
) -> Response {
    let values = match input {
        Ok(Form(values)) => values,
        Err(rejection) => {
            tracing::debug!(reason = %rejection.body_text(), "Unreadable contact form");

            ContactPayload::default()
        }
    };

    let (status_code, status) = match app_state
        .contact_command
        .submit_form(values.clone().into())
        .await
    {
        Ok(_) => (StatusCode::OK, FormStatus::Succeeded),
        Err(err) => {
            let (status_code, error) = failure(&err);

            (status_code, FormStatus::Failed(Some(error)))
        }
    };

    let year = template.year();
    let mut response = template.render(IndexTemplate::new(
        ContactForm::with_outcome(values, status),
        year,
    ));

    if response.status().is_success() {
        *response.status_mut() = status_code;
    }

    response
}
