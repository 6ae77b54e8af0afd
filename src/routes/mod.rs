use axum::{
    Router,
    response::IntoResponse,
    routing::{get, post},
};

use crate::template::{NotFoundTemplate, Template};

mod assets;
mod contact;
mod health;
mod index;

pub use assets::AssetsService;

#[derive(Clone)]
pub struct AppState {
    pub contact_command: portfolio_contact::Command,
}

pub async fn fallback(template: Template) -> impl IntoResponse {
    let year = template.year();
    let mut response = template.render(NotFoundTemplate { year });
    if response.status().is_success() {
        *response.status_mut() = axum::http::StatusCode::NOT_FOUND;
    }

    response
}

pub fn router(app_state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health))
        .route("/", get(index::page))
        .route("/contact", post(contact::action))
        .route("/api/contact", post(contact::api))
        .nest_service("/static", AssetsService::new())
        .fallback(fallback)
        .with_state(app_state)
}
