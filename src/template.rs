use axum::{
    extract::FromRequestParts,
    http::{StatusCode, request::Parts},
    response::{Html, IntoResponse, Response},
};
use std::{collections::HashMap, convert::Infallible};

pub const SERVER_ERROR_MESSAGE: &str = "Something went wrong, please retry later";

pub(crate) mod filters {
    /// Path of an embedded asset, versioned outside of dev builds since
    /// `/static` responses are cached as immutable.
    #[askama::filter_fn]
    pub fn asset(path: &str, values: &dyn askama::Values) -> askama::Result<String> {
        let is_dev = askama::get_value::<bool>(values, "is_dev")
            .copied()
            .unwrap_or(false);

        if is_dev {
            return Ok(format!("/static{path}"));
        }

        Ok(format!("/static{path}?v={}", env!("CARGO_PKG_VERSION")))
    }
}

pub struct Template {
    year: i32,
}

impl Template {
    pub fn year(&self) -> i32 {
        self.year
    }

    fn render_with_values<T: askama::Template>(
        &self,
        template: T,
    ) -> Result<String, askama::Error> {
        let mut values: HashMap<&str, Box<dyn std::any::Any>> = HashMap::new();

        #[cfg(debug_assertions)]
        {
            values.insert("is_dev", Box::new(true));
        }
        #[cfg(not(debug_assertions))]
        {
            values.insert("is_dev", Box::new(false));
        }

        template.render_with_values(&values)
    }

    pub fn render<T: askama::Template>(&self, template: T) -> Response {
        match self.render_with_values(template) {
            Ok(html) => Html(html).into_response(),
            Err(err) => {
                tracing::error!("Failed to render template: {err}");

                (StatusCode::INTERNAL_SERVER_ERROR, SERVER_ERROR_MESSAGE).into_response()
            }
        }
    }
}

impl<S: Send + Sync> FromRequestParts<S> for Template {
    type Rejection = Infallible;

    async fn from_request_parts(_parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        Ok(Template {
            year: time::OffsetDateTime::now_utc().year(),
        })
    }
}

#[derive(askama::Template)]
#[template(path = "404.html")]
pub struct NotFoundTemplate {
    pub year: i32,
}
