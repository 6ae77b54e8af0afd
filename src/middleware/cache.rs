use axum::{
    body::Body,
    http::{HeaderValue, Request, Response, header},
    middleware::Next,
};

const IMMUTABLE: &str = "public, max-age=31536000, immutable";
const NO_STORE: &str = "no-store";

/// Long cache for embedded assets, none for pages and API responses.
pub async fn cache_control_middleware(req: Request<Body>, next: Next) -> Response<Body> {
    let is_static_file = req.uri().path().starts_with("/static/");
    let mut response = next.run(req).await;

    let value = if is_static_file && response.status().is_success() {
        IMMUTABLE
    } else {
        NO_STORE
    };

    response
        .headers_mut()
        .insert(header::CACHE_CONTROL, HeaderValue::from_static(value));

    response
}

#[cfg(test)]
mod tests {
    use axum::{Router, routing::get};
    use tower::ServiceExt;

    use super::*;

    fn app() -> Router {
        Router::new()
            .route("/", get(|| async { "page" }))
            .route("/static/css/site.css", get(|| async { "body {}" }))
            .layer(axum::middleware::from_fn(cache_control_middleware))
    }

    async fn cache_control(uri: &str) -> String {
        let response = app()
            .oneshot(Request::get(uri).body(Body::empty()).unwrap())
            .await
            .unwrap();

        response.headers()[header::CACHE_CONTROL]
            .to_str()
            .unwrap()
            .to_owned()
    }

    #[tokio::test]
    async fn test_static_files_are_immutable() {
        assert_eq!(
            cache_control("/static/css/site.css").await,
            "public, max-age=31536000, immutable"
        );
    }

    #[tokio::test]
    async fn test_pages_are_not_stored() {
        assert_eq!(cache_control("/").await, "no-store");
        assert_eq!(cache_control("/static/missing.js").await, "no-store");
    }
}
