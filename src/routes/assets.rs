use axum::{
    body::Body,
    extract::Request,
    http::{StatusCode, header},
    response::{IntoResponse, Response},
};
use rust_embed::RustEmbed;
use std::{
    convert::Infallible,
    future::{Ready, ready},
    task::{Context, Poll},
};
use tower::Service;

#[derive(RustEmbed)]
#[folder = "static/"]
#[prefix = "/"]
struct Assets;

/// Serves the files embedded from `static/`, relative to where it is nested.
#[derive(Default, Clone, Copy)]
pub struct AssetsService;

impl AssetsService {
    pub fn new() -> Self {
        Self
    }

    fn respond(path: &str) -> Response {
        let Some(content) = Assets::get(path) else {
            return (StatusCode::NOT_FOUND, "404 Not Found").into_response();
        };

        let mime = mime_guess::from_path(path).first_or_octet_stream();

        (
            [(header::CONTENT_TYPE, mime.as_ref().to_owned())],
            Body::from(content.data),
        )
            .into_response()
    }
}

impl Service<Request> for AssetsService {
    type Response = Response;
    type Error = Infallible;
    type Future = Ready<Result<Self::Response, Self::Error>>;

    fn poll_ready(&mut self, _cx: &mut Context<'_>) -> Poll<Result<(), Self::Error>> {
        Poll::Ready(Ok(()))
    }

    fn call(&mut self, req: Request) -> Self::Future {
        ready(Ok(Self::respond(req.uri().path())))
    }
}
