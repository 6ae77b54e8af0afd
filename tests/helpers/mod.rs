#![allow(dead_code)]

use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use axum::{
    Router,
    body::Body,
    http::{Request, StatusCode, header},
    response::Response,
};
use http_body_util::BodyExt;
use portfolio::{
    AppState, Config,
    config::{ObservabilityConfig, ServerConfig},
};
use portfolio_contact::{ContactConfig, Envelope, Mailer};
use portfolio_notification::EmailConfig;
use tower::ServiceExt;

/// Mailer that records every envelope and answers like the provider would.
#[derive(Default)]
pub struct RecordingMailer {
    pub sent: Mutex<Vec<Envelope>>,
}

#[async_trait]
impl Mailer for RecordingMailer {
    async fn send(&self, envelope: &Envelope) -> anyhow::Result<serde_json::Value> {
        let mut sent = self.sent.lock().unwrap();
        sent.push(envelope.clone());

        Ok(serde_json::json!({ "id": format!("email-{}", sent.len()) }))
    }
}

/// Mailer whose provider always rejects the request.
pub struct FailingMailer;

#[async_trait]
impl Mailer for FailingMailer {
    async fn send(&self, _envelope: &Envelope) -> anyhow::Result<serde_json::Value> {
        anyhow::bail!("Resend rejected email with 403 Forbidden: API key re_secret_key is invalid")
    }
}

pub struct TestState {
    pub app: Router,
    pub mailer: Arc<RecordingMailer>,
}

pub fn config() -> Config {
    Config {
        server: ServerConfig {
            host: "127.0.0.1".to_owned(),
            port: 0,
        },
        contact: ContactConfig {
            from: "Portfolio Contact <onboarding@resend.dev>".to_owned(),
            to: "owner@portfolio.localhost".to_owned(),
        },
        email: EmailConfig {
            api_key: "re_test_key".to_owned(),
            ..Default::default()
        },
        observability: ObservabilityConfig::default(),
    }
}

pub fn app(mailer: Arc<dyn Mailer>) -> Router {
    let contact_command = portfolio_contact::Command::new(mailer, config().contact);

    portfolio::routes::router(AppState { contact_command })
}

pub fn setup_test_state() -> TestState {
    let mailer = Arc::new(RecordingMailer::default());

    TestState {
        app: app(mailer.clone()),
        mailer,
    }
}

/// Serves `app` on a random local port and returns its base url.
pub async fn spawn(app: Router) -> anyhow::Result<String> {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await?;
    let addr = listener.local_addr()?;

    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });

    Ok(format!("http://{addr}"))
}

pub async fn post_json(app: &Router, uri: &str, body: impl Into<Body>) -> anyhow::Result<Response> {
    let req = Request::post(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(body.into())?;

    Ok(app.clone().oneshot(req).await?)
}

pub async fn post_form(
    app: &Router,
    uri: &str,
    fields: &[(&str, &str)],
) -> anyhow::Result<Response> {
    let req = Request::post(uri)
        .header(header::CONTENT_TYPE, "application/x-www-form-urlencoded")
        .body(Body::from(serde_urlencoded::to_string(fields)?))?;

    Ok(app.clone().oneshot(req).await?)
}

pub async fn get(app: &Router, uri: &str) -> anyhow::Result<Response> {
    let req = Request::get(uri).body(Body::empty())?;

    Ok(app.clone().oneshot(req).await?)
}

pub async fn read_text(response: Response) -> anyhow::Result<String> {
    let bytes = response.into_body().collect().await?.to_bytes();

    Ok(String::from_utf8(bytes.to_vec())?)
}

pub async fn read_json(response: Response) -> anyhow::Result<(StatusCode, serde_json::Value)> {
    let status = response.status();
    let bytes = response.into_body().collect().await?.to_bytes();

    Ok((status, serde_json::from_slice(&bytes)?))
}
