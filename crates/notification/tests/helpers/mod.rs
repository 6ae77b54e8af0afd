#![allow(dead_code)]

use std::sync::{Arc, Mutex};

use axum::{
    Json, Router,
    extract::State,
    http::{HeaderMap, StatusCode, header},
    routing::post,
};
use portfolio_contact::Envelope;

#[derive(Debug, Clone)]
pub struct Received {
    pub authorization: Option<String>,
    pub body: serde_json::Value,
}

#[derive(Clone, Default)]
pub struct FakeResend {
    pub received: Arc<Mutex<Vec<Received>>>,
    pub reject: bool,
}

async fn emails(
    State(fake): State<FakeResend>,
    headers: HeaderMap,
    Json(body): Json<serde_json::Value>,
) -> (StatusCode, Json<serde_json::Value>) {
    fake.received.lock().unwrap().push(Received {
        authorization: headers
            .get(header::AUTHORIZATION)
            .and_then(|v| v.to_str().ok())
            .map(String::from),
        body,
    });

    if fake.reject {
        return (
            StatusCode::UNPROCESSABLE_ENTITY,
            Json(serde_json::json!({
                "statusCode": 422,
                "name": "validation_error",
                "message": "The `from` domain is not verified",
            })),
        );
    }

    (
        StatusCode::OK,
        Json(serde_json::json!({ "id": "49a3999c-0ce1-4ea6-ab68-afcd6dc2e794" })),
    )
}

/// Starts a local stand-in for the Resend API and returns its base url.
pub async fn spawn_fake_resend(fake: FakeResend) -> anyhow::Result<String> {
    let app = Router::new()
        .route("/emails", post(emails))
        .with_state(fake);

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await?;
    let addr = listener.local_addr()?;

    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });

    Ok(format!("http://{addr}"))
}

pub fn envelope() -> Envelope {
    Envelope {
        from: "Portfolio Contact <onboarding@resend.dev>".to_owned(),
        to: "owner@portfolio.localhost".to_owned(),
        reply_to: "ada@example.com".to_owned(),
        subject: "Portfolio Contact from Ada".to_owned(),
        html: "<p>Hi</p>".to_owned(),
        text: "Hi".to_owned(),
    }
}
