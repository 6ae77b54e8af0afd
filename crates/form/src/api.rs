use anyhow::Context;
use async_trait::async_trait;
use portfolio_shared::contact::{ContactPayload, Delivered, Rejected};

/// Shown when the server answered with an error but no message.
pub const FALLBACK_ERROR: &str = "Failed to send message";

/// Shown when no usable answer came back at all.
pub const NETWORK_ERROR: &str = "Something went wrong";

/// Human-readable reason a submission failed.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{0}")]
pub struct SubmitError(pub String);

/// The contact endpoint as seen from the client.
#[async_trait]
pub trait ContactApi: Send + Sync + 'static {
    async fn submit(&self, payload: &ContactPayload) -> Result<serde_json::Value, SubmitError>;
}

/// `POST {base_url}/api/contact` over HTTP.
#[derive(Clone)]
pub struct HttpContactApi {
    http: reqwest::Client,
    endpoint: String,
}

impl HttpContactApi {
    pub fn new(base_url: impl AsRef<str>) -> anyhow::Result<Self> {
        let http = reqwest::Client::builder()
            .build()
            .context("Failed to build contact http client")?;

        Ok(Self {
            http,
            endpoint: format!("{}/api/contact", base_url.as_ref().trim_end_matches('/')),
        })
    }
}

#[async_trait]
impl ContactApi for HttpContactApi {
    async fn submit(&self, payload: &ContactPayload) -> Result<serde_json::Value, SubmitError> {
        let response = match self.http.post(&self.endpoint).json(payload).send().await {
            Ok(response) => response,
            Err(err) => {
                tracing::warn!(error = %err, endpoint = %self.endpoint, "Contact request failed");

                return Err(SubmitError(NETWORK_ERROR.to_owned()));
            }
        };

        let status = response.status();
        let body = match response.json::<serde_json::Value>().await {
            Ok(body) => body,
            Err(err) => {
                tracing::warn!(error = %err, %status, "Unreadable contact response");

                return Err(SubmitError(NETWORK_ERROR.to_owned()));
            }
        };

        if !status.is_success() {
            let message = serde_json::from_value::<Rejected>(body)
                .map(|rejected| rejected.error)
                .ok()
                .filter(|message| !message.is_empty())
                .unwrap_or_else(|| FALLBACK_ERROR.to_owned());

            return Err(SubmitError(message));
        }

        Ok(serde_json::from_value::<Delivered>(body.clone())
            .map(|delivered| delivered.data)
            .unwrap_or(body))
    }
}
