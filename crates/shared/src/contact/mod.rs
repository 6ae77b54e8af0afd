use serde::{Deserialize, Serialize};
use strum::{AsRefStr, Display};

/// Fields of the contact form as they travel over the wire.
///
/// Absent fields deserialize to empty strings so that validation, not
/// parsing, decides what is missing.
#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactPayload {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub message: String,
}

/// Where a submission is in its lifecycle on the client.
#[derive(Debug, Default, Clone, PartialEq, Eq, Display, AsRefStr, Serialize, Deserialize)]
#[strum(serialize_all = "kebab-case")]
#[serde(rename_all = "kebab-case", tag = "status", content = "error")]
pub enum FormStatus {
    #[default]
    Idle,
    InProgress,
    Succeeded,
    Failed(Option<String>),
}

impl FormStatus {
    pub fn error(&self) -> Option<&str> {
        match self {
            Self::Failed(message) => message.as_deref(),
            _ => None,
        }
    }
}

/// `200` body of `POST /api/contact`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Delivered {
    pub success: bool,
    pub data: serde_json::Value,
}

/// `4xx`/`5xx` body of `POST /api/contact`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Rejected {
    pub error: String,
}
