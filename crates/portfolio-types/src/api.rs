use serde::{Deserialize, Serialize};

use crate::models::ContactMessage;

// -- Health --

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub message: String,
}

impl HealthResponse {
    pub fn ok() -> Self {
        Self {
            status: "ok".into(),
            message: "Server is running!".into(),
        }
    }
}

// -- Contact --

/// Body of `POST /api/contact`. Every field is optional on the wire so that
/// a missing field is reported as a validation failure rather than a
/// decoding error.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ContactRequest {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub subject: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

/// `{success, message}` acknowledgment, used for both outcomes.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AckResponse {
    pub success: bool,
    pub message: String,
}

impl AckResponse {
    pub fn ok(message: impl Into<String>) -> Self {
        Self { success: true, message: message.into() }
    }

    pub fn failed(message: impl Into<String>) -> Self {
        Self { success: false, message: message.into() }
    }
}

// -- Messages --

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MessagesResponse {
    pub success: bool,
    pub count: usize,
    pub data: Vec<ContactMessage>,
}

impl MessagesResponse {
    pub fn new(data: Vec<ContactMessage>) -> Self {
        Self {
            success: true,
            count: data.len(),
            data,
        }
    }
}
