use reqwest::Client;
use reqwest::multipart::Form;
use serde_json::Value;

use crate::form::ContactFields;

/// Reply from the form-relay service. Only `success` is relied upon.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RelayReply {
    pub success: bool,
    pub message: Option<String>,
}

impl RelayReply {
    /// Any JSON reply is a verdict. `success` counts only when truthy, so a
    /// missing, null or falsy flag is a rejection rather than a decode error.
    pub fn from_json(body: &Value) -> Self {
        let success = match body.get("success") {
            Some(Value::Bool(b)) => *b,
            Some(Value::Number(n)) => n.as_f64().is_some_and(|n| n != 0.0),
            Some(Value::String(s)) => !s.is_empty(),
            Some(Value::Array(_) | Value::Object(_)) => true,
            Some(Value::Null) | None => false,
        };
        let message = body.get("message").and_then(Value::as_str).map(str::to_string);

        Self { success, message }
    }
}

/// Third-party relay that forwards submissions as email notifications.
#[derive(Debug, Clone)]
pub struct RelayClient {
    client: Client,
    endpoint: String,
    access_key: String,
}

impl RelayClient {
    pub fn new(client: Client, endpoint: impl Into<String>, access_key: impl Into<String>) -> Self {
        Self {
            client,
            endpoint: endpoint.into(),
            access_key: access_key.into(),
        }
    }

    /// Post the raw form fields as multipart, the way a browser submits the
    /// form, and read the JSON reply. A non-JSON reply is an error.
    pub async fn send(&self, fields: &ContactFields) -> Result<RelayReply, reqwest::Error> {
        let form = Form::new()
            .text("access_key", self.access_key.clone())
            .text("name", fields.name.clone())
            .text("email", fields.email.clone())
            .text("subject", fields.subject.clone())
            .text("message", fields.message.clone());

        self.client
            .post(&self.endpoint)
            .multipart(form)
            .send()
            .await?
            .json::<Value>()
            .await
            .map(|body| RelayReply::from_json(&body))
    }
}
