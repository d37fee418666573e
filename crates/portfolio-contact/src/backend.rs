use anyhow::Result;
use reqwest::Client;

use portfolio_types::api::ContactRequest;

/// The portfolio's own API, used as a side log of submissions.
#[derive(Debug, Clone)]
pub struct BackendClient {
    client: Client,
    base_url: String,
}

impl BackendClient {
    pub fn new(client: Client, base_url: impl Into<String>) -> Self {
        let base_url: String = base_url.into();
        Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    /// POST /api/contact. Non-2xx answers are errors.
    pub async fn save(&self, payload: &ContactRequest) -> Result<()> {
        self.client
            .post(format!("{}/api/contact", self.base_url))
            .json(payload)
            .send()
            .await?
            .error_for_status()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn trailing_slash_is_dropped() {
        let backend = BackendClient::new(Client::new(), "http://localhost:3000/");
        assert_eq!(backend.base_url, "http://localhost:3000");
    }
}
