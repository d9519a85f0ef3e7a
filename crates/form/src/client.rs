use async_trait::async_trait;
use serde::Deserialize;

use crate::{ContactFields, SubmitContact, SubmitError};

#[derive(Deserialize)]
struct ApiMessage {
    message: String,
}

/// Submits the contact form over HTTP to a running devfolio server.
#[derive(Debug, Clone)]
pub struct HttpSubmitClient {
    base_url: String,
    http: reqwest::Client,
}

impl HttpSubmitClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into().trim_end_matches('/').to_owned(),
            http: reqwest::Client::new(),
        }
    }
}

#[async_trait]
impl SubmitContact for HttpSubmitClient {
    async fn submit(&self, fields: &ContactFields) -> Result<(), SubmitError> {
        let response = self
            .http
            .post(format!("{}/api/contact", self.base_url))
            .json(fields)
            .send()
            .await
            .map_err(|err| SubmitError::Transport(err.to_string()))?;

        let status = response.status();
        if status.is_success() {
            return Ok(());
        }

        let message = match response.json::<ApiMessage>().await {
            Ok(body) => body.message,
            Err(_) => status
                .canonical_reason()
                .unwrap_or("unexpected response")
                .to_owned(),
        };

        Err(SubmitError::Rejected {
            status: status.as_u16(),
            message,
        })
    }
}
