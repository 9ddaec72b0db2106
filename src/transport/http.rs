//! `reqwest`-backed transports.

use reqwest::Client;
use url::Url;

use crate::submission::TaskSubmission;
use crate::transport::{OpaqueTransport, ReadableResponse, ReadableTransport, TransportError};

/// HTTP client implementing both transports over one connection pool.
#[derive(Debug, Clone, Default)]
pub struct HttpTransport {
    client: Client,
}

impl HttpTransport {
    pub fn new(client: Client) -> Self {
        Self { client }
    }
}

impl OpaqueTransport for HttpTransport {
    async fn send(&self, url: &Url, submission: &TaskSubmission) -> Result<(), TransportError> {
        // `form` sets Content-Type: application/x-www-form-urlencoded.
        let response = self
            .client
            .post(url.clone())
            .form(submission)
            .send()
            .await?;

        // The body is not read; the status is only recorded.
        tracing::debug!(
            attempt_id = %submission.attempt_id(),
            status = response.status().as_u16(),
            "Opaque request completed"
        );
        Ok(())
    }
}

impl ReadableTransport for HttpTransport {
    async fn fetch(&self, url: &Url) -> Result<ReadableResponse, TransportError> {
        let response = self.client.get(url.clone()).send().await?;
        let status = response.status().as_u16();
        let text = response.text().await?;

        Ok(ReadableResponse { status, text })
    }
}
