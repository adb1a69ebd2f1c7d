//! Counter sources: where the widget's GET goes.
//!
//! `HttpCounterSource` is the production path. The trait exists so the widget
//! can be driven by scripted sources in tests without a socket.

use async_trait::async_trait;
use bytes::Bytes;

use viscount_core::error::{CounterError, Result};

/// Raw endpoint answer; status and body are judged by `decode_reading`.
#[derive(Debug, Clone)]
pub struct FetchedResponse {
    pub status: u16,
    pub body: Bytes,
}

impl FetchedResponse {
    pub fn new(status: u16, body: impl Into<Bytes>) -> Self {
        Self {
            status,
            body: body.into(),
        }
    }
}

#[async_trait]
pub trait CounterSource: Send + Sync {
    /// Issue exactly one request. No retries.
    async fn fetch(&self) -> Result<FetchedResponse>;
}

/// Plain `GET <endpoint>`: no custom headers, no query, no body, no timeout.
#[derive(Debug, Clone)]
pub struct HttpCounterSource {
    endpoint: String,
    client: reqwest::Client,
}

impl HttpCounterSource {
    pub fn new(endpoint: impl Into<String>) -> Result<Self> {
        let client = reqwest::Client::builder()
            .use_rustls_tls()
            .build()
            .map_err(|e| CounterError::Transport(format!("failed to build http client: {e}")))?;
        Ok(Self::with_client(endpoint, client))
    }

    pub fn with_client(endpoint: impl Into<String>, client: reqwest::Client) -> Self {
        Self {
            endpoint: endpoint.into(),
            client,
        }
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

#[async_trait]
impl CounterSource for HttpCounterSource {
    async fn fetch(&self) -> Result<FetchedResponse> {
        let resp = self
            .client
            .get(self.endpoint.as_str())
            .send()
            .await
            .map_err(|e| CounterError::Transport(e.to_string()))?;

        let status = resp.status().as_u16();
        let body = resp
            .bytes()
            .await
            .map_err(|e| CounterError::Transport(format!("response body error: {e}")))?;

        tracing::debug!(endpoint = %self.endpoint, status, len = body.len(), "counter response received");
        Ok(FetchedResponse { status, body })
    }
}
