//! HTTPS transport for DoH JSON queries.
//!
//! Issues plain `GET` requests; the query is carried entirely in the URL's
//! query string and the answer comes back as an `application/dns-json` body:
//!
//! ```text
//! GET /dns-query?name=example.com&type=A HTTP/2
//! Accept: application/dns-json
//! ```

use async_trait::async_trait;
use bytes::Bytes;
use quad9_doh_application::ports::{HttpRequest, HttpResponse, HttpTransport};
use quad9_doh_domain::config::UpstreamConfig;
use quad9_doh_domain::DomainError;
use std::time::Duration;
use tokio_util::sync::CancellationToken;
use tracing::debug;

fn build_client(pool_max_idle_per_host: usize) -> reqwest::Result<reqwest::Client> {
    reqwest::Client::builder()
        .use_rustls_tls()
        .pool_max_idle_per_host(pool_max_idle_per_host)
        .build()
}

/// reqwest-backed [`HttpTransport`].
#[derive(Clone)]
pub struct HttpsTransport {
    client: reqwest::Client,
    timeout: Duration,
}

impl HttpsTransport {
    pub fn with_client(client: reqwest::Client, timeout: Duration) -> Self {
        Self { client, timeout }
    }

    /// Transport on a pooled rustls client tuned by `config`.
    pub fn from_config(config: &UpstreamConfig) -> Result<Self, DomainError> {
        let client = build_client(config.pool_max_idle_per_host).map_err(|e| {
            DomainError::Transport {
                url: String::new(),
                reason: format!("failed to build HTTP client: {}", e),
            }
        })?;

        Ok(Self::with_client(
            client,
            Duration::from_millis(config.timeout_ms),
        ))
    }

    pub fn timeout(&self) -> Duration {
        self.timeout
    }
}

#[async_trait]
impl HttpTransport for HttpsTransport {
    async fn get(
        &self,
        request: &HttpRequest,
        cancel: &CancellationToken,
    ) -> Result<Box<dyn HttpResponse>, DomainError> {
        let mut builder = self
            .client
            .get(&request.url)
            .query(&request.query)
            .timeout(self.timeout);
        for (name, value) in &request.headers {
            builder = builder.header(*name, *value);
        }

        debug!(url = %request.url, params = request.query.len(), "Sending DoH GET");

        let response = tokio::select! {
            biased;
            _ = cancel.cancelled() => return Err(canceled(&request.url)),
            result = builder.send() => result.map_err(|e| map_reqwest_error(&request.url, e))?,
        };

        debug!(
            url = %request.url,
            status = response.status().as_u16(),
            "DoH response headers received"
        );

        Ok(Box::new(HttpsResponse {
            inner: response,
            url: request.url.clone(),
            cancel: cancel.clone(),
        }))
    }
}

/// Response whose connection goes back to the pool once the body is read or
/// the value is dropped.
struct HttpsResponse {
    inner: reqwest::Response,
    url: String,
    cancel: CancellationToken,
}

#[async_trait]
impl HttpResponse for HttpsResponse {
    fn status(&self) -> u16 {
        self.inner.status().as_u16()
    }

    async fn bytes(self: Box<Self>) -> Result<Bytes, DomainError> {
        let HttpsResponse { inner, url, cancel } = *self;

        let body = tokio::select! {
            biased;
            _ = cancel.cancelled() => return Err(canceled(&url)),
            result = inner.bytes() => result.map_err(|e| map_reqwest_error(&url, e))?,
        };

        debug!(url = %url, response_len = body.len(), "DoH response body read");
        Ok(body)
    }
}

fn canceled(url: &str) -> DomainError {
    DomainError::TransportCanceled {
        url: url.to_string(),
    }
}

fn map_reqwest_error(url: &str, e: reqwest::Error) -> DomainError {
    if e.is_timeout() {
        DomainError::TransportTimeout {
            url: url.to_string(),
        }
    } else {
        DomainError::Transport {
            url: url.to_string(),
            reason: e.to_string(),
        }
    }
}
