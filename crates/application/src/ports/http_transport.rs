use async_trait::async_trait;
use bytes::Bytes;
use quad9_doh_domain::DomainError;
use tokio_util::sync::CancellationToken;

/// A single HTTP GET as seen by a transport.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpRequest {
    pub url: String,
    /// Query string pairs, sent in order.
    pub query: Vec<(&'static str, String)>,
    pub headers: Vec<(&'static str, &'static str)>,
}

impl HttpRequest {
    pub fn get(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            query: Vec::new(),
            headers: Vec::new(),
        }
    }

    pub fn with_query(mut self, query: Vec<(&'static str, String)>) -> Self {
        self.query = query;
        self
    }

    pub fn with_header(mut self, name: &'static str, value: &'static str) -> Self {
        self.headers.push((name, value));
        self
    }

    pub fn query_param(&self, key: &str) -> Option<&str> {
        self.query
            .iter()
            .find(|(k, _)| *k == key)
            .map(|(_, v)| v.as_str())
    }

    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(k, _)| k.eq_ignore_ascii_case(name))
            .map(|(_, v)| *v)
    }
}

/// An in-flight HTTP response.
///
/// The underlying connection is held until the value is dropped, so reading
/// the body (which consumes the response) or dropping it early both release it.
#[async_trait]
pub trait HttpResponse: Send {
    fn status(&self) -> u16;

    async fn bytes(self: Box<Self>) -> Result<Bytes, DomainError>;
}

#[async_trait]
pub trait HttpTransport: Send + Sync {
    /// Issues `request`. Implementations should abort and return
    /// `DomainError::TransportCanceled` once `cancel` fires.
    async fn get(
        &self,
        request: &HttpRequest,
        cancel: &CancellationToken,
    ) -> Result<Box<dyn HttpResponse>, DomainError>;
}
