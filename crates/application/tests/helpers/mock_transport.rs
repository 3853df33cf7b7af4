#![allow(dead_code)]

use async_trait::async_trait;
use bytes::Bytes;
use quad9_doh_application::ports::{HttpRequest, HttpResponse, HttpTransport};
use quad9_doh_domain::DomainError;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};
use tokio_util::sync::CancellationToken;

#[derive(Debug, Clone)]
pub enum MockReply {
    Body { status: u16, body: Bytes },
    BodyError(DomainError),
    Error(DomainError),
    /// Never answers the request.
    Hang,
    /// Answers the request but never finishes the body.
    HangBody,
}

/// Scripted transport that records every request it sees.
#[derive(Clone)]
pub struct MockHttpTransport {
    requests: Arc<Mutex<Vec<HttpRequest>>>,
    reply: Arc<Mutex<MockReply>>,
    released: Arc<AtomicUsize>,
}

impl MockHttpTransport {
    pub fn new() -> Self {
        Self::with_reply(MockReply::Body {
            status: 200,
            body: Bytes::from_static(br#"{"Status":0}"#),
        })
    }

    pub fn with_reply(reply: MockReply) -> Self {
        Self {
            requests: Arc::new(Mutex::new(Vec::new())),
            reply: Arc::new(Mutex::new(reply)),
            released: Arc::new(AtomicUsize::new(0)),
        }
    }

    pub fn with_json(json: serde_json::Value) -> Self {
        Self::with_reply(MockReply::Body {
            status: 200,
            body: Bytes::from(json.to_string()),
        })
    }

    pub fn with_raw_body(body: &'static str) -> Self {
        Self::with_reply(MockReply::Body {
            status: 200,
            body: Bytes::from_static(body.as_bytes()),
        })
    }

    pub fn set_reply(&self, reply: MockReply) {
        *self.reply.lock().unwrap() = reply;
    }

    pub fn requests(&self) -> Vec<HttpRequest> {
        self.requests.lock().unwrap().clone()
    }

    pub fn call_count(&self) -> usize {
        self.requests.lock().unwrap().len()
    }

    pub fn last_request(&self) -> Option<HttpRequest> {
        self.requests.lock().unwrap().last().cloned()
    }

    /// Number of responses handed out and then dropped.
    pub fn released_count(&self) -> usize {
        self.released.load(Ordering::SeqCst)
    }
}

impl Default for MockHttpTransport {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl HttpTransport for MockHttpTransport {
    async fn get(
        &self,
        request: &HttpRequest,
        _cancel: &CancellationToken,
    ) -> Result<Box<dyn HttpResponse>, DomainError> {
        self.requests.lock().unwrap().push(request.clone());
        let reply = self.reply.lock().unwrap().clone();

        let (status, body) = match reply {
            MockReply::Body { status, body } => (status, MockBody::Ready(body)),
            MockReply::BodyError(e) => (200, MockBody::Fail(e)),
            MockReply::HangBody => (200, MockBody::Hang),
            MockReply::Error(e) => return Err(e),
            MockReply::Hang => std::future::pending().await,
        };

        Ok(Box::new(MockHttpResponse {
            status,
            body,
            released: Arc::clone(&self.released),
        }))
    }
}

enum MockBody {
    Ready(Bytes),
    Fail(DomainError),
    Hang,
}

struct MockHttpResponse {
    status: u16,
    body: MockBody,
    released: Arc<AtomicUsize>,
}

#[async_trait]
impl HttpResponse for MockHttpResponse {
    fn status(&self) -> u16 {
        self.status
    }

    async fn bytes(self: Box<Self>) -> Result<Bytes, DomainError> {
        match &self.body {
            MockBody::Ready(bytes) => Ok(bytes.clone()),
            MockBody::Fail(e) => Err(e.clone()),
            MockBody::Hang => std::future::pending().await,
        }
    }
}

impl Drop for MockHttpResponse {
    fn drop(&mut self) {
        self.released.fetch_add(1, Ordering::SeqCst);
    }
}
