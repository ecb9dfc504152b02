//! Scripted transport for tests.

use std::cell::RefCell;
use std::collections::VecDeque;
use std::rc::Rc;

use serde_json::Value;

use crate::api::{HttpRequest, HttpResponse, Transport};
use crate::error::TransportError;

#[derive(Default)]
struct MockInner {
    responses: RefCell<VecDeque<Result<HttpResponse, TransportError>>>,
    requests: RefCell<Vec<HttpRequest>>,
}

/// Replays queued responses in order and records every request.
///
/// Clones share the same queue, so a test can keep a handle after moving
/// one into the client.
#[derive(Clone, Default)]
pub struct MockTransport {
    inner: Rc<MockInner>,
}

impl MockTransport {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn respond_json(&self, status: u16, body: Value) {
        self.respond_raw(status, body.to_string());
    }

    pub fn respond_raw(&self, status: u16, body: impl Into<Vec<u8>>) {
        self.inner
            .responses
            .borrow_mut()
            .push_back(Ok(HttpResponse::new(status, body)));
    }

    pub fn fail(&self, error: TransportError) {
        self.inner.responses.borrow_mut().push_back(Err(error));
    }

    pub fn requests(&self) -> Vec<HttpRequest> {
        self.inner.requests.borrow().clone()
    }

    pub fn last_request(&self) -> Option<HttpRequest> {
        self.inner.requests.borrow().last().cloned()
    }
}

impl Transport for MockTransport {
    async fn send(&self, request: HttpRequest) -> Result<HttpResponse, TransportError> {
        self.inner.requests.borrow_mut().push(request);
        self.inner
            .responses
            .borrow_mut()
            .pop_front()
            .unwrap_or_else(|| Err(TransportError::Network("no scripted response".to_string())))
    }
}
