//! Test doubles for the transport seam.

use std::sync::Mutex;

use async_trait::async_trait;

use super::transport::{ApiRequest, ApiResponse, Transport, TransportError};

/// Records every request and answers each with the same canned reply.
pub(crate) struct RecordingTransport {
    reply: Result<ApiResponse, TransportError>,
    requests: Mutex<Vec<ApiRequest>>,
}

impl RecordingTransport {
    pub(crate) fn replying(status: u16, body: &str) -> Self {
        Self { reply: Ok(ApiResponse { status, body: body.to_owned() }), requests: Mutex::new(Vec::new()) }
    }

    pub(crate) fn failing() -> Self {
        Self { reply: Err(TransportError::Network("connection refused".to_owned())), requests: Mutex::new(Vec::new()) }
    }

    pub(crate) fn requests(&self) -> Vec<ApiRequest> {
        self.requests.lock().unwrap().clone()
    }

    pub(crate) fn calls(&self) -> usize {
        self.requests.lock().unwrap().len()
    }
}

#[async_trait(?Send)]
impl Transport for RecordingTransport {
    async fn send(&self, request: ApiRequest) -> Result<ApiResponse, TransportError> {
        self.requests.lock().unwrap().push(request);
        self.reply.clone()
    }
}
