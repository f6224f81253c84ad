use async_trait::async_trait;
use bytes::Bytes;
use dns_unlocker_domain::{DnsServerAddress, DomainError, StatusLine};
use futures::stream::BoxStream;
use std::sync::Arc;

pub type BodyStream = BoxStream<'static, Result<Bytes, DomainError>>;

pub struct HttpResponse {
    /// Raw status line, e.g. `200 OK`.
    pub status_line: String,
    pub body: BodyStream,
}

impl HttpResponse {
    pub fn new(status_line: impl Into<String>, body: BodyStream) -> Self {
        Self {
            status_line: status_line.into(),
            body,
        }
    }

    pub fn status(&self) -> Option<StatusLine> {
        StatusLine::parse(&self.status_line)
    }
}

/// An HTTP client whose hostname lookups all go through one upstream DNS server.
#[async_trait]
pub trait HttpTransport: Send + Sync {
    /// Issues a GET and returns once the status line is available. The
    /// body is streamed lazily.
    async fn get(&self, url: &str) -> Result<HttpResponse, DomainError>;
}

/// Builds a fresh resolver-bound client per server. No network I/O happens
/// until the client is used, and clients share no mutable state.
pub trait ResolverBoundClientFactory: Send + Sync {
    fn make_client(&self, server: &DnsServerAddress) -> Result<Arc<dyn HttpTransport>, DomainError>;
}
