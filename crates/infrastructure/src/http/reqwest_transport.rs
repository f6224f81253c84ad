use async_trait::async_trait;
use dns_unlocker_application::ports::{HttpResponse, HttpTransport};
use dns_unlocker_domain::{DnsServerAddress, DomainError};
use futures::StreamExt;
use std::error::Error;
use tracing::debug;

pub struct ReqwestTransport {
    server: DnsServerAddress,
    client: reqwest::Client,
}

impl ReqwestTransport {
    pub fn new(server: DnsServerAddress, client: reqwest::Client) -> Self {
        Self { server, client }
    }
}

#[async_trait]
impl HttpTransport for ReqwestTransport {
    async fn get(&self, url: &str) -> Result<HttpResponse, DomainError> {
        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|e| transport_error(&self.server, &e))?;

        // `StatusCode` displays as "<code> <reason>".
        let status_line = response.status().to_string();
        debug!(server = %self.server, url = %url, status = %status_line, "Response received");

        let server = self.server.clone();
        let body = response
            .bytes_stream()
            .map(move |chunk| chunk.map_err(|e| transport_error(&server, &e)))
            .boxed();

        Ok(HttpResponse::new(status_line, body))
    }
}

/// Flattens the error chain; reqwest keeps the useful cause in `source()`.
fn transport_error(server: &DnsServerAddress, error: &reqwest::Error) -> DomainError {
    let mut reason = error.to_string();
    let mut source = error.source();
    while let Some(cause) = source {
        reason.push_str(": ");
        reason.push_str(&cause.to_string());
        source = cause.source();
    }
    DomainError::TransportError {
        server: server.to_string(),
        reason,
    }
}
