use super::reqwest_transport::ReqwestTransport;
use crate::dns::UpstreamResolver;
use dns_unlocker_application::ports::{HttpTransport, ResolverBoundClientFactory};
use dns_unlocker_domain::{DnsServerAddress, DomainError};
use std::sync::Arc;
use std::time::Duration;

/// Builds `reqwest` clients whose name lookups all go to one upstream server.
pub struct ReqwestClientFactory {
    connect_timeout: Duration,
    query_timeout: Duration,
}

impl ReqwestClientFactory {
    pub fn new(connect_timeout: Duration, query_timeout: Duration) -> Self {
        Self {
            connect_timeout,
            query_timeout,
        }
    }
}

impl ResolverBoundClientFactory for ReqwestClientFactory {
    fn make_client(
        &self,
        server: &DnsServerAddress,
    ) -> Result<Arc<dyn HttpTransport>, DomainError> {
        let resolver = UpstreamResolver::new(server.clone(), self.query_timeout);

        // Proxies would move name resolution off this resolver.
        let client = reqwest::Client::builder()
            .dns_resolver(Arc::new(resolver))
            .connect_timeout(self.connect_timeout)
            .no_proxy()
            .build()
            .map_err(|e| DomainError::TransportError {
                server: server.to_string(),
                reason: format!("Failed to build HTTP client: {}", e),
            })?;

        Ok(Arc::new(ReqwestTransport::new(server.clone(), client)))
    }
}
