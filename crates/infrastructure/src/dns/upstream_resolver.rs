//! Hostname resolution pinned to a single upstream DNS server.
//!
//! Every lookup an HTTP client makes goes to the configured server over UDP.
//! There is no fallback to the system resolver and no caching.

use super::forwarding::{MessageBuilder, ResponseParser};
use super::transport::resolver::resolve_all;
use super::transport::udp::UdpTransport;
use super::transport::DnsTransport;
use dns_unlocker_domain::{DnsServerAddress, DomainError, DNS_PORT};
use hickory_proto::rr::RecordType;
use reqwest::dns::{Addrs, Name, Resolve, Resolving};
use std::net::{IpAddr, SocketAddr};
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::OnceCell;
use tracing::debug;

#[derive(Clone)]
pub struct UpstreamResolver {
    server: DnsServerAddress,
    query_timeout: Duration,
    transport: Arc<OnceCell<Arc<dyn DnsTransport>>>,
}

impl UpstreamResolver {
    /// The UDP transport is created on first lookup, so a server given as a
    /// hostname is only resolved when the client actually needs it.
    pub fn new(server: DnsServerAddress, query_timeout: Duration) -> Self {
        Self {
            server,
            query_timeout,
            transport: Arc::new(OnceCell::new()),
        }
    }

    /// Sends every query through `transport` instead of UDP to `server`.
    pub fn with_transport(
        server: DnsServerAddress,
        transport: Arc<dyn DnsTransport>,
        query_timeout: Duration,
    ) -> Self {
        Self {
            server,
            query_timeout,
            transport: Arc::new(OnceCell::new_with(Some(transport))),
        }
    }

    /// Queries A and AAAA concurrently. IPv4 addresses come first.
    ///
    /// Fails only when neither query produced an address.
    pub async fn lookup(&self, host: &str) -> Result<Vec<IpAddr>, DomainError> {
        if let Ok(ip) = host.trim_start_matches('[').trim_end_matches(']').parse::<IpAddr>() {
            return Ok(vec![ip]);
        }

        let transport = self.transport().await?;
        let (v4, v6) = tokio::join!(
            self.query(transport.as_ref(), host, RecordType::A),
            self.query(transport.as_ref(), host, RecordType::AAAA),
        );

        let mut addresses = Vec::new();
        let mut first_error = None;
        for outcome in [v4, v6] {
            match outcome {
                Ok(found) => addresses.extend(found),
                Err(e) => {
                    first_error.get_or_insert(e);
                }
            }
        }

        if addresses.is_empty() {
            return Err(first_error.unwrap_or_else(|| DomainError::DnsResolution {
                host: host.to_string(),
                reason: format!("no addresses returned by {}", self.server),
            }));
        }

        debug!(server = %self.server, host = %host, addresses = addresses.len(), "Resolved");
        Ok(addresses)
    }

    async fn transport(&self) -> Result<Arc<dyn DnsTransport>, DomainError> {
        self.transport
            .get_or_try_init(|| async {
                let addr = self.server_socket_addr().await?;
                Ok::<_, DomainError>(Arc::new(UdpTransport::new(addr)) as Arc<dyn DnsTransport>)
            })
            .await
            .cloned()
    }

    async fn server_socket_addr(&self) -> Result<SocketAddr, DomainError> {
        if let Some(addr) = self.server.socket_addr() {
            return Ok(addr);
        }
        let addrs = resolve_all(self.server.as_str(), DNS_PORT, self.query_timeout).await?;
        addrs
            .into_iter()
            .next()
            .ok_or_else(|| DomainError::DnsResolution {
                host: self.server.to_string(),
                reason: "no addresses found".to_string(),
            })
    }

    async fn query(
        &self,
        transport: &dyn DnsTransport,
        host: &str,
        record_type: RecordType,
    ) -> Result<Vec<IpAddr>, DomainError> {
        let (_, bytes) = MessageBuilder::build_query_with_id(host, record_type)?;
        let response = transport.send(&bytes, self.query_timeout).await?;
        let parsed = ResponseParser::parse(&response.bytes)?;

        if parsed.is_nxdomain() || parsed.is_server_error() {
            return Err(DomainError::DnsResolution {
                host: host.to_string(),
                reason: format!(
                    "{} answered {}",
                    self.server,
                    ResponseParser::rcode_to_status(parsed.rcode)
                ),
            });
        }

        Ok(parsed.addresses)
    }
}

impl Resolve for UpstreamResolver {
    fn resolve(&self, name: Name) -> Resolving {
        let resolver = self.clone();
        Box::pin(async move {
            let addresses = resolver.lookup(name.as_str()).await?;
            // Port 0: the connector substitutes the URL's port.
            let addrs: Addrs = Box::new(
                addresses
                    .into_iter()
                    .map(|ip| SocketAddr::new(ip, 0)),
            );
            Ok(addrs)
        })
    }
}
