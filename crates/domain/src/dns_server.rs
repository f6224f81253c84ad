use std::fmt;
use std::net::{IpAddr, SocketAddr};
use std::sync::Arc;

/// Port every upstream DNS server is queried on.
pub const DNS_PORT: u16 = 53;

/// Address of an upstream DNS server as it appears in a server list.
///
/// An IP literal, a hostname, or an `ip:port` pair. Without an explicit
/// port the server is queried on [`DNS_PORT`]. No syntax validation happens
/// here, a bad address surfaces later as a per-server resolution failure.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct DnsServerAddress(Arc<str>);

impl DnsServerAddress {
    pub fn new(addr: impl AsRef<str>) -> Self {
        Self(Arc::from(addr.as_ref().trim()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// The IP address if the server was given as a literal.
    pub fn ip(&self) -> Option<IpAddr> {
        let raw = self.0.trim_start_matches('[').trim_end_matches(']');
        raw.parse().ok()
    }

    /// Socket address to query, when the server is an IP literal with or
    /// without a port. Hostnames yield `None` and need a lookup first.
    pub fn socket_addr(&self) -> Option<SocketAddr> {
        self.0
            .parse::<SocketAddr>()
            .ok()
            .or_else(|| self.ip().map(|ip| SocketAddr::new(ip, DNS_PORT)))
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl fmt::Display for DnsServerAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(&self.0)
    }
}

impl From<&str> for DnsServerAddress {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

impl From<String> for DnsServerAddress {
    fn from(value: String) -> Self {
        Self::new(value)
    }
}

impl AsRef<str> for DnsServerAddress {
    fn as_ref(&self) -> &str {
        &self.0
    }
}
