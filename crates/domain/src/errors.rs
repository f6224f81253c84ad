use thiserror::Error;

#[derive(Error, Debug, Clone)]
pub enum DomainError {
    #[error("Invalid target URL: {0}")]
    InvalidTargetUrl(String),

    #[error("Invalid domain name: {0}")]
    InvalidDomainName(String),

    #[error("Timeout must be greater than zero seconds (got {0})")]
    InvalidTimeout(u64),

    #[error("No DNS servers found in config")]
    NoDnsServers,

    #[error("Configuration error: {0}")]
    ConfigError(String),

    #[error("I/O error: {0}")]
    IoError(String),

    #[error("Request through {server} failed: {reason}")]
    TransportError { server: String, reason: String },

    #[error("Transport timeout connecting to {server}")]
    TransportTimeout { server: String },

    #[error("DNS resolution of {host} failed: {reason}")]
    DnsResolution { host: String, reason: String },

    #[error("Invalid DNS response: {0}")]
    InvalidDnsResponse(String),

    #[error("Unexpected HTTP status: {0}")]
    UnexpectedStatus(String),
}

impl From<std::io::Error> for DomainError {
    fn from(err: std::io::Error) -> Self {
        DomainError::IoError(err.to_string())
    }
}
