use async_trait::async_trait;
use dns_unlocker_domain::{DnsServerAddress, DomainError};

/// Persisted candidate list and the reachable-server cache.
///
/// A list that exists but is empty loads as an empty vector. A missing or
/// unparsable list is an error.
#[async_trait]
pub trait ServerListRepository: Send + Sync {
    async fn load_candidates(&self) -> Result<Vec<DnsServerAddress>, DomainError>;

    /// Replaces the local candidate list with a freshly fetched copy.
    async fn refresh_candidates(&self) -> Result<(), DomainError>;

    async fn save_reachable(&self, servers: &[DnsServerAddress]) -> Result<(), DomainError>;
}
