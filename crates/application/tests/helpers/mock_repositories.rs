use async_trait::async_trait;
use dns_unlocker_application::ports::ServerListRepository;
use dns_unlocker_domain::{DnsServerAddress, DomainError};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;

#[derive(Default)]
pub struct MockServerListRepository {
    candidates: Mutex<Option<Vec<DnsServerAddress>>>,
    remote: Mutex<Option<Vec<DnsServerAddress>>>,
    reachable: Mutex<Option<Vec<DnsServerAddress>>>,
    refresh_calls: AtomicUsize,
    saves: Mutex<Vec<Vec<DnsServerAddress>>>,
}

impl MockServerListRepository {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_candidates(self, servers: Vec<DnsServerAddress>) -> Self {
        *self.candidates.lock().unwrap() = Some(servers);
        self
    }

    /// List served by `refresh_candidates`.
    pub fn with_remote(self, servers: Vec<DnsServerAddress>) -> Self {
        *self.remote.lock().unwrap() = Some(servers);
        self
    }

    /// Cache left behind by an earlier run.
    pub fn with_reachable(self, servers: Vec<DnsServerAddress>) -> Self {
        *self.reachable.lock().unwrap() = Some(servers);
        self
    }

    pub fn refresh_calls(&self) -> usize {
        self.refresh_calls.load(Ordering::SeqCst)
    }

    pub fn cached(&self) -> Option<Vec<DnsServerAddress>> {
        self.reachable.lock().unwrap().clone()
    }

    pub fn saves(&self) -> Vec<Vec<DnsServerAddress>> {
        self.saves.lock().unwrap().clone()
    }
}

#[async_trait]
impl ServerListRepository for MockServerListRepository {
    async fn load_candidates(&self) -> Result<Vec<DnsServerAddress>, DomainError> {
        self.candidates
            .lock()
            .unwrap()
            .clone()
            .ok_or_else(|| DomainError::ConfigError("candidate list missing".to_string()))
    }

    async fn refresh_candidates(&self) -> Result<(), DomainError> {
        self.refresh_calls.fetch_add(1, Ordering::SeqCst);
        let remote = self
            .remote
            .lock()
            .unwrap()
            .clone()
            .ok_or_else(|| DomainError::IoError("remote unavailable".to_string()))?;
        *self.candidates.lock().unwrap() = Some(remote);
        Ok(())
    }

    async fn save_reachable(&self, servers: &[DnsServerAddress]) -> Result<(), DomainError> {
        self.saves.lock().unwrap().push(servers.to_vec());
        *self.reachable.lock().unwrap() = Some(servers.to_vec());
        Ok(())
    }
}
