use crate::ports::ServerListRepository;
use crate::use_cases::probe::{ProbeReachabilityUseCase, ProbeReport};
use dns_unlocker_domain::{DnsServerAddress, DomainError};
use std::sync::Arc;
use tracing::{info, warn};

/// Probes the candidate list against a target and caches the reachable subset.
pub struct CheckServersUseCase {
    repository: Arc<dyn ServerListRepository>,
    probe: Arc<ProbeReachabilityUseCase>,
}

impl CheckServersUseCase {
    pub fn new(
        repository: Arc<dyn ServerListRepository>,
        probe: Arc<ProbeReachabilityUseCase>,
    ) -> Self {
        Self { repository, probe }
    }

    pub async fn execute(&self, target_url: &str) -> Result<ProbeReport, DomainError> {
        let candidates = load_candidates_or_refresh(self.repository.as_ref()).await?;

        let report = self.probe.execute(&candidates, target_url).await;

        if report.reachable.is_empty() {
            warn!("No reachable DNS servers to cache");
        } else {
            self.repository.save_reachable(&report.reachable).await?;
            info!(cached = report.reachable.len(), "Cached reachable DNS servers");
        }

        Ok(report)
    }
}

/// Loads the candidate list, fetching a fresh copy once if the local one is
/// missing or unreadable.
pub(crate) async fn load_candidates_or_refresh(
    repository: &dyn ServerListRepository,
) -> Result<Vec<DnsServerAddress>, DomainError> {
    let candidates = match repository.load_candidates().await {
        Ok(candidates) => candidates,
        Err(e) => {
            warn!(error = %e, "Candidate list unavailable, refreshing from remote");
            repository.refresh_candidates().await?;
            repository.load_candidates().await?
        }
    };

    if candidates.is_empty() {
        return Err(DomainError::NoDnsServers);
    }
    Ok(candidates)
}
