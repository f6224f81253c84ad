use super::check_servers::{load_candidates_or_refresh, CheckServersUseCase};
use crate::ports::ServerListRepository;
use crate::use_cases::speed::EvaluateSpeedsUseCase;
use dns_unlocker_domain::{BestServer, DnsServerAddress, DomainError, EvaluationRun};
use std::sync::Arc;
use tracing::{info, warn};

#[derive(Debug, Clone)]
pub struct SpeedReport {
    pub run: EvaluationRun,
    /// `None` when no server transferred any data.
    pub best: Option<BestServer>,
}

/// Full speed workflow: pick a server list, evaluate it, select the winner.
pub struct FindBestServerUseCase {
    repository: Arc<dyn ServerListRepository>,
    check: Arc<CheckServersUseCase>,
    evaluate: Arc<EvaluateSpeedsUseCase>,
}

impl FindBestServerUseCase {
    pub fn new(
        repository: Arc<dyn ServerListRepository>,
        check: Arc<CheckServersUseCase>,
        evaluate: Arc<EvaluateSpeedsUseCase>,
    ) -> Self {
        Self {
            repository,
            check,
            evaluate,
        }
    }

    /// With `reachable_only`, runs a reachability check first and evaluates
    /// just the servers that passed it.
    pub async fn execute(
        &self,
        target_url: &str,
        reachable_only: bool,
        timeout_secs: u64,
    ) -> Result<SpeedReport, DomainError> {
        if timeout_secs == 0 {
            return Err(DomainError::InvalidTimeout(timeout_secs));
        }

        let servers = self.select_servers(target_url, reachable_only).await?;

        let run = self
            .evaluate
            .execute(&servers, target_url, timeout_secs)
            .await?;
        let best = run.best();

        match &best {
            Some(best) => info!(
                server = %best.server,
                bytes = best.bytes_transferred,
                "Best DNS server selected"
            ),
            None => warn!("No DNS server was able to download any data"),
        }

        Ok(SpeedReport { run, best })
    }

    async fn select_servers(
        &self,
        target_url: &str,
        reachable_only: bool,
    ) -> Result<Vec<DnsServerAddress>, DomainError> {
        if !reachable_only {
            return load_candidates_or_refresh(self.repository.as_ref()).await;
        }

        // A cache left by an earlier run may have been checked against another target.
        let report = self.check.execute(target_url).await?;
        if !report.reachable.is_empty() {
            return Ok(report.reachable);
        }

        warn!("No server passed the check, evaluating all candidates");
        load_candidates_or_refresh(self.repository.as_ref()).await
    }
}
