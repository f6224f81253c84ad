use crate::ports::{
    HttpTransport, NoopProgressReporter, ProgressReporter, ResolverBoundClientFactory,
};
use dns_unlocker_domain::{
    DnsServerAddress, DomainError, EvaluationRun, SpeedResult, Throughput, TransferOutcome,
};
use futures::StreamExt;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::time::Duration;
use tokio::io::AsyncWriteExt;
use tracing::{debug, info, warn};

const SCRATCH_PREFIX: &str = "dns-unlocker-";
const DOWNLOAD_FILE: &str = "download";

/// Times a download of the same resource through each server in turn.
///
/// Servers are measured one after another, each with its own full budget,
/// so no server competes with another for bandwidth.
pub struct EvaluateSpeedsUseCase {
    clients: Arc<dyn ResolverBoundClientFactory>,
    scratch_root: PathBuf,
    reporter: Arc<dyn ProgressReporter>,
}

impl EvaluateSpeedsUseCase {
    pub fn new(clients: Arc<dyn ResolverBoundClientFactory>, scratch_root: PathBuf) -> Self {
        Self {
            clients,
            scratch_root,
            reporter: Arc::new(NoopProgressReporter),
        }
    }

    pub fn with_reporter(mut self, reporter: Arc<dyn ProgressReporter>) -> Self {
        self.reporter = reporter;
        self
    }

    /// Returns exactly one result per input server. Per-server failures are
    /// folded into a zero-byte result; only an invalid timeout or an
    /// unusable scratch directory fail the run.
    pub async fn execute(
        &self,
        servers: &[DnsServerAddress],
        target_url: &str,
        timeout_secs: u64,
    ) -> Result<EvaluationRun, DomainError> {
        if timeout_secs == 0 {
            return Err(DomainError::InvalidTimeout(timeout_secs));
        }
        let budget = Duration::from_secs(timeout_secs);

        // Removed on drop, including when a measurement panics.
        let scratch = tempfile::Builder::new()
            .prefix(SCRATCH_PREFIX)
            .tempdir_in(&self.scratch_root)
            .map_err(|e| {
                DomainError::IoError(format!(
                    "Failed to create scratch directory in {}: {}",
                    self.scratch_root.display(),
                    e
                ))
            })?;
        let destination = scratch.path().join(DOWNLOAD_FILE);

        debug!(
            servers = servers.len(),
            target = %target_url,
            timeout_secs,
            scratch = %scratch.path().display(),
            "Starting speed evaluation"
        );

        let mut results = Vec::with_capacity(servers.len());
        for server in servers {
            let result = self
                .measure(server, target_url, &destination, budget)
                .await;
            let throughput = Throughput::over(result.bytes_transferred, timeout_secs);
            debug!(
                server = %result.server,
                bytes = result.bytes_transferred,
                outcome = ?result.outcome,
                "Speed measured"
            );
            self.reporter.speed_measured(&result, throughput);
            results.push(result);
        }

        let scratch_path = scratch.path().to_path_buf();
        if let Err(e) = scratch.close() {
            warn!(path = %scratch_path.display(), error = %e, "Failed to remove scratch directory");
        }

        let run = EvaluationRun::new(budget, results);
        info!(servers = run.len(), "Speed evaluation complete");
        Ok(run)
    }

    async fn measure(
        &self,
        server: &DnsServerAddress,
        target_url: &str,
        destination: &Path,
        budget: Duration,
    ) -> SpeedResult {
        let client = match self.clients.make_client(server) {
            Ok(client) => client,
            Err(e) => {
                warn!(server = %server, error = %e, "Failed to build client");
                return SpeedResult::failed(server.clone(), e.to_string());
            }
        };

        let mut transferred = 0u64;
        let attempt = download(client.as_ref(), target_url, destination, &mut transferred);
        let outcome = match tokio::time::timeout(budget, attempt).await {
            Ok(Ok(())) => TransferOutcome::Completed,
            Ok(Err(e)) => {
                warn!(server = %server, error = %e, "Download failed");
                TransferOutcome::Failed(e.to_string())
            }
            Err(_) => TransferOutcome::DeadlineReached,
        };

        SpeedResult::new(server.clone(), transferred, outcome)
    }
}

/// Streams the body into `destination`, counting bytes as they land so the
/// count stays valid when the caller drops this future at the deadline.
async fn download(
    client: &dyn HttpTransport,
    target_url: &str,
    destination: &Path,
    transferred: &mut u64,
) -> Result<(), DomainError> {
    let response = client.get(target_url).await?;
    match response.status() {
        Some(status) if status.is_success() => {}
        _ => return Err(DomainError::UnexpectedStatus(response.status_line)),
    }

    let mut file = tokio::fs::File::create(destination).await?;
    let mut body = response.body;
    while let Some(chunk) = body.next().await {
        let chunk = chunk?;
        file.write_all(&chunk).await?;
        *transferred += chunk.len() as u64;
    }
    file.flush().await?;
    Ok(())
}
