use crate::ports::{
    HttpTransport, NoopProgressReporter, ProgressReporter, ResolverBoundClientFactory,
};
use dns_unlocker_domain::{DnsServerAddress, ProbeOutcome, ProbeResult};
use futures::stream::FuturesUnordered;
use futures::StreamExt;
use std::sync::Arc;
use tokio::sync::{Mutex, Semaphore};
use tracing::{debug, info, warn};

/// Outcome of probing a whole candidate list.
#[derive(Debug, Clone, Default)]
pub struct ProbeReport {
    /// One entry per input server, in completion order.
    pub results: Vec<ProbeResult>,
    /// Servers classified reachable, in the order they acquired the lock.
    pub reachable: Vec<DnsServerAddress>,
}

pub struct ProbeReachabilityUseCase {
    clients: Arc<dyn ResolverBoundClientFactory>,
    reporter: Arc<dyn ProgressReporter>,
    max_in_flight: Option<usize>,
}

impl ProbeReachabilityUseCase {
    pub fn new(clients: Arc<dyn ResolverBoundClientFactory>) -> Self {
        Self {
            clients,
            reporter: Arc::new(NoopProgressReporter),
            max_in_flight: None,
        }
    }

    pub fn with_reporter(mut self, reporter: Arc<dyn ProgressReporter>) -> Self {
        self.reporter = reporter;
        self
    }

    /// Bounds the fan-out. Without it every server is probed at once.
    pub fn with_max_in_flight(mut self, limit: usize) -> Self {
        self.max_in_flight = Some(limit.max(1));
        self
    }

    /// Probes every server concurrently and waits for all of them.
    ///
    /// A failure for one server never affects the others, and there is no
    /// early exit on the first success.
    pub async fn execute(&self, servers: &[DnsServerAddress], target_url: &str) -> ProbeReport {
        if servers.is_empty() {
            return ProbeReport::default();
        }

        debug!(servers = servers.len(), target = %target_url, "Probing reachability");

        let reachable = Arc::new(Mutex::new(Vec::with_capacity(servers.len())));
        let permits = self.max_in_flight.map(|n| Arc::new(Semaphore::new(n)));
        let mut probes = FuturesUnordered::new();

        for server in servers {
            let server = server.clone();
            let clients = Arc::clone(&self.clients);
            let reachable = Arc::clone(&reachable);
            let permits = permits.clone();
            let target_url = target_url.to_string();

            let handle = tokio::spawn({
                let server = server.clone();
                async move {
                    let _permit = match permits {
                        Some(semaphore) => semaphore.acquire_owned().await.ok(),
                        None => None,
                    };

                    let outcome = match clients.make_client(&server) {
                        Ok(client) => probe_once(client.as_ref(), &target_url).await,
                        Err(e) => ProbeOutcome::request_failed(e.to_string()),
                    };
                    let result = ProbeResult::new(server, outcome);

                    // Must stay the last step of the task.
                    if result.is_reachable() {
                        reachable.lock().await.push(result.server.clone());
                    }
                    result
                }
            });

            probes.push(async move { (server, handle.await) });
        }

        let mut results = Vec::with_capacity(servers.len());
        while let Some((server, joined)) = probes.next().await {
            let result = match joined {
                Ok(result) => {
                    debug!(server = %result.server, status = result.outcome.label(), "Probe finished");
                    result
                }
                Err(e) => {
                    warn!(server = %server, error = %e, "Probe task panicked");
                    ProbeResult::new(server, ProbeOutcome::request_failed(e.to_string()))
                }
            };
            self.reporter.probe_finished(&result);
            results.push(result);
        }

        let reachable = std::mem::take(&mut *reachable.lock().await);

        info!(
            servers = servers.len(),
            reachable = reachable.len(),
            "Reachability probe complete"
        );

        ProbeReport { results, reachable }
    }
}

async fn probe_once(client: &dyn HttpTransport, target_url: &str) -> ProbeOutcome {
    match client.get(target_url).await {
        Ok(response) => ProbeOutcome::classify(&response.status_line),
        Err(e) => ProbeOutcome::request_failed(e.to_string()),
    }
}
