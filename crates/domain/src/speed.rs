use crate::DnsServerAddress;
use std::collections::HashMap;
use std::time::Duration;

/// How a download attempt ended.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TransferOutcome {
    Completed,
    /// The budget ran out; the byte count is a partial measurement.
    DeadlineReached,
    Failed(String),
}

/// Bytes a server managed to pull within its time budget. Zero is a
/// meaningful measurement, not an error marker.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SpeedResult {
    pub server: DnsServerAddress,
    pub bytes_transferred: u64,
    pub outcome: TransferOutcome,
}

impl SpeedResult {
    pub fn new(server: DnsServerAddress, bytes_transferred: u64, outcome: TransferOutcome) -> Self {
        Self {
            server,
            bytes_transferred,
            outcome,
        }
    }

    pub fn failed(server: DnsServerAddress, reason: impl Into<String>) -> Self {
        Self::new(server, 0, TransferOutcome::Failed(reason.into()))
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BestServer {
    pub server: DnsServerAddress,
    pub bytes_transferred: u64,
}

/// Picks the entry with the largest non-zero byte count.
///
/// Comparison is strict, so among equal maxima the first one yielded by the
/// iterator wins. For a `HashMap` that order is unspecified.
pub fn select_best<'a, I>(results: I) -> Option<BestServer>
where
    I: IntoIterator<Item = (&'a DnsServerAddress, &'a u64)>,
{
    let mut best: Option<(&DnsServerAddress, u64)> = None;
    for (server, &bytes) in results {
        let max = best.map_or(0, |(_, b)| b);
        if bytes > max {
            best = Some((server, bytes));
        }
    }
    best.map(|(server, bytes_transferred)| BestServer {
        server: server.clone(),
        bytes_transferred,
    })
}

/// Results of one speed evaluation over one candidate list, in input order.
#[derive(Debug, Clone)]
pub struct EvaluationRun {
    pub budget: Duration,
    pub results: Vec<SpeedResult>,
}

impl EvaluationRun {
    pub fn new(budget: Duration, results: Vec<SpeedResult>) -> Self {
        Self { budget, results }
    }

    /// Byte counts keyed by server. Duplicated addresses keep the later entry.
    pub fn bytes_by_server(&self) -> HashMap<DnsServerAddress, u64> {
        self.results
            .iter()
            .map(|r| (r.server.clone(), r.bytes_transferred))
            .collect()
    }

    pub fn best(&self) -> Option<BestServer> {
        select_best(
            self.results
                .iter()
                .map(|r| (&r.server, &r.bytes_transferred)),
        )
    }

    pub fn len(&self) -> usize {
        self.results.len()
    }

    pub fn is_empty(&self) -> bool {
        self.results.is_empty()
    }
}
