use dns_unlocker_domain::{ProbeResult, SpeedResult, Throughput};

/// Side channel for per-server results as they are produced.
///
/// Probe callbacks arrive in completion order, one at a time.
pub trait ProgressReporter: Send + Sync {
    fn probe_finished(&self, _result: &ProbeResult) {}

    fn speed_measured(&self, _result: &SpeedResult, _throughput: Throughput) {}
}

pub struct NoopProgressReporter;

impl ProgressReporter for NoopProgressReporter {}
