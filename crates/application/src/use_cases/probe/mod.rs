mod probe_reachability;

pub use probe_reachability::{ProbeReachabilityUseCase, ProbeReport};
